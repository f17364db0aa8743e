use crate::model::{Roster, ScheduleConfig};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Document persisté : config + roster. L'état d'un run (compteurs,
/// journaux) n'est jamais sauvegardé, il repart de zéro à chaque run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub config: ScheduleConfig,
    #[serde(default)]
    pub roster: Roster,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for PlanFile {
    fn default() -> Self {
        Self {
            config: ScheduleConfig::default(),
            roster: Roster::default(),
            saved_at: None,
        }
    }
}

pub trait Storage {
    /// Charge un plan depuis un support.
    fn load(&self) -> anyhow::Result<PlanFile>;
    /// Sauvegarde de manière atomique.
    fn save(&self, plan: &PlanFile) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<PlanFile> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let plan: PlanFile = serde_json::from_slice(&data).with_context(|| "parsing plan.json")?;
        Ok(plan)
    }

    fn save(&self, plan: &PlanFile) -> anyhow::Result<()> {
        let mut stamped = plan.clone();
        stamped.saved_at = Some(Utc::now());
        let json = serde_json::to_vec_pretty(&stamped)?;
        let mut tmp =
            NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
                .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
