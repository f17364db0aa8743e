use crate::model::{Day, Employee, EmployeeId, Schedule, ShiftKind};
use crate::scheduler::{ConflictRecord, DecisionRecord};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV : header
/// `id,name,role,preference[,seniority][,availability][,leave_days]`,
/// listes de jours séparées par `;`.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        let role = rec.get(2).context("missing role")?.trim();
        let preference = rec.get(3).context("missing preference")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid employee row (empty id or name)");
        }
        let mut employee = Employee::new(
            EmployeeId::new(id),
            name.to_string(),
            role.to_string(),
            ShiftKind::new(preference),
        );
        if let Some(raw) = rec.get(4) {
            let raw = raw.trim();
            if !raw.is_empty() {
                employee.seniority = raw
                    .parse()
                    .with_context(|| format!("invalid seniority value for employee {id}"))?;
            }
        }
        if let Some(raw) = rec.get(5) {
            employee.availability = parse_days(raw)
                .with_context(|| format!("invalid availability value for employee {id}"))?;
        }
        if let Some(raw) = rec.get(6) {
            employee.leave_days = parse_days(raw)
                .with_context(|| format!("invalid leave_days value for employee {id}"))?;
        }
        out.push(employee);
    }
    Ok(out)
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<Day>> {
    raw.split(';')
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.parse::<Day>().map_err(anyhow::Error::msg))
        .collect()
}

/// Export CSV du planning : header `id,name,role` puis une colonne par
/// jour configuré, `OFF` pour les cellules de repos.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    let mut header = vec!["id".to_string(), "name".to_string(), "role".to_string()];
    header.extend(schedule.days.iter().map(|d| d.to_string()));
    w.write_record(&header)?;
    for row in &schedule.rows {
        let mut rec = vec![
            row.employee.as_str().to_string(),
            row.name.clone(),
            row.role.clone(),
        ];
        rec.extend(row.cells.iter().map(|c| c.label().to_string()));
        w.write_record(&rec)?;
    }
    w.flush()?;
    Ok(())
}

/// Export texte du journal de décisions, une phrase par ligne.
pub fn export_decision_log<P: AsRef<Path>>(
    path: P,
    decisions: &[DecisionRecord],
) -> anyhow::Result<()> {
    let mut buf = String::new();
    for record in decisions {
        let _ = writeln!(buf, "{record}");
    }
    fs::write(&path, buf)
        .with_context(|| format!("writing decision log {}", path.as_ref().display()))?;
    Ok(())
}

/// Export texte du journal de conflits (vide dans l'ordre de règles
/// actuel, le fichier est quand même produit).
pub fn export_conflict_log<P: AsRef<Path>>(
    path: P,
    conflicts: &[ConflictRecord],
) -> anyhow::Result<()> {
    let mut buf = String::new();
    for record in conflicts {
        let _ = writeln!(buf, "{record}");
    }
    fs::write(&path, buf)
        .with_context(|| format!("writing conflict log {}", path.as_ref().display()))?;
    Ok(())
}
