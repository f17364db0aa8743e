mod assignment;
mod evaluate;
mod types;

pub use evaluate::{EmployeeStats, Evaluation};
pub use types::{ConflictRecord, DecisionRecord, Outcome, RunState, SchedError};

use crate::model::{Roster, Schedule, ScheduleConfig, ScheduleRow};
use rand::Rng;

/// Scheduler : porte la config et l'état du run courant.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: ScheduleConfig,
    state: RunState,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(ScheduleConfig::default())
    }
}

impl Scheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        let state = RunState::new(&config);
        Self { config, state }
    }

    /// Comme `new`, mais rejette une config incohérente.
    pub fn try_new(config: ScheduleConfig) -> Result<Self, SchedError> {
        config.validate().map_err(SchedError::InvalidConfig)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// État du dernier run (journaux et compteurs inclus).
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Construit le planning de la semaine en un seul passage :
    /// employés dans l'ordre du roster (priorité de position), jours
    /// dans l'ordre de la config. L'état du run est remis à zéro au
    /// départ ; aucune reprise, une cellule refusée reste OFF.
    pub fn generate<R: Rng>(&mut self, roster: &Roster, rng: &mut R) -> Schedule {
        self.state = RunState::new(&self.config);

        let mut rows = Vec::with_capacity(roster.employees.len());
        for employee in &roster.employees {
            let cells = self
                .config
                .days
                .iter()
                .map(|&day| assignment::decide(&self.config, &mut self.state, employee, day, rng))
                .collect();
            rows.push(ScheduleRow {
                employee: employee.id.clone(),
                name: employee.name.clone(),
                role: employee.role.clone(),
                cells,
            });
        }

        Schedule {
            days: self.config.days.clone(),
            rows,
        }
    }

    /// Bilan en lecture seule du dernier run.
    pub fn evaluate(&self, roster: &Roster, schedule: &Schedule) -> Result<Evaluation, SchedError> {
        evaluate::summarize(&self.state, roster, schedule)
    }
}
