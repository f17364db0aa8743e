use crate::model::{Day, EmployeeId, ScheduleConfig, ShiftKind};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Issue d'une décision d'affectation, telle que journalisée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Assigned(ShiftKind),
    ShiftFull(ShiftKind),
    MaxShiftsReached,
}

/// Ligne du journal de décisions (append-only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRecord {
    pub employee: String,
    pub day: Day,
    pub outcome: Outcome,
}

impl fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Assigned(kind) => {
                write!(f, "{} assigned {} on {}", self.employee, kind, self.day)
            }
            Outcome::ShiftFull(_) => {
                write!(f, "{} skipped on {} (shift full)", self.employee, self.day)
            }
            Outcome::MaxShiftsReached => {
                write!(
                    f,
                    "{} skipped on {} (max shifts reached)",
                    self.employee, self.day
                )
            }
        }
    }
}

/// Ligne du journal de conflits (affectation sur jour de congé).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRecord {
    pub employee: String,
    pub day: Day,
}

impl fmt::Display for ConflictRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} assigned on leave day {}", self.employee, self.day)
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("empty roster: fairness metrics are undefined")]
    EmptyRoster,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// État mutable d'un run : compteurs partagés et journaux.
/// Reconstruit à chaque `generate`, jamais persisté.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Table fixe [jour][créneau], dimensionnée depuis la config.
    counts: Vec<Vec<u32>>,
    assigned: HashMap<EmployeeId, u32>,
    previous: HashMap<EmployeeId, ShiftKind>,
    penalties: HashMap<EmployeeId, u32>,
    pub decisions: Vec<DecisionRecord>,
    pub conflicts: Vec<ConflictRecord>,
}

impl RunState {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            counts: vec![vec![0; config.shifts.len()]; config.days.len()],
            assigned: HashMap::new(),
            previous: HashMap::new(),
            penalties: HashMap::new(),
            decisions: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    pub fn count(&self, day_idx: usize, shift_idx: usize) -> u32 {
        self.counts[day_idx][shift_idx]
    }

    pub fn assigned_total(&self, id: &EmployeeId) -> u32 {
        self.assigned.get(id).copied().unwrap_or(0)
    }

    pub fn previous_shift<'a>(&'a self, id: &EmployeeId) -> Option<&'a ShiftKind> {
        self.previous.get(id)
    }

    pub fn penalty(&self, id: &EmployeeId) -> u32 {
        self.penalties.get(id).copied().unwrap_or(0)
    }

    pub(super) fn add_penalty(&mut self, id: &EmployeeId, points: u32) {
        *self.penalties.entry(id.clone()).or_insert(0) += points;
    }

    /// Valide une affectation : compteurs incrémentés, dernier créneau
    /// mémorisé pour la règle anti-enchaînement.
    pub(super) fn commit(
        &mut self,
        id: &EmployeeId,
        day_idx: usize,
        shift_idx: usize,
        kind: &ShiftKind,
    ) {
        *self.assigned.entry(id.clone()).or_insert(0) += 1;
        self.counts[day_idx][shift_idx] += 1;
        self.previous.insert(id.clone(), kind.clone());
    }
}
