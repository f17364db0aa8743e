#![forbid(unsafe_code)]
//! Shiftplan — bibliothèque d'affectation hebdomadaire de créneaux (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Heuristique gloutonne randomisée, une décision par (employé, jour).
//! - Plafonds d'effectif et de charge, pondération de préférence 0.7.
//! - Journaux de décisions/conflits, métriques d'équité.
//! - RNG injectable ; un seed fixe rejoue un run à l'identique.

pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;
pub mod validate;

pub use model::{
    Cell, Day, Employee, EmployeeId, Roster, Schedule, ScheduleConfig, ScheduleRow, ShiftKind,
};
pub use report::{render_table, ReportRenderer, TextReport};
pub use scheduler::{
    ConflictRecord, DecisionRecord, EmployeeStats, Evaluation, Outcome, RunState, SchedError,
    Scheduler,
};
pub use storage::{JsonStorage, PlanFile, Storage};
pub use validate::{audit, Warning};
