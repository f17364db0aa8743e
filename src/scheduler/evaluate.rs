use super::types::{RunState, SchedError};
use crate::model::{EmployeeId, Roster, Schedule};

/// Métriques par employé. `assigned_shifts` et `penalty` relisent les
/// compteurs du run ; `worked_days` et `preferred_matches` rescannent
/// la table finale, indépendamment des compteurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeStats {
    pub id: EmployeeId,
    pub name: String,
    pub assigned_shifts: u32,
    pub penalty: u32,
    pub worked_days: u32,
    pub preferred_matches: u32,
}

/// Bilan d'un run : stats par employé plus écart d'équité.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub per_employee: Vec<EmployeeStats>,
    /// max − min des totaux affectés (0 = charge parfaitement égale).
    pub fairness_gap: u32,
}

/// Agrégation en lecture seule sur l'état du run et la table finie.
pub(super) fn summarize(
    state: &RunState,
    roster: &Roster,
    schedule: &Schedule,
) -> Result<Evaluation, SchedError> {
    if roster.employees.is_empty() {
        return Err(SchedError::EmptyRoster);
    }

    let mut per_employee = Vec::with_capacity(roster.employees.len());
    for employee in &roster.employees {
        let (mut worked_days, mut preferred_matches) = (0u32, 0u32);
        if let Some(row) = schedule.row(&employee.id) {
            for cell in &row.cells {
                if let Some(kind) = cell.shift() {
                    worked_days += 1;
                    if *kind == employee.preference {
                        preferred_matches += 1;
                    }
                }
            }
        }
        per_employee.push(EmployeeStats {
            id: employee.id.clone(),
            name: employee.name.clone(),
            assigned_shifts: state.assigned_total(&employee.id),
            penalty: state.penalty(&employee.id),
            worked_days,
            preferred_matches,
        });
    }

    let totals = per_employee.iter().map(|s| s.assigned_shifts);
    let max = totals.clone().max().unwrap_or(0);
    let min = totals.min().unwrap_or(0);

    Ok(Evaluation {
        per_employee,
        fairness_gap: max - min,
    })
}
