use crate::model::{Roster, ScheduleConfig};
use std::fmt;

/// Anomalie relevée par l'audit du roster. Purement consultative :
/// la génération du planning n'est jamais bloquée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    MissingField { employee: String, field: &'static str },
    UnknownPreference { employee: String, preference: String },
    LeaveOutsideAvailability { employee: String, day: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingField { employee, field } => {
                write!(f, "missing {field} for employee: {employee}")
            }
            Warning::UnknownPreference {
                employee,
                preference,
            } => {
                write!(
                    f,
                    "preference {preference} of {employee} is not a configured shift"
                )
            }
            Warning::LeaveOutsideAvailability { employee, day } => {
                write!(
                    f,
                    "leave day {day} of {employee} is outside their availability"
                )
            }
        }
    }
}

/// Passe de validation consultative sur le roster : signale les champs
/// vides et les incohérences de données, sans rien corriger.
pub fn audit(config: &ScheduleConfig, roster: &Roster) -> Vec<Warning> {
    let mut out = Vec::new();

    for employee in &roster.employees {
        let label = if employee.name.trim().is_empty() {
            "UNKNOWN".to_string()
        } else {
            employee.name.clone()
        };

        if employee.id.as_str().trim().is_empty() {
            out.push(Warning::MissingField {
                employee: label.clone(),
                field: "id",
            });
        }
        if employee.name.trim().is_empty() {
            out.push(Warning::MissingField {
                employee: label.clone(),
                field: "name",
            });
        }
        if employee.role.trim().is_empty() {
            out.push(Warning::MissingField {
                employee: label.clone(),
                field: "role",
            });
        }
        if employee.availability.is_empty() {
            out.push(Warning::MissingField {
                employee: label.clone(),
                field: "availability",
            });
        }
        if employee.preference.as_str().trim().is_empty() {
            out.push(Warning::MissingField {
                employee: label.clone(),
                field: "preference",
            });
        } else if !config.shifts.contains(&employee.preference) {
            // Une préférence hors config n'est jamais honorée ni
            // comptée en "preferred match" ; on le signale.
            out.push(Warning::UnknownPreference {
                employee: label.clone(),
                preference: employee.preference.as_str().to_string(),
            });
        }
        for day in &employee.leave_days {
            if !employee.availability.contains(day) {
                out.push(Warning::LeaveOutsideAvailability {
                    employee: label.clone(),
                    day: day.to_string(),
                });
            }
        }
    }

    out
}
