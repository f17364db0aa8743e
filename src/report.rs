use crate::model::Schedule;
use crate::scheduler::Evaluation;
use std::fmt::Write as _;

/// Permet de customiser le rendu du bilan (texte, HTML, etc.).
pub trait ReportRenderer {
    fn render(&self, schedule: &Schedule, evaluation: &Evaluation) -> String;
}

/// Rendu texte simple : table hebdomadaire à colonnes alignées, puis
/// résumé par employé et écart d'équité.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, schedule: &Schedule, evaluation: &Evaluation) -> String {
        let mut out = render_table(schedule);
        out.push('\n');
        for stats in &evaluation.per_employee {
            let _ = writeln!(
                out,
                "{} -> shifts: {}, penalty: {}, preferred match: {}",
                stats.name, stats.assigned_shifts, stats.penalty, stats.preferred_matches
            );
        }
        let _ = writeln!(out, "fairness gap (ideal = 0): {}", evaluation.fairness_gap);
        out
    }
}

/// Table hebdomadaire seule, sans métriques.
pub fn render_table(schedule: &Schedule) -> String {
    let mut header = vec!["id".to_string(), "name".to_string(), "role".to_string()];
    header.extend(schedule.days.iter().map(|d| d.to_string()));

    let mut grid: Vec<Vec<String>> = vec![header];
    for row in &schedule.rows {
        let mut line = vec![
            row.employee.as_str().to_string(),
            row.name.clone(),
            row.role.clone(),
        ];
        line.extend(row.cells.iter().map(|c| c.label().to_string()));
        grid.push(line);
    }

    let columns = grid.iter().map(|line| line.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            grid.iter()
                .filter_map(|line| line.get(col))
                .map(|cell| cell.len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &grid {
        let mut rendered = String::new();
        for (col, cell) in line.iter().enumerate() {
            if col > 0 {
                rendered.push_str("  ");
            }
            let _ = write!(rendered, "{cell:<width$}", width = widths[col]);
        }
        let _ = writeln!(out, "{}", rendered.trim_end());
    }
    out
}
