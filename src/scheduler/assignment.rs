use super::types::{ConflictRecord, DecisionRecord, Outcome, RunState};
use crate::model::{Cell, Day, Employee, ScheduleConfig, ShiftKind};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Probabilité de retenir le créneau préféré quand il est candidat.
const PREFERENCE_WEIGHT: f64 = 0.7;

/// Décide la cellule (employé, jour). Chaque garde court-circuite
/// vers `Cell::Off` ; seul le commit final mute les compteurs.
pub(super) fn decide<R: Rng>(
    config: &ScheduleConfig,
    state: &mut RunState,
    employee: &Employee,
    day: Day,
    rng: &mut R,
) -> Cell {
    // Garde disponibilité/congé : sortie silencieuse, aucun journal.
    if !employee.is_available(day) || employee.on_leave(day) {
        return Cell::Off;
    }

    let barred = config
        .no_repeat
        .as_ref()
        .filter(|kind| state.previous_shift(&employee.id) == Some(*kind));
    let options: Vec<&ShiftKind> = config
        .shifts
        .iter()
        .filter(|kind| Some(*kind) != barred)
        .collect();

    // Pondération de préférence : 0.7 si candidate, sinon tirage
    // uniforme sur l'ensemble complet (préférence incluse).
    let preferred = options.iter().any(|kind| **kind == employee.preference);
    let pick: ShiftKind = if preferred && rng.random_bool(PREFERENCE_WEIGHT) {
        employee.preference.clone()
    } else {
        match options.choose(rng) {
            Some(kind) => (*kind).clone(),
            // Jeu de candidats vide (config à créneau unique interdit
            // d'enchaînement) : la cellule dégénère en OFF.
            None => return Cell::Off,
        }
    };

    let (Some(day_idx), Some(shift_idx)) = (config.day_index(day), config.shift_index(&pick))
    else {
        return Cell::Off;
    };

    // L'effectif requis sert de plafond dur de capacité.
    if state.count(day_idx, shift_idx) >= config.requirement(&pick) {
        state.decisions.push(DecisionRecord {
            employee: employee.name.clone(),
            day,
            outcome: Outcome::ShiftFull(pick),
        });
        return Cell::Off;
    }

    if state.assigned_total(&employee.id) >= config.max_shifts_per_week {
        state.decisions.push(DecisionRecord {
            employee: employee.name.clone(),
            day,
            outcome: Outcome::MaxShiftsReached,
        });
        return Cell::Off;
    }

    state.commit(&employee.id, day_idx, shift_idx, &pick);
    state.decisions.push(DecisionRecord {
        employee: employee.name.clone(),
        day,
        outcome: Outcome::Assigned(pick.clone()),
    });

    if pick != employee.preference {
        state.add_penalty(&employee.id, 1);
    }
    // La garde congé en tête rend cette branche inatteignable : le
    // journal de conflits reste vide tant que l'ordre des règles ne
    // change pas. Conservée telle quelle, comportement publié.
    if employee.on_leave(day) {
        state.add_penalty(&employee.id, 5);
        state.conflicts.push(ConflictRecord {
            employee: employee.name.clone(),
            day,
        });
    }

    Cell::On(pick)
}
