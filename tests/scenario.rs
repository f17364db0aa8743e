#![forbid(unsafe_code)]
use rand::rngs::StdRng;
use rand::SeedableRng;
use shiftplan::{
    model::{Cell, Day, Employee, EmployeeId, Roster, ScheduleConfig, ShiftKind},
    scheduler::Scheduler,
    validate,
};

/// Roster de référence : trois employés, dont deux avec un jour de
/// congé qui figure aussi dans leurs disponibilités.
fn reference_roster() -> Roster {
    let mut alice = Employee::new(
        EmployeeId::new("E001"),
        "Alice Smith",
        "Manager",
        ShiftKind::new("Morning"),
    );
    alice.availability = vec![Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];
    alice.leave_days = vec![Day::Thu];
    alice.seniority = 5;

    let mut bob = Employee::new(
        EmployeeId::new("E002"),
        "Bob Johnson",
        "Clerk",
        ShiftKind::new("Evening"),
    );
    bob.availability = vec![Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];
    bob.seniority = 3;

    // Préférence "Day" : hors du jeu configuré, jamais honorée.
    let mut carol = Employee::new(
        EmployeeId::new("E003"),
        "Carol White",
        "Clerk",
        ShiftKind::new("Day"),
    );
    carol.availability = vec![Day::Mon, Day::Wed, Day::Fri];
    carol.leave_days = vec![Day::Fri];
    carol.seniority = 2;

    Roster {
        employees: vec![alice, bob, carol],
    }
}

#[test]
fn leave_day_inside_availability_is_always_off() {
    let config = ScheduleConfig::default();
    let roster = reference_roster();

    // La garde congé précède tout tirage : le résultat ne dépend pas
    // du seed.
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scheduler = Scheduler::new(config.clone());
        let schedule = scheduler.generate(&roster, &mut rng);

        assert_eq!(
            schedule.cell(&EmployeeId::new("E001"), Day::Thu),
            Some(&Cell::Off),
            "seed {seed}: Alice must stay off on her Thu leave day"
        );
        assert_eq!(
            schedule.cell(&EmployeeId::new("E003"), Day::Fri),
            Some(&Cell::Off),
            "seed {seed}: Carol must stay off on her Fri leave day"
        );
    }
}

#[test]
fn conflict_log_stays_empty_under_current_rule_order() {
    let config = ScheduleConfig::default();
    let roster = reference_roster();

    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scheduler = Scheduler::new(config.clone());
        let _ = scheduler.generate(&roster, &mut rng);
        assert!(
            scheduler.state().conflicts.is_empty(),
            "seed {seed}: the leave gate fires before the conflict branch"
        );
    }
}

#[test]
fn unknown_preference_never_counts_as_preferred_match() {
    let config = ScheduleConfig::default();
    let roster = reference_roster();

    let mut rng = StdRng::seed_from_u64(11);
    let mut scheduler = Scheduler::new(config);
    let schedule = scheduler.generate(&roster, &mut rng);
    let evaluation = scheduler.evaluate(&roster, &schedule).unwrap();

    let carol = evaluation
        .per_employee
        .iter()
        .find(|s| s.id == EmployeeId::new("E003"))
        .unwrap();
    assert_eq!(carol.preferred_matches, 0);
    // Chaque créneau travaillé de Carol est un mismatch : pénalité
    // égale au total affecté.
    assert_eq!(carol.penalty, carol.assigned_shifts);
}

#[test]
fn audit_flags_the_out_of_config_preference() {
    let config = ScheduleConfig::default();
    let roster = reference_roster();

    let warnings = validate::audit(&config, &roster);
    assert!(warnings.iter().any(|w| matches!(
        w,
        validate::Warning::UnknownPreference { employee, .. } if employee == "Carol White"
    )));
}

#[test]
fn same_seed_replays_the_run_byte_for_byte() {
    let config = ScheduleConfig::default();
    let roster = reference_roster();

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scheduler = Scheduler::new(config.clone());
        let schedule = scheduler.generate(&roster, &mut rng);
        let evaluation = scheduler.evaluate(&roster, &schedule).unwrap();
        let decisions: Vec<String> = scheduler
            .state()
            .decisions
            .iter()
            .map(|d| d.to_string())
            .collect();
        (schedule, evaluation, decisions)
    };

    let (schedule_a, eval_a, log_a) = run(42);
    let (schedule_b, eval_b, log_b) = run(42);
    assert_eq!(schedule_a, schedule_b);
    assert_eq!(eval_a, eval_b);
    assert_eq!(log_a, log_b);

    // Un seed différent doit pouvoir diverger ; on vérifie juste que
    // le rejeu n'est pas un artefact d'un algorithme devenu constant.
    let mut diverged = false;
    for seed in 0..64u64 {
        if run(seed).0 != schedule_a {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "runs never diverge across seeds");
}
