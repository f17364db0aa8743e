#![forbid(unsafe_code)]
use rand::rngs::StdRng;
use rand::SeedableRng;
use shiftplan::{
    io,
    model::{Day, Roster, ScheduleConfig, ShiftKind},
    scheduler::Scheduler,
    storage::{JsonStorage, PlanFile, Storage},
};
use std::fs;
use tempfile::tempdir;

const EMPLOYEES_CSV: &str = "\
id,name,role,preference,seniority,availability,leave_days
E001,Alice Smith,Manager,Morning,5,Mon;Tue;Wed;Thu;Fri,Thu
E002,Bob Johnson,Clerk,Evening,3,Tue;Wed;Thu;Fri;Sat,
E003,Carol White,Clerk,Day,2,Mon;Wed;Fri,Fri
";

#[test]
fn import_employees_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    fs::write(&path, EMPLOYEES_CSV).unwrap();

    let employees = io::import_employees_csv(&path).unwrap();
    assert_eq!(employees.len(), 3);

    let alice = &employees[0];
    assert_eq!(alice.name, "Alice Smith");
    assert_eq!(alice.preference, ShiftKind::new("Morning"));
    assert_eq!(alice.seniority, 5);
    assert_eq!(alice.availability.len(), 5);
    assert_eq!(alice.leave_days, vec![Day::Thu]);

    let bob = &employees[1];
    assert!(bob.leave_days.is_empty());
}

#[test]
fn import_rejects_bad_day_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    fs::write(
        &path,
        "id,name,role,preference,seniority,availability,leave_days\n\
         E001,Alice,Manager,Morning,1,Funday,\n",
    )
    .unwrap();

    assert!(io::import_employees_csv(&path).is_err());
}

#[test]
fn schedule_csv_has_one_column_per_configured_day() {
    let dir = tempdir().unwrap();
    let csv_in = dir.path().join("employees.csv");
    fs::write(&csv_in, EMPLOYEES_CSV).unwrap();
    let roster = Roster {
        employees: io::import_employees_csv(&csv_in).unwrap(),
    };

    let mut rng = StdRng::seed_from_u64(7);
    let mut scheduler = Scheduler::new(ScheduleConfig::default());
    let schedule = scheduler.generate(&roster, &mut rng);

    let out = dir.path().join("schedule.csv");
    io::export_schedule_csv(&out, &schedule).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "id,name,role,Mon,Tue,Wed,Thu,Fri,Sat,Sun");
    assert_eq!(lines.count(), 3);
    // Samedi/dimanche hors disponibilité d'Alice : sa ligne finit en OFF.
    assert!(text.contains("OFF"));
}

#[test]
fn decision_log_export_writes_one_line_per_record() {
    let dir = tempdir().unwrap();
    let csv_in = dir.path().join("employees.csv");
    fs::write(&csv_in, EMPLOYEES_CSV).unwrap();
    let roster = Roster {
        employees: io::import_employees_csv(&csv_in).unwrap(),
    };

    let mut rng = StdRng::seed_from_u64(7);
    let mut scheduler = Scheduler::new(ScheduleConfig::default());
    let _ = scheduler.generate(&roster, &mut rng);

    let out = dir.path().join("log.txt");
    io::export_decision_log(&out, &scheduler.state().decisions).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), scheduler.state().decisions.len());
    assert!(text
        .lines()
        .all(|l| l.contains("assigned") || l.contains("skipped")));
}

#[test]
fn plan_file_roundtrip_is_lossless() {
    let dir = tempdir().unwrap();
    let csv_in = dir.path().join("employees.csv");
    fs::write(&csv_in, EMPLOYEES_CSV).unwrap();

    let plan = PlanFile {
        config: ScheduleConfig::default(),
        roster: Roster {
            employees: io::import_employees_csv(&csv_in).unwrap(),
        },
        saved_at: None,
    };

    let storage = JsonStorage::open(dir.path().join("plan.json")).unwrap();
    storage.save(&plan).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded.roster.employees, plan.roster.employees);
    assert_eq!(loaded.config, plan.config);
    assert!(loaded.saved_at.is_some());
}
