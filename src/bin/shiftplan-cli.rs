#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shiftplan::{
    io,
    model::{Day, Employee, EmployeeId, ShiftKind},
    report::{ReportRenderer, TextReport},
    scheduler::Scheduler,
    storage::{JsonStorage, PlanFile, Storage},
    validate,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'affectation de créneaux (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de plan (config + roster)
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer un plan avec la config par défaut (semaine complète,
    /// Morning/Evening/Night, plafond 5)
    Init,

    /// Ajouter un employé au roster
    AddEmployee {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        preference: String,
        /// Identifiant explicite ; uuid généré sinon
        #[arg(long)]
        id: Option<String>,
        #[arg(long, default_value_t = 0)]
        seniority: u8,
        /// liste "Mon,Tue,..."
        #[arg(long)]
        availability: Option<String>,
        /// liste "Thu,..."
        #[arg(long)]
        leave: Option<String>,
    },

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Audit consultatif du roster (champs manquants, incohérences)
    Validate,

    /// Lister le roster
    Show,

    /// Générer le planning de la semaine
    Generate {
        /// Seed du RNG ; omis = tirage non reproductible
        #[arg(long)]
        seed: Option<u64>,
        /// Export CSV du planning (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
        /// Export texte du journal de décisions (optionnel)
        #[arg(long)]
        log_out: Option<String>,
        /// Export texte du journal de conflits (optionnel)
        #[arg(long)]
        conflicts_out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut plan = storage.load().unwrap_or_default();

    let code = match cli.cmd {
        Commands::Init => {
            storage.save(&PlanFile::default())?;
            println!("plan written to {}", cli.plan);
            0
        }
        Commands::AddEmployee {
            name,
            role,
            preference,
            id,
            seniority,
            availability,
            leave,
        } => {
            let id = id.map(EmployeeId::new).unwrap_or_else(EmployeeId::random);
            if plan.roster.find_by_id(&id).is_some() {
                bail!("employee id already in roster: {}", id);
            }
            let mut employee = Employee::new(id, name, role, ShiftKind::new(preference));
            employee.seniority = seniority;
            if let Some(list) = availability {
                employee.availability = parse_day_list(&list)?;
            }
            if let Some(list) = leave {
                employee.leave_days = parse_day_list(&list)?;
            }
            plan.roster.employees.push(employee);
            storage.save(&plan)?;
            0
        }
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            plan.roster.employees.extend(employees);
            storage.save(&plan)?;
            0
        }
        Commands::Validate => {
            let warnings = validate::audit(&plan.config, &plan.roster);
            if warnings.is_empty() {
                println!("OK: no warnings");
                0
            } else {
                for w in &warnings {
                    eprintln!("Warning: {w}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Show => {
            for e in &plan.roster.employees {
                let availability: Vec<&str> =
                    e.availability.iter().map(|d| d.as_str()).collect();
                println!(
                    "{} | {} ({}) pref={} avail={}",
                    e.id.as_str(),
                    e.name,
                    e.role,
                    e.preference,
                    availability.join(",")
                );
            }
            0
        }
        Commands::Generate {
            seed,
            out_csv,
            log_out,
            conflicts_out,
        } => {
            if plan.roster.employees.is_empty() {
                bail!("roster is empty, add or import employees first");
            }
            // L'audit est consultatif : on signale et on génère quand même.
            for w in validate::audit(&plan.config, &plan.roster) {
                eprintln!("Warning: {w}");
            }

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let mut scheduler = Scheduler::try_new(plan.config.clone())?;
            let schedule = scheduler.generate(&plan.roster, &mut rng);
            let evaluation = scheduler.evaluate(&plan.roster, &schedule)?;

            print!("{}", TextReport.render(&schedule, &evaluation));
            if scheduler.state().conflicts.is_empty() {
                println!("no leave-day conflicts");
            } else {
                for c in &scheduler.state().conflicts {
                    eprintln!("Conflict: {c}");
                }
            }

            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = log_out {
                io::export_decision_log(path, &scheduler.state().decisions)?;
            }
            if let Some(path) = conflicts_out {
                io::export_conflict_log(path, &scheduler.state().conflicts)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn parse_day_list(raw: &str) -> Result<Vec<Day>> {
    raw.split([',', ';'])
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.parse::<Day>().map_err(anyhow::Error::msg))
        .collect()
}
