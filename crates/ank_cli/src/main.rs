use std::path::{Path, PathBuf};

use ank_base::{
    AbracadabraTriangle, BehaviorFractal, CalendarDate, DateParsing, IndividualNumbers,
    LifeCycleTable, MasterPolicy, PersonalNumbers, PythagoreanSquare, Report, ReportRequest,
    TaskNumbers, abracadabra, build_report, full_name_number, letter_value, parse_birth_date_with,
    reduce, task_numbers,
};
use ank_config::{AnkConfig, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ank", about = "Ank numerology calculator", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Reject birth dates that do not exist in the Gregorian calendar
    #[arg(long, global = true)]
    strict: bool,
    /// Path to a TOML config file (default: ./ank.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level for stderr diagnostics (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce an integer by repeated digit sums
    Reduce {
        /// Integer to reduce (absolute value is used)
        #[arg(allow_hyphen_values = true)]
        n: i64,
        /// Master-number policy
        #[arg(long, value_enum, default_value = "none")]
        policy: PolicyArg,
    },
    /// Parse a birth date and echo it normalised
    Parse {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
    },
    /// Behavior fractal of a birth date
    Fractal {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
    },
    /// Task (problem) numbers, from a birth date or from explicit personal numbers
    Tasks {
        /// Birth date; when given, the personal numbers are derived from it
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        soul: Option<i64>,
        #[arg(long)]
        mind: Option<i64>,
        #[arg(long)]
        destiny: Option<i64>,
        #[arg(long)]
        year: Option<i64>,
    },
    /// Shadows, peaks, challenges and transitions over 100 years
    Cycles {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
        /// Also print the 100 personal-year values
        #[arg(long)]
        years: bool,
    },
    /// Individual year/month/day numbers for a target date
    Individual {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
        /// Target date YYYY-MM-DD (default: today)
        #[arg(long)]
        on: Option<String>,
        /// Destiny number override
        #[arg(long)]
        destiny: Option<i64>,
    },
    /// Personal numbers card
    Personal {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
        /// Full name for the name number
        #[arg(long)]
        name: Option<String>,
    },
    /// Pythagorean square (psychomatrix)
    Square {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
    },
    /// Abracadabra triangle over the first nine Latin letters of a name
    Abracadabra {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
    },
    /// Full-name number with per-letter values
    Name {
        /// Full name (Latin or Cyrillic)
        name: String,
    },
    /// Every calculation for one person
    Report {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        date: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        /// Target date YYYY-MM-DD for individual numbers (default: today)
        #[arg(long)]
        on: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Reduce to a single digit
    None,
    /// Keep 11, 22 and 33
    Standard,
    /// Keep 11 and 22
    Ruling,
}

impl From<PolicyArg> for MasterPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::None => Self::None,
            PolicyArg::Standard => Self::Standard,
            PolicyArg::Ruling => Self::Ruling,
        }
    }
}

#[derive(Serialize)]
struct Reduced {
    input: i64,
    policy: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct NameBreakdown {
    name: String,
    letters: Vec<(char, u8)>,
    number: Option<u8>,
}

fn load_config(path: Option<&Path>) -> AnkConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    AnkConfig::resolve(path, &cwd).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn init_logging(level: &str) -> LoggerHandle {
    let logger = Logger::try_with_str(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level {level:?}: {e}");
        std::process::exit(1);
    });
    logger.log_to_stderr().start().unwrap_or_else(|e| {
        eprintln!("Failed to start logger: {e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str, parsing: DateParsing) -> CalendarDate {
    parse_birth_date_with(s, parsing).unwrap_or_else(|e| {
        eprintln!("Invalid birth date {s:?}: {e}");
        std::process::exit(1);
    })
}

fn require_target(s: Option<&str>) -> Option<NaiveDate> {
    s.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
            eprintln!("Invalid target date {s:?} (expected YYYY-MM-DD): {e}");
            std::process::exit(1);
        })
    })
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) {
    if !json {
        text(value);
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn opt(v: Option<u8>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_fractal(f: &BehaviorFractal) {
    println!("Behavior fractal: {}", f.fractal);
    println!(
        "  day {}  month {}  year {}  sum {}",
        f.digit1, f.digit2, f.digit3, f.digit4
    );
}

fn print_tasks(t: &TaskNumbers) {
    println!("Task numbers:");
    for (i, (problem, period)) in t.problems().iter().zip(t.periods()).enumerate() {
        println!("  {}: {}  ({})", i + 1, problem, period);
    }
}

fn print_life_cycle(t: &LifeCycleTable, with_years: bool) {
    println!(
        "Destiny {}  Base {}  Grid anchor age {}",
        t.destiny_number, t.base_number, t.anchor_age
    );
    println!("  #  ages     peak shadow challenge transition");
    for p in &t.periods {
        println!(
            "  {:<2} {:>3}-{:<3}  {:>4} {:>6} {:>9} {:>10}",
            p.index,
            p.start_age,
            p.end_age,
            p.peak,
            p.shadow,
            opt(p.challenge),
            opt(p.transition)
        );
    }
    if with_years {
        for y in &t.years {
            println!("  age {:>3} ({}): {}", y.age, y.year, y.chlg);
        }
    } else {
        println!("Sequence: {}", t.sequence);
    }
}

fn print_individual(n: &IndividualNumbers) {
    println!("Individual numbers on {}:", n.target_date);
    println!("  year  (CHIG): {}", n.chig);
    println!("  month (CHIM): {}", n.chim);
    println!("  day   (CHID): {}", n.chid);
    println!("  year problem  (CHPG): {}", n.chpg);
    println!("  month problem (CHPM): {}", n.chpm);
    println!("  day problem   (CHPD): {}", n.chpd);
}

fn print_personal(p: &PersonalNumbers) {
    println!("Soul:         {}", p.soul);
    println!("Mind:         {}", p.mind);
    println!("Helping mind: {}", p.helping_mind);
    println!("Destiny:      {}", p.destiny);
    println!("Year:         {}", p.year);
    println!("Ruling:       {}", p.ruling);
    if let Some(n) = p.full_name {
        println!("Full name:    {n}");
    }
}

fn print_square(sq: &PythagoreanSquare) {
    let [a, b, c, d] = sq.working;
    println!("Working numbers: {a} {b} {c} {d}");
    for row in sq.grid() {
        println!("  {:<10}{:<10}{:<10}", row[0], row[1], row[2]);
    }
}

fn print_triangle(t: &AbracadabraTriangle) {
    println!("Letters: {}", t.letters);
    for (i, row) in t.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        println!("{}{}", " ".repeat(i), cells.join(" "));
    }
}

fn print_report(r: &Report) {
    println!("Birth date: {}", r.birth_date);
    println!();
    print_personal(&r.personal);
    println!();
    print_fractal(&r.fractal);
    if let Some(t) = &r.tasks {
        println!();
        print_tasks(t);
    }
    println!();
    print_life_cycle(&r.life_cycle, false);
    println!();
    print_individual(&r.individual);
    println!();
    print_square(&r.square);
    if let Some(t) = &r.abracadabra {
        println!();
        print_triangle(t);
    }
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let _logger = init_logging(&level);
    debug!("config: {config:?}");

    let json = cli.json || config.output.format == OutputFormat::Json;
    let parsing = if cli.strict {
        DateParsing::Strict
    } else {
        config.date_parsing()
    };

    match cli.command {
        Commands::Reduce { n, policy } => {
            let policy = MasterPolicy::from(policy);
            let out = Reduced {
                input: n,
                policy: policy.name(),
                value: reduce(n, policy),
            };
            emit(json, &out, |r| println!("{}", r.value));
        }

        Commands::Parse { date } => {
            let d = require_date(&date, parsing);
            emit(json, &d, |d| {
                println!("{d}");
                if !d.is_valid_gregorian() {
                    println!("  (not a valid Gregorian date)");
                }
            });
        }

        Commands::Fractal { date } => {
            let d = require_date(&date, parsing);
            emit(json, &BehaviorFractal::from_date(d), print_fractal);
        }

        Commands::Tasks {
            date,
            soul,
            mind,
            destiny,
            year,
        } => {
            let tasks = match date {
                Some(date) => {
                    let d = require_date(&date, parsing);
                    PersonalNumbers::from_date(d, None).task_numbers()
                }
                None => task_numbers(soul, mind, destiny, year),
            };
            let Some(tasks) = tasks else {
                eprintln!("Task numbers need --date or all of --soul, --mind, --destiny, --year");
                std::process::exit(1);
            };
            emit(json, &tasks, print_tasks);
        }

        Commands::Cycles { date, years } => {
            let d = require_date(&date, parsing);
            emit(json, &LifeCycleTable::from_date(d), |t| {
                print_life_cycle(t, years)
            });
        }

        Commands::Individual { date, on, destiny } => {
            let d = require_date(&date, parsing);
            let target = require_target(on.as_deref()).unwrap_or_else(today);
            info!("individual numbers for {d} on {target}");
            let n = IndividualNumbers::compute(d, target.into(), destiny);
            emit(json, &n, print_individual);
        }

        Commands::Personal { date, name } => {
            let d = require_date(&date, parsing);
            emit(
                json,
                &PersonalNumbers::from_date(d, name.as_deref()),
                print_personal,
            );
        }

        Commands::Square { date } => {
            let d = require_date(&date, parsing);
            emit(json, &PythagoreanSquare::from_date(d), print_square);
        }

        Commands::Abracadabra { name, surname } => match abracadabra(&name, &surname) {
            Ok(t) => emit(json, &t, print_triangle),
            Err(e) => {
                eprintln!("Not enough data: {e}");
                std::process::exit(1);
            }
        },

        Commands::Name { name } => {
            let out = NameBreakdown {
                letters: name
                    .chars()
                    .filter_map(|c| letter_value(c).map(|(_, v)| (c, v)))
                    .collect(),
                number: full_name_number(&name),
                name,
            };
            emit(json, &out, |b| {
                for (c, v) in &b.letters {
                    println!("  {c} = {v}");
                }
                match b.number {
                    Some(n) => println!("Name number: {n}"),
                    None => println!("No letters to count"),
                }
            });
        }

        Commands::Report {
            date,
            name,
            surname,
            on,
        } => {
            let req = ReportRequest {
                birth_date: &date,
                name: name.as_deref(),
                surname: surname.as_deref(),
                target: require_target(on.as_deref()),
                parsing,
            };
            match build_report(&req) {
                Ok(r) => emit(json, &r, print_report),
                Err(e) => {
                    eprintln!("Invalid birth date {date:?}: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
