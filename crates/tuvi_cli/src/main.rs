//! `tuvi`: generate Tử Vi charts and convert dates from the command line.
//!
//! Environment:
//! - `RUST_LOG`: log filter directives such as `debug` or
//!   `tuvi_base=trace` (default: warn). Logs go to stderr.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tuvi_base::{BirthInput, Chart, ChartConfig, ChartEngine, Palace, year_pillar};
use tuvi_calendar::{LunarCalendar, LunarDate, SolarDate};

#[derive(Parser)]
#[command(name = "tuvi", about = "Tử Vi chart engine CLI")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth hour token (ty, suu, ..., hoi) or HH:MM
        #[arg(long)]
        hour: String,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Calendar of --date: solar (default) or lunar
        #[arg(long, default_value = "solar")]
        calendar: String,
        /// Lunar date falls in the leap month
        #[arg(long)]
        leap: bool,
        /// Name shown on the chart
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Convert a solar date to the lunar calendar
    Lunar {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a lunar date to the solar calendar
    Solar {
        /// Lunar date (YYYY-MM-DD)
        date: String,
        /// Date falls in the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Year stem, branch and Nạp Âm of a lunar year
    Pillar {
        /// Lunar year
        year: i32,
    },
}

/// Filter from `RUST_LOG` directives, falling back to `warn` when unset or
/// unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_logging() {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig> {
    match path {
        Some(p) => ChartConfig::from_file(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => Ok(ChartConfig::default()),
    }
}

fn stars_line(palace: &Palace) -> String {
    palace
        .stars()
        .map(|s| match s.transformation {
            Some(t) => format!("{} [{}]", s.label(), t.name()),
            None => s.label(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_chart(chart: &Chart) {
    if !chart.full_name.is_empty() {
        println!("{}", chart.full_name);
    }
    if let Some(solar) = chart.solar_date {
        println!("Solar date:  {solar}");
    }
    println!("Lunar date:  {}", chart.lunar_date);
    println!("Hour:        {}", chart.hour.name());
    println!(
        "Year:        {} ({})",
        chart.year.label(),
        chart.year.nap_am.name
    );
    println!("Âm dương:    {}", chart.yin_yang);
    println!(
        "Mệnh / Thân: {} / {}",
        chart.menh_branch.name(),
        chart.than_branch.name()
    );
    println!(
        "Cục:         {} ({})",
        chart.cuc.name(),
        chart.menh_cuc_relation.name()
    );
    println!(
        "Chủ Mệnh:    {}   Chủ Thân: {}",
        chart.chu_menh.name(),
        chart.chu_than.name()
    );
    println!(
        "Tuần:        {} {}   Triệt: {} {}",
        chart.tuan[0].name(),
        chart.tuan[1].name(),
        chart.triet[0].name(),
        chart.triet[1].name()
    );
    println!(
        "Cách cục:    {} - {}",
        chart.star_group.name, chart.star_group.description
    );
    println!();

    for p in &chart.palaces {
        let mut flags = Vec::new();
        if p.is_body_palace {
            flags.push("Thân");
        }
        if p.is_tuan {
            flags.push("Tuần");
        }
        if p.is_triet {
            flags.push("Triệt");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "{:<11} {} {:<5} age {:>3}{}",
            p.name.name(),
            p.stem.name(),
            p.branch.name(),
            p.decade_start_age,
            flags
        );
        println!("    {}", stars_line(p));
    }
    println!();
    println!(
        "Scores: career {}  finance {}  romance {}  health {}",
        chart.scores.career, chart.scores.finance, chart.scores.romance, chart.scores.health
    );
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "configuration loaded");
    let engine = ChartEngine::new(config);

    match cli.command {
        Commands::Chart {
            date,
            hour,
            gender,
            calendar,
            leap,
            name,
        } => {
            let input = BirthInput {
                full_name: name,
                birth_date: date,
                birth_hour: hour,
                gender,
                calendar_type: calendar,
                is_leap_month: leap,
            };
            let chart = engine.generate(&input).context("generating chart")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Lunar { date } => {
            let solar: SolarDate = date.parse()?;
            let lunar = engine.calendar().solar_to_lunar(solar)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&lunar)?);
            } else {
                println!("{lunar}");
            }
        }

        Commands::Solar { date, leap } => {
            let parsed = LunarDate::parse(&date)?;
            let lunar = LunarDate {
                is_leap_month: leap,
                ..parsed
            };
            let solar = engine.calendar().lunar_to_solar(lunar)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&solar)?);
            } else {
                println!("{solar}");
            }
        }

        Commands::Pillar { year } => {
            let pillar = year_pillar(year);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pillar)?);
            } else {
                println!(
                    "{} - {} ({})",
                    pillar.label(),
                    pillar.nap_am.name,
                    pillar.nap_am.element.name()
                );
            }
        }
    }

    Ok(())
}
