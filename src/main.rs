use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spelltally::app_dirs::AppDirs;
use spelltally::config::{Config, ConfigStore, FileConfigStore};
use spelltally::entry::Outcome;
use spelltally::export;
use spelltally::stats::StatsLog;
use spelltally::tally::Tally;
use spelltally::util::accuracy;

/// spelling quiz statistics: record word outcomes, review totals
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Records per-word spelling quiz outcomes in a flat tab-separated log and summarizes them as category totals, lifetime totals, and a daily history."
)]
struct Cli {
    /// path to the statistics file (defaults to the platform state dir)
    #[clap(short = 'f', long, global = true)]
    file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// record one spelling outcome for a word
    Record {
        word: String,
        category: String,
        /// the attempt was misspelt (default is a correct spelling)
        #[clap(long)]
        missed: bool,
    },
    /// totals for a single category
    Category {
        name: String,
        /// emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
    /// totals across every category and day
    Lifetime {
        /// emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
    /// per-day totals for the last N days, oldest first
    Daily {
        /// number of days (defaults to the configured history window)
        #[clap(short, long)]
        days: Option<usize>,
        /// emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
    /// per-category breakdown
    Categories {
        /// emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
    /// export every record as CSV
    Export {
        /// write to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

fn stats_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.file
        .clone()
        .or_else(|| config.stats_file.clone())
        .or_else(AppDirs::stats_path)
        .unwrap_or_else(|| PathBuf::from(".spelltally.tsv"))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = FileConfigStore::new().load();
    let log = StatsLog::open(stats_path(&cli, &config))?;

    match cli.command {
        Command::Record {
            word,
            category,
            missed,
        } => {
            let outcome = if missed {
                Outcome::Incorrect
            } else {
                Outcome::Correct
            };
            log.record(&word, outcome, &category)?;
        }
        Command::Category { name, json } => {
            let tally = log.category_tally(&name)?;
            print_tally(&name, tally, json)?;
        }
        Command::Lifetime { json } => {
            print_tally("lifetime", log.lifetime_tally()?, json)?;
        }
        Command::Daily { days, json } => {
            let series = log.daily(days.unwrap_or(config.history_days))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                for day in &series {
                    println!(
                        "{}\t{} correct\t{} incorrect",
                        day.date, day.tally.correct, day.tally.incorrect
                    );
                }
            }
        }
        Command::Categories { json } => {
            let breakdown = log.category_breakdown()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                for (name, tally) in &breakdown {
                    println!("{}\t{} correct\t{} incorrect", name, tally.correct, tally.incorrect);
                }
            }
        }
        Command::Export { output } => match output {
            Some(path) => export::write_csv(&log, File::create(path)?)?,
            None => export::write_csv(&log, io::stdout().lock())?,
        },
    }

    Ok(())
}

fn print_tally(label: &str, tally: Tally, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
        return Ok(());
    }
    match accuracy(tally.correct, tally.incorrect) {
        Some(pct) => println!(
            "{}: {} correct, {} incorrect ({:.1}% accuracy)",
            label, tally.correct, tally.incorrect, pct
        ),
        None => println!("{label}: no attempts recorded"),
    }
    Ok(())
}
