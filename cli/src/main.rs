mod report;
mod source;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use qccalc_core::time::current_month;
use qccalc_core::{days_in_month, parse_month, BonusReport, Entry, StatsReport};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qccalc")]
#[command(about = "Bonus and productivity stats from QC work entries", long_about = None)]
struct Cli {
    /// Entries file (JSON array). Defaults to ~/.qccalc/entries.json
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Debug, Default)]
struct MonthArgs {
    /// Number of days in the reported month
    #[arg(long, conflicts_with = "month")]
    days: Option<u32>,

    /// Reported month as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Bonus counts and amounts per group
    Bonus,
    /// Group check statistics and monthly totals
    Stats {
        #[command(flatten)]
        month: MonthArgs,
    },
    /// Bonus and statistics together
    Report {
        #[command(flatten)]
        month: MonthArgs,
    },
    /// Convert an H:MM:SS duration to hours
    Time {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Serialize)]
struct FullReport {
    bonus: BonusReport,
    stats: StatsReport,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_days(args: &MonthArgs) -> Result<u32> {
    if let Some(days) = args.days {
        return Ok(days);
    }
    let (year, month) = match &args.month {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    days_in_month(year, month)
}

fn read_entries(file: Option<PathBuf>) -> Result<Vec<Entry>> {
    let path = match file {
        Some(p) => p,
        None => source::default_entries_path()?,
    };
    let entries = source::load_entries(&path)?;
    if entries.is_empty() {
        println!("Warning: no entries in {}", path.display());
    }
    Ok(entries)
}

fn print_bonus(report: &BonusReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report::bonus_table(report));
    }
    Ok(())
}

fn print_stats(report: &StatsReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report::stats_table(report));
        println!("{}", report::monthly_summary(report));
    }
    Ok(())
}

fn print_full(entries: &[Entry], month: &MonthArgs, json: bool) -> Result<()> {
    let days = resolve_days(month)?;
    let full = FullReport {
        bonus: BonusReport::from_entries(entries),
        stats: StatsReport::from_entries(entries, days),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&full)?);
    } else {
        print_bonus(&full.bonus, false)?;
        print_stats(&full.stats, false)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Bonus) => {
            let entries = read_entries(cli.file)?;
            print_bonus(&BonusReport::from_entries(&entries), cli.json)?;
        }
        Some(Commands::Stats { month }) => {
            let entries = read_entries(cli.file)?;
            let days = resolve_days(&month)?;
            print_stats(&StatsReport::from_entries(&entries, days), cli.json)?;
        }
        Some(Commands::Report { month }) => {
            let entries = read_entries(cli.file)?;
            print_full(&entries, &month, cli.json)?;
        }
        Some(Commands::Time { value }) => {
            let summary = report::duration_summary(&value)
                .ok_or_else(|| anyhow!("Invalid duration '{}': expected H:MM:SS", value))?;
            println!("{}", summary);
        }
        None => {
            let entries = read_entries(cli.file)?;
            print_full(&entries, &MonthArgs::default(), cli.json)?;
        }
    }
    Ok(())
}
