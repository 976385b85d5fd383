//! `showtime` CLI -- inspect the slot grid and plan screenings from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the daily slot grid
//! showtime grid
//!
//! # Span info for a 170-minute feature
//! showtime span --duration 170
//!
//! # Validate a slot choice and print the reserved window
//! showtime validate --slot 2 --duration 170
//!
//! # Expand a recurrence into concrete dates
//! showtime expand --from 2024-01-01 --to 2024-01-14 --days mon,wed
//!
//! # Run a full bulk plan against a repertory snapshot
//! showtime plan --request request.json --repertory repertory.json
//!
//! # Decide only, submit nothing
//! showtime plan --request request.json --repertory repertory.json --dry-run
//! ```

mod offline;

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use offline::{RecordingGateway, Repertory};
use showtime_engine::{
    expand, requires_multiple_slots, span_count, valid_selectable_slots, validate_slot_choice,
    BulkOrchestrator, BulkRequest, SlotGrid, WeekdaySet,
};

#[derive(Parser)]
#[command(name = "showtime", version, about = "Showtime slot scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the daily slot grid
    Grid {
        /// Emit the grid as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show how many slots a duration needs and where it may start
    Span {
        /// Movie duration in minutes
        #[arg(short, long)]
        duration: u32,
    },
    /// Validate a slot choice and print the reserved time window
    Validate {
        /// Starting slot id (1-based)
        #[arg(short, long)]
        slot: u8,
        /// Movie duration in minutes
        #[arg(short, long)]
        duration: u32,
    },
    /// Expand a date range plus weekday filter into concrete dates
    Expand {
        /// First date of the range (inclusive)
        #[arg(long)]
        from: NaiveDate,
        /// Last date of the range (inclusive)
        #[arg(long)]
        to: NaiveDate,
        /// Comma-separated weekday codes (mon,wed,...) or a preset:
        /// all, weekdays, weekends
        #[arg(long, default_value = "all")]
        days: String,
        /// Emit the dates as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Run a bulk plan against a repertory snapshot file
    Plan {
        /// Bulk request JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        request: Option<String>,
        /// Repertory snapshot JSON with movies and booked screenings
        #[arg(long)]
        repertory: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Decide only: report what would be created, submit nothing
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Grid { json } => cmd_grid(json),
        Commands::Span { duration } => cmd_span(duration),
        Commands::Validate { slot, duration } => cmd_validate(slot, duration),
        Commands::Expand {
            from,
            to,
            days,
            json,
        } => cmd_expand(from, to, &days, json),
        Commands::Plan {
            request,
            repertory,
            output,
            dry_run,
        } => cmd_plan(request.as_deref(), &repertory, output.as_deref(), dry_run),
    }
}

fn cmd_grid(json: bool) -> Result<()> {
    let grid = SlotGrid::standard();
    if json {
        println!("{}", serde_json::to_string_pretty(grid.slots())?);
    } else {
        for slot in grid.slots() {
            println!("slot {}  {} - {}", slot.id, slot.start, slot.end);
        }
    }
    Ok(())
}

fn cmd_span(duration: u32) -> Result<()> {
    let grid = SlotGrid::standard();
    let spans = span_count(&grid, duration)?;
    let multiple = requires_multiple_slots(&grid, duration)?;
    let selectable = valid_selectable_slots(&grid, duration)?;

    println!("Slots needed:     {spans}");
    println!("Multiple slots:   {}", if multiple { "yes" } else { "no" });
    println!(
        "Selectable slots: {}",
        selectable
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

fn cmd_validate(slot: u8, duration: u32) -> Result<()> {
    let grid = SlotGrid::standard();
    let window = validate_slot_choice(&grid, slot, duration)?;
    println!("Reserved window: {} - {}", window.start, window.end);
    Ok(())
}

fn cmd_expand(from: NaiveDate, to: NaiveDate, days: &str, json: bool) -> Result<()> {
    let dates = expand(from, to, parse_days(days)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
    } else {
        for date in dates {
            println!("{date}");
        }
    }
    Ok(())
}

fn cmd_plan(
    request_path: Option<&str>,
    repertory_path: &str,
    output_path: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let raw = read_input(request_path)?;
    let request: BulkRequest =
        serde_json::from_str(&raw).context("failed to parse bulk request")?;
    let repertory = Repertory::load(repertory_path)?;
    let gateway = RecordingGateway::default();
    let orchestrator = BulkOrchestrator::new(SlotGrid::standard(), &repertory, &gateway);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let report = if dry_run {
        runtime.block_on(orchestrator.plan(&request))?
    } else {
        runtime.block_on(orchestrator.run(&request))?.report
    };

    let pretty = serde_json::to_string_pretty(&report.to_response())?;
    write_output(output_path, &pretty)?;
    Ok(())
}

/// Build the weekday filter from a preset name or comma-separated codes.
fn parse_days(raw: &str) -> Result<WeekdaySet> {
    match raw {
        "all" => Ok(WeekdaySet::all_days()),
        "weekdays" => Ok(WeekdaySet::weekdays_only()),
        "weekends" => Ok(WeekdaySet::weekends_only()),
        _ => {
            let mut set = WeekdaySet::empty();
            for part in raw.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                match WeekdaySet::parse_code(part) {
                    Some(day) => set = set.with(day),
                    None => bail!(
                        "unknown weekday code: '{part}' (expected mon..sun or a preset: all, weekdays, weekends)"
                    ),
                }
            }
            Ok(set)
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
