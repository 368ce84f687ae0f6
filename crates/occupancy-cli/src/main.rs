//! `occupancy` CLI — filter bookings and compute rental metrics from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Filter a JSON array of bookings by date range (stdin → stdout)
//! cat bookings.json | occupancy filter --from 2024-01-03 --to 2024-01-10
//!
//! # Filter from file to file
//! occupancy filter --from 2024-01-03 --to 2024-01-10 -i bookings.json -o hits.json
//!
//! # Whole billing days between two timestamps
//! occupancy duration 2024-01-01T00:00:00Z 2024-01-02T06:00:00Z
//!
//! # Utilization of a 50-unit parking spot with 55 active trips
//! occupancy utilization --occupied 55 --capacity 50
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

use occupancy_core::{
    duration_days, filter_by_overlap, parse_timestamp_strict, utilization_rate, TimeSpan,
    UtilizationLevel,
};

#[derive(Parser)]
#[command(
    name = "occupancy",
    version,
    about = "Booking overlap and parking utilization metrics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a JSON array of bookings to those overlapping a date range
    Filter {
        /// Start of the query range (bare date or RFC 3339)
        #[arg(long)]
        from: String,
        /// End of the query range
        #[arg(long)]
        to: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Whole billing days between two timestamps (partial days round up)
    Duration {
        /// Start timestamp
        start: String,
        /// End timestamp
        end: String,
    },
    /// Utilization rate for an occupancy count against a capacity
    Utilization {
        /// Units currently occupied
        #[arg(long)]
        occupied: u32,
        /// Total capacity of the spot
        #[arg(long)]
        capacity: u32,
    },
}

/// A booking as the backend serves it: a span plus whatever other fields the
/// record carries. Unknown fields survive filtering untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRecord {
    start: String,
    end: String,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl TimeSpan for BookingRecord {
    fn span_start(&self) -> &str {
        &self.start
    }

    fn span_end(&self) -> &str {
        &self.end
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            from,
            to,
            input,
            output,
        } => {
            let json = read_input(input.as_deref())?;
            let records: Vec<BookingRecord> =
                serde_json::from_str(&json).context("Input is not a JSON array of bookings")?;

            // Same fail-open contract as the dashboards: a bad bound shows everything.
            let hits = filter_by_overlap(records, &from, &to);

            let pretty = serde_json::to_string_pretty(&hits)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Duration { start, end } => {
            // Operator-typed arguments get strict validation, unlike the
            // library's fail-open default.
            parse_timestamp_strict(&start)
                .with_context(|| format!("Invalid start timestamp: {}", start))?;
            parse_timestamp_strict(&end)
                .with_context(|| format!("Invalid end timestamp: {}", end))?;

            println!("{}", duration_days(&start, &end));
        }
        Commands::Utilization { occupied, capacity } => {
            let rate = utilization_rate(occupied, capacity);
            let level = UtilizationLevel::from_rate(rate);
            println!("rate:  {:.1}%", rate);
            println!("level: {:?}", level);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
