//! `numer`: prints the numerology report for a name and optional birth date.
//!
//! **Usage:**
//! ```text
//! numer [--name <NAME>] [--dob <DATE>] [--end-date <DATE>] [--format text|json] [-v...]
//! ```
//!
//! Dates are accepted as `YYYY-MM-DD`, `DD-MM-YYYY` or `DD/MM/YYYY`. Missing
//! `--name` or `--dob` are prompted for on stdin; an empty date of birth
//! skips every date section. An unusable date of birth is reported in its
//! own section after the name sections.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use numer::date::parse_dob;
use numer::{BirthReport, NameReport, Report};
use numer_render::{render_birth, render_dob_error, render_name};
use tracing_subscriber::EnvFilter;

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Box-drawn text sections.
    #[default]
    Text,
    /// The aggregated report as pretty JSON.
    Json,
}

/// Compute Chaldean and Pythagorean name numbers, charts and birth-date grids.
#[derive(Parser)]
#[command(
    name = "numer",
    version,
    about = "Numerology report for a name and date of birth"
)]
struct Args {
    /// Full name (prompted for when omitted).
    #[arg(long)]
    name: Option<String>,

    /// Date of birth (prompted for when omitted; empty skips date sections).
    #[arg(long)]
    dob: Option<String>,

    /// Last date of the name-year mapping (default: today).
    #[arg(long)]
    end_date: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let name = match args.name {
        Some(name) => name,
        None => prompt("Enter name: ")?,
    };
    let dob_text = match args.dob {
        Some(dob) => dob,
        None => prompt("Enter DOB (YYYY-MM-DD or DD-MM-YYYY or DD/MM/YYYY) [optional]: ")?,
    };
    let end_date = match args.end_date.as_deref() {
        Some(text) => parse_dob(text).with_context(|| format!("invalid --end-date {text:?}"))?,
        None => Local::now().date_naive(),
    };

    let name_report = NameReport::compute(&name).context("failed to compute name numbers")?;
    let birth = birth_report(&name_report, &name, dob_text.trim(), end_date);

    match args.format {
        Format::Text => print_text(&name_report, birth.as_ref()),
        Format::Json => print_json(name_report, birth)?,
    }
    Ok(())
}

/// Date sections, or the reason they cannot be produced. `None` when no
/// date of birth was given.
fn birth_report(
    name_report: &NameReport,
    name: &str,
    dob_text: &str,
    end_date: NaiveDate,
) -> Option<numer::Result<BirthReport>> {
    if dob_text.is_empty() {
        return None;
    }
    let birth = parse_dob(dob_text)
        .and_then(|dob| BirthReport::compute(name_report, name, dob, end_date));
    if let Err(err) = &birth {
        tracing::debug!(%err, dob = dob_text, "date sections skipped");
    }
    Some(birth)
}

fn print_text(name_report: &NameReport, birth: Option<&numer::Result<BirthReport>>) {
    println!("{}", render_name(name_report));
    match birth {
        Some(Ok(birth)) => println!("{}", render_birth(birth)),
        Some(Err(err)) => println!("{}", render_dob_error(err)),
        None => {}
    }
}

fn print_json(name_report: NameReport, birth: Option<numer::Result<BirthReport>>) -> Result<()> {
    let (birth, dob_error) = match birth {
        Some(Ok(birth)) => (Some(birth), None),
        Some(Err(err)) => (None, Some(err.to_string())),
        None => (None, None),
    };
    let report = Report {
        name: name_report,
        birth,
    };

    let mut value = serde_json::to_value(&report).context("failed to serialize report")?;
    if let (Some(err), Some(object)) = (dob_error, value.as_object_mut()) {
        object.insert("dob_error".to_owned(), err.into());
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Reads one trimmed line from stdin after printing `message`.
fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_owned())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "numer=debug,numer_clients=debug",
        _ => "numer=trace,numer_clients=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
