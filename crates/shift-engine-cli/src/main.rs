//! `shiftguard` CLI — check a candidate weekly schedule against existing
//! employments from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Full conflict report as JSON
//! shiftguard check --candidate vacancy.json --employments current.json
//!
//! # Severity summary instead of the raw report
//! shiftguard check -c vacancy.json -e current.json --summary
//!
//! # Human-readable output, exit code 2 when severity reaches "major"
//! shiftguard check -c vacancy.json -e current.json --format text --fail-on major
//!
//! # Custom severity threshold (TOML file and/or SHIFTGUARD_* env vars)
//! SHIFTGUARD_MINOR_MAX_DAYS=3 shiftguard check -c vacancy.json -e current.json --summary
//!
//! # Validate a schedule file (reads stdin if -i is omitted)
//! shiftguard validate -i vacancy.json
//! ```
//!
//! A schedule file is either a JSON array of seven day slots or a day-keyed
//! hours object (`{"monday": {"enabled": true, "start": "09:00", "end": "17:00"}, ...}`).

use std::io::{self, Read};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::Deserialize;
use shift_engine::{
    detect_conflicts_json, summarize_with, ConflictReport, ConflictSummary, DayOfWeek, DaySlot,
    Severity, SeverityPolicy, WeeklyHours, WeeklySchedule,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shiftguard",
    version,
    about = "Weekly work-schedule conflict checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate schedule against existing employments
    Check {
        /// Candidate schedule file
        #[arg(short, long)]
        candidate: String,
        /// JSON array of employments (reads stdin if omitted)
        #[arg(short, long)]
        employments: Option<String>,
        /// Print the severity summary instead of the full report
        #[arg(long)]
        summary: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// TOML file with severity policy settings
        #[arg(long)]
        config: Option<String>,
        /// Exit with status 2 when severity reaches this tier
        #[arg(long, value_enum)]
        fail_on: Option<FailOn>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate a schedule file and list its working days
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FailOn {
    Minor,
    Major,
}

impl FailOn {
    fn threshold(self) -> Severity {
        match self {
            FailOn::Minor => Severity::Minor,
            FailOn::Major => Severity::Major,
        }
    }
}

/// Either accepted schedule file shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleInput {
    Slots(Vec<DaySlot>),
    Hours(WeeklyHours),
}

impl ScheduleInput {
    fn into_slots(self) -> shift_engine::error::Result<Vec<DaySlot>> {
        match self {
            ScheduleInput::Slots(slots) => Ok(slots),
            ScheduleInput::Hours(hours) => hours.to_day_slots(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            candidate,
            employments,
            summary,
            format,
            config,
            fail_on,
            output,
        } => {
            let policy = load_policy(config.as_deref())?;
            let candidate = read_schedule_input(Some(&candidate))?
                .into_slots()
                .and_then(WeeklySchedule::new)
                .context("Invalid candidate schedule")?;
            let report =
                detect_conflicts_json(&candidate, &read_input(employments.as_deref())?)
                    .context("Failed to parse employments JSON")?;
            let digest = summarize_with(&report, &policy);
            debug!(severity = ?digest.severity, "check finished");

            let rendered = match (format, summary) {
                (OutputFormat::Json, false) => serde_json::to_string_pretty(&report)?,
                (OutputFormat::Json, true) => serde_json::to_string_pretty(&digest)?,
                (OutputFormat::Text, false) => render_report(&report, &digest),
                (OutputFormat::Text, true) => render_summary(&digest),
            };
            write_output(output.as_deref(), &rendered)?;

            if let Some(fail_on) = fail_on {
                if digest.severity >= fail_on.threshold() {
                    process::exit(2);
                }
            }
        }
        Commands::Validate { input } => {
            let slots = read_schedule_input(input.as_deref())?
                .into_slots()
                .context("Invalid schedule")?;
            let schedule = WeeklySchedule::new(slots).context("Invalid schedule")?;
            print!("{}", render_schedule(&schedule));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Severity policy: built-in defaults, then the TOML file, then `SHIFTGUARD_*`
/// environment variables.
fn load_policy(config: Option<&str>) -> Result<SeverityPolicy> {
    let mut figment = Figment::from(Serialized::defaults(SeverityPolicy::default()));
    if let Some(path) = config {
        if !Path::new(path).exists() {
            anyhow::bail!("Config file not found: {}", path);
        }
        figment = figment.merge(Toml::file(path));
    }
    figment
        .merge(Env::prefixed("SHIFTGUARD_"))
        .extract()
        .context("Failed to load severity policy")
}

fn read_schedule_input(path: Option<&str>) -> Result<ScheduleInput> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse schedule JSON")
}

fn day_name(day: u8) -> String {
    DayOfWeek::new(day)
        .map(|d| d.weekday().to_string())
        .unwrap_or_else(|_| day.to_string())
}

fn render_schedule(schedule: &WeeklySchedule) -> String {
    let active = schedule.active_day_intervals();
    if active.is_empty() {
        return "No working days\n".to_string();
    }
    let mut out = String::new();
    for (day, interval) in &active {
        out.push_str(&format!("{}  {}\n", day.weekday(), interval));
    }
    out.push_str(&format!(
        "Total: {} minutes/week\n",
        schedule.total_weekly_minutes()
    ));
    out
}

fn render_report(report: &ConflictReport, digest: &ConflictSummary) -> String {
    let mut out = String::new();
    if report.conflicts.is_empty() {
        out.push_str("No conflicts detected\n");
    }
    for conflict in &report.conflicts {
        out.push_str(&format!(
            "{} ({})\n",
            conflict.employer_name, conflict.employer_id
        ));
        for detail in &conflict.overlap_details {
            out.push_str(&format!(
                "  {}  existing {}  candidate {}  overlap {} ({} min)\n",
                day_name(detail.day),
                detail.existing_interval,
                detail.candidate_interval,
                detail.overlap_interval,
                detail.overlap_minutes()
            ));
        }
    }
    for skipped in &report.skipped {
        out.push_str(&format!(
            "Skipped {} ({}): {}\n",
            skipped.employer_name, skipped.employer_id, skipped.reason
        ));
    }
    out.push_str(&render_summary(digest));
    out
}

fn render_summary(digest: &ConflictSummary) -> String {
    let severity = match digest.severity {
        Severity::None => "none",
        Severity::Minor => "minor",
        Severity::Major => "major",
    };
    let mut out = format!(
        "Severity: {}\nConflicting days: {}\nOverlap: {} min\n",
        severity, digest.total_conflicting_days, digest.total_overlap_minutes
    );
    if !digest.is_fully_checked() {
        out.push_str(&format!(
            "Warning: {} employment(s) could not be checked\n",
            digest.skipped_employments
        ));
    }
    out
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
            println!("{}", content.trim_end());
        }
    }
    Ok(())
}
