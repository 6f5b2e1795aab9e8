//! Console front-ends shared by the `dashboard` and `explore` binaries.
//!
//! These are the interaction layer only: argument parsing, pausing, and
//! printing. All analysis goes through [`Analyzer`].

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::AnalysisProfile;
use crate::constants::caps::DEFAULT_ROW_CAP;
use crate::pipeline::Analyzer;
use crate::report;
use crate::source::CsvSource;

/// CLI for the one-shot dashboard-style summary.
#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    disable_help_subcommand = true,
    about = "Summarize a reviews CSV in one pass",
    long_about = "Read a bounded number of rows from a reviews CSV and print rating, \
                  helpfulness, correlation, and sentiment summaries."
)]
pub struct DashboardCli {
    /// Path to the reviews CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
    #[arg(
        long = "row-cap",
        default_value_t = DEFAULT_ROW_CAP,
        help = "Maximum rows read from the file"
    )]
    pub row_cap: usize,
    #[arg(long, help = "Optional deterministic seed for the sampled stages")]
    pub seed: Option<u64>,
    #[arg(long, help = "Emit the report as JSON instead of tables")]
    pub json: bool,
}

/// CLI for the staged exploratory walk-through.
#[derive(Debug, Parser)]
#[command(
    name = "explore",
    disable_help_subcommand = true,
    about = "Step through the review analysis one part at a time",
    long_about = "Run the exploratory profile (timestamp parsing, whole-set scoring) and \
                  pause for Enter between parts."
)]
pub struct ExploreCli {
    /// Path to the reviews CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
    #[arg(
        long = "row-cap",
        default_value_t = DEFAULT_ROW_CAP,
        help = "Maximum rows read from the file"
    )]
    pub row_cap: usize,
    #[arg(long, help = "Optional deterministic seed for the sampled stages")]
    pub seed: Option<u64>,
    #[arg(long = "no-pause", help = "Do not wait for Enter between parts")]
    pub no_pause: bool,
}

/// Initialize stderr logging from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run the dashboard app: one pass, one report.
pub fn run_dashboard_app(cli: DashboardCli) -> Result<(), Box<dyn Error>> {
    let profile = AnalysisProfile {
        row_cap: cli.row_cap,
        seed: cli.seed,
        ..AnalysisProfile::dashboard()
    };
    let source = CsvSource::for_profile(&cli.input, &profile);
    let mut analyzer = Analyzer::new(profile);
    let (_, analysis) = analyzer.run(&source)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report::render_report(&analysis));
    }
    Ok(())
}

/// Run the exploratory app: same pipeline, printed part by part with pauses.
pub fn run_explore_app(cli: ExploreCli) -> Result<(), Box<dyn Error>> {
    let profile = AnalysisProfile {
        row_cap: cli.row_cap,
        seed: cli.seed,
        ..AnalysisProfile::exploratory()
    };
    let source = CsvSource::for_profile(&cli.input, &profile);
    let mut analyzer = Analyzer::new(profile);
    let (_, analysis) = analyzer.run(&source)?;

    println!("--- Part 1: Dataset ---");
    print!("{}", report::render_overview(&analysis.overview));
    pause(cli.no_pause)?;

    println!("--- Part 2: Star ratings ---");
    match &analysis.ratings {
        Some(ratings) => print!("{}", report::render_ratings(ratings)),
        None => println!("(no Score column, skipped)"),
    }
    pause(cli.no_pause)?;

    println!("--- Part 3: Helpfulness ---");
    match &analysis.helpfulness {
        Some(helpfulness) => print!("{}", report::render_helpfulness(helpfulness)),
        None => println!("(no helpfulness columns, skipped)"),
    }
    if let Some(correlation) = &analysis.correlation {
        print!("{}", report::render_correlation(correlation));
    }
    pause(cli.no_pause)?;

    println!("--- Part 4: Sentiment ---");
    match &analysis.sentiment {
        Some(sentiment) => print!("{}", report::render_sentiment(sentiment)),
        None => println!("(no Text column, skipped)"),
    }
    if let Some(mismatches) = &analysis.mismatches {
        print!("{}", report::render_mismatches(mismatches));
    }
    Ok(())
}

fn pause(skip: bool) -> io::Result<()> {
    if skip {
        return Ok(());
    }
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    println!();
    Ok(())
}
