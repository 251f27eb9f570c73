mod logging;
mod report;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use compound_core::config::data_dir;
use compound_core::{
    parse_parameters, CalculatorService, InMemoryHistoryStore, InvestmentParameters, Outcome, ProjectionError,
    Settings,
};

#[derive(Parser)]
#[command(name = "compound")]
#[command(about = "Compound interest calculator with monthly contributions", long_about = None)]
struct Cli {
    /// Log level written to the log file (RUST_LOG overrides)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to a settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run one projection (usage: calc p:1000 c:200 r:10 y:5)
    Calc {
        /// Parameters as key:value (principal, contribution, rate in %, years); prefixes allowed
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,

        /// Initial amount
        #[arg(long, allow_negative_numbers = true)]
        principal: Option<f64>,

        /// Monthly contribution
        #[arg(long, allow_negative_numbers = true)]
        contribution: Option<f64>,

        /// Annual interest rate in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Period in years
        #[arg(long)]
        years: Option<u32>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Only show year-end rows
        #[arg(long)]
        yearly: bool,

        /// Skip the growth chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

struct CalcOptions {
    json: bool,
    yearly: bool,
    no_chart: bool,
}

fn collect_parameters(
    base: InvestmentParameters,
    args: &[String],
    principal: Option<f64>,
    contribution: Option<f64>,
    rate: Option<f64>,
    years: Option<u32>,
) -> Result<InvestmentParameters, ProjectionError> {
    let mut params = parse_parameters(args, base)?;

    // Explicit flags win over key:value tokens
    if let Some(p) = principal {
        params.initial_principal = p;
    }
    if let Some(c) = contribution {
        params.monthly_contribution = c;
    }
    if let Some(r) = rate {
        params.annual_rate = r / 100.0;
    }
    if let Some(y) = years {
        params.years = y;
    }
    Ok(params)
}

/// Run one projection and print it. Returns `false` when the calculation was
/// rejected; the reason has already been written out by then.
fn run_calc(settings: &Settings, params: Result<InvestmentParameters, ProjectionError>, opts: CalcOptions) -> Result<bool> {
    let mut service = CalculatorService::new(InMemoryHistoryStore::new(settings.history_capacity));

    let outcome = match params {
        Ok(p) => {
            let outcome = service.handle(p);
            if let (Outcome::Success(result), false) = (&outcome, opts.json) {
                report::print_report(&p, result, opts.yearly, !opts.no_chart);
            }
            outcome
        }
        Err(e) => Outcome::from(Err(e)),
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        Outcome::Success(_) => Ok(true),
        Outcome::Failure { message, .. } => {
            if !opts.json {
                eprintln!("Error calculating: {}", message);
            }
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    if let Err(e) = logging::init_logging(&data_dir()?, level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Some(Commands::Calc {
            args,
            principal,
            contribution,
            rate,
            years,
            json,
            yearly,
            no_chart,
        }) => {
            let params = collect_parameters(settings.default_parameters(), &args, principal, contribution, rate, years);
            if !run_calc(&settings, params, CalcOptions { json, yearly, no_chart })? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(settings)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
