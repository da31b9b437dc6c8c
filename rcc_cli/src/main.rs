//! # rcc - Reinforced-Concrete Compliance CLI
//!
//! Evaluates member descriptions written as JSON:
//! - `rcc check beam.json` runs the staged IS 456 evaluation
//! - `rcc detail beam-detail.json` runs the SP 34 detailing checks
//! - `rcc tables` prints the exposure and bond-stress tables
//!
//! Exit status is 0 when compliant, 1 when not, and 2 on an error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rcc_core::compliance::evaluate;
use rcc_core::detailing::check_member_detailing;
use rcc_core::file_io::{load_compliance_request, load_detailing_request, load_settings, save_outcome};
use rcc_core::materials::ConcreteGrade;
use rcc_core::member::ExposureCondition;
use rcc_core::report::{compliance_report, detailing_report};
use rcc_core::settings::CheckSettings;
use rcc_core::tables::{bond_stress, exposure_requirements};
use rcc_core::CalcResult;

#[derive(Parser)]
#[command(
    name = "rcc",
    version,
    about = "Reinforced-concrete compliance checker",
    long_about = "Checks RC members against IS 456:2000 design rules and SP 34:1987 detailing rules."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the IS 456 compliance evaluation on a member request
    Check {
        /// Member request (JSON)
        request: PathBuf,

        /// Settings file (TOML)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Print the outcome as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Also save the outcome to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run the SP 34 detailing checks on a detailing request
    Detail {
        /// Detailing request (JSON)
        request: PathBuf,

        /// Print the results as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Print the exposure and bond-stress tables
    Tables,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn to_json<T: serde::Serialize>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| rcc_core::CalcError::serialization(e.to_string()))
}

fn run_check(request: &Path, settings: Option<&Path>, json: bool, save: Option<&Path>) -> CalcResult<bool> {
    let request = load_compliance_request(request)?;
    let settings = match settings {
        Some(path) => load_settings(path)?,
        None => CheckSettings::default(),
    };

    let outcome = evaluate(&request, &settings);

    if json {
        println!("{}", to_json(&outcome)?);
    } else {
        println!("{}", compliance_report(&outcome));
    }

    if let Some(path) = save {
        save_outcome(&outcome, path)?;
        info!(path = %path.display(), "outcome saved");
    }

    Ok(outcome.overall_compliance)
}

fn run_detail(request: &Path, json: bool) -> CalcResult<bool> {
    let request = load_detailing_request(request)?;
    let results = check_member_detailing(&request)?;

    if json {
        println!("{}", to_json(&results)?);
    } else {
        print!("{}", detailing_report(&results));
    }

    Ok(results.is_compliant())
}

fn print_tables() {
    println!("Exposure requirements (IS 456 Tables 3, 5, 16)");
    println!(
        "{:<14} {:>8} {:>10} {:>8} {:>10} {:>8}",
        "Exposure", "Cover", "Min grade", "Cement", "Max w/c", "SP 34"
    );
    for exposure in ExposureCondition::ALL {
        let req = exposure_requirements(exposure);
        println!(
            "{:<14} {:>6.0}mm {:>10} {:>8.0} {:>10.2} {:>6.0}mm",
            exposure.name(),
            req.nominal_cover,
            format!("M{:.0}", req.min_grade_reinforced),
            req.min_cement_content,
            req.max_water_cement_ratio,
            req.detailing_cover_addition + rcc_core::tables::DETAILING_BASE_COVER,
        );
    }

    println!();
    println!("Design bond stress, plain bars in tension (IS 456 Clause 26.2.1.1)");
    for grade in ConcreteGrade::ALL {
        println!("  M{:<4.0} {:.2} N/mm²", grade.fck(), bond_stress(grade.fck()));
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Check {
            request,
            settings,
            json,
            save,
        } => run_check(request, settings.as_deref(), *json, save.as_deref()),
        Command::Detail { request, json } => run_detail(request, *json),
        Command::Tables => {
            print_tables();
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            ExitCode::from(2)
        }
    }
}
