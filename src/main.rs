//! Health tracking calculator CLI
//!
//! Computes BMI, ideal weight, BMR, daily calorie needs and weight
//! advice for one health profile and prints a report.

use tracing_subscriber::EnvFilter;

mod build_info;
mod cli;
mod metrics;
mod models;
mod report;
mod units;

use cli::{Args, USAGE};
use report::ProfileReport;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("healthtrack=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    build_info::print_startup_banner();
    tracing::info!(
        height_cm = args.input.height_cm,
        weight_kg = args.input.weight_kg,
        age = args.input.age,
        gender = args.input.gender.as_str(),
        activity = args.activity_level.as_str(),
        units = args.units.as_str(),
        "building profile report"
    );

    let report = ProfileReport::build(args.input, args.activity_level);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
