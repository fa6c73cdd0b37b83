//! Command-line argument handling
//!
//! Hand-rolled flag parsing for the healthtrack binary. Imperial input
//! (feet/inches, pounds) is normalized to canonical metric units here so
//! the calculators never see display units.

use thiserror::Error;

use crate::models::{ActivityLevel, Gender, HealthInput};
use crate::units::{self, UnitSystem};

/// Argument parsing error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown gender: {0} (expected male, female or other)")]
    InvalidGender(String),

    #[error("Unknown activity level: {0} (expected sedentary, light, moderate, active or very_active)")]
    InvalidActivity(String),

    #[error("Unknown unit system: {0} (expected metric or imperial)")]
    InvalidUnits(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing required argument: {0}")]
    MissingRequired(&'static str),
}

/// Parsed command-line arguments
#[derive(Debug, Clone)]
pub struct Args {
    pub input: HealthInput,
    pub activity_level: ActivityLevel,
    pub units: UnitSystem,
    pub json: bool,
    pub help: bool,
}

/// Usage text printed for --help
pub const USAGE: &str = "\
Usage: healthtrack [OPTIONS]

Options:
  --height <VALUE>    Height in centimeters (metric) or decimal feet
                      (imperial, when --feet is not given)
  --feet <FT>         Height, feet part (imperial)
  --inches <IN>       Height, inches part (imperial, default 0)
  --weight <VALUE>    Weight in kilograms (metric) or pounds (imperial)
  --age <YEARS>       Age in whole years
  --gender <VALUE>    male, female or other
  --activity <LEVEL>  sedentary, light, moderate, active, very_active
                      (default: moderate)
  --units <SYSTEM>    metric or imperial (default: metric)
  --json              Print the report as JSON instead of text
  --help              Show this help
";

impl Args {
    /// Parse arguments (excluding argv[0])
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut height: Option<f64> = None;
        let mut feet: Option<f64> = None;
        let mut inches: Option<f64> = None;
        let mut weight: Option<f64> = None;
        let mut age: Option<u32> = None;
        let mut gender: Option<Gender> = None;
        let mut activity_level = ActivityLevel::default();
        let mut units = UnitSystem::default();
        let mut json = false;
        let mut help = false;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--height" => height = Some(parse_f64(&arg, iter.next())?),
                "--feet" => feet = Some(parse_f64(&arg, iter.next())?),
                "--inches" => inches = Some(parse_f64(&arg, iter.next())?),
                "--weight" => weight = Some(parse_f64(&arg, iter.next())?),
                "--age" => age = Some(parse_u32(&arg, iter.next())?),
                "--gender" => {
                    let value = take_value(&arg, iter.next())?;
                    gender = Some(
                        Gender::from_str(&value).ok_or(CliError::InvalidGender(value))?,
                    );
                }
                "--activity" => {
                    let value = take_value(&arg, iter.next())?;
                    activity_level = ActivityLevel::from_str(&value)
                        .ok_or(CliError::InvalidActivity(value))?;
                }
                "--units" => {
                    let value = take_value(&arg, iter.next())?;
                    units = UnitSystem::from_str(&value).ok_or(CliError::InvalidUnits(value))?;
                }
                "--json" => json = true,
                "--help" | "-h" => help = true,
                other => return Err(CliError::UnknownArgument(other.to_string())),
            }
        }

        if help {
            // Input fields are unused when only printing usage
            return Ok(Self {
                input: HealthInput {
                    height_cm: 0.0,
                    weight_kg: 0.0,
                    age: 0,
                    gender: Gender::Other,
                },
                activity_level,
                units,
                json,
                help,
            });
        }

        let gender = gender.ok_or(CliError::MissingRequired("--gender"))?;
        let age = age.ok_or(CliError::MissingRequired("--age"))?;

        let (height_cm, weight_kg) = match units {
            UnitSystem::Metric => (
                height.ok_or(CliError::MissingRequired("--height"))?,
                weight.ok_or(CliError::MissingRequired("--weight"))?,
            ),
            UnitSystem::Imperial => {
                // Height comes in as --feet/--inches, or --height in
                // decimal feet when the pair is not given
                let height_cm = match (feet, height) {
                    (Some(feet), _) => units::feet_inches_to_cm(feet, inches.unwrap_or(0.0)),
                    (None, Some(decimal_feet)) => units::feet_inches_to_cm(decimal_feet, 0.0),
                    (None, None) => return Err(CliError::MissingRequired("--feet or --height")),
                };
                let pounds = weight.ok_or(CliError::MissingRequired("--weight"))?;
                (height_cm, units::lb_to_kg(pounds))
            }
        };

        Ok(Self {
            input: HealthInput {
                height_cm,
                weight_kg,
                age,
                gender,
            },
            activity_level,
            units,
            json,
            help,
        })
    }
}

fn take_value(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn parse_f64(flag: &str, value: Option<String>) -> Result<f64, CliError> {
    let value = take_value(flag, value)?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

fn parse_u32(flag: &str, value: Option<String>) -> Result<u32, CliError> {
    let value = take_value(flag, value)?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}
