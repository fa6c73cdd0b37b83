//! Display-unit conversion
//!
//! The calculators only ever see canonical metric units (centimeters,
//! kilograms). These helpers convert user-facing imperial values on the
//! way in and back out for display.

use serde::{Deserialize, Serialize};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// Which unit system the user entered values in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

/// Convert pounds to kilograms
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Convert kilograms to pounds
pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert inches to centimeters
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Convert centimeters to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Convert a feet/inches pair to centimeters
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    in_to_cm(feet * IN_PER_FT + inches)
}

/// Convert centimeters to a whole-feet/remaining-inches pair
pub fn cm_to_feet_inches(cm: f64) -> (f64, f64) {
    let total_inches = cm_to_in(cm);
    let feet = (total_inches / IN_PER_FT).floor();
    (feet, total_inches - feet * IN_PER_FT)
}
