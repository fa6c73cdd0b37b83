//! Daily calorie needs estimation
//!
//! Scales BMR into total daily energy expenditure using the fixed
//! activity-level multiplier table.

use crate::models::ActivityLevel;

/// Estimated daily calorie needs: round(bmr * multiplier)
///
/// Returns None when BMR is unavailable. The multiplier table lives on
/// [`ActivityLevel`]; the enum is closed, so there is no unknown-level
/// case to handle at runtime.
pub fn daily_calories(bmr: Option<i64>, level: ActivityLevel) -> Option<i64> {
    bmr.map(|value| (value as f64 * level.multiplier()).round() as i64)
}
