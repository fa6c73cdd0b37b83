//! Core health metric formulas
//!
//! BMI, Lorentz ideal weight, and Mifflin-St Jeor BMR. Inputs are always
//! canonical metric (centimeters, kilograms, years); display-unit
//! conversion happens before these functions are called.

use crate::models::{BmiCategory, Gender, HealthInput, HealthMetrics};

/// Round to one decimal place
fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A measurement is usable only when it is a finite, positive number.
/// NaN and infinity would otherwise slip through a plain `<= 0.0` guard
/// and surface in the output.
fn valid_measure(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Body Mass Index: weight / height(m)^2, rounded to one decimal
///
/// Returns None unless both height and weight are finite and positive.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    raw_bmi(height_cm, weight_kg).map(round_1dp)
}

/// Unrounded BMI, used for categorization so a value just under a
/// breakpoint does not round across it
fn raw_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !valid_measure(height_cm) || !valid_measure(weight_kg) {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Lorentz ideal weight in kilograms, rounded to one decimal
///
/// The gender picks the divisor: 4 for male, 2 for female, 3 for other.
/// The "other" divisor is the original application's interpolation
/// between the male and female constants, kept for compatibility.
/// Returns None when height is not a finite positive number.
pub fn ideal_weight(height_cm: f64, gender: Gender) -> Option<f64> {
    if !valid_measure(height_cm) {
        return None;
    }
    let divisor = match gender {
        Gender::Male => 4.0,
        Gender::Female => 2.0,
        Gender::Other => 3.0,
    };
    Some(round_1dp(height_cm - 100.0 - (height_cm - 150.0) / divisor))
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day, rounded to the
/// nearest whole calorie
///
/// Gender selects the additive constant: +5 male, -161 female, -78 other
/// (again the original application's midpoint). Returns None unless
/// height and weight are finite and positive and age is nonzero.
pub fn bmr(height_cm: f64, weight_kg: f64, age: u32, gender: Gender) -> Option<i64> {
    if !valid_measure(height_cm) || !valid_measure(weight_kg) || age == 0 {
        return None;
    }
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
        Gender::Other => -78.0,
    };
    let value = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + offset;
    Some(value.round() as i64)
}

/// Compute every metric for one profile input
///
/// The four outputs are independent: each goes unavailable only when its
/// own inputs are out of range.
pub fn evaluate(input: &HealthInput) -> HealthMetrics {
    let raw = raw_bmi(input.height_cm, input.weight_kg);
    HealthMetrics {
        bmi: raw.map(round_1dp),
        bmi_category: raw.map(BmiCategory::from_bmi),
        ideal_weight: ideal_weight(input.height_cm, input.gender),
        bmr: bmr(input.height_cm, input.weight_kg, input.age, input.gender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryColor;

    fn input(height_cm: f64, weight_kg: f64, age: u32, gender: Gender) -> HealthInput {
        HealthInput {
            height_cm,
            weight_kg,
            age,
            gender,
        }
    }

    #[test]
    fn test_bmi_normal_weight_male() {
        let metrics = evaluate(&input(175.0, 70.0, 30, Gender::Male));
        assert_eq!(metrics.bmi, Some(22.9));
        assert_eq!(metrics.bmi_category, Some(BmiCategory::Normal));
        assert_eq!(metrics.bmi_category.unwrap().color(), CategoryColor::Green);
    }

    #[test]
    fn test_bmi_underweight_female() {
        let metrics = evaluate(&input(175.0, 50.0, 30, Gender::Female));
        assert_eq!(metrics.bmi, Some(16.3));
        assert_eq!(metrics.bmi_category, Some(BmiCategory::Underweight));
        assert_eq!(metrics.bmi_category.unwrap().color(), CategoryColor::Blue);
    }

    #[test]
    fn test_bmi_overweight() {
        let metrics = evaluate(&input(170.0, 80.0, 30, Gender::Male));
        assert_eq!(metrics.bmi, Some(27.7));
        assert_eq!(metrics.bmi_category, Some(BmiCategory::Overweight));
    }

    #[test]
    fn test_bmi_obese() {
        let metrics = evaluate(&input(160.0, 90.0, 30, Gender::Female));
        assert_eq!(metrics.bmi, Some(35.2));
        assert_eq!(metrics.bmi_category, Some(BmiCategory::Obese));
        assert_eq!(metrics.bmi_category.unwrap().color(), CategoryColor::Red);
    }

    #[test]
    fn test_bmi_unavailable_on_zero_height() {
        let metrics = evaluate(&input(0.0, 70.0, 30, Gender::Male));
        assert_eq!(metrics.bmi, None);
        assert_eq!(metrics.bmi_category, None);
        assert_eq!(metrics.ideal_weight, None);
        assert_eq!(metrics.bmr, None);
    }

    #[test]
    fn test_bmi_unavailable_on_zero_weight() {
        assert_eq!(bmi(175.0, 0.0), None);
        assert_eq!(bmi(175.0, -5.0), None);
    }

    #[test]
    fn test_non_finite_inputs_are_unavailable() {
        // NaN and infinity must null the metric, not flow through the
        // arithmetic into the output
        assert_eq!(bmi(f64::NAN, 70.0), None);
        assert_eq!(bmi(175.0, f64::NAN), None);
        assert_eq!(bmi(175.0, f64::INFINITY), None);
        assert_eq!(bmi(f64::NEG_INFINITY, 70.0), None);

        assert_eq!(ideal_weight(f64::NAN, Gender::Male), None);
        assert_eq!(ideal_weight(f64::INFINITY, Gender::Female), None);

        assert_eq!(bmr(f64::NAN, 70.0, 30, Gender::Male), None);
        assert_eq!(bmr(175.0, f64::INFINITY, 30, Gender::Male), None);

        let metrics = evaluate(&input(f64::NAN, 70.0, 30, Gender::Male));
        assert_eq!(metrics.bmi, None);
        assert_eq!(metrics.bmi_category, None);
        assert_eq!(metrics.ideal_weight, None);
        assert_eq!(metrics.bmr, None);
    }

    #[test]
    fn test_category_uses_raw_bmi_near_breakpoint() {
        // 74.7kg at 173cm is BMI 24.957: rounds to 25.0 for display but
        // must still categorize as normal weight
        let metrics = evaluate(&input(173.0, 74.7, 30, Gender::Male));
        assert_eq!(metrics.bmi, Some(25.0));
        assert_eq!(metrics.bmi_category, Some(BmiCategory::Normal));
    }

    #[test]
    fn test_ideal_weight_by_gender() {
        assert_eq!(ideal_weight(175.0, Gender::Male), Some(68.8));
        assert_eq!(ideal_weight(175.0, Gender::Female), Some(62.5));
        // (175 - 150) / 3 = 8.333, 75 - 8.333 = 66.667
        assert_eq!(ideal_weight(175.0, Gender::Other), Some(66.7));
    }

    #[test]
    fn test_ideal_weight_unavailable_on_invalid_height() {
        assert_eq!(ideal_weight(0.0, Gender::Male), None);
        assert_eq!(ideal_weight(-170.0, Gender::Female), None);
    }

    #[test]
    fn test_bmr_by_gender() {
        // 10*70 + 6.25*175 - 5*30 = 1643.75
        assert_eq!(bmr(175.0, 70.0, 30, Gender::Male), Some(1649));
        assert_eq!(bmr(175.0, 70.0, 30, Gender::Female), Some(1483));
        assert_eq!(bmr(175.0, 70.0, 30, Gender::Other), Some(1566));
    }

    #[test]
    fn test_bmr_unavailable_on_zero_age() {
        assert_eq!(bmr(175.0, 70.0, 0, Gender::Male), None);
    }

    #[test]
    fn test_metrics_are_independent() {
        // Zero age kills BMR only; BMI and ideal weight still compute
        let metrics = evaluate(&input(175.0, 70.0, 0, Gender::Male));
        assert_eq!(metrics.bmi, Some(22.9));
        assert_eq!(metrics.ideal_weight, Some(68.8));
        assert_eq!(metrics.bmr, None);

        // Zero weight kills BMI and BMR; ideal weight only needs height
        let metrics = evaluate(&input(175.0, 0.0, 30, Gender::Male));
        assert_eq!(metrics.bmi, None);
        assert_eq!(metrics.ideal_weight, Some(68.8));
        assert_eq!(metrics.bmr, None);
    }
}
