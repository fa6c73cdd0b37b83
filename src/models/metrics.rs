//! Derived health metrics
//!
//! Output types for the calculation module. Every field is optional;
//! `None` means the inputs it depends on were out of range.

use serde::{Deserialize, Serialize};

/// Display color tag for a BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Orange,
    Red,
}

impl CategoryColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryColor::Blue => "blue",
            CategoryColor::Green => "green",
            CategoryColor::Orange => "orange",
            CategoryColor::Red => "red",
        }
    }
}

/// WHO-style BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Categorize a raw (unrounded) BMI value
    ///
    /// Breakpoints 18.5 / 25 / 30, evaluated in order, first match wins.
    /// The bands partition the whole axis, so every finite BMI lands in
    /// exactly one.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn color(&self) -> CategoryColor {
        match self {
            BmiCategory::Underweight => CategoryColor::Blue,
            BmiCategory::Normal => CategoryColor::Green,
            BmiCategory::Overweight => CategoryColor::Orange,
            BmiCategory::Obese => CategoryColor::Red,
        }
    }
}

/// All metrics derived from one profile input
///
/// Fields are independent: a valid BMI can sit next to a `None` BMR when
/// only the age was missing. `bmi` and `ideal_weight` are rounded to one
/// decimal, `bmr` to the nearest whole calorie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub ideal_weight: Option<f64>,
    pub bmr: Option<i64>,
}

impl HealthMetrics {
    /// BMI formatted for display ("22.9"), or None when unavailable
    pub fn bmi_display(&self) -> Option<String> {
        self.bmi.map(|v| format!("{:.1}", v))
    }

    /// Ideal weight formatted for display ("68.8"), or None when unavailable
    pub fn ideal_weight_display(&self) -> Option<String> {
        self.ideal_weight.map(|v| format!("{:.1}", v))
    }
}

/// Advice bundle looked up from a BMI category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub category: BmiCategory,
    pub recommendations: [&'static str; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_breakpoints() {
        assert_eq!(BmiCategory::from_bmi(10.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(45.0), BmiCategory::Obese);
    }

    #[test]
    fn test_category_labels_and_colors() {
        assert_eq!(BmiCategory::Underweight.label(), "Underweight");
        assert_eq!(BmiCategory::Underweight.color(), CategoryColor::Blue);
        assert_eq!(BmiCategory::Normal.label(), "Normal weight");
        assert_eq!(BmiCategory::Normal.color(), CategoryColor::Green);
        assert_eq!(BmiCategory::Overweight.color(), CategoryColor::Orange);
        assert_eq!(BmiCategory::Obese.color(), CategoryColor::Red);
    }

    #[test]
    fn test_bmi_display_one_decimal() {
        let metrics = HealthMetrics {
            bmi: Some(22.857),
            bmi_category: Some(BmiCategory::Normal),
            ideal_weight: Some(68.75),
            bmr: Some(1649),
        };
        assert_eq!(metrics.bmi_display(), Some("22.9".to_string()));
        assert_eq!(metrics.ideal_weight_display(), Some("68.8".to_string()));
    }
}
