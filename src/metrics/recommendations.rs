//! Weight advice lookup
//!
//! Maps a BMI value to its category and a fixed set of three advisory
//! strings. Static table, no randomness.

use crate::models::{BmiCategory, RecommendationSet};

/// Advice for a BMI value, or None when BMI is unavailable
///
/// Category boundaries are the same 18.5 / 25 / 30 breakpoints used by
/// [`BmiCategory::from_bmi`]; pass the raw BMI so boundary values land
/// in the same band the calculator put them in.
pub fn recommendations_for(bmi: Option<f64>) -> Option<RecommendationSet> {
    let category = BmiCategory::from_bmi(bmi?);
    Some(RecommendationSet {
        category,
        recommendations: advice(category),
    })
}

fn advice(category: BmiCategory) -> [&'static str; 3] {
    match category {
        BmiCategory::Underweight => [
            "Increase your daily calorie intake with nutrient-dense foods",
            "Add strength training to build muscle mass",
            "Consult a dietitian about a healthy weight-gain plan",
        ],
        BmiCategory::Normal => [
            "Maintain your current balanced diet",
            "Keep up regular physical activity, at least 150 minutes a week",
            "Schedule routine checkups to stay on track",
        ],
        BmiCategory::Overweight => [
            "Reduce portion sizes and limit processed foods",
            "Aim for 30 minutes of moderate exercise most days",
            "Track your meals to spot hidden calories",
        ],
        BmiCategory::Obese => [
            "Consult a doctor about a supervised weight-loss program",
            "Follow a structured, calorie-controlled diet",
            "Build up daily activity gradually, starting with walking",
        ],
    }
}
