//! Profile report assembly
//!
//! Combines the calculator outputs for one profile into a single
//! structure the presentation layer can render as text or JSON.
//! Unavailable metrics render as "n/a" rather than being dropped.

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::metrics::{daily_calories, evaluate, recommendations_for};
use crate::models::{ActivityLevel, HealthInput, HealthMetrics, RecommendationSet};

/// Everything derived from one profile input
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub input: HealthInput,
    pub activity_level: ActivityLevel,
    pub metrics: HealthMetrics,
    pub recommendations: Option<RecommendationSet>,
    pub daily_calories: Option<i64>,
    pub generated_at: String,
    pub generator: BuildInfo,
}

impl ProfileReport {
    /// Build a report for one profile input
    pub fn build(input: HealthInput, activity_level: ActivityLevel) -> Self {
        let metrics = evaluate(&input);
        tracing::debug!(
            bmi = ?metrics.bmi,
            bmr = ?metrics.bmr,
            "computed metrics for profile"
        );
        let recommendations = recommendations_for(metrics.bmi);
        let daily_calories = daily_calories(metrics.bmr, activity_level);

        Self {
            input,
            activity_level,
            metrics,
            recommendations,
            daily_calories,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            generator: BuildInfo::current(),
        }
    }

    /// Render the report as plain text for terminal output
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Health Profile Report\n");
        out.push_str("=====================\n");
        out.push_str(&format!(
            "Input: {:.1} cm, {:.1} kg, {} years, {}\n\n",
            self.input.height_cm,
            self.input.weight_kg,
            self.input.age,
            self.input.gender.as_str()
        ));

        match (self.metrics.bmi_display(), self.metrics.bmi_category) {
            (Some(bmi), Some(category)) => {
                out.push_str(&format!(
                    "BMI:            {} ({}, {})\n",
                    bmi,
                    category.label(),
                    category.color().as_str()
                ));
            }
            _ => out.push_str("BMI:            n/a\n"),
        }

        match self.metrics.ideal_weight_display() {
            Some(weight) => out.push_str(&format!("Ideal weight:   {} kg\n", weight)),
            None => out.push_str("Ideal weight:   n/a\n"),
        }

        match self.metrics.bmr {
            Some(bmr) => out.push_str(&format!("BMR:            {} kcal/day\n", bmr)),
            None => out.push_str("BMR:            n/a\n"),
        }

        match self.daily_calories {
            Some(calories) => out.push_str(&format!(
                "Daily calories: {} kcal ({})\n",
                calories,
                self.activity_level.display_name()
            )),
            None => out.push_str("Daily calories: n/a\n"),
        }

        if let Some(set) = &self.recommendations {
            out.push_str("\nRecommendations:\n");
            for item in set.recommendations {
                out.push_str(&format!("  - {}\n", item));
            }
        }

        out.push_str(&format!("\nGenerated: {}\n", self.generated_at));
        out
    }
}
