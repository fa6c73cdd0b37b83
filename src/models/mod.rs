//! Data models
//!
//! Rust structs and enums for health profile inputs and derived metrics.

mod metrics;
mod profile;

pub use metrics::{BmiCategory, CategoryColor, HealthMetrics, RecommendationSet};
pub use profile::{ActivityLevel, Gender, HealthInput};
