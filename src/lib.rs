//! Health tracking calculator library
//!
//! Pure calculation core for a health-tracking application: BMI, BMI
//! categorization, ideal weight, basal metabolic rate, daily calorie
//! needs, and weight-advice lookup, plus the display-unit conversions
//! feeding them.

pub mod build_info;
pub mod cli;
pub mod metrics;
pub mod models;
pub mod report;
pub mod units;
