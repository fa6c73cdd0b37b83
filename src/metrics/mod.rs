//! Health metric calculations
//!
//! Pure functions deriving BMI, ideal weight, BMR, daily calorie needs
//! and weight advice from profile inputs. No I/O, no state, no panics:
//! out-of-range inputs yield `None` for the affected metric only.

mod calculator;
mod calories;
mod recommendations;

pub use calculator::{bmi, bmr, evaluate, ideal_weight};
pub use calories::daily_calories;
pub use recommendations::recommendations_for;
