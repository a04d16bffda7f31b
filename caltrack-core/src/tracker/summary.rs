use serde::Serialize;

use crate::models::{sum_calories, Meal, Workout};

/// Aggregates derived from the tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub limit: i64,
    pub total: i64,
    pub consumed: i64,
    pub burned: i64,
    pub remaining: i64,
    pub progress: f64,
    pub is_over: bool,
}

impl Summary {
    pub fn compute(limit: i64, total: i64, meals: &[Meal], workouts: &[Workout]) -> Self {
        let remaining = limit.saturating_sub(total);
        Self {
            limit,
            total,
            consumed: sum_calories(meals),
            burned: sum_calories(workouts),
            remaining,
            progress: progress_percent(total, limit),
            is_over: remaining <= 0,
        }
    }
}

/// `total / limit * 100`, capped at 100.
///
/// A non-positive limit is reached by any positive total.
pub fn progress_percent(total: i64, limit: i64) -> f64 {
    if limit <= 0 {
        return if total > 0 { 100.0 } else { 0.0 };
    }
    (total as f64 / limit as f64 * 100.0).min(100.0)
}
