//! The display collaborator the tracker publishes to.

use crate::models::{Meal, Workout};

/// Receives the tracker's aggregates and new rows.
///
/// The tracker calls the setters after every mutation; implementations decide
/// how (or whether) to render them.
pub trait TrackerDisplay {
    fn set_limit(&mut self, limit: i64);
    fn set_total(&mut self, total: i64);
    fn set_consumed(&mut self, consumed: i64);
    fn set_burned(&mut self, burned: i64);
    /// `is_over` is true once nothing remains (`remaining <= 0`).
    fn set_remaining(&mut self, remaining: i64, is_over: bool);
    /// Progress towards the limit in percent, capped at 100.
    fn set_progress(&mut self, percent: f64);
    fn append_meal_row(&mut self, meal: &Meal);
    fn append_workout_row(&mut self, workout: &Workout);
}

/// Discards everything; for callers that only need the tracker's state.
impl TrackerDisplay for () {
    fn set_limit(&mut self, _limit: i64) {}
    fn set_total(&mut self, _total: i64) {}
    fn set_consumed(&mut self, _consumed: i64) {}
    fn set_burned(&mut self, _burned: i64) {}
    fn set_remaining(&mut self, _remaining: i64, _is_over: bool) {}
    fn set_progress(&mut self, _percent: f64) {}
    fn append_meal_row(&mut self, _meal: &Meal) {}
    fn append_workout_row(&mut self, _workout: &Workout) {}
}

impl<D: TrackerDisplay + ?Sized> TrackerDisplay for &mut D {
    fn set_limit(&mut self, limit: i64) {
        (**self).set_limit(limit)
    }

    fn set_total(&mut self, total: i64) {
        (**self).set_total(total)
    }

    fn set_consumed(&mut self, consumed: i64) {
        (**self).set_consumed(consumed)
    }

    fn set_burned(&mut self, burned: i64) {
        (**self).set_burned(burned)
    }

    fn set_remaining(&mut self, remaining: i64, is_over: bool) {
        (**self).set_remaining(remaining, is_over)
    }

    fn set_progress(&mut self, percent: f64) {
        (**self).set_progress(percent)
    }

    fn append_meal_row(&mut self, meal: &Meal) {
        (**self).append_meal_row(meal)
    }

    fn append_workout_row(&mut self, workout: &Workout) {
        (**self).append_workout_row(workout)
    }
}
