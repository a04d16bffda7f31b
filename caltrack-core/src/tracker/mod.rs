//! In-memory calorie tracker kept in sync with storage and a display.
//!
//! Every mutation computes the new total first (failing on `i64` overflow
//! before anything is written), writes through to the [`RecordStore`], then
//! updates the in-memory mirror and republishes the aggregates to the display.
//! The entry collection is written before the total.

mod display;
mod summary;

pub use display::TrackerDisplay;
pub use summary::{progress_percent, Summary};

use crate::models::{EntryId, Meal, Workout};
use crate::record_store::{
    RecordError, RecordStore, DEFAULT_CALORIE_LIMIT, DEFAULT_TOTAL_CALORIES,
};
use crate::storage::KeyValueStore;

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, RecordError>;

/// Calorie tracker state.
pub struct Tracker<S, D> {
    store: RecordStore<S>,
    display: D,
    calorie_limit: i64,
    total_calories: i64,
    meals: Vec<Meal>,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStore, D: TrackerDisplay> Tracker<S, D> {
    /// Loads the persisted records and publishes the initial aggregates.
    pub fn initialize(store: RecordStore<S>, display: D) -> TrackerResult<Self> {
        Self::with_default_limit(store, display, DEFAULT_CALORIE_LIMIT)
    }

    /// Like [`Tracker::initialize`], falling back to `default_limit` when no
    /// limit was ever stored.
    pub fn with_default_limit(
        store: RecordStore<S>,
        display: D,
        default_limit: i64,
    ) -> TrackerResult<Self> {
        let calorie_limit = store.get_calorie_limit(default_limit)?;
        let total_calories = store.get_total_calories(DEFAULT_TOTAL_CALORIES)?;
        let meals = store.get_meals()?;
        let workouts = store.get_workouts()?;

        tracing::debug!(
            calorie_limit,
            total_calories,
            meals = meals.len(),
            workouts = workouts.len(),
            "Loaded tracker state"
        );

        let mut tracker = Self {
            store,
            display,
            calorie_limit,
            total_calories,
            meals,
            workouts,
        };
        tracker.display.set_limit(tracker.calorie_limit);
        tracker.render();
        Ok(tracker)
    }

    pub fn add_meal(&mut self, meal: Meal) -> TrackerResult<()> {
        let total = add_calories(self.total_calories, meal.calories)?;
        self.store.save_meal(&meal)?;
        self.store.set_total_calories(total)?;

        tracing::debug!(id = %meal.id, calories = meal.calories, "Added meal");
        self.total_calories = total;
        self.display.append_meal_row(&meal);
        self.meals.push(meal);
        self.render();
        Ok(())
    }

    pub fn add_workout(&mut self, workout: Workout) -> TrackerResult<()> {
        let total = subtract_calories(self.total_calories, workout.calories)?;
        self.store.save_workout(&workout)?;
        self.store.set_total_calories(total)?;

        tracing::debug!(id = %workout.id, calories = workout.calories, "Added workout");
        self.total_calories = total;
        self.display.append_workout_row(&workout);
        self.workouts.push(workout);
        self.render();
        Ok(())
    }

    /// Removes the meal with `id`, returning it. Unknown ids are a no-op.
    pub fn remove_meal(&mut self, id: &EntryId) -> TrackerResult<Option<Meal>> {
        let Some(index) = self.meals.iter().position(|m| &m.id == id) else {
            return Ok(None);
        };

        let total = subtract_calories(self.total_calories, self.meals[index].calories)?;
        self.store.remove_meal(id)?;
        self.store.set_total_calories(total)?;

        tracing::debug!(%id, "Removed meal");
        self.total_calories = total;
        let meal = self.meals.remove(index);
        self.render();
        Ok(Some(meal))
    }

    /// Removes the workout with `id`, returning it. Unknown ids are a no-op.
    pub fn remove_workout(&mut self, id: &EntryId) -> TrackerResult<Option<Workout>> {
        let Some(index) = self.workouts.iter().position(|w| &w.id == id) else {
            return Ok(None);
        };

        let total = add_calories(self.total_calories, self.workouts[index].calories)?;
        self.store.remove_workout(id)?;
        self.store.set_total_calories(total)?;

        tracing::debug!(%id, "Removed workout");
        self.total_calories = total;
        let workout = self.workouts.remove(index);
        self.render();
        Ok(Some(workout))
    }

    /// Clears total, meals and workouts. The calorie limit is kept.
    pub fn reset(&mut self) -> TrackerResult<()> {
        self.store.clear_all()?;

        self.total_calories = DEFAULT_TOTAL_CALORIES;
        self.meals.clear();
        self.workouts.clear();
        self.render();
        Ok(())
    }

    pub fn set_limit(&mut self, calorie_limit: i64) -> TrackerResult<()> {
        self.store.set_calorie_limit(calorie_limit)?;

        self.calorie_limit = calorie_limit;
        self.display.set_limit(calorie_limit);
        self.render();
        Ok(())
    }

    /// Sends a row notification for every loaded meal and workout.
    pub fn load_items(&mut self) {
        for meal in &self.meals {
            self.display.append_meal_row(meal);
        }
        for workout in &self.workouts {
            self.display.append_workout_row(workout);
        }
    }

    pub fn calorie_limit(&self) -> i64 {
        self.calorie_limit
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(
            self.calorie_limit,
            self.total_calories,
            &self.meals,
            &self.workouts,
        )
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (RecordStore<S>, D) {
        (self.store, self.display)
    }

    fn render(&mut self) {
        let summary = self.summary();
        self.display.set_total(summary.total);
        self.display.set_consumed(summary.consumed);
        self.display.set_burned(summary.burned);
        self.display.set_remaining(summary.remaining, summary.is_over);
        self.display.set_progress(summary.progress);
    }
}

fn add_calories(total: i64, calories: i64) -> TrackerResult<i64> {
    total.checked_add(calories).ok_or(RecordError::Overflow {
        total,
        delta: calories,
    })
}

fn subtract_calories(total: i64, calories: i64) -> TrackerResult<i64> {
    total.checked_sub(calories).ok_or(RecordError::Overflow {
        total,
        delta: calories.saturating_neg(),
    })
}
