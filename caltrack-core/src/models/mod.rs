mod entry_id;
mod meal;
mod workout;

pub use entry_id::EntryId;
pub use meal::Meal;
pub use workout::Workout;

/// A named record that moves the daily calorie total.
///
/// Meals add to the total, workouts subtract from it. The collection logic in
/// the record store is written once against this trait.
pub trait CalorieEntry {
    fn id(&self) -> &EntryId;
    fn name(&self) -> &str;
    fn calories(&self) -> i64;
}

/// Sums the calories of a slice of entries, saturating at the `i64` bounds.
pub fn sum_calories<E: CalorieEntry>(entries: &[E]) -> i64 {
    entries
        .iter()
        .map(CalorieEntry::calories)
        .fold(0, i64::saturating_add)
}
