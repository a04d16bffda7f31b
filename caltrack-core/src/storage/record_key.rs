//! The logical records kept in the key-value store.

/// Keys of the four persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    CalorieLimit,
    TotalCalories,
    Meals,
    Workouts,
}

impl RecordKey {
    pub const ALL: [RecordKey; 4] = [
        RecordKey::CalorieLimit,
        RecordKey::TotalCalories,
        RecordKey::Meals,
        RecordKey::Workouts,
    ];

    /// Returns the storage key for this record.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::CalorieLimit => "calorieLimit",
            RecordKey::TotalCalories => "totalCalories",
            RecordKey::Meals => "meals",
            RecordKey::Workouts => "workouts",
        }
    }

    /// Whether `clear_all` removes this record. The limit outlives a reset.
    pub fn cleared_on_reset(&self) -> bool {
        !matches!(self, RecordKey::CalorieLimit)
    }
}
