//! Typed access to the persisted calorie records.
//!
//! Scalars are stored as stringified integers and collections as JSON arrays.
//! Collection updates are read-modify-write: the whole sequence is loaded,
//! changed and written back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{CalorieEntry, EntryId, Meal, Workout};
use crate::storage::{KeyValueStore, RecordKey, StorageError};

/// Calorie limit used when none was ever stored.
pub const DEFAULT_CALORIE_LIMIT: i64 = 1950;

/// Total used when none was ever stored.
pub const DEFAULT_TOTAL_CALORIES: i64 = 0;

/// Errors that can occur reading or writing records.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to parse '{key}' record: {source}")]
    Deserialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize '{key}' record: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record '{key}' holds '{value}', expected an integer")]
    InvalidScalar { key: &'static str, value: String },

    #[error("Calorie total {total} cannot absorb a change of {delta} kcal")]
    Overflow { total: i64, delta: i64 },
}

/// Persistence adapter mapping calorie records onto a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Returns the underlying key-value store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    pub fn get_calorie_limit(&self, default: i64) -> Result<i64, RecordError> {
        self.read_scalar(RecordKey::CalorieLimit, default)
    }

    pub fn set_calorie_limit(&mut self, limit: i64) -> Result<(), RecordError> {
        self.write_scalar(RecordKey::CalorieLimit, limit)
    }

    pub fn get_total_calories(&self, default: i64) -> Result<i64, RecordError> {
        self.read_scalar(RecordKey::TotalCalories, default)
    }

    pub fn set_total_calories(&mut self, total: i64) -> Result<(), RecordError> {
        self.write_scalar(RecordKey::TotalCalories, total)
    }

    /// Same as [`RecordStore::set_total_calories`].
    pub fn update_total_calories(&mut self, total: i64) -> Result<(), RecordError> {
        self.set_total_calories(total)
    }

    pub fn get_meals(&self) -> Result<Vec<Meal>, RecordError> {
        self.read_list(RecordKey::Meals)
    }

    pub fn save_meal(&mut self, meal: &Meal) -> Result<(), RecordError> {
        self.append(RecordKey::Meals, meal)
    }

    /// Removes the meal with `id`. Returns whether an entry was removed.
    pub fn remove_meal(&mut self, id: &EntryId) -> Result<bool, RecordError> {
        self.remove_by_id::<Meal>(RecordKey::Meals, id)
    }

    pub fn get_workouts(&self) -> Result<Vec<Workout>, RecordError> {
        self.read_list(RecordKey::Workouts)
    }

    pub fn save_workout(&mut self, workout: &Workout) -> Result<(), RecordError> {
        self.append(RecordKey::Workouts, workout)
    }

    /// Removes the workout with `id`. Returns whether an entry was removed.
    pub fn remove_workout(&mut self, id: &EntryId) -> Result<bool, RecordError> {
        self.remove_by_id::<Workout>(RecordKey::Workouts, id)
    }

    /// Deletes the total, meals and workouts. The calorie limit is kept.
    pub fn clear_all(&mut self) -> Result<(), RecordError> {
        for key in RecordKey::ALL.into_iter().filter(RecordKey::cleared_on_reset) {
            self.backend.remove_item(key.as_str())?;
        }
        tracing::debug!("Cleared tracker records");
        Ok(())
    }

    fn read_scalar(&self, key: RecordKey, default: i64) -> Result<i64, RecordError> {
        match self.backend.get_item(key.as_str())? {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| RecordError::InvalidScalar {
                    key: key.as_str(),
                    value: raw,
                }),
        }
    }

    fn write_scalar(&mut self, key: RecordKey, value: i64) -> Result<(), RecordError> {
        self.backend.set_item(key.as_str(), &value.to_string())?;
        tracing::debug!(key = key.as_str(), value, "Wrote record");
        Ok(())
    }

    fn read_list<E: DeserializeOwned>(&self, key: RecordKey) -> Result<Vec<E>, RecordError> {
        match self.backend.get_item(key.as_str())? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| RecordError::Deserialize {
                key: key.as_str(),
                source: e,
            }),
        }
    }

    fn write_list<E: Serialize>(&mut self, key: RecordKey, entries: &[E]) -> Result<(), RecordError> {
        let json = serde_json::to_string(entries).map_err(|e| RecordError::Serialize {
            key: key.as_str(),
            source: e,
        })?;
        self.backend.set_item(key.as_str(), &json)?;
        tracing::debug!(key = key.as_str(), len = entries.len(), "Wrote record");
        Ok(())
    }

    fn append<E>(&mut self, key: RecordKey, entry: &E) -> Result<(), RecordError>
    where
        E: Serialize + DeserializeOwned + Clone,
    {
        let mut entries: Vec<E> = self.read_list(key)?;
        entries.push(entry.clone());
        self.write_list(key, &entries)
    }

    fn remove_by_id<E>(&mut self, key: RecordKey, id: &EntryId) -> Result<bool, RecordError>
    where
        E: CalorieEntry + Serialize + DeserializeOwned,
    {
        let mut entries: Vec<E> = self.read_list(key)?;
        let removed = match entries.iter().position(|e| e.id() == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        };
        self.write_list(key, &entries)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn test_store() -> RecordStore<MemoryStore> {
        RecordStore::new(MemoryStore::new())
    }

    #[test]
    fn test_scalar_defaults_when_absent() {
        let store = test_store();
        assert_eq!(
            store.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap(),
            1950
        );
        assert_eq!(store.get_calorie_limit(2500).unwrap(), 2500);
        assert_eq!(
            store.get_total_calories(DEFAULT_TOTAL_CALORIES).unwrap(),
            0
        );
    }

    #[test]
    fn test_set_calorie_limit_stores_string() {
        let mut store = test_store();
        store.set_calorie_limit(2200).unwrap();

        assert_eq!(store.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap(), 2200);
        assert_eq!(
            store.backend().get_item("calorieLimit").unwrap(),
            Some("2200".to_string())
        );
    }

    #[test]
    fn test_total_setters_are_synonyms() {
        let mut store = test_store();

        store.set_total_calories(300).unwrap();
        assert_eq!(store.get_total_calories(0).unwrap(), 300);

        store.update_total_calories(-100).unwrap();
        assert_eq!(store.get_total_calories(0).unwrap(), -100);
    }

    #[test]
    fn test_stored_zero_is_not_absent() {
        let mut store = test_store();
        store.set_calorie_limit(0).unwrap();
        assert_eq!(store.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap(), 0);
    }

    #[test]
    fn test_invalid_scalar_is_an_error() {
        let mut backend = MemoryStore::new();
        backend.set_item("calorieLimit", "lots").unwrap();
        let store = RecordStore::new(backend);

        let err = store.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidScalar { key: "calorieLimit", .. }
        ));
    }

    #[test]
    fn test_get_meals_empty_when_absent() {
        let store = test_store();
        assert!(store.get_meals().unwrap().is_empty());
        assert!(store.get_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_save_meal_then_get() {
        let mut store = test_store();
        let meal = Meal::with_id("1", "Eggs", 300);

        store.save_meal(&meal).unwrap();

        assert_eq!(store.get_meals().unwrap(), vec![meal]);
    }

    #[test]
    fn test_save_preserves_insertion_order() {
        let mut store = test_store();
        let names = ["Breakfast", "Lunch", "Dinner", "Snack"];
        for (i, name) in names.iter().enumerate() {
            store
                .save_meal(&Meal::with_id(i.to_string(), *name, 100))
                .unwrap();
        }

        let loaded: Vec<String> = store
            .get_meals()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(loaded, names);
    }

    #[test]
    fn test_remove_meal() {
        let mut store = test_store();
        store.save_meal(&Meal::with_id("1", "Eggs", 300)).unwrap();
        store.save_meal(&Meal::with_id("2", "Toast", 150)).unwrap();

        let removed = store.remove_meal(&EntryId::from("1")).unwrap();

        assert!(removed);
        let meals = store.get_meals().unwrap();
        assert_eq!(meals.len(), 1);
        assert!(meals.iter().all(|m| m.id.as_str() != "1"));
    }

    #[test]
    fn test_remove_missing_meal_leaves_sequence_unchanged() {
        let mut store = test_store();
        store.save_meal(&Meal::with_id("1", "Eggs", 300)).unwrap();
        let before = store.get_meals().unwrap();

        let removed = store.remove_meal(&EntryId::from("nope")).unwrap();

        assert!(!removed);
        assert_eq!(store.get_meals().unwrap(), before);
    }

    #[test]
    fn test_remove_missing_from_empty_writes_empty_list() {
        let mut store = test_store();
        store.remove_workout(&EntryId::from("x")).unwrap();

        assert_eq!(
            store.backend().get_item("workouts").unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn test_workouts_are_independent_of_meals() {
        let mut store = test_store();
        store.save_meal(&Meal::with_id("1", "Eggs", 300)).unwrap();
        store.save_workout(&Workout::with_id("1", "Run", 400)).unwrap();

        store.remove_workout(&EntryId::from("1")).unwrap();

        assert_eq!(store.get_meals().unwrap().len(), 1);
        assert!(store.get_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let mut backend = MemoryStore::new();
        backend.set_item("meals", "[{not json").unwrap();
        let mut store = RecordStore::new(backend);

        assert!(matches!(
            store.get_meals().unwrap_err(),
            RecordError::Deserialize { key: "meals", .. }
        ));
        // Appending must not silently discard the corrupt data
        assert!(store.save_meal(&Meal::new("Eggs", 300)).is_err());
    }

    #[test]
    fn test_clear_all_keeps_limit() {
        let mut store = test_store();
        store.set_calorie_limit(2000).unwrap();
        store.set_total_calories(500).unwrap();
        store.save_meal(&Meal::new("Eggs", 300)).unwrap();
        store.save_workout(&Workout::new("Run", 400)).unwrap();

        store.clear_all().unwrap();

        assert_eq!(store.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap(), 2000);
        assert_eq!(store.get_total_calories(DEFAULT_TOTAL_CALORIES).unwrap(), 0);
        assert!(store.get_meals().unwrap().is_empty());
        assert!(store.get_workouts().unwrap().is_empty());
        assert_eq!(store.into_inner().len(), 1);
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(FileStore::new(temp_dir.path()));
        let workout = Workout::with_id("w1", "Run", 400);

        store.set_calorie_limit(2100).unwrap();
        store.save_workout(&workout).unwrap();

        let reopened = RecordStore::new(FileStore::new(temp_dir.path()));
        assert_eq!(reopened.get_calorie_limit(DEFAULT_CALORIE_LIMIT).unwrap(), 2100);
        assert_eq!(reopened.get_workouts().unwrap(), vec![workout]);
    }
}
