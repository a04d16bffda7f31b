use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry_id::EntryId;
use super::CalorieEntry;

/// Something eaten; its calories count towards the daily total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: EntryId,
    pub name: String,
    pub calories: i64,
}

impl Meal {
    pub fn new(name: impl Into<String>, calories: i64) -> Self {
        Self::with_id(EntryId::new(), name, calories)
    }

    pub fn with_id(id: impl Into<EntryId>, name: impl Into<String>, calories: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories,
        }
    }
}

impl CalorieEntry for Meal {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> i64 {
        self.calories
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kcal)", self.name, self.calories)
    }
}
