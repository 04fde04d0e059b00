use crate::errors::AppError;
use crate::models::{
    FitnessLog, FoodItem, FoodLog, HealthGoals, Note, PersonalRecord, SleepLog, Task, TaskType,
    WaterLog, WeeklyFitnessGoal,
};
use crate::timer::TimerSettings;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{debug, error, warn};

/// A named persisted slot and the value it holds before anything is written.
pub struct Slot<T> {
    pub name: &'static str,
    default: fn() -> T,
}

impl<T> Slot<T> {
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }
}

pub const TASKS: Slot<Vec<Task>> = Slot::new("productivity-tasks", Vec::new);
pub const TASK_TYPES: Slot<Vec<TaskType>> = Slot::new("productivity-task-types", Vec::new);
pub const NOTES: Slot<Vec<Note>> = Slot::new("productivity-notes", Vec::new);
pub const WATER_LOGS: Slot<Vec<WaterLog>> = Slot::new("water-logs", Vec::new);
pub const SLEEP_LOGS: Slot<Vec<SleepLog>> = Slot::new("sleep-logs", Vec::new);
pub const FOOD_LOGS: Slot<Vec<FoodLog>> = Slot::new("food-logs", Vec::new);
pub const CUSTOM_FOODS: Slot<Vec<FoodItem>> = Slot::new("custom-foods", Vec::new);
pub const FITNESS_LOGS: Slot<Vec<FitnessLog>> = Slot::new("fitness-logs", Vec::new);
pub const PERSONAL_RECORDS: Slot<Vec<PersonalRecord>> = Slot::new("personal-records", Vec::new);
pub const FITNESS_GOALS: Slot<Vec<WeeklyFitnessGoal>> =
    Slot::new("weekly-fitness-goals", Vec::new);
pub const HEALTH_GOALS: Slot<HealthGoals> = Slot::new("health-goals", HealthGoals::default);
pub const TIMER_SETTINGS: Slot<TimerSettings> =
    Slot::new("timer-settings", TimerSettings::default);
pub const FOCUS_SESSIONS: Slot<u32> = Slot::new("focus-sessions", u32::default);

/// Every slot lives in one JSON object on disk, keyed by slot name.
#[derive(Debug, Default)]
pub struct Store {
    path: PathBuf,
    slots: BTreeMap<String, Value>,
}

impl Store {
    pub fn in_memory(path: PathBuf) -> Self {
        Self {
            path,
            slots: BTreeMap::new(),
        }
    }

    pub async fn open(path: PathBuf) -> Self {
        let slots = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(slots) => slots,
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read data file: {err}");
                BTreeMap::new()
            }
        };
        debug!(slots = slots.len(), path = %path.display(), "opened store");
        Self { path, slots }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get<T: DeserializeOwned>(&self, slot: &Slot<T>) -> T {
        let Some(value) = self.slots.get(slot.name) else {
            return (slot.default)();
        };
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(slot = slot.name, "discarding malformed slot: {err}");
                (slot.default)()
            }
        }
    }

    /// Replaces the whole slot and writes the store back to disk.
    pub async fn set<T: Serialize>(&mut self, slot: &Slot<T>, value: &T) -> Result<(), AppError> {
        self.put(slot, value)?;
        self.persist().await
    }

    fn put<T: Serialize>(&mut self, slot: &Slot<T>, value: &T) -> Result<(), AppError> {
        let value = serde_json::to_value(value)?;
        self.slots.insert(slot.name.to_string(), value);
        Ok(())
    }

    async fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(&self.slots).map_err(AppError::internal)?;
        fs::write(&self.path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("dashboard_store_{tag}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_slot_yields_default() {
        let store = Store::in_memory(temp_path("default"));
        assert!(store.get(&TASKS).is_empty());
        assert_eq!(store.get(&HEALTH_GOALS).daily_water, 2500);
        assert_eq!(store.get(&TIMER_SETTINGS).focus_time, 25);
        assert_eq!(store.get(&FOCUS_SESSIONS), 0);
    }

    #[tokio::test]
    async fn set_persists_and_reopens() {
        let path = temp_path("reopen");
        let mut store = Store::in_memory(path.clone());
        store.set(&FOCUS_SESSIONS, &4).await.unwrap();

        let reopened = Store::open(path.clone()).await;
        assert_eq!(reopened.get(&FOCUS_SESSIONS), 4);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn malformed_slot_falls_back_to_default() {
        let path = temp_path("malformed");
        std::fs::write(&path, r#"{"focus-sessions": "many"}"#).unwrap();

        let store = Store::open(path.clone()).await;
        assert_eq!(store.get(&FOCUS_SESSIONS), 0);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_file_opens_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, b"not json").unwrap();

        let store = Store::open(path.clone()).await;
        assert!(store.get(&NOTES).is_empty());
        let _ = std::fs::remove_file(path);
    }
}
