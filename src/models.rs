use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Local>,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: String,
    /// Millilitres.
    pub amount: u32,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepLog {
    pub id: String,
    /// HH:mm
    pub bedtime: String,
    /// HH:mm
    pub wake_time: String,
    pub date: NaiveDate,
    /// Hours.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<SleepQuality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
    pub id: String,
    pub food: FoodItem,
    pub servings: f64,
    pub meal_type: MealType,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Running,
    Cycling,
    Swimming,
    Walking,
    Hiking,
    Strength,
    Cardio,
    Sports,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessLog {
    pub id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    pub category: ExerciseCategory,
    pub date: NaiveDate,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Miles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    FastestMile,
    LongestDistance,
    LongestDuration,
    HighestElevation,
    #[serde(rename = "fastest_5k")]
    Fastest5k,
    #[serde(rename = "fastest_10k")]
    Fastest10k,
}

impl RecordType {
    /// Pace and race-time records improve downwards.
    pub fn lower_is_better(self) -> bool {
        matches!(
            self,
            RecordType::FastestMile | RecordType::Fastest5k | RecordType::Fastest10k
        )
    }

    pub fn unit(self) -> &'static str {
        match self {
            RecordType::FastestMile => "min/mile",
            RecordType::LongestDistance => "miles",
            RecordType::LongestDuration => "min",
            RecordType::HighestElevation => "ft",
            RecordType::Fastest5k | RecordType::Fastest10k => "min",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub value: f64,
    pub unit: String,
    pub date: NaiveDate,
    pub log_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Distance,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFitnessGoal {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: GoalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_category: Option<ExerciseCategory>,
    /// Miles or minutes, depending on `kind`.
    pub target_value: f64,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    pub daily_water: u32,
    pub daily_calories: u32,
    pub sleep_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_bedtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_wake_time: Option<String>,
}

impl Default for HealthGoals {
    fn default() -> Self {
        Self {
            daily_water: 2500,
            daily_calories: 2000,
            sleep_hours: 8.0,
            sleep_bedtime: None,
            sleep_wake_time: None,
        }
    }
}
