use crate::catalog::{builtin_food, builtin_foods};
use crate::errors::ValidationError;
use crate::models::{
    new_id, FoodItem, FoodLog, HealthGoals, MealType, SleepLog, SleepQuality, WaterLog,
};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

pub const QUICK_ADD_ML: [u32; 3] = [250, 500, 750];

fn capped_percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (value / goal * 100.0).min(100.0)
}

#[derive(Debug, Deserialize)]
pub struct NewWater {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WaterToday {
    pub date: NaiveDate,
    pub total: u32,
    pub goal: u32,
    pub progress: f64,
    pub remaining: u32,
    pub goal_reached: bool,
    pub entries: usize,
    pub quick_add: Vec<u32>,
}

pub fn add_water(
    logs: &mut Vec<WaterLog>,
    amount: i64,
    now: DateTime<Local>,
) -> Result<WaterLog, ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NotPositive("amount"));
    }
    let log = WaterLog {
        id: new_id(),
        amount: u32::try_from(amount).unwrap_or(u32::MAX),
        timestamp: now,
    };
    logs.push(log.clone());
    Ok(log)
}

/// Undo for the most recent entry logged on `today`.
pub fn remove_last_today(logs: &mut Vec<WaterLog>, today: NaiveDate) -> Option<WaterLog> {
    let index = logs
        .iter()
        .rposition(|log| log.timestamp.date_naive() == today)?;
    Some(logs.remove(index))
}

pub fn water_today(logs: &[WaterLog], goals: &HealthGoals, today: NaiveDate) -> WaterToday {
    let todays: Vec<&WaterLog> = logs
        .iter()
        .filter(|log| log.timestamp.date_naive() == today)
        .collect();
    let total = todays
        .iter()
        .fold(0u32, |sum, log| sum.saturating_add(log.amount));

    WaterToday {
        date: today,
        total,
        goal: goals.daily_water,
        progress: capped_percent(f64::from(total), f64::from(goals.daily_water)),
        remaining: goals.daily_water.saturating_sub(total),
        goal_reached: total >= goals.daily_water,
        entries: todays.len(),
        quick_add: QUICK_ADD_ML.to_vec(),
    }
}

#[derive(Debug, Deserialize)]
pub struct NewSleep {
    pub bedtime: String,
    pub wake_time: String,
    #[serde(default)]
    pub quality: Option<SleepQuality>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SleepToday {
    pub date: NaiveDate,
    pub log: Option<SleepLog>,
    pub goal_hours: f64,
    pub progress: f64,
}

pub fn parse_hhmm(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}

/// Hours between bedtime and wake time; waking at or before bedtime means
/// the next morning.
pub fn sleep_duration(bedtime: NaiveTime, wake: NaiveTime) -> f64 {
    let mut minutes = (wake - bedtime).num_minutes();
    if minutes <= 0 {
        minutes += 24 * 60;
    }
    minutes as f64 / 60.0
}

/// One log per night: a new entry replaces whatever was logged for that date.
pub fn log_sleep(
    logs: &mut Vec<SleepLog>,
    input: NewSleep,
    today: NaiveDate,
) -> Result<SleepLog, ValidationError> {
    let bedtime = parse_hhmm(&input.bedtime)?;
    let wake = parse_hhmm(&input.wake_time)?;
    let date = input.date.unwrap_or(today);

    let log = SleepLog {
        id: new_id(),
        bedtime: bedtime.format("%H:%M").to_string(),
        wake_time: wake.format("%H:%M").to_string(),
        date,
        duration: sleep_duration(bedtime, wake),
        quality: Some(input.quality.unwrap_or(SleepQuality::Good)),
    };
    logs.retain(|existing| existing.date != date);
    logs.push(log.clone());
    Ok(log)
}

pub fn delete_sleep_for(logs: &mut Vec<SleepLog>, date: NaiveDate) -> bool {
    let before = logs.len();
    logs.retain(|log| log.date != date);
    logs.len() != before
}

pub fn sleep_today(logs: &[SleepLog], goals: &HealthGoals, today: NaiveDate) -> SleepToday {
    let log = logs.iter().find(|log| log.date == today).cloned();
    let progress = log
        .as_ref()
        .map(|log| capped_percent(log.duration, goals.sleep_hours))
        .unwrap_or(0.0);

    SleepToday {
        date: today,
        log,
        goal_hours: goals.sleep_hours,
        progress,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl AddAssign for Macros {
    fn add_assign(&mut self, other: Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }
}

impl FoodLog {
    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.food.calories * self.servings,
            protein: self.food.protein * self.servings,
            carbs: self.food.carbs * self.servings,
            fat: self.food.fat * self.servings,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewFoodLog {
    pub food_id: String,
    #[serde(default)]
    pub servings: Option<f64>,
    pub meal_type: MealType,
}

#[derive(Debug, Deserialize)]
pub struct NewCustomFood {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub servings: Option<f64>,
    pub meal_type: MealType,
}

#[derive(Debug, Serialize)]
pub struct FoodToday {
    pub date: NaiveDate,
    pub totals: Macros,
    pub goal: u32,
    pub progress: f64,
    pub logs: Vec<FoodLog>,
}

/// Built-in foods first, then the user's own.
pub fn find_food(id: &str, custom: &[FoodItem]) -> Option<FoodItem> {
    builtin_food(id).or_else(|| custom.iter().find(|food| food.id == id).cloned())
}

pub fn search_foods(custom: &[FoodItem], query: &str) -> Vec<FoodItem> {
    let query = query.trim().to_lowercase();
    builtin_foods()
        .into_iter()
        .chain(custom.iter().cloned())
        .filter(|food| food.name.to_lowercase().contains(&query))
        .collect()
}

pub fn log_food(
    logs: &mut Vec<FoodLog>,
    food: FoodItem,
    servings: Option<f64>,
    meal_type: MealType,
    now: DateTime<Local>,
) -> Result<FoodLog, ValidationError> {
    let servings = servings.unwrap_or(1.0);
    if servings.is_nan() || servings <= 0.0 {
        return Err(ValidationError::NotPositive("servings"));
    }
    let log = FoodLog {
        id: new_id(),
        food,
        servings,
        meal_type,
        timestamp: now,
    };
    logs.push(log.clone());
    Ok(log)
}

pub fn add_custom_food(
    custom: &mut Vec<FoodItem>,
    input: &NewCustomFood,
) -> Result<FoodItem, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    for (field, value) in [
        ("calories", input.calories),
        ("protein", input.protein),
        ("carbs", input.carbs),
        ("fat", input.fat),
    ] {
        if value < 0.0 {
            return Err(ValidationError::Negative(field));
        }
    }

    let food = FoodItem {
        id: format!("custom-{}", new_id()),
        name: name.to_string(),
        calories: input.calories.trunc(),
        protein: input.protein.trunc(),
        carbs: input.carbs.trunc(),
        fat: input.fat.trunc(),
        fiber: None,
        sodium: None,
        is_custom: Some(true),
    };
    custom.push(food.clone());
    Ok(food)
}

pub fn delete_food_log(logs: &mut Vec<FoodLog>, id: &str) -> bool {
    let before = logs.len();
    logs.retain(|log| log.id != id);
    logs.len() != before
}

pub fn food_today(logs: &[FoodLog], goals: &HealthGoals, today: NaiveDate) -> FoodToday {
    let logs: Vec<FoodLog> = logs
        .iter()
        .filter(|log| log.timestamp.date_naive() == today)
        .cloned()
        .collect();
    let mut totals = Macros::default();
    for log in &logs {
        totals += log.macros();
    }

    FoodToday {
        date: today,
        totals,
        goal: goals.daily_calories,
        progress: capped_percent(totals.calories, f64::from(goals.daily_calories)),
        logs,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GoalsUpdate {
    #[serde(default)]
    pub daily_water: Option<f64>,
    #[serde(default)]
    pub daily_calories: Option<f64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub sleep_bedtime: Option<String>,
    #[serde(default)]
    pub sleep_wake_time: Option<String>,
}

/// Applies every supplied target, or none of them if any is invalid.
pub fn update_goals(goals: &mut HealthGoals, update: GoalsUpdate) -> Result<(), ValidationError> {
    for (field, value) in [
        ("daily_water", update.daily_water),
        ("daily_calories", update.daily_calories),
        ("sleep_hours", update.sleep_hours),
    ] {
        if let Some(value) = value {
            if value.is_nan() || value <= 0.0 {
                return Err(ValidationError::NotPositive(field));
            }
        }
    }
    let bedtime = update.sleep_bedtime.as_deref().map(parse_hhmm).transpose()?;
    let wake = update.sleep_wake_time.as_deref().map(parse_hhmm).transpose()?;

    if let Some(water) = update.daily_water {
        goals.daily_water = water.round() as u32;
    }
    if let Some(calories) = update.daily_calories {
        goals.daily_calories = calories.round() as u32;
    }
    if let Some(hours) = update.sleep_hours {
        goals.sleep_hours = hours;
    }
    if let Some(bedtime) = bedtime {
        goals.sleep_bedtime = Some(bedtime.format("%H:%M").to_string());
    }
    if let Some(wake) = wake {
        goals.sleep_wake_time = Some(wake.format("%H:%M").to_string());
    }
    Ok(())
}
