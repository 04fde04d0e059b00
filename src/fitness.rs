use crate::catalog::{category_name, exercise_by_id, Exercise};
use crate::errors::ValidationError;
use crate::models::{
    new_id, ExerciseCategory, FitnessLog, GoalType, PersonalRecord, RecordType, WeeklyFitnessGoal,
};
use crate::stats::{week_label, week_start};
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MILES_PER_5K: f64 = 3.107;
pub const MILES_PER_10K: f64 = 6.214;
/// Trailing weeks shown in the activity strip.
pub const STREAK_WEEKS: usize = 12;
/// Upper bound on the elevation multiplier (a 50% bonus).
pub const MAX_ELEVATION_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Default, Deserialize)]
pub struct NewWorkout {
    pub exercise_id: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub elevation_gain: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutOutcome {
    pub log: FitnessLog,
    pub new_records: Vec<PersonalRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NewFitnessGoal {
    #[serde(rename = "type")]
    pub kind: GoalType,
    #[serde(default)]
    pub exercise_category: Option<ExerciseCategory>,
    pub target_value: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: WeeklyFitnessGoal,
    pub label: &'static str,
    pub current: f64,
    pub progress: f64,
    pub is_complete: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyActivity {
    pub week: String,
    pub start_date: NaiveDate,
    pub workouts: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FitnessStreak {
    pub current_streak: usize,
    pub longest_streak: usize,
    pub last_active_week: Option<String>,
    pub weeks: Vec<WeeklyActivity>,
}

#[derive(Debug, Serialize)]
pub struct FitnessToday {
    pub date: NaiveDate,
    pub workouts: usize,
    pub total_duration: f64,
    pub total_distance: f64,
    pub total_calories: u32,
    pub logs: Vec<FitnessLog>,
}

#[derive(Debug, Serialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: PersonalRecord,
    pub label: String,
}

/// MET x body weight x hours, nudged by pace and elevation. Rounded to
/// whole calories.
pub fn estimate_calories(
    exercise: &Exercise,
    duration_min: f64,
    distance_mi: Option<f64>,
    elevation_ft: Option<f64>,
    weight_kg: f64,
) -> u32 {
    let mut met = exercise.met_value;

    if let Some(distance) = distance_mi.filter(|d| *d > 0.0) {
        if duration_min > 0.0 {
            let pace = duration_min / distance;
            if pace < 7.0 {
                met *= 1.3;
            } else if pace < 9.0 {
                met *= 1.15;
            } else if pace > 12.0 {
                met *= 0.85;
            }
        }
    }

    if let Some(elevation) = elevation_ft.filter(|e| *e > 0.0) {
        met *= elevation_multiplier(elevation);
    }

    let hours = duration_min / 60.0;
    (met * weight_kg * hours).round().max(0.0) as u32
}

/// Calorie estimate for a workout that has not been logged yet. Inputs get
/// the same guards as `add_workout`.
pub fn estimate_workout(
    exercise_id: &str,
    duration_min: f64,
    distance_mi: Option<f64>,
    elevation_ft: Option<f64>,
    weight_kg: f64,
) -> Result<u32, ValidationError> {
    let exercise = exercise_by_id(exercise_id)
        .ok_or_else(|| ValidationError::UnknownExercise(exercise_id.to_string()))?;
    let duration = positive(Some(duration_min), "duration")?.unwrap_or_default();
    let distance = positive(distance_mi, "distance")?;
    let elevation = positive(elevation_ft, "elevation_gain")?;
    Ok(estimate_calories(exercise, duration, distance, elevation, weight_kg))
}

/// Roughly 10% more effort per 1000 ft climbed.
pub fn elevation_multiplier(elevation_ft: f64) -> f64 {
    (1.0 + elevation_ft / 1000.0 * 0.1).clamp(1.0, MAX_ELEVATION_MULTIPLIER)
}

fn positive(value: Option<f64>, field: &'static str) -> Result<Option<f64>, ValidationError> {
    match value {
        Some(v) if v.is_nan() || v <= 0.0 => Err(ValidationError::NotPositive(field)),
        other => Ok(other),
    }
}

fn record_candidates(log: &FitnessLog) -> Vec<(RecordType, f64)> {
    let mut candidates = Vec::new();
    if let (Some(distance), Some(duration)) = (log.distance, log.duration) {
        let pace = duration / distance;
        candidates.push((RecordType::FastestMile, pace));
        if distance >= MILES_PER_5K {
            candidates.push((RecordType::Fastest5k, pace * MILES_PER_5K));
        }
        if distance >= MILES_PER_10K {
            candidates.push((RecordType::Fastest10k, pace * MILES_PER_10K));
        }
    }
    if let Some(distance) = log.distance {
        candidates.push((RecordType::LongestDistance, distance));
    }
    if let Some(duration) = log.duration {
        candidates.push((RecordType::LongestDuration, duration));
    }
    if let Some(elevation) = log.elevation_gain {
        candidates.push((RecordType::HighestElevation, elevation));
    }
    candidates
}

/// Records this log sets. A record only replaces an existing one for the
/// same exercise and type when it is strictly better.
pub fn detect_records(log: &FitnessLog, records: &[PersonalRecord]) -> Vec<PersonalRecord> {
    record_candidates(log)
        .into_iter()
        .filter(|&(kind, value)| {
            let existing = records
                .iter()
                .find(|record| record.exercise_id == log.exercise_id && record.kind == kind);
            match existing {
                None => true,
                Some(record) if kind.lower_is_better() => value < record.value,
                Some(record) => value > record.value,
            }
        })
        .map(|(kind, value)| PersonalRecord {
            exercise_id: log.exercise_id.clone(),
            exercise_name: log.exercise_name.clone(),
            kind,
            value,
            unit: kind.unit().to_string(),
            date: log.date,
            log_id: log.id.clone(),
        })
        .collect()
}

pub fn apply_records(records: &mut Vec<PersonalRecord>, new_records: &[PersonalRecord]) {
    for new in new_records {
        records.retain(|record| !(record.exercise_id == new.exercise_id && record.kind == new.kind));
        records.push(new.clone());
    }
}

pub fn add_workout(
    logs: &mut Vec<FitnessLog>,
    records: &mut Vec<PersonalRecord>,
    input: NewWorkout,
    weight_kg: f64,
    today: NaiveDate,
) -> Result<WorkoutOutcome, ValidationError> {
    let exercise = exercise_by_id(&input.exercise_id)
        .ok_or_else(|| ValidationError::UnknownExercise(input.exercise_id.clone()))?;
    let duration = positive(input.duration, "duration")?;
    let distance = positive(input.distance, "distance")?;
    let elevation = positive(input.elevation_gain, "elevation_gain")?;

    let calories = duration
        .map(|minutes| estimate_calories(exercise, minutes, distance, elevation, weight_kg));

    let log = FitnessLog {
        id: new_id(),
        exercise_id: exercise.id.to_string(),
        exercise_name: exercise.name.to_string(),
        category: exercise.category,
        date: input.date.unwrap_or(today),
        duration,
        distance,
        elevation_gain: elevation,
        calories,
        notes: input
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty()),
    };

    let new_records = detect_records(&log, records);
    apply_records(records, &new_records);
    logs.push(log.clone());

    Ok(WorkoutOutcome { log, new_records })
}

/// Records set by the removed log stay in place.
pub fn delete_workout(logs: &mut Vec<FitnessLog>, id: &str) -> bool {
    let before = logs.len();
    logs.retain(|log| log.id != id);
    logs.len() != before
}

pub fn add_goal(
    goals: &mut Vec<WeeklyFitnessGoal>,
    input: NewFitnessGoal,
    now: DateTime<Local>,
) -> Result<WeeklyFitnessGoal, ValidationError> {
    if input.target_value.is_nan() || input.target_value <= 0.0 {
        return Err(ValidationError::NotPositive("target_value"));
    }
    let goal = WeeklyFitnessGoal {
        id: new_id(),
        kind: input.kind,
        exercise_category: input.exercise_category,
        target_value: input.target_value,
        created_at: now,
    };
    goals.push(goal.clone());
    Ok(goal)
}

pub fn delete_goal(goals: &mut Vec<WeeklyFitnessGoal>, id: &str) -> bool {
    let before = goals.len();
    goals.retain(|goal| goal.id != id);
    goals.len() != before
}

fn logs_in_week(logs: &[FitnessLog], start: NaiveDate) -> impl Iterator<Item = &FitnessLog> {
    let end = start + Duration::days(6);
    logs.iter()
        .filter(move |log| log.date >= start && log.date <= end)
}

pub fn goal_progress(
    goals: &[WeeklyFitnessGoal],
    logs: &[FitnessLog],
    today: NaiveDate,
) -> Vec<GoalProgress> {
    let start = week_start(today);

    goals
        .iter()
        .map(|goal| {
            let current: f64 = logs_in_week(logs, start)
                .filter(|log| goal.exercise_category.is_none_or(|c| log.category == c))
                .map(|log| match goal.kind {
                    GoalType::Distance => log.distance.unwrap_or(0.0),
                    GoalType::Duration => log.duration.unwrap_or(0.0),
                })
                .sum();

            GoalProgress {
                goal: goal.clone(),
                label: category_name(goal.exercise_category),
                current,
                progress: (current / goal.target_value * 100.0).min(100.0),
                is_complete: current >= goal.target_value,
            }
        })
        .collect()
}

/// Counts back from the current week until the first week without a
/// workout.
pub fn weekly_streak(logs: &[FitnessLog], today: NaiveDate) -> FitnessStreak {
    let current_start = week_start(today);
    let weeks: Vec<WeeklyActivity> = (0..STREAK_WEEKS)
        .rev()
        .map(|offset| {
            let start = current_start - Duration::weeks(offset as i64);
            WeeklyActivity {
                week: week_label(start),
                start_date: start,
                workouts: logs_in_week(logs, start).count(),
            }
        })
        .collect();

    let current_streak = weeks
        .iter()
        .rev()
        .take_while(|week| week.workouts > 0)
        .count();

    let mut longest_streak = 0;
    let mut run = 0;
    for week in &weeks {
        run = if week.workouts > 0 { run + 1 } else { 0 };
        longest_streak = longest_streak.max(run);
    }

    let last_active_week = weeks
        .iter()
        .rev()
        .find(|week| week.workouts > 0)
        .map(|week| week.week.clone());

    FitnessStreak {
        current_streak,
        longest_streak,
        last_active_week,
        weeks,
    }
}

pub fn fitness_today(logs: &[FitnessLog], today: NaiveDate) -> FitnessToday {
    let logs: Vec<FitnessLog> = logs.iter().filter(|log| log.date == today).cloned().collect();

    FitnessToday {
        date: today,
        workouts: logs.len(),
        total_duration: logs.iter().filter_map(|log| log.duration).sum(),
        total_distance: logs.iter().filter_map(|log| log.distance).sum(),
        total_calories: logs.iter().filter_map(|log| log.calories).sum(),
        logs,
    }
}

/// 7.5 -> "7:30"
pub fn format_pace(minutes_per_mile: f64) -> String {
    let total_seconds = (minutes_per_mile * 60.0).round().max(0.0) as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn describe_record(record: &PersonalRecord) -> String {
    let kind = serde_json::to_value(record.kind)
        .ok()
        .and_then(|value| value.as_str().map(|s| s.replace('_', " ")))
        .unwrap_or_default();
    let value = match record.kind {
        RecordType::FastestMile => format!("{}/mile", format_pace(record.value)),
        RecordType::Fastest5k | RecordType::Fastest10k => format_pace(record.value),
        _ => format!("{} {}", record.value, record.unit),
    };
    format!("{}: {kind} - {value}", record.exercise_name)
}

pub fn record_views(records: &[PersonalRecord]) -> Vec<RecordView> {
    records
        .iter()
        .map(|record| RecordView {
            label: describe_record(record),
            record: record.clone(),
        })
        .collect()
}
