use crate::errors::ValidationError;
use crate::fitness::{record_views, RecordView};
use crate::health::Macros;
use crate::models::{FitnessLog, FoodLog, HealthGoals, PersonalRecord, SleepLog, Task, WaterLog};
use crate::storage::{
    Store, FITNESS_LOGS, FOOD_LOGS, HEALTH_GOALS, PERSONAL_RECORDS, SLEEP_LOGS, TASKS, WATER_LOGS,
};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative change below this many percent counts as stable.
pub const STABLE_THRESHOLD: f64 = 5.0;

/// Share of the calorie goal a day may reach and still count as on target
/// in the week-over-week comparison.
pub const COMPARISON_CALORIE_CEILING: f64 = 1.1;
/// The week summary is more lenient about overshooting.
pub const SUMMARY_CALORIE_CEILING: f64 = 1.2;
const CALORIE_FLOOR: f64 = 0.8;

/// Every collection the weekly views read, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub water: Vec<WaterLog>,
    pub sleep: Vec<SleepLog>,
    pub food: Vec<FoodLog>,
    pub fitness: Vec<FitnessLog>,
    pub records: Vec<PersonalRecord>,
    pub tasks: Vec<Task>,
    pub goals: HealthGoals,
}

impl Snapshot {
    pub fn load(store: &Store) -> Self {
        Self {
            water: store.get(&WATER_LOGS),
            sleep: store.get(&SLEEP_LOGS),
            food: store.get(&FOOD_LOGS),
            fitness: store.get(&FITNESS_LOGS),
            records: store.get(&PERSONAL_RECORDS),
            tasks: store.get(&TASKS),
            goals: store.get(&HEALTH_GOALS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum Trend {
    NoData,
    Stable { change: f64 },
    Up { change: f64 },
    Down { change: f64 },
}

impl Trend {
    pub fn label(&self) -> String {
        match self {
            Trend::NoData => "No data".to_string(),
            Trend::Stable { .. } => "Stable".to_string(),
            Trend::Up { change } => format!("+{change:.0}%"),
            Trend::Down { change } => format!("{change:.0}%"),
        }
    }
}

pub fn trend(current: f64, previous: f64) -> Trend {
    if previous == 0.0 {
        return Trend::NoData;
    }
    let change = (current - previous) / previous * 100.0;
    if change.abs() < STABLE_THRESHOLD {
        Trend::Stable { change }
    } else if change > 0.0 {
        Trend::Up { change }
    } else {
        Trend::Down { change }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WeekInfo {
    pub week: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyHealth {
    #[serde(flatten)]
    pub week: WeekInfo,
    pub avg_water: f64,
    pub avg_sleep: f64,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub water_days: usize,
    pub sleep_nights: usize,
    pub food_days: usize,
    pub total_days_logged: usize,
    pub water_goal_met: usize,
    pub sleep_goal_met: usize,
    pub calorie_goal_met: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthComparison {
    pub current: WeeklyHealth,
    pub previous: WeeklyHealth,
    pub water_trend: Trend,
    pub sleep_trend: Trend,
    pub calorie_trend: Trend,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricWeek {
    pub avg: f64,
    pub prev_avg: f64,
    pub goal_met: usize,
    pub trend: Trend,
    pub trend_label: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodWeek {
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub goal_met: usize,
    pub trend: Trend,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FitnessWeek {
    pub total_workouts: usize,
    pub total_time: f64,
    pub total_distance: f64,
    pub calories_burned: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskWeek {
    pub completed: usize,
    pub total: usize,
    pub completion_rate: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DayBreakdown {
    pub day: String,
    pub date: NaiveDate,
    pub water_ml: u32,
    pub sleep_hours: f64,
    pub calories: f64,
    pub workouts: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekSummary {
    #[serde(flatten)]
    pub week: WeekInfo,
    pub is_current_week: bool,
    pub water: MetricWeek,
    pub sleep: MetricWeek,
    pub food: FoodWeek,
    pub fitness: FitnessWeek,
    pub tasks: TaskWeek,
    pub daily: Vec<DayBreakdown>,
    pub macros: MacroSplit,
    pub personal_records: Vec<RecordView>,
    pub insights: Vec<String>,
    pub score: u32,
    pub verdict: &'static str,
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday through Sunday of the week containing `date`, or `None` when that
/// week runs past the representable calendar.
pub fn week_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let start = date.checked_sub_signed(offset)?;
    Some((start, start.checked_add_signed(Duration::days(6))?))
}

/// Start of the week containing `reference` and of the week before it.
fn comparable_weeks(reference: NaiveDate) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    week_bounds(reference)
        .and_then(|(start, _)| Some((start, start.checked_sub_signed(Duration::weeks(1))?)))
        .ok_or(ValidationError::DateOutOfRange(reference))
}

/// Only called with starts already checked by `comparable_weeks`.
fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(6)
}

pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

fn week_info(start: NaiveDate) -> WeekInfo {
    WeekInfo {
        week: week_label(start),
        start_date: start,
        end_date: week_end(start),
    }
}

fn in_week(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start && date <= week_end(start)
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

fn water_by_day(logs: &[WaterLog], start: NaiveDate) -> BTreeMap<NaiveDate, u32> {
    let mut days = BTreeMap::new();
    for log in logs {
        let date = log.timestamp.date_naive();
        if in_week(date, start) {
            let total: &mut u32 = days.entry(date).or_default();
            *total = total.saturating_add(log.amount);
        }
    }
    days
}

fn food_by_day(logs: &[FoodLog], start: NaiveDate) -> BTreeMap<NaiveDate, Macros> {
    let mut days = BTreeMap::new();
    for log in logs {
        let date = log.timestamp.date_naive();
        if in_week(date, start) {
            *days.entry(date).or_insert_with(Macros::default) += log.macros();
        }
    }
    days
}

fn sleep_in_week(logs: &[SleepLog], start: NaiveDate) -> Vec<&SleepLog> {
    logs.iter().filter(|log| in_week(log.date, start)).collect()
}

/// Calorie days between 80% of the goal and `ceiling` x goal count as on
/// target.
fn calories_on_target(calories: f64, goal: u32, ceiling: f64) -> bool {
    let goal = f64::from(goal);
    calories >= goal * CALORIE_FLOOR && calories <= goal * ceiling
}

fn calorie_days_on_target(days: &BTreeMap<NaiveDate, Macros>, goal: u32, ceiling: f64) -> usize {
    days.values()
        .filter(|day| calories_on_target(day.calories, goal, ceiling))
        .count()
}

/// Averages are per logged day (per night for sleep), not per calendar day.
pub fn summarize_week(snapshot: &Snapshot, start: NaiveDate) -> WeeklyHealth {
    let goals = &snapshot.goals;

    let water = water_by_day(&snapshot.water, start);
    let water_total: f64 = water.values().map(|ml| f64::from(*ml)).sum();

    let sleep = sleep_in_week(&snapshot.sleep, start);
    let sleep_total: f64 = sleep.iter().map(|log| log.duration).sum();

    let food = food_by_day(&snapshot.food, start);
    let mut food_total = Macros::default();
    for day in food.values() {
        food_total += *day;
    }

    WeeklyHealth {
        week: week_info(start),
        avg_water: mean(water_total, water.len()),
        avg_sleep: mean(sleep_total, sleep.len()),
        avg_calories: mean(food_total.calories, food.len()),
        avg_protein: mean(food_total.protein, food.len()),
        avg_carbs: mean(food_total.carbs, food.len()),
        avg_fat: mean(food_total.fat, food.len()),
        water_days: water.len(),
        sleep_nights: sleep.len(),
        food_days: food.len(),
        total_days_logged: water.len().max(sleep.len()).max(food.len()),
        water_goal_met: water.values().filter(|ml| **ml >= goals.daily_water).count(),
        sleep_goal_met: sleep
            .iter()
            .filter(|log| log.duration >= goals.sleep_hours)
            .count(),
        calorie_goal_met: calorie_days_on_target(
            &food,
            goals.daily_calories,
            COMPARISON_CALORIE_CEILING,
        ),
    }
}

pub fn weekly_health(
    snapshot: &Snapshot,
    today: NaiveDate,
) -> Result<HealthComparison, ValidationError> {
    let (start, previous_start) = comparable_weeks(today)?;
    let current = summarize_week(snapshot, start);
    let previous = summarize_week(snapshot, previous_start);

    Ok(HealthComparison {
        water_trend: trend(current.avg_water, previous.avg_water),
        sleep_trend: trend(current.avg_sleep, previous.avg_sleep),
        calorie_trend: trend(current.avg_calories, previous.avg_calories),
        current,
        previous,
    })
}

fn fitness_week(logs: &[FitnessLog], start: NaiveDate) -> FitnessWeek {
    let week: Vec<&FitnessLog> = logs.iter().filter(|log| in_week(log.date, start)).collect();
    FitnessWeek {
        total_workouts: week.len(),
        total_time: week.iter().filter_map(|log| log.duration).sum(),
        total_distance: week.iter().filter_map(|log| log.distance).sum(),
        calories_burned: week.iter().filter_map(|log| log.calories).sum(),
    }
}

/// Tasks are attributed to the week they were created in.
fn task_week(tasks: &[Task], start: NaiveDate) -> TaskWeek {
    let week: Vec<&Task> = tasks
        .iter()
        .filter(|task| in_week(task.created_at.date_naive(), start))
        .collect();
    let completed = week.iter().filter(|task| task.completed).count();
    TaskWeek {
        completed,
        total: week.len(),
        completion_rate: mean(completed as f64 * 100.0, week.len()),
    }
}

fn daily_breakdown(snapshot: &Snapshot, start: NaiveDate) -> Vec<DayBreakdown> {
    let water = water_by_day(&snapshot.water, start);
    let food = food_by_day(&snapshot.food, start);

    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayBreakdown {
                day: date.format("%a").to_string(),
                date,
                water_ml: water.get(&date).copied().unwrap_or(0),
                sleep_hours: snapshot
                    .sleep
                    .iter()
                    .find(|log| log.date == date)
                    .map(|log| log.duration)
                    .unwrap_or(0.0),
                calories: food.get(&date).map(|day| day.calories).unwrap_or(0.0),
                workouts: snapshot.fitness.iter().filter(|log| log.date == date).count(),
            }
        })
        .collect()
}

fn metric_week(avg: f64, prev_avg: f64, goal_met: usize) -> MetricWeek {
    let trend = trend(avg, prev_avg);
    MetricWeek {
        avg,
        prev_avg,
        goal_met,
        trend_label: trend.label(),
        trend,
    }
}

fn insights(
    goals: &HealthGoals,
    water: &MetricWeek,
    sleep: &MetricWeek,
    food: &FoodWeek,
    fitness: &FitnessWeek,
    tasks: &TaskWeek,
) -> Vec<String> {
    let mut out = Vec::new();
    let water_goal = f64::from(goals.daily_water);

    if water.avg >= water_goal {
        out.push("Excellent hydration this week, you consistently met your water goal.".to_string());
    } else if water.avg >= water_goal * 0.8 {
        out.push("Good hydration, drink a little more to hit your daily goal consistently.".to_string());
    } else if water.avg > 0.0 {
        out.push("Water intake needs attention, try spreading drinks through the day.".to_string());
    }

    if sleep.avg >= goals.sleep_hours {
        out.push("Great sleep habits, you are getting the rest you planned for.".to_string());
    } else if sleep.avg >= goals.sleep_hours * 0.85 {
        out.push("Close to your sleep goal, try going to bed 30 minutes earlier.".to_string());
    } else if sleep.avg > 0.0 {
        out.push("Sleep debt is accumulating, prioritise rest this week.".to_string());
    }

    if food.goal_met >= 5 {
        out.push("Nutrition is on point, calorie intake is well balanced.".to_string());
    } else if food.avg_calories > 0.0 {
        let diff = food.avg_calories - f64::from(goals.daily_calories);
        if diff > 200.0 {
            out.push("Eating above your calorie goal, consider lighter meals or more active days.".to_string());
        } else if diff < -200.0 {
            out.push("You might be under-eating, make sure you are fuelling enough.".to_string());
        }
    }

    match fitness.total_workouts {
        0 => out.push("No workouts logged yet. Even a short walk makes a difference.".to_string()),
        1..=2 => out.push(format!(
            "{} workout(s) this week. Try to add one more session next week.",
            fitness.total_workouts
        )),
        3..=4 => out.push(format!(
            "Good activity level with {} workouts. Keep up the momentum.",
            fitness.total_workouts
        )),
        n => out.push(format!("Outstanding, {n} workouts this week.")),
    }

    if tasks.completion_rate >= 80.0 {
        out.push(format!(
            "Productivity champion: {:.0}% task completion rate.",
            tasks.completion_rate
        ));
    } else if tasks.completion_rate >= 50.0 {
        out.push(format!(
            "Solid progress on tasks, {}/{} completed.",
            tasks.completed, tasks.total
        ));
    } else if tasks.total > 0 {
        out.push("Break tasks into smaller chunks to finish more of them.".to_string());
    }

    out
}

/// Five areas, 20 points when on track and 10 otherwise.
pub fn week_score(
    goals: &HealthGoals,
    water_avg: f64,
    sleep_avg: f64,
    food_goal_met: usize,
    workouts: usize,
    task_rate: f64,
) -> u32 {
    let area = |on_track: bool| if on_track { 20 } else { 10 };
    area(water_avg >= f64::from(goals.daily_water) * 0.8)
        + area(sleep_avg >= goals.sleep_hours * 0.85)
        + area(food_goal_met >= 3)
        + area(workouts >= 3)
        + area(task_rate >= 50.0)
}

pub fn verdict(score: u32) -> &'static str {
    match score {
        90.. => "Exceptional week, performing at your best across all areas.",
        70..=89 => "Great week overall, a few small improvements can make it even better.",
        50..=69 => "Decent week with room for growth. Focus on one area next week.",
        _ => "Every step counts. Start with small, consistent habits to build momentum.",
    }
}

/// Everything the summary view shows for the week containing `reference`.
pub fn week_summary(
    snapshot: &Snapshot,
    reference: NaiveDate,
    today: NaiveDate,
) -> Result<WeekSummary, ValidationError> {
    let (start, previous_start) = comparable_weeks(reference)?;
    let current = summarize_week(snapshot, start);
    let previous = summarize_week(snapshot, previous_start);
    let goals = &snapshot.goals;

    let water = metric_week(current.avg_water, previous.avg_water, current.water_goal_met);
    let sleep = metric_week(current.avg_sleep, previous.avg_sleep, current.sleep_goal_met);
    let food = FoodWeek {
        avg_calories: current.avg_calories,
        avg_protein: current.avg_protein,
        avg_carbs: current.avg_carbs,
        avg_fat: current.avg_fat,
        goal_met: calorie_days_on_target(
            &food_by_day(&snapshot.food, start),
            goals.daily_calories,
            SUMMARY_CALORIE_CEILING,
        ),
        trend: trend(current.avg_calories, previous.avg_calories),
    };
    let fitness = fitness_week(&snapshot.fitness, start);
    let tasks = task_week(&snapshot.tasks, start);

    let score = week_score(
        goals,
        water.avg,
        sleep.avg,
        food.goal_met,
        fitness.total_workouts,
        tasks.completion_rate,
    );

    Ok(WeekSummary {
        week: current.week,
        is_current_week: start == week_start(today),
        insights: insights(goals, &water, &sleep, &food, &fitness, &tasks),
        macros: MacroSplit {
            protein: food.avg_protein.round() as u32,
            carbs: food.avg_carbs.round() as u32,
            fat: food.avg_fat.round() as u32,
        },
        daily: daily_breakdown(snapshot, start),
        personal_records: record_views(&snapshot.records),
        score,
        verdict: verdict(score),
        water,
        sleep,
        food,
        fitness,
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, MealType, Priority};
    use chrono::{DateTime, Local, TimeZone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
            .unwrap()
    }

    fn water(date: NaiveDate, amount: u32) -> WaterLog {
        WaterLog {
            id: format!("w-{date}-{amount}"),
            amount,
            timestamp: at(date, 10),
        }
    }

    fn sleep(date: NaiveDate, duration: f64) -> SleepLog {
        SleepLog {
            id: format!("s-{date}"),
            bedtime: "23:00".into(),
            wake_time: "07:00".into(),
            date,
            duration,
            quality: None,
        }
    }

    fn meal(date: NaiveDate, calories: f64, servings: f64) -> FoodLog {
        FoodLog {
            id: format!("f-{date}-{calories}"),
            food: FoodItem {
                id: "test".into(),
                name: "test".into(),
                calories,
                protein: 10.0,
                carbs: 20.0,
                fat: 5.0,
                fiber: None,
                sodium: None,
                is_custom: None,
            },
            servings,
            meal_type: MealType::Lunch,
            timestamp: at(date, 12),
        }
    }

    fn task(created: NaiveDate, completed: bool) -> Task {
        Task {
            id: format!("t-{created}-{completed}"),
            title: "t".into(),
            completed,
            priority: Priority::Medium,
            created_at: at(created, 9),
            due_date: created,
            task_type: None,
        }
    }

    // Monday 2026-01-05 .. Sunday 2026-01-11
    const MONDAY: (i32, u32, u32) = (2026, 1, 5);

    fn monday() -> NaiveDate {
        day(MONDAY.0, MONDAY.1, MONDAY.2)
    }

    #[test]
    fn week_start_is_monday() {
        assert_eq!(week_start(day(2026, 1, 11)), monday());
        assert_eq!(week_start(monday()), monday());
        assert_eq!(week_start(day(2026, 1, 4)), day(2025, 12, 29));
        assert_eq!(week_label(monday()), "2026-W02");
        assert_eq!(week_bounds(day(2026, 1, 7)), Some((monday(), day(2026, 1, 11))));
    }

    #[test]
    fn trend_classification() {
        assert_eq!(trend(10.0, 0.0), Trend::NoData);
        assert!(matches!(trend(104.0, 100.0), Trend::Stable { .. }));
        assert!(matches!(trend(96.0, 100.0), Trend::Stable { .. }));
        assert!(matches!(trend(105.0, 100.0), Trend::Up { .. }));
        assert!(matches!(trend(95.0, 100.0), Trend::Down { .. }));
        assert_eq!(trend(150.0, 100.0).label(), "+50%");
        assert_eq!(trend(80.0, 100.0).label(), "-20%");
        assert_eq!(trend(0.0, 0.0).label(), "No data");
    }

    #[test]
    fn weekly_totals_match_entries_in_range() {
        let start = monday();
        let snapshot = Snapshot {
            water: vec![
                water(start, 1000),
                water(start, 1500),
                water(start + Duration::days(3), 2000),
                water(start - Duration::days(1), 9999),
                water(start + Duration::days(7), 9999),
            ],
            ..Snapshot::default()
        };

        let week = summarize_week(&snapshot, start);
        assert_eq!(week.water_days, 2);
        // (2500 + 2000) / 2 logged days
        assert_eq!(week.avg_water, 2250.0);
        assert_eq!(week.water_goal_met, 1);

        let days = daily_breakdown(&snapshot, start);
        let summed: u32 = days.iter().map(|d| d.water_ml).sum();
        assert_eq!(summed, 4500);
        assert_eq!(days[0].day, "Mon");
        assert_eq!(days[6].day, "Sun");
    }

    #[test]
    fn sleep_and_food_averages() {
        let start = monday();
        let snapshot = Snapshot {
            sleep: vec![sleep(start, 8.0), sleep(start + Duration::days(1), 6.0)],
            food: vec![
                meal(start, 800.0, 2.0),
                meal(start, 200.0, 1.0),
                meal(start + Duration::days(2), 1000.0, 1.0),
            ],
            ..Snapshot::default()
        };

        let week = summarize_week(&snapshot, start);
        assert_eq!(week.avg_sleep, 7.0);
        assert_eq!(week.sleep_goal_met, 1);
        // day one 1800 kcal, day two 1000 kcal
        assert_eq!(week.avg_calories, 1400.0);
        assert_eq!(week.calorie_goal_met, 1);
        assert_eq!(week.avg_protein, 20.0);
        assert_eq!(week.total_days_logged, 2);
    }

    #[test]
    fn empty_week_reports_zero() {
        let week = summarize_week(&Snapshot::default(), monday());
        assert_eq!(week.avg_water, 0.0);
        assert_eq!(week.total_days_logged, 0);
    }

    #[test]
    fn comparison_uses_previous_week() {
        let start = monday();
        let snapshot = Snapshot {
            water: vec![water(start, 2000), water(start - Duration::days(7), 1000)],
            sleep: vec![sleep(start, 7.0), sleep(start - Duration::days(7), 7.1)],
            ..Snapshot::default()
        };

        let comparison = weekly_health(&snapshot, start + Duration::days(2)).unwrap();
        assert!(matches!(comparison.water_trend, Trend::Up { change } if (change - 100.0).abs() < 1e-9));
        assert!(matches!(comparison.sleep_trend, Trend::Stable { .. }));
        assert_eq!(comparison.calorie_trend, Trend::NoData);
        assert_eq!(comparison.previous.week.start_date, day(2025, 12, 29));
    }

    #[test]
    fn summary_scores_and_counts() {
        let start = monday();
        let mut snapshot = Snapshot::default();
        for offset in 0..5 {
            let date = start + Duration::days(offset);
            snapshot.water.push(water(date, 2600));
            snapshot.sleep.push(sleep(date, 8.0));
            snapshot.food.push(meal(date, 2000.0, 1.0));
            snapshot.fitness.push(FitnessLog {
                id: format!("fit-{offset}"),
                exercise_id: "yoga".into(),
                exercise_name: "Yoga".into(),
                category: crate::models::ExerciseCategory::Other,
                date,
                duration: Some(30.0),
                distance: None,
                elevation_gain: None,
                calories: Some(105),
                notes: None,
            });
        }
        snapshot.tasks = vec![task(start, true), task(start, true), task(start, false)];

        let summary =
            week_summary(&snapshot, start + Duration::days(3), start + Duration::days(3)).unwrap();
        assert!(summary.is_current_week);
        assert_eq!(summary.fitness.total_workouts, 5);
        assert_eq!(summary.fitness.total_time, 150.0);
        assert_eq!(summary.fitness.calories_burned, 525);
        assert_eq!(summary.tasks.total, 3);
        assert_eq!(summary.tasks.completed, 2);
        assert_eq!(summary.food.goal_met, 5);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.verdict, verdict(100));
        assert_eq!(summary.daily.iter().map(|d| d.workouts).sum::<usize>(), 5);
        assert_eq!(summary.insights.len(), 5);
    }

    #[test]
    fn past_week_is_not_current() {
        let summary =
            week_summary(&Snapshot::default(), monday(), monday() + Duration::weeks(2)).unwrap();
        assert!(!summary.is_current_week);
        assert_eq!(summary.score, 50);
        assert!(summary.verdict.starts_with("Decent week"));
        assert_eq!(summary.water.trend, Trend::NoData);
    }

    #[test]
    fn verdict_tiers() {
        assert_eq!(verdict(100), verdict(90));
        assert_ne!(verdict(80), verdict(90));
        assert_ne!(verdict(60), verdict(70));
        assert_eq!(verdict(50), verdict(69));
        assert!(verdict(50).starts_with("Decent week"));
    }

    #[test]
    fn summary_accepts_calorie_days_up_to_120_percent() {
        let start = monday();
        let snapshot = Snapshot {
            food: (0..5)
                .map(|offset| meal(start + Duration::days(offset), 2300.0, 1.0))
                .collect(),
            ..Snapshot::default()
        };

        // 115% of the 2000 kcal goal
        let summary = week_summary(&snapshot, start, start).unwrap();
        assert_eq!(summary.food.goal_met, 5);
        assert_eq!(summary.score, 60);
        assert!(summary.insights.iter().any(|i| i.starts_with("Nutrition is on point")));

        let comparison = weekly_health(&snapshot, start).unwrap();
        assert_eq!(comparison.current.calorie_goal_met, 0);
    }

    #[test]
    fn calendar_edges_are_rejected_without_panicking() {
        assert_eq!(
            week_summary(&Snapshot::default(), NaiveDate::MIN, monday()).err(),
            Some(ValidationError::DateOutOfRange(NaiveDate::MIN))
        );
        assert!(weekly_health(&Snapshot::default(), NaiveDate::MIN).is_err());
        assert_eq!(
            week_bounds(NaiveDate::MIN).is_some(),
            NaiveDate::MIN.weekday() == chrono::Weekday::Mon
        );
        let _ = week_summary(&Snapshot::default(), NaiveDate::MAX, monday());
        let _ = weekly_health(&Snapshot::default(), NaiveDate::MAX);
    }
}
