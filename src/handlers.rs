use crate::calendar::{daily_quote, greeting, holiday_on, long_date, Holiday, Quote};
use crate::catalog::{search_exercises, Exercise, CATEGORIES};
use crate::errors::{AppError, ValidationError};
use crate::fitness::{
    self, FitnessStreak, FitnessToday, GoalProgress, NewFitnessGoal, NewWorkout, RecordView,
    WorkoutOutcome,
};
use crate::health::{
    self, FoodToday, GoalsUpdate, NewCustomFood, NewFoodLog, NewSleep, NewWater, SleepToday,
    WaterToday,
};
use crate::models::{
    ExerciseCategory, FitnessLog, FoodItem, FoodLog, HealthGoals, Note, SleepLog, Task, TaskType,
    WaterLog, WeeklyFitnessGoal,
};
use crate::notes::{self, NewNote};
use crate::state::AppState;
use crate::stats::{self, HealthComparison, Snapshot, WeekSummary};
use crate::storage::{
    CUSTOM_FOODS, FITNESS_GOALS, FITNESS_LOGS, FOOD_LOGS, HEALTH_GOALS, NOTES, PERSONAL_RECORDS,
    SLEEP_LOGS, TASKS, TASK_TYPES, TIMER_SETTINGS, WATER_LOGS,
};
use crate::tasks::{self, CalendarDay, CalendarMonth, DayTasks, NewTask, NewTaskType, TaskStats};
use crate::timer::{TimerSettings, TimerView};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use tracing::info;

type ApiResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: Option<ExerciseCategory>,
}

#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub exercise_id: String,
    pub duration: f64,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub elevation_gain: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CaloriesEstimate {
    pub exercise_id: String,
    pub calories: u32,
    pub body_weight_kg: f64,
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: ExerciseCategory,
    pub name: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct TimerSettingsUpdate {
    #[serde(default)]
    pub focus_time: Option<i64>,
    #[serde(default)]
    pub break_time: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub greeting: &'static str,
    pub date: String,
    pub quote: Quote,
    pub holiday: Option<Holiday>,
    pub overdue_tasks: usize,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let now = Local::now();
    let date = now.date_naive();
    let store = state.store.lock().await;
    let list = store.get(&TASKS);

    Ok(Json(Dashboard {
        greeting: greeting(now.hour()),
        date: long_date(date),
        quote: daily_quote(date),
        holiday: holiday_on(date),
        overdue_tasks: tasks::overdue_count(&list, date),
    }))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<DayTasks> {
    let today = today();
    let store = state.store.lock().await;
    let list = store.get(&TASKS);
    Ok(Json(tasks::day_view(&list, query.date.unwrap_or(today), today)))
}

pub async fn task_stats(State(state): State<AppState>) -> ApiResult<TaskStats> {
    let store = state.store.lock().await;
    Ok(Json(tasks::task_stats(&store.get(&TASKS), today())))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let mut store = state.store.lock().await;
    let mut list = store.get(&TASKS);
    let task = tasks::create_task(&mut list, payload, Local::now())?;
    store.set(&TASKS, &list).await?;

    info!(id = %task.id, due = %task.due_date, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Task> {
    let mut store = state.store.lock().await;
    let mut list = store.get(&TASKS);
    let task = tasks::toggle_task(&mut list, &id).ok_or_else(|| AppError::not_found("task", &id))?;
    store.set(&TASKS, &list).await?;

    info!(id = %task.id, completed = task.completed, "task toggled");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut list = store.get(&TASKS);
    if !tasks::delete_task(&mut list, &id) {
        return Err(AppError::not_found("task", &id));
    }
    store.set(&TASKS, &list).await?;

    info!(%id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_task_types(State(state): State<AppState>) -> ApiResult<Vec<TaskType>> {
    let store = state.store.lock().await;
    Ok(Json(store.get(&TASK_TYPES)))
}

pub async fn create_task_type(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskType>,
) -> Result<(StatusCode, Json<TaskType>), AppError> {
    let mut store = state.store.lock().await;
    let mut types = store.get(&TASK_TYPES);
    let task_type = tasks::add_task_type(&mut types, payload)?;
    store.set(&TASK_TYPES, &types).await?;

    info!(id = %task_type.id, name = %task_type.name, "task type created");
    Ok((StatusCode::CREATED, Json(task_type)))
}

pub async fn delete_task_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut types = store.get(&TASK_TYPES);
    if !tasks::delete_task_type(&mut types, &id) {
        return Err(AppError::not_found("task type", &id));
    }
    store.set(&TASK_TYPES, &types).await?;

    info!(%id, "task type deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn calendar_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<CalendarDay> {
    let store = state.store.lock().await;
    Ok(Json(tasks::calendar_day(
        &store.get(&TASKS),
        &store.get(&TASK_TYPES),
        date,
    )))
}

pub async fn calendar_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> ApiResult<CalendarMonth> {
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }
    let store = state.store.lock().await;
    Ok(Json(tasks::calendar_month(&store.get(&TASKS), year, month)))
}

pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Vec<Note>> {
    let store = state.store.lock().await;
    Ok(Json(store.get(&NOTES)))
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NewNote>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let mut store = state.store.lock().await;
    let mut list = store.get(&NOTES);
    let note = notes::add_note(&mut list, &payload.content, Local::now())?;
    store.set(&NOTES, &list).await?;

    info!(id = %note.id, "note added");
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut list = store.get(&NOTES);
    if !notes::delete_note(&mut list, &id) {
        return Err(AppError::not_found("note", &id));
    }
    store.set(&NOTES, &list).await?;

    info!(%id, "note deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_timer(State(state): State<AppState>) -> Json<TimerView> {
    Json(state.timer.lock().await.view())
}

pub async fn start_timer(State(state): State<AppState>) -> Json<TimerView> {
    let mut timer = state.timer.lock().await;
    timer.start();
    info!("timer started");
    Json(timer.view())
}

pub async fn pause_timer(State(state): State<AppState>) -> Json<TimerView> {
    let mut timer = state.timer.lock().await;
    timer.pause();
    info!("timer paused");
    Json(timer.view())
}

pub async fn reset_timer(State(state): State<AppState>) -> Json<TimerView> {
    let mut timer = state.timer.lock().await;
    timer.reset();
    Json(timer.view())
}

pub async fn toggle_timer_mode(State(state): State<AppState>) -> Json<TimerView> {
    let mut timer = state.timer.lock().await;
    timer.toggle_mode();
    info!(mode = ?timer.view().mode, "timer mode switched");
    Json(timer.view())
}

pub async fn update_timer_settings(
    State(state): State<AppState>,
    Json(payload): Json<TimerSettingsUpdate>,
) -> ApiResult<TimerView> {
    let settings = TimerSettings::clamped(payload.focus_time, payload.break_time);
    let view = {
        let mut timer = state.timer.lock().await;
        timer.apply_settings(settings);
        timer.view()
    };

    let mut store = state.store.lock().await;
    store.set(&TIMER_SETTINGS, &settings).await?;

    info!(focus = settings.focus_time, brk = settings.break_time, "timer settings saved");
    Ok(Json(view))
}

pub async fn water_today(State(state): State<AppState>) -> ApiResult<WaterToday> {
    let store = state.store.lock().await;
    Ok(Json(health::water_today(
        &store.get(&WATER_LOGS),
        &store.get(&HEALTH_GOALS),
        today(),
    )))
}

pub async fn add_water(
    State(state): State<AppState>,
    Json(payload): Json<NewWater>,
) -> Result<(StatusCode, Json<WaterLog>), AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&WATER_LOGS);
    let log = health::add_water(&mut logs, payload.amount, Local::now())?;
    store.set(&WATER_LOGS, &logs).await?;

    info!(amount = log.amount, "water logged");
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn undo_water(State(state): State<AppState>) -> ApiResult<WaterLog> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&WATER_LOGS);
    let removed = health::remove_last_today(&mut logs, today())
        .ok_or_else(|| AppError::not_found("water log", "today"))?;
    store.set(&WATER_LOGS, &logs).await?;

    info!(amount = removed.amount, "water entry removed");
    Ok(Json(removed))
}

pub async fn sleep_today(State(state): State<AppState>) -> ApiResult<SleepToday> {
    let store = state.store.lock().await;
    Ok(Json(health::sleep_today(
        &store.get(&SLEEP_LOGS),
        &store.get(&HEALTH_GOALS),
        today(),
    )))
}

pub async fn list_sleep(State(state): State<AppState>) -> ApiResult<Vec<SleepLog>> {
    let store = state.store.lock().await;
    Ok(Json(store.get(&SLEEP_LOGS)))
}

pub async fn log_sleep(
    State(state): State<AppState>,
    Json(payload): Json<NewSleep>,
) -> Result<(StatusCode, Json<SleepLog>), AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&SLEEP_LOGS);
    let log = health::log_sleep(&mut logs, payload, today())?;
    store.set(&SLEEP_LOGS, &logs).await?;

    info!(date = %log.date, hours = log.duration, "sleep logged");
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn delete_sleep(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&SLEEP_LOGS);
    if !health::delete_sleep_for(&mut logs, date) {
        return Err(AppError::not_found("sleep log", &date.to_string()));
    }
    store.set(&SLEEP_LOGS, &logs).await?;

    info!(%date, "sleep log deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn food_today(State(state): State<AppState>) -> ApiResult<FoodToday> {
    let store = state.store.lock().await;
    Ok(Json(health::food_today(
        &store.get(&FOOD_LOGS),
        &store.get(&HEALTH_GOALS),
        today(),
    )))
}

pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<FoodItem>> {
    let store = state.store.lock().await;
    Ok(Json(health::search_foods(&store.get(&CUSTOM_FOODS), &query.q)))
}

pub async fn log_food(
    State(state): State<AppState>,
    Json(payload): Json<NewFoodLog>,
) -> Result<(StatusCode, Json<FoodLog>), AppError> {
    let mut store = state.store.lock().await;
    let food = health::find_food(&payload.food_id, &store.get(&CUSTOM_FOODS))
        .ok_or_else(|| ValidationError::UnknownFood(payload.food_id.clone()))?;

    let mut logs = store.get(&FOOD_LOGS);
    let log = health::log_food(&mut logs, food, payload.servings, payload.meal_type, Local::now())?;
    store.set(&FOOD_LOGS, &logs).await?;

    info!(food = %log.food.name, servings = log.servings, "food logged");
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn log_custom_food(
    State(state): State<AppState>,
    Json(payload): Json<NewCustomFood>,
) -> Result<(StatusCode, Json<FoodLog>), AppError> {
    let mut store = state.store.lock().await;
    let mut custom = store.get(&CUSTOM_FOODS);
    let food = health::add_custom_food(&mut custom, &payload)?;

    let mut logs = store.get(&FOOD_LOGS);
    let log = health::log_food(&mut logs, food, payload.servings, payload.meal_type, Local::now())?;
    store.set(&CUSTOM_FOODS, &custom).await?;
    store.set(&FOOD_LOGS, &logs).await?;

    info!(food = %log.food.name, "custom food added and logged");
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&FOOD_LOGS);
    if !health::delete_food_log(&mut logs, &id) {
        return Err(AppError::not_found("food log", &id));
    }
    store.set(&FOOD_LOGS, &logs).await?;

    info!(%id, "food log deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_goals(State(state): State<AppState>) -> ApiResult<HealthGoals> {
    let store = state.store.lock().await;
    Ok(Json(store.get(&HEALTH_GOALS)))
}

pub async fn update_goals(
    State(state): State<AppState>,
    Json(payload): Json<GoalsUpdate>,
) -> ApiResult<HealthGoals> {
    let mut store = state.store.lock().await;
    let mut goals = store.get(&HEALTH_GOALS);
    health::update_goals(&mut goals, payload)?;
    store.set(&HEALTH_GOALS, &goals).await?;

    info!(water = goals.daily_water, calories = goals.daily_calories, "health goals updated");
    Ok(Json(goals))
}

pub async fn list_exercises(Query(query): Query<SearchQuery>) -> Json<Vec<&'static Exercise>> {
    Json(search_exercises(query.category, &query.q))
}

pub async fn list_categories() -> Json<Vec<CategoryView>> {
    Json(
        CATEGORIES
            .iter()
            .map(|(id, name)| CategoryView { id: *id, name: *name })
            .collect(),
    )
}

pub async fn estimate(
    State(state): State<AppState>,
    Query(query): Query<EstimateQuery>,
) -> ApiResult<CaloriesEstimate> {
    let weight = state.config.body_weight_kg;
    let calories = fitness::estimate_workout(
        &query.exercise_id,
        query.duration,
        query.distance,
        query.elevation_gain,
        weight,
    )?;
    Ok(Json(CaloriesEstimate {
        exercise_id: query.exercise_id,
        calories,
        body_weight_kg: weight,
    }))
}

pub async fn list_workouts(State(state): State<AppState>) -> ApiResult<Vec<FitnessLog>> {
    let store = state.store.lock().await;
    Ok(Json(store.get(&FITNESS_LOGS)))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Json(payload): Json<NewWorkout>,
) -> Result<(StatusCode, Json<WorkoutOutcome>), AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&FITNESS_LOGS);
    let mut records = store.get(&PERSONAL_RECORDS);
    let outcome = fitness::add_workout(
        &mut logs,
        &mut records,
        payload,
        state.config.body_weight_kg,
        today(),
    )?;
    store.set(&FITNESS_LOGS, &logs).await?;
    if !outcome.new_records.is_empty() {
        store.set(&PERSONAL_RECORDS, &records).await?;
    }

    info!(
        exercise = %outcome.log.exercise_id,
        calories = ?outcome.log.calories,
        new_records = outcome.new_records.len(),
        "workout logged"
    );
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut logs = store.get(&FITNESS_LOGS);
    if !fitness::delete_workout(&mut logs, &id) {
        return Err(AppError::not_found("workout", &id));
    }
    store.set(&FITNESS_LOGS, &logs).await?;

    info!(%id, "workout deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn fitness_today(State(state): State<AppState>) -> ApiResult<FitnessToday> {
    let store = state.store.lock().await;
    Ok(Json(fitness::fitness_today(&store.get(&FITNESS_LOGS), today())))
}

pub async fn fitness_streak(State(state): State<AppState>) -> ApiResult<FitnessStreak> {
    let store = state.store.lock().await;
    Ok(Json(fitness::weekly_streak(&store.get(&FITNESS_LOGS), today())))
}

pub async fn personal_records(State(state): State<AppState>) -> ApiResult<Vec<RecordView>> {
    let store = state.store.lock().await;
    Ok(Json(fitness::record_views(&store.get(&PERSONAL_RECORDS))))
}

pub async fn list_fitness_goals(State(state): State<AppState>) -> ApiResult<Vec<GoalProgress>> {
    let store = state.store.lock().await;
    Ok(Json(fitness::goal_progress(
        &store.get(&FITNESS_GOALS),
        &store.get(&FITNESS_LOGS),
        today(),
    )))
}

pub async fn create_fitness_goal(
    State(state): State<AppState>,
    Json(payload): Json<NewFitnessGoal>,
) -> Result<(StatusCode, Json<WeeklyFitnessGoal>), AppError> {
    let mut store = state.store.lock().await;
    let mut goals = store.get(&FITNESS_GOALS);
    let goal = fitness::add_goal(&mut goals, payload, Local::now())?;
    store.set(&FITNESS_GOALS, &goals).await?;

    info!(id = %goal.id, target = goal.target_value, "fitness goal created");
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn delete_fitness_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let mut goals = store.get(&FITNESS_GOALS);
    if !fitness::delete_goal(&mut goals, &id) {
        return Err(AppError::not_found("fitness goal", &id));
    }
    store.set(&FITNESS_GOALS, &goals).await?;

    info!(%id, "fitness goal deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn weekly_health(State(state): State<AppState>) -> ApiResult<HealthComparison> {
    let snapshot = Snapshot::load(&*state.store.lock().await);
    Ok(Json(stats::weekly_health(&snapshot, today())?))
}

pub async fn week_summary(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<WeekSummary> {
    let today = today();
    let snapshot = Snapshot::load(&*state.store.lock().await);
    Ok(Json(stats::week_summary(
        &snapshot,
        query.date.unwrap_or(today),
        today,
    )?))
}
