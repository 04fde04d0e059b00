use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/api/tasks/stats", get(handlers::task_stats))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route(
            "/api/task-types",
            get(handlers::list_task_types).post(handlers::create_task_type),
        )
        .route("/api/task-types/:id", delete(handlers::delete_task_type))
        .route("/api/calendar/day/:date", get(handlers::calendar_day))
        .route("/api/calendar/:year/:month", get(handlers::calendar_month))
        .route("/api/notes", get(handlers::list_notes).post(handlers::create_note))
        .route("/api/notes/:id", delete(handlers::delete_note))
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/timer/start", post(handlers::start_timer))
        .route("/api/timer/pause", post(handlers::pause_timer))
        .route("/api/timer/reset", post(handlers::reset_timer))
        .route("/api/timer/toggle-mode", post(handlers::toggle_timer_mode))
        .route("/api/timer/settings", put(handlers::update_timer_settings))
        .route("/api/water", post(handlers::add_water))
        .route("/api/water/today", get(handlers::water_today))
        .route("/api/water/last", delete(handlers::undo_water))
        .route("/api/sleep", get(handlers::list_sleep).post(handlers::log_sleep))
        .route("/api/sleep/today", get(handlers::sleep_today))
        .route("/api/sleep/:date", delete(handlers::delete_sleep))
        .route("/api/food", post(handlers::log_food))
        .route("/api/food/custom", post(handlers::log_custom_food))
        .route("/api/food/today", get(handlers::food_today))
        .route("/api/food/:id", delete(handlers::delete_food))
        .route("/api/foods", get(handlers::search_foods))
        .route("/api/goals", get(handlers::get_goals).put(handlers::update_goals))
        .route("/api/exercises", get(handlers::list_exercises))
        .route("/api/exercises/categories", get(handlers::list_categories))
        .route("/api/fitness/estimate", get(handlers::estimate))
        .route(
            "/api/fitness/workouts",
            get(handlers::list_workouts).post(handlers::add_workout),
        )
        .route("/api/fitness/workouts/:id", delete(handlers::delete_workout))
        .route("/api/fitness/today", get(handlers::fitness_today))
        .route("/api/fitness/streak", get(handlers::fitness_streak))
        .route("/api/fitness/records", get(handlers::personal_records))
        .route(
            "/api/fitness/goals",
            get(handlers::list_fitness_goals).post(handlers::create_fitness_goal),
        )
        .route("/api/fitness/goals/:id", delete(handlers::delete_fitness_goal))
        .route("/api/summary/weekly", get(handlers::weekly_health))
        .route("/api/summary/week", get(handlers::week_summary))
        .with_state(state)
}
