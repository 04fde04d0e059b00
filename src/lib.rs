pub mod app;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod fitness;
pub mod handlers;
pub mod health;
pub mod models;
pub mod notes;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tasks;
pub mod timer;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::Store;
