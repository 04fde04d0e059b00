use crate::config::Config;
use crate::storage::{Store, FOCUS_SESSIONS, TIMER_SETTINGS};
use crate::timer::FocusTimer;
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::MissedTickBehavior};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub timer: Arc<Mutex<FocusTimer>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// The timer starts paused, restored from the persisted settings and
    /// session count.
    pub fn new(config: Config, store: Store) -> Self {
        let settings = store.get(&TIMER_SETTINGS).sanitized();
        let timer = FocusTimer::new(settings, store.get(&FOCUS_SESSIONS));
        Self {
            store: Arc::new(Mutex::new(store)),
            timer: Arc::new(Mutex::new(timer)),
            config: Arc::new(config),
        }
    }

    /// Ticks the focus timer once per second. Ticks are no-ops while paused.
    pub fn spawn_ticker(&self) -> tokio::task::JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let sessions = {
                    let mut timer = state.timer.lock().await;
                    if !timer.tick() {
                        continue;
                    }
                    timer.sessions_completed()
                };

                info!(sessions, "focus session completed");
                let mut store = state.store.lock().await;
                if let Err(err) = store.set(&FOCUS_SESSIONS, &sessions).await {
                    error!("failed to persist focus sessions: {}", err.message);
                }
            }
        })
    }
}
