use serde::{Deserialize, Serialize};

const DEFAULT_FOCUS_MINUTES: u32 = 25;
const DEFAULT_BREAK_MINUTES: u32 = 5;
const MAX_FOCUS_MINUTES: u32 = 120;
const MAX_BREAK_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    /// Minutes.
    pub focus_time: u32,
    /// Minutes.
    pub break_time: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_time: DEFAULT_FOCUS_MINUTES,
            break_time: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl TimerSettings {
    /// Missing or zero inputs fall back to the defaults, everything else is
    /// clamped into range.
    pub fn clamped(focus: Option<i64>, brk: Option<i64>) -> Self {
        fn pick(value: Option<i64>, fallback: u32, max: u32) -> u32 {
            match value {
                Some(v) if v != 0 => v.clamp(1, i64::from(max)) as u32,
                _ => fallback,
            }
        }

        Self {
            focus_time: pick(focus, DEFAULT_FOCUS_MINUTES, MAX_FOCUS_MINUTES),
            break_time: pick(brk, DEFAULT_BREAK_MINUTES, MAX_BREAK_MINUTES),
        }
    }

    /// Applies the same bounds to settings read back from storage.
    pub fn sanitized(self) -> Self {
        Self::clamped(
            Some(i64::from(self.focus_time)),
            Some(i64::from(self.break_time)),
        )
    }

    pub fn seconds_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_time * 60,
            TimerMode::Break => self.break_time * 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Focus => TimerMode::Break,
            TimerMode::Break => TimerMode::Focus,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FocusTimer {
    settings: TimerSettings,
    mode: TimerMode,
    time_left: u32,
    running: bool,
    sessions_completed: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TimerView {
    pub mode: TimerMode,
    pub minutes: u32,
    pub seconds: u32,
    pub time_left: u32,
    pub running: bool,
    pub sessions_completed: u32,
    pub progress: f64,
    pub focus_time: u32,
    pub break_time: u32,
}

impl FocusTimer {
    pub fn new(settings: TimerSettings, sessions_completed: u32) -> Self {
        Self {
            settings,
            mode: TimerMode::Focus,
            time_left: settings.seconds_for(TimerMode::Focus),
            running: false,
            sessions_completed,
        }
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.time_left = self.settings.seconds_for(self.mode);
        self.running = false;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    pub fn apply_settings(&mut self, settings: TimerSettings) {
        self.settings = settings;
        self.reset();
    }

    /// Advances the countdown by one second. Returns true when a focus
    /// period just finished.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return false;
        }

        let finished_focus = self.mode == TimerMode::Focus;
        if finished_focus {
            self.sessions_completed = self.sessions_completed.saturating_add(1);
        }
        self.toggle_mode();
        finished_focus
    }

    pub fn progress(&self) -> f64 {
        let total = self.settings.seconds_for(self.mode);
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.time_left.min(total)) / f64::from(total) * 100.0
    }

    pub fn view(&self) -> TimerView {
        TimerView {
            mode: self.mode,
            minutes: self.time_left / 60,
            seconds: self.time_left % 60,
            time_left: self.time_left,
            running: self.running,
            sessions_completed: self.sessions_completed,
            progress: self.progress(),
            focus_time: self.settings.focus_time,
            break_time: self.settings.break_time,
        }
    }
}
