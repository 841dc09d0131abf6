pub mod compose;
pub mod log;
pub mod ui;

pub use compose::{ComposeField, ComposeState};
pub use log::LogState;
pub use ui::{ContextMenuState, Focus, IgnoreModalState, UiState};

/// Configuration constants for the application
pub struct AppConfig {
    pub tick_rate_ms: u64,
    pub poll_interval_ms: u64,
    pub max_message_length: usize,
    pub notification_timeout_ticks: u64,
    pub priority_range: (i64, i64),
    pub speed_step: f64,
    pub speed_range: (f64, f64),
    pub ignore_durations_min: &'static [i64],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            poll_interval_ms: 1000,
            max_message_length: 500,
            notification_timeout_ticks: 60, // 3s at the 50ms tick rate
            priority_range: (1, 10),
            speed_step: 0.005,
            speed_range: (0.005, 1.0),
            ignore_durations_min: &[1, 5, 10, 30, 60],
        }
    }
}
