use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{OutgoingMessage, BLINK_MODES};
use crate::state::AppConfig;

pub const DEFAULT_COLOR: &str = "#ffffff";
pub const DEFAULT_BG_COLOR: &str = "#000000";
pub const DEFAULT_PRIORITY: i64 = 1;
pub const DEFAULT_SPEED: f64 = 0.05;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Text,
    Priority,
    Color,
    BgColor,
    BlinkMode,
    Speed,
}

impl ComposeField {
    pub const ALL: [ComposeField; 6] = [
        ComposeField::Text,
        ComposeField::Priority,
        ComposeField::Color,
        ComposeField::BgColor,
        ComposeField::BlinkMode,
        ComposeField::Speed,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the message composition form.
pub struct ComposeState {
    pub text: String,
    pub priority: i64,
    pub color: String,
    pub bg_color: String,
    pub blink_mode_index: usize,
    pub speed: f64,
    pub focused: ComposeField,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self {
            text: String::new(),
            priority: DEFAULT_PRIORITY,
            color: DEFAULT_COLOR.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
            blink_mode_index: 0,
            speed: DEFAULT_SPEED,
            focused: ComposeField::Text,
        }
    }
}

impl ComposeState {
    /// The live readout paired with the speed control. Always exactly three
    /// decimal places, matching the marquee server's displayed precision.
    pub fn speed_readout(&self) -> String {
        format!("{:.3}", self.speed)
    }

    pub fn blink_mode(&self) -> i64 {
        BLINK_MODES[self.blink_mode_index].0
    }

    pub fn blink_mode_label(&self) -> &'static str {
        BLINK_MODES[self.blink_mode_index].1
    }

    pub fn cycle_blink_mode(&mut self, forward: bool) {
        let len = BLINK_MODES.len();
        self.blink_mode_index = if forward {
            (self.blink_mode_index + 1) % len
        } else {
            (self.blink_mode_index + len - 1) % len
        };
    }

    pub fn adjust_priority(&mut self, delta: i64, config: &AppConfig) {
        let (min, max) = config.priority_range;
        self.priority = (self.priority + delta).clamp(min, max);
    }

    pub fn adjust_speed(&mut self, steps: i64, config: &AppConfig) {
        let (min, max) = config.speed_range;
        self.speed = (self.speed + steps as f64 * config.speed_step).clamp(min, max);
        // keep the stored value at readout precision so repeated stepping
        // doesn't accumulate float noise
        self.speed = (self.speed * 1000.0).round() / 1000.0;
    }

    pub fn push_char(&mut self, c: char, config: &AppConfig) {
        match self.focused {
            ComposeField::Text => {
                if self.text.len() < config.max_message_length {
                    self.text.push(c);
                }
            }
            ComposeField::Color => {
                if self.color.len() < 7 && (c == '#' || c.is_ascii_hexdigit()) {
                    self.color.push(c);
                }
            }
            ComposeField::BgColor => {
                if self.bg_color.len() < 7 && (c == '#' || c.is_ascii_hexdigit()) {
                    self.bg_color.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focused {
            ComposeField::Text => {
                self.text.pop();
            }
            ComposeField::Color => {
                self.color.pop();
            }
            ComposeField::BgColor => {
                self.bg_color.pop();
            }
            _ => {}
        }
    }

    /// Coerce the form into the wire message. Mirrors what the browser's
    /// input widgets constrained structurally: non-empty text and well-formed
    /// hex colors.
    pub fn to_outgoing(&self) -> Result<OutgoingMessage, String> {
        if self.text.trim().is_empty() {
            return Err("Message text cannot be empty".to_string());
        }
        if !HEX_COLOR_RE.is_match(&self.color) {
            return Err(format!("Bad text color '{}': expected #rrggbb", self.color));
        }
        if !HEX_COLOR_RE.is_match(&self.bg_color) {
            return Err(format!("Bad background color '{}': expected #rrggbb", self.bg_color));
        }
        Ok(OutgoingMessage {
            text: self.text.clone(),
            priority: self.priority,
            color: self.color.clone(),
            bg_color: self.bg_color.clone(),
            blink_mode: self.blink_mode(),
            speed: self.speed,
        })
    }

    /// Restore the documented defaults after a confirmed send. A plain field
    /// clear would leave priority and speed wherever the user put them.
    pub fn reset_to_defaults(&mut self) {
        self.text.clear();
        self.priority = DEFAULT_PRIORITY;
        self.color = DEFAULT_COLOR.to_string();
        self.bg_color = DEFAULT_BG_COLOR.to_string();
        self.blink_mode_index = 0;
        self.speed = DEFAULT_SPEED;
    }
}
