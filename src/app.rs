// client/src/app.rs

use tokio::sync::mpsc;

use crate::model::{LogEntry, OutgoingMessage};
use crate::prefs;
use crate::sound::{SoundManager, SoundType};
use crate::state::{AppConfig, ComposeState, LogState, UiState};
use crate::ui::backgrounds::BackgroundManager;
use crate::ui::themes::ThemeManager;

/// Requests handed to the API task.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    SendMessage(OutgoingMessage),
    IgnoreMessage { message_id: String, duration: i64 },
    ClearHistory,
    RefreshHistory,
}

/// Results coming back from the API task. Failures never produce an event —
/// they are logged in the task, and the UI stays as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    History(Vec<LogEntry>),
    MessageSent,
    IgnoreConfirmed,
    HistoryCleared,
}

pub struct App<'a> {
    pub config: AppConfig,
    pub ui: UiState,
    pub compose: ComposeState,
    pub log: LogState,
    pub themes: ThemeManager,
    pub backgrounds: BackgroundManager,
    pub sound_manager: &'a SoundManager,
    pub to_api: mpsc::UnboundedSender<ApiCommand>,
    pub server_url: String,
}

impl<'a> App<'a> {
    pub fn new(
        to_api: mpsc::UnboundedSender<ApiCommand>,
        sound_manager: &'a SoundManager,
        server_url: String,
    ) -> Self {
        let mut app = Self {
            config: AppConfig::default(),
            ui: UiState::default(),
            compose: ComposeState::default(),
            log: LogState::default(),
            themes: ThemeManager::new(),
            backgrounds: BackgroundManager::new(),
            sound_manager,
            to_api,
            server_url,
        };
        // restore the persisted theme; unknown names fall back inside the
        // manager and the canonical choice is written back
        let saved = if prefs::is_initialized() {
            prefs::global_prefs().selected_theme.clone()
        } else {
            prefs::DEFAULT_THEME.to_string()
        };
        app.apply_theme(&saved);
        app
    }

    /// Make `name` the current theme and run every side effect in order:
    /// stop all animations, start the one the theme names, persist.
    pub fn apply_theme(&mut self, name: &str) {
        let applied = self.themes.select_by_name(name);
        self.backgrounds.set_active(self.themes.current().animation());
        if prefs::is_initialized() {
            let mut p = prefs::global_prefs_mut();
            p.selected_theme = applied.to_string();
            p.save();
        }
    }

    pub fn cycle_theme(&mut self) {
        let next = self.themes.cycle();
        let next = next.to_string();
        self.apply_theme(&next);
        self.sound_manager.play(SoundType::Dropdown);
    }

    pub fn send_api(&self, cmd: ApiCommand) {
        if self.to_api.send(cmd).is_err() {
            tracing::error!("API task is gone; command dropped");
        }
    }

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::History(entries) => {
                self.log.replace(entries);
            }
            ApiEvent::MessageSent => {
                // a plain reset would leave priority/speed where the user
                // put them; restore the documented defaults
                self.compose.reset_to_defaults();
            }
            ApiEvent::IgnoreConfirmed => {
                self.ui.close_ignore_modal();
            }
            ApiEvent::HistoryCleared => {
                // the forced refresh arrives as a History event
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        self.backgrounds.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::backgrounds::AnimationKind;

    fn app(sound: &SoundManager) -> (App<'_>, mpsc::UnboundedReceiver<ApiCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(tx, sound, "http://localhost:5501".into()), rx)
    }

    fn entry(id: &str) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: "2026-08-06 12:00:00".to_string(),
            message: "m".to_string(),
            color: None,
            priority: 1,
        }
    }

    #[test]
    fn startup_applies_the_default_theme_and_its_animation() {
        let sound = SoundManager::new();
        let (app, _rx) = app(&sound);
        assert_eq!(app.themes.current_name(), "matrix");
        assert_eq!(app.backgrounds.active(), Some(AnimationKind::MatrixRain));
        assert_eq!(app.backgrounds.running_count(), 1);
    }

    #[test]
    fn theme_switch_swaps_the_running_animation() {
        let sound = SoundManager::new();
        let (mut app, _rx) = app(&sound);
        app.apply_theme("office");
        assert_eq!(app.backgrounds.active(), None);
        assert_eq!(app.backgrounds.running_count(), 0);
        app.apply_theme("cherry-blossom");
        assert_eq!(app.backgrounds.active(), Some(AnimationKind::CherryBlossom));
        assert_eq!(app.backgrounds.running_count(), 1);
    }

    #[test]
    fn history_event_replaces_the_log() {
        let sound = SoundManager::new();
        let (mut app, _rx) = app(&sound);
        app.handle_api_event(ApiEvent::History(vec![entry("a"), entry("b")]));
        assert_eq!(app.log.entries.len(), 2);
        app.handle_api_event(ApiEvent::History(vec![]));
        assert!(app.log.entries.is_empty());
    }

    #[test]
    fn message_sent_event_resets_the_form() {
        let sound = SoundManager::new();
        let (mut app, _rx) = app(&sound);
        app.compose.text = "pending".to_string();
        app.compose.priority = 7;
        app.handle_api_event(ApiEvent::MessageSent);
        assert_eq!(app.compose.text, "");
        assert_eq!(app.compose.priority, 1);
        assert_eq!(app.compose.speed_readout(), "0.050");
    }

    #[test]
    fn ignore_confirmed_closes_the_modal() {
        let sound = SoundManager::new();
        let (mut app, _rx) = app(&sound);
        app.ui.open_ignore_modal("msg-9".into());
        app.handle_api_event(ApiEvent::IgnoreConfirmed);
        assert!(app.ui.ignore_modal.is_none());
    }
}
