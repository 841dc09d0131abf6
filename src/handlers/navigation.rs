use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{ApiCommand, App};
use crate::prefs;
use crate::sound::SoundType;

/// Handle global shortcuts that work across all modes
pub fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1; // Default to "No"
            app.sound_manager.play(SoundType::Dropdown);
            true
        }
        KeyCode::Tab => {
            app.ui.toggle_focus();
            app.sound_manager.play(SoundType::Hover);
            true
        }
        KeyCode::F(8) => {
            app.cycle_theme();
            true
        }
        KeyCode::F(2) => {
            if prefs::is_initialized() {
                let enabled = {
                    let mut p = prefs::global_prefs_mut();
                    p.sound_effects_enabled = !p.sound_effects_enabled;
                    p.save();
                    p.sound_effects_enabled
                };
                let label = if enabled { "Sound effects on" } else { "Sound effects off" };
                let timeout = app.config.notification_timeout_ticks;
                app.ui.set_notification(label, timeout);
            }
            true
        }
        // the "clear log" button of the web UI
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sound_manager.play(SoundType::Click);
            app.send_api(ApiCommand::ClearHistory);
            true
        }
        _ => false,
    }
}
