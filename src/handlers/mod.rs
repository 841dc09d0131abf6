pub mod compose;
pub mod log;
pub mod navigation;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::app::App;
use crate::sound::SoundType;
use crate::state::Focus;

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Popups take input priority, innermost first
    if app.ui.show_quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }
    if app.ui.ignore_modal.is_some() {
        log::handle_ignore_modal_input(key, app);
        return;
    }
    if app.ui.context_menu.is_some() {
        log::handle_context_menu_input(key, app);
        return;
    }

    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    match app.ui.focus {
        Focus::Compose => compose::handle_compose_input(key, app),
        Focus::Log => log::handle_log_input(key, app),
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    log::handle_mouse(mouse, app);
}

fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            app.sound_manager.play(SoundType::Hover);
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            app.sound_manager.play(SoundType::Click);
            if app.ui.quit_confirm_selected == 0 {
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.sound_manager.play(SoundType::Click);
            app.ui.show_quit_confirm = false;
        }
        // A second Ctrl+C closes the dialog
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}
