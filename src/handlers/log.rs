use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{ApiCommand, App};
use crate::sound::SoundType;

const PAGE_LINES: usize = 10;

/// Key handling for the history log pane.
pub fn handle_log_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => {
            app.log.scroll_up(1);
            app.sound_manager.play(SoundType::Hover);
        }
        KeyCode::Down => {
            app.log.scroll_down(1);
            app.sound_manager.play(SoundType::Hover);
        }
        KeyCode::PageUp => app.log.scroll_up(PAGE_LINES),
        KeyCode::PageDown => app.log.scroll_down(PAGE_LINES),
        KeyCode::Home => app.log.scroll_up(usize::MAX / 2),
        _ => {}
    }
}

/// The context menu has a single entry, "Ignore message…".
pub fn handle_context_menu_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            if let Some(menu) = app.ui.context_menu.take() {
                app.sound_manager.play(SoundType::Click);
                app.ui.open_ignore_modal(menu.message_id);
            }
        }
        KeyCode::Esc => app.ui.close_context_menu(),
        _ => {}
    }
}

pub fn handle_ignore_modal_input(key: KeyEvent, app: &mut App) {
    let durations = app.config.ignore_durations_min;
    match key.code {
        KeyCode::Left => {
            if let Some(modal) = app.ui.ignore_modal.as_mut() {
                modal.duration_index = modal.duration_index.saturating_sub(1);
                app.sound_manager.play(SoundType::Hover);
            }
        }
        KeyCode::Right => {
            if let Some(modal) = app.ui.ignore_modal.as_mut() {
                modal.duration_index = (modal.duration_index + 1).min(durations.len() - 1);
                app.sound_manager.play(SoundType::Hover);
            }
        }
        KeyCode::Enter => confirm_ignore(app),
        KeyCode::Esc => {
            app.sound_manager.play(SoundType::Click);
            app.ui.close_ignore_modal();
        }
        _ => {}
    }
}

/// POST the mute request. The modal stays open until the task confirms; on
/// success the task also forces a history refresh, so the muted entry
/// disappears without waiting for the next poll.
fn confirm_ignore(app: &mut App) {
    app.sound_manager.play(SoundType::Click);
    if let Some(modal) = &app.ui.ignore_modal {
        let duration = app.config.ignore_durations_min[modal.duration_index];
        app.send_api(ApiCommand::IgnoreMessage {
            message_id: modal.message_id.clone(),
            duration,
        });
    }
}

pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            if app.ui.ignore_modal.is_some() {
                return;
            }
            match app.log.entry_at(mouse.column, mouse.row) {
                Some(entry) => {
                    let id = entry.id.clone();
                    app.sound_manager.play(SoundType::Dropdown);
                    app.ui.open_context_menu(mouse.column, mouse.row, id);
                }
                None => app.ui.close_context_menu(),
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(modal) = &app.ui.ignore_modal {
                if hit(modal.confirm_area, mouse.column, mouse.row) {
                    confirm_ignore(app);
                } else if hit(modal.cancel_area, mouse.column, mouse.row) {
                    app.sound_manager.play(SoundType::Click);
                    app.ui.close_ignore_modal();
                }
                return;
            }
            if let Some(menu) = &app.ui.context_menu {
                if hit(menu.area, mouse.column, mouse.row) {
                    let id = menu.message_id.clone();
                    app.sound_manager.play(SoundType::Click);
                    app.ui.open_ignore_modal(id);
                } else {
                    // any click outside dismisses the menu
                    app.ui.close_context_menu();
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if over_log(app, mouse) {
                app.log.scroll_up(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if over_log(app, mouse) {
                app.log.scroll_down(1);
            }
        }
        _ => {}
    }
}

fn over_log(app: &App, mouse: MouseEvent) -> bool {
    hit(app.log.viewport, mouse.column, mouse.row)
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.map_or(false, |r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogEntry;
    use crate::sound::SoundManager;
    use tokio::sync::mpsc;

    fn entry(id: &str) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: "2026-08-06 12:00:00".to_string(),
            message: "m".to_string(),
            color: None,
            priority: 1,
        }
    }

    fn right_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn right_click_on_an_entry_opens_the_menu_with_its_id() {
        let sound = SoundManager::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.log.replace(vec![entry("first"), entry("second")]);
        app.log.viewport = Some(Rect::new(0, 0, 40, 10));

        handle_mouse(right_click(3, 1), &mut app);
        let menu = app.ui.context_menu.as_ref().unwrap();
        assert_eq!(menu.message_id, "second");
    }

    #[test]
    fn any_left_click_outside_the_menu_dismisses_it() {
        let sound = SoundManager::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.log.replace(vec![entry("first")]);
        app.log.viewport = Some(Rect::new(0, 0, 40, 10));

        handle_mouse(right_click(0, 0), &mut app);
        assert!(app.ui.context_menu.is_some());
        handle_mouse(left_click(39, 9), &mut app);
        assert!(app.ui.context_menu.is_none());
        assert!(app.ui.ignore_modal.is_none());
    }

    #[test]
    fn menu_click_promotes_to_modal_and_confirm_posts_id_and_duration() {
        let sound = SoundManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.log.replace(vec![entry("target")]);
        app.log.viewport = Some(Rect::new(0, 0, 40, 10));

        handle_mouse(right_click(0, 0), &mut app);
        app.ui.context_menu.as_mut().unwrap().area = Some(Rect::new(1, 1, 20, 3));
        handle_mouse(left_click(2, 2), &mut app);
        assert!(app.ui.context_menu.is_none());

        // pick 10 minutes (index 2) and confirm
        let key = |code| KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
        handle_ignore_modal_input(key(KeyCode::Right), &mut app);
        handle_ignore_modal_input(key(KeyCode::Enter), &mut app);

        let cmd = rx.try_recv().unwrap();
        assert_eq!(
            cmd,
            ApiCommand::IgnoreMessage { message_id: "target".into(), duration: 10 }
        );
        // modal only closes once the task confirms success
        assert!(app.ui.ignore_modal.is_some());
    }

    #[test]
    fn cancel_closes_the_modal_without_posting() {
        let sound = SoundManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.ui.open_ignore_modal("x".into());
        let key = KeyEvent::new(KeyCode::Esc, crossterm::event::KeyModifiers::NONE);
        handle_ignore_modal_input(key, &mut app);
        assert!(app.ui.ignore_modal.is_none());
        assert!(rx.try_recv().is_err());
    }
}
