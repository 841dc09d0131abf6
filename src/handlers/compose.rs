use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{ApiCommand, App};
use crate::sound::SoundType;
use crate::state::ComposeField;

/// Key handling for the message composition form.
pub fn handle_compose_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => {
            app.compose.focused = app.compose.focused.prev();
            app.sound_manager.play(SoundType::Hover);
        }
        KeyCode::Down => {
            app.compose.focused = app.compose.focused.next();
            app.sound_manager.play(SoundType::Hover);
        }
        KeyCode::Left => adjust(app, -1),
        KeyCode::Right => adjust(app, 1),
        KeyCode::Char(c) => app.compose.push_char(c, &app.config),
        KeyCode::Backspace => app.compose.pop_char(),
        KeyCode::Enter => submit(app),
        _ => {}
    }
}

fn adjust(app: &mut App, delta: i64) {
    match app.compose.focused {
        ComposeField::Priority => {
            app.compose.adjust_priority(delta, &app.config);
            app.sound_manager.play(SoundType::Hover);
        }
        ComposeField::Speed => {
            // the paired readout re-renders from this value every frame,
            // always at three decimals
            app.compose.adjust_speed(delta, &app.config);
            app.sound_manager.play(SoundType::Hover);
        }
        ComposeField::BlinkMode => {
            app.compose.cycle_blink_mode(delta > 0);
            app.sound_manager.play(SoundType::Hover);
        }
        _ => {}
    }
}

/// Coerce the form and hand it to the API task. The form only resets when
/// the task reports success; a failed send leaves it untouched.
fn submit(app: &mut App) {
    app.sound_manager.play(SoundType::Click);
    match app.compose.to_outgoing() {
        Ok(msg) => {
            app.send_api(ApiCommand::SendMessage(msg));
        }
        Err(reason) => {
            app.sound_manager.play(SoundType::Error);
            let timeout = app.config.notification_timeout_ticks;
            app.ui.set_notification(reason, timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::SoundManager;
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_with_valid_fields_issues_exactly_one_send_command() {
        let sound = SoundManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        for c in "hello".chars() {
            handle_compose_input(key(KeyCode::Char(c)), &mut app);
        }
        handle_compose_input(key(KeyCode::Enter), &mut app);

        match rx.try_recv().unwrap() {
            ApiCommand::SendMessage(msg) => {
                assert_eq!(msg.text, "hello");
                assert_eq!(msg.priority, 1);
                assert_eq!(msg.color, "#ffffff");
                assert_eq!(msg.bg_color, "#000000");
                assert_eq!(msg.blink_mode, 0);
                assert_eq!(msg.speed, 0.05);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "submit must POST exactly once");
        // the form waits for the task's success event before resetting
        assert_eq!(app.compose.text, "hello");
    }

    #[test]
    fn empty_text_is_rejected_locally_without_a_post() {
        let sound = SoundManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        handle_compose_input(key(KeyCode::Enter), &mut app);
        assert!(rx.try_recv().is_err());
        assert!(app.ui.notification.is_some());
    }

    #[test]
    fn adjusting_speed_updates_the_readout_and_posts_nothing() {
        let sound = SoundManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.compose.focused = crate::state::ComposeField::Speed;
        handle_compose_input(key(KeyCode::Right), &mut app);
        handle_compose_input(key(KeyCode::Right), &mut app);
        assert_eq!(app.compose.speed_readout(), "0.060");
        handle_compose_input(key(KeyCode::Left), &mut app);
        assert_eq!(app.compose.speed_readout(), "0.055");
        assert!(rx.try_recv().is_err());
    }
}
