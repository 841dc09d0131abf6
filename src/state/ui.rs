use ratatui::layout::Rect;

/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Compose,
    Log,
}

/// Context menu opened by right-clicking a log entry. Carries the id of the
/// entry it was opened over, so the ignore flow never goes through shared
/// mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub x: u16,
    pub y: u16,
    pub message_id: String,
    /// Set during render; used for click hit-testing.
    pub area: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IgnoreModalState {
    pub message_id: String,
    pub duration_index: usize,
    /// Confirm/cancel button rects from the last render, for mouse clicks.
    pub confirm_area: Option<Rect>,
    pub cancel_area: Option<Rect>,
}

/// State management for UI-specific state
pub struct UiState {
    pub focus: Focus,
    pub should_quit: bool,
    pub tick_count: u64,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,

    // Context menu / ignore modal (at most one of each open at a time)
    pub context_menu: Option<ContextMenuState>,
    pub ignore_modal: Option<IgnoreModalState>,

    // Transient footer notification: message + tick to close at
    pub notification: Option<(String, u64)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: Focus::Compose,
            should_quit: false,
            tick_count: 0,
            show_quit_confirm: false,
            quit_confirm_selected: 1, // default to "No"
            context_menu: None,
            ignore_modal: None,
            notification: None,
        }
    }
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
        if let Some((_, close_tick)) = &self.notification {
            if self.tick_count >= *close_tick {
                self.notification = None;
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Compose => Focus::Log,
            Focus::Log => Focus::Compose,
        };
    }

    pub fn set_notification(&mut self, message: impl Into<String>, timeout_ticks: u64) {
        self.notification = Some((message.into(), self.tick_count + timeout_ticks));
    }

    pub fn open_context_menu(&mut self, x: u16, y: u16, message_id: String) {
        self.context_menu = Some(ContextMenuState { x, y, message_id, area: None });
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Move the id out of the context menu into the modal. Default duration
    /// is 5 minutes, the second entry of the duration table.
    pub fn open_ignore_modal(&mut self, message_id: String) {
        self.context_menu = None;
        self.ignore_modal = Some(IgnoreModalState {
            message_id,
            duration_index: 1,
            confirm_area: None,
            cancel_area: None,
        });
    }

    pub fn close_ignore_modal(&mut self) {
        self.ignore_modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_expires_on_tick() {
        let mut ui = UiState::default();
        ui.set_notification("hi", 2);
        ui.tick();
        assert!(ui.notification.is_some());
        ui.tick();
        assert!(ui.notification.is_none());
    }

    #[test]
    fn opening_modal_consumes_context_menu_and_carries_id() {
        let mut ui = UiState::default();
        ui.open_context_menu(4, 7, "msg-1".into());
        let id = ui.context_menu.as_ref().unwrap().message_id.clone();
        ui.open_ignore_modal(id);
        assert!(ui.context_menu.is_none());
        let modal = ui.ignore_modal.as_ref().unwrap();
        assert_eq!(modal.message_id, "msg-1");
        assert_eq!(modal.duration_index, 1);
    }
}
