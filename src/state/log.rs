use ratatui::layout::Rect;

use crate::model::LogEntry;

/// State of the polled message-history log.
///
/// The poller replaces the whole entry list on every successful fetch; a
/// failed fetch leaves the previous render untouched. Entries have no
/// identity across refreshes beyond their server-assigned id.
pub struct LogState {
    pub entries: Vec<LogEntry>,
    pub scroll_offset: usize,
    /// Inner area of the last rendered log pane, for mouse hit-testing.
    pub viewport: Option<Rect>,
}

impl Default for LogState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            scroll_offset: 0,
            viewport: None,
        }
    }
}

impl LogState {
    /// Full replace, in the order the server sent (newest first).
    pub fn replace(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries;
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = self.entries.len().saturating_sub(1);
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.entries.len().saturating_sub(1));
    }

    /// Map a terminal cell to the log entry rendered there, if any.
    /// One entry per row, offset by the current scroll position.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<&LogEntry> {
        let viewport = self.viewport?;
        if column < viewport.x
            || column >= viewport.x + viewport.width
            || row < viewport.y
            || row >= viewport.y + viewport.height
        {
            return None;
        }
        let index = self.scroll_offset + (row - viewport.y) as usize;
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, message: &str) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: "2026-08-06 12:00:00".to_string(),
            message: message.to_string(),
            color: None,
            priority: 1,
        }
    }

    #[test]
    fn replace_swaps_all_entries_in_order() {
        let mut log = LogState::default();
        log.replace(vec![entry("a", "first"), entry("b", "second")]);
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].id, "a");

        log.replace(vec![entry("c", "third")]);
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].id, "c");

        log.replace(vec![]);
        assert!(log.entries.is_empty());
    }

    #[test]
    fn replace_clamps_a_stale_scroll_offset() {
        let mut log = LogState::default();
        log.replace((0..10).map(|i| entry(&i.to_string(), "m")).collect());
        log.scroll_down(8);
        assert_eq!(log.scroll_offset, 8);
        log.replace(vec![entry("x", "m")]);
        assert_eq!(log.scroll_offset, 0);
    }

    #[test]
    fn hit_testing_respects_viewport_and_scroll() {
        let mut log = LogState::default();
        log.replace((0..5).map(|i| entry(&format!("id{}", i), "m")).collect());
        log.viewport = Some(Rect::new(10, 4, 40, 3));

        // outside the pane
        assert!(log.entry_at(5, 5).is_none());
        assert!(log.entry_at(15, 7).is_none());

        // top row maps to the first visible entry
        assert_eq!(log.entry_at(10, 4).unwrap().id, "id0");
        log.scroll_down(2);
        assert_eq!(log.entry_at(10, 4).unwrap().id, "id2");
        assert_eq!(log.entry_at(49, 6).unwrap().id, "id4");
    }

    #[test]
    fn hit_testing_below_last_entry_is_none() {
        let mut log = LogState::default();
        log.replace(vec![entry("only", "m")]);
        log.viewport = Some(Rect::new(0, 0, 20, 5));
        assert!(log.entry_at(0, 3).is_none());
    }
}
