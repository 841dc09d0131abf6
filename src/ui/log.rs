//! The polled message-history log pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::Focus;
use crate::ui::hex_color;
use crate::ui::time_format::format_log_timestamp;

pub fn draw_log(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.themes.current();
    let colors = theme.colors();
    let accents = theme.accents();
    let effect = theme.container_effect();
    let focused_pane = app.ui.focus == Focus::Log;

    let border_type = if effect.blurred { BorderType::Double } else { BorderType::Plain };
    let border_style = if focused_pane {
        Style::default().fg(effect.glow)
    } else {
        Style::default().fg(colors.border)
    };
    let block = Block::default()
        .title(format!("▶ MESSAGE LOG ({})", app.log.entries.len()))
        .title_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(colors.log));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // remember where entries land this frame; right-click hit-testing reads it
    app.log.viewport = if inner.height > 0 { Some(inner) } else { None };
    if inner.height == 0 {
        return;
    }

    if app.log.entries.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No messages yet.",
                Style::default().fg(colors.border),
            )),
            inner,
        );
        return;
    }

    let today = chrono::Local::now().date_naive();
    let visible = app
        .log
        .entries
        .iter()
        .skip(app.log.scroll_offset)
        .take(inner.height as usize);

    let lines: Vec<Line> = visible
        .map(|entry| {
            let message_style = match entry.color.as_deref().and_then(hex_color) {
                Some(color) => Style::default().fg(color),
                None => Style::default().fg(colors.text),
            };
            let mut spans = vec![
                Span::styled(
                    format_log_timestamp(&entry.timestamp, today),
                    Style::default().fg(colors.border),
                ),
                Span::raw(" "),
                Span::styled(entry.message.clone(), message_style),
            ];
            // annotated only above the default priority
            if entry.priority > 1 {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!("[Priority: {}]", entry.priority),
                    Style::default().fg(accents.warning).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogEntry;
    use crate::sound::SoundManager;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn entry(id: &str, message: &str, priority: i64) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: "2026-08-06 12:00:00".to_string(),
            message: message.to_string(),
            color: None,
            priority,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = *buffer.area();
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_entries_in_order_and_annotates_only_high_priority() {
        let sound = SoundManager::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.log.replace(vec![
            entry("a", "urgent thing", 3),
            entry("b", "routine thing", 1),
        ]);

        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_log(f, &mut app, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("urgent thing"));
        assert!(text.contains("[Priority: 3]"));
        assert!(text.contains("routine thing"));
        assert!(!text.contains("[Priority: 1]"));
        let urgent = text.find("urgent thing").unwrap();
        let routine = text.find("routine thing").unwrap();
        assert!(urgent < routine, "server order must be preserved");
    }

    #[test]
    fn render_records_the_viewport_for_hit_testing() {
        let sound = SoundManager::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, &sound, "http://x".into());
        app.log.replace(vec![entry("a", "m", 1)]);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_log(f, &mut app, area);
            })
            .unwrap();

        let viewport = app.log.viewport.unwrap();
        // inner area, one cell in from the borders
        assert_eq!(viewport, ratatui::layout::Rect::new(1, 1, 38, 8));
        assert_eq!(app.log.entry_at(2, 1).unwrap().id, "a");
    }
}
