//! Popups: context menu, ignore modal, quit confirmation, notifications.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// The right-click menu, anchored at the click cell and clamped to the
/// screen. Its rendered rect is stored back for click hit-testing.
pub fn draw_context_menu(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let width: u16 = 22;
    let height: u16 = 3;
    if size.width < width || size.height < height {
        return;
    }
    let theme_colors = app.themes.current().colors();

    let Some(menu) = app.ui.context_menu.as_mut() else { return };
    let x = menu.x.min(size.width - width);
    let y = menu.y.min(size.height - height);
    let area = Rect::new(x, y, width, height);
    menu.area = Some(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme_colors.accent))
        .style(Style::default().bg(theme_colors.panel));
    let item = Paragraph::new(Span::styled(
        " Ignore message…",
        Style::default().fg(theme_colors.text).add_modifier(Modifier::BOLD),
    ))
    .block(block);
    f.render_widget(Clear, area);
    f.render_widget(item, area);
}

pub fn draw_ignore_modal(f: &mut Frame, app: &mut App) {
    if app.ui.ignore_modal.is_none() {
        return;
    }
    let theme = app.themes.current();
    let colors = theme.colors();
    let effect = theme.container_effect();
    let durations = app.config.ignore_durations_min;

    let area = draw_centered_rect(f.area(), 50, 30);
    let area = Rect { height: area.height.clamp(7, 9), ..area };
    let block = Block::default()
        .title("Ignore Message")
        .title_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(effect.glow))
        .style(Style::default().bg(colors.panel));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let Some(modal) = app.ui.ignore_modal.as_mut() else { return };

    let mut duration_spans = vec![Span::styled("Mute for:  ", Style::default().fg(colors.text))];
    for (i, minutes) in durations.iter().enumerate() {
        let label = format!(" {}m ", minutes);
        if i == modal.duration_index {
            duration_spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.background)
                    .bg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            duration_spans.push(Span::styled(label, Style::default().fg(colors.text)));
        }
        duration_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::default(),
        Line::from(duration_spans),
        Line::default(),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "[ Confirm ]",
                Style::default()
                    .fg(colors.background)
                    .bg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[ Cancel ]", Style::default().fg(colors.text)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "[←→] Duration  [Enter] Confirm  [Esc] Cancel",
            Style::default().fg(colors.border),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    // button rects for mouse clicks, on the row the buttons rendered to
    if inner.height > 3 {
        let button_row = inner.y + 3;
        modal.confirm_area = Some(Rect::new(inner.x + 3, button_row, 11, 1));
        modal.cancel_area = Some(Rect::new(inner.x + 17, button_row, 10, 1));
    } else {
        modal.confirm_area = None;
        modal.cancel_area = None;
    }
}

pub fn draw_quit_confirm_popup(f: &mut Frame, app: &App) {
    let theme = app.themes.current();
    let colors = theme.colors();
    let area = draw_centered_rect(f.area(), 40, 20);
    let area = Rect { height: area.height.clamp(5, 7), ..area };
    let block = Block::default()
        .title("Quit")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.panel));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let selected = |on: bool| {
        if on {
            Style::default().fg(colors.background).bg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        }
    };
    let lines = vec![
        Line::from(Span::styled(
            "Leave the marquee client?",
            Style::default().fg(colors.text),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("[ Yes ]", selected(app.ui.quit_confirm_selected == 0)),
            Span::raw("    "),
            Span::styled("[ No ]", selected(app.ui.quit_confirm_selected == 1)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn draw_minimal_notification_popup(f: &mut Frame, app: &App, text: &str) {
    let theme = app.themes.current();
    let colors = theme.colors();
    let size = f.area();
    let width = 30u16.max(text.len() as u16 + 2).min(size.width / 2);
    let height = 3u16;
    if size.width < width + 2 || size.height < height + 1 {
        return;
    }
    let x = size.x + size.width - width - 2;
    let y = size.y + 1;
    let area = Rect { x, y, width, height };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.panel));
    let p = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(colors.text)))
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}
