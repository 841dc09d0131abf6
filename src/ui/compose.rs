//! The message composition form: five typed fields plus the speed readout.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::{ComposeField, Focus};
use crate::ui::hex_color;

pub fn draw_compose(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.themes.current();
    let colors = theme.colors();
    let effect = theme.container_effect();
    let focused_pane = app.ui.focus == Focus::Compose;

    let border_type = if effect.blurred { BorderType::Double } else { BorderType::Plain };
    let border_style = if focused_pane {
        Style::default().fg(effect.glow)
    } else {
        Style::default().fg(colors.border)
    };
    let block = Block::default()
        .title("▶ NEW MESSAGE")
        .title_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(colors.panel));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let label_style = Style::default().fg(colors.text);
    let value_style = Style::default().fg(colors.accent);
    let marker = |field: ComposeField| {
        if focused_pane && app.compose.focused == field {
            Span::styled("▶ ", Style::default().fg(effect.glow).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        }
    };
    let stepper = |field: ComposeField, value: String| {
        if focused_pane && app.compose.focused == field {
            Span::styled(
                format!("◄ {} ►", value),
                value_style.add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(value, value_style)
        }
    };

    let text_value = if focused_pane && app.compose.focused == ComposeField::Text {
        format!("{}█", app.compose.text)
    } else if app.compose.text.is_empty() {
        "<empty>".to_string()
    } else {
        app.compose.text.clone()
    };

    let swatch = |hex: &str| {
        let color = hex_color(hex).unwrap_or(colors.text);
        Span::styled("██", Style::default().fg(color))
    };

    let color_line = |field: ComposeField, label: &'static str, value: &str| {
        let shown = if focused_pane && app.compose.focused == field {
            format!("{}█", value)
        } else {
            value.to_string()
        };
        Line::from(vec![
            marker(field),
            Span::styled(label, label_style),
            Span::styled(shown, value_style),
            Span::raw(" "),
            swatch(value),
        ])
    };

    let lines = vec![
        Line::from(vec![
            marker(ComposeField::Text),
            Span::styled("Message:  ", label_style),
            Span::styled(text_value, value_style),
        ]),
        Line::default(),
        Line::from(vec![
            marker(ComposeField::Priority),
            Span::styled("Priority: ", label_style),
            stepper(ComposeField::Priority, app.compose.priority.to_string()),
        ]),
        color_line(ComposeField::Color, "Color:    ", &app.compose.color),
        color_line(ComposeField::BgColor, "Bg Color: ", &app.compose.bg_color),
        Line::from(vec![
            marker(ComposeField::BlinkMode),
            Span::styled("Blink:    ", label_style),
            stepper(ComposeField::BlinkMode, app.compose.blink_mode_label().to_string()),
        ]),
        Line::from(vec![
            marker(ComposeField::Speed),
            Span::styled("Speed:    ", label_style),
            stepper(ComposeField::Speed, app.compose.speed_readout()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] Send",
            Style::default().fg(colors.border),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
