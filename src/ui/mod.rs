//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod backgrounds;
pub mod compose;
pub mod log;
pub mod popups;
pub mod themes;
pub mod time_format;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::banner::get_styled_banner_lines;
use crate::ui::compose::draw_compose;
use crate::ui::log::draw_log;
use crate::ui::popups::{
    draw_context_menu, draw_ignore_modal, draw_minimal_notification_popup,
    draw_quit_confirm_popup,
};

/// Parse a `#rrggbb` string into a terminal color.
pub fn hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let colors = app.themes.current().colors();

    // base fill, then the theme's animation (if one is running) over it
    f.render_widget(Block::default().style(Style::default().bg(colors.background)), size);
    app.backgrounds.draw(f, size);

    let banner_height = if size.height >= 20 { 7 } else { 0 };
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(banner_height), // Banner
            Constraint::Min(0),                // Main content
            Constraint::Length(2),             // Footer
        ])
        .split(size);

    if banner_height > 0 {
        let banner_lines = get_styled_banner_lines(chunks[0].width, app.ui.tick_count, colors.accent);
        f.render_widget(Paragraph::new(banner_lines), chunks[0]);
    }

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(chunks[1]);
    draw_compose(f, app, main[0]);
    draw_log(f, app, main[1]);

    draw_footer(f, app, chunks[2]);

    // popups on top, innermost last
    draw_context_menu(f, app);
    draw_ignore_modal(f, app);
    if let Some((text, _)) = app.ui.notification.clone() {
        draw_minimal_notification_popup(f, app, &text);
    }
    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let theme = app.themes.current();
    let colors = theme.colors();
    let help_text =
        "[Tab] Pane | [↑↓] Field/Scroll | [←→] Adjust | [Enter] Send | [F8] Theme | [F2] Sound | [Ctrl+L] Clear | [Ctrl+C] Quit";
    let status_text = format!(
        "{} | theme: {}",
        app.server_url,
        app.themes.current_name()
    );

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(area);

    f.render_widget(
        Paragraph::new(help_text)
            .style(Style::default().fg(colors.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border_color(app.ui.tick_count))),
            ),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(status_text, Style::default().fg(colors.accent)))
            .alignment(ratatui::layout::Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border_color(app.ui.tick_count))),
            ),
        footer_chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_hex_colors() {
        assert_eq!(hex_color("#ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(hex_color("#d5ff76"), Some(Color::Rgb(213, 255, 118)));
        assert_eq!(hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_hex_colors() {
        assert_eq!(hex_color("ffffff"), None);
        assert_eq!(hex_color("#fff"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
        assert_eq!(hex_color(""), None);
    }
}
