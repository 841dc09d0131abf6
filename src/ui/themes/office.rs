use ratatui::style::Color;

use super::{AccentColors, ContainerEffect, Theme, ThemeColors};
use crate::ui::backgrounds::AnimationKind;

/// Flat corporate look. The only theme without an animation and without the
/// blurred-glass panel treatment.
pub struct OfficeTheme;

impl Theme for OfficeTheme {
    fn name(&self) -> &'static str {
        "office"
    }

    fn colors(&self) -> ThemeColors {
        ThemeColors {
            background: Color::Rgb(63, 74, 85),
            panel: Color::Rgb(91, 160, 200),
            text: Color::Rgb(230, 230, 230),
            accent: Color::Rgb(0, 120, 212),
            border: Color::Rgb(247, 1, 255),
            glow: Color::Yellow,
            input: Color::Rgb(50, 58, 66),
            log: Color::Rgb(20, 20, 20),
        }
    }

    fn accents(&self) -> AccentColors {
        AccentColors {
            success: Color::Rgb(16, 124, 16),
            warning: Color::Rgb(121, 118, 115),
            error: Color::Rgb(216, 59, 1),
            info: Color::Rgb(0, 120, 212),
        }
    }

    fn container_effect(&self) -> ContainerEffect {
        ContainerEffect { blurred: false, glow: Color::Yellow }
    }

    fn animation(&self) -> Option<AnimationKind> {
        None
    }

    fn border_color(&self, _tick: u64) -> Color {
        // office doesn't pulse
        Color::Rgb(0, 120, 212)
    }
}
