use ratatui::style::Color;

use super::{AccentColors, ContainerEffect, Theme, ThemeColors};
use crate::ui::backgrounds::AnimationKind;

pub struct MatrixTheme;

impl Theme for MatrixTheme {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn colors(&self) -> ThemeColors {
        ThemeColors {
            background: Color::Black,
            panel: Color::Rgb(17, 25, 40),
            text: Color::White,
            accent: Color::Rgb(213, 255, 118),
            border: Color::Rgb(80, 80, 80),
            glow: Color::Green,
            input: Color::Rgb(10, 10, 10),
            log: Color::Rgb(8, 12, 8),
        }
    }

    fn accents(&self) -> AccentColors {
        AccentColors {
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightGreen,
        }
    }

    fn container_effect(&self) -> ContainerEffect {
        ContainerEffect { blurred: true, glow: self.colors().glow }
    }

    fn animation(&self) -> Option<AnimationKind> {
        Some(AnimationKind::MatrixRain)
    }

    fn border_color(&self, tick: u64) -> Color {
        match (tick / 10) % 3 {
            0 => Color::Green,
            1 => Color::LightGreen,
            _ => Color::DarkGray,
        }
    }
}
