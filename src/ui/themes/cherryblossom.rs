use ratatui::style::Color;

use super::{AccentColors, ContainerEffect, Theme, ThemeColors};
use crate::ui::backgrounds::AnimationKind;

pub struct CherryBlossomTheme;

impl Theme for CherryBlossomTheme {
    fn name(&self) -> &'static str {
        "cherry-blossom"
    }

    fn colors(&self) -> ThemeColors {
        ThemeColors {
            background: Color::Rgb(26, 12, 22),
            panel: Color::Rgb(46, 22, 38),
            text: Color::Rgb(255, 232, 242),
            accent: Color::Rgb(255, 130, 180),
            border: Color::Rgb(150, 80, 120),
            glow: Color::Rgb(255, 105, 180),
            input: Color::Rgb(34, 16, 28),
            log: Color::Rgb(30, 14, 24),
        }
    }

    fn accents(&self) -> AccentColors {
        AccentColors {
            success: Color::Rgb(150, 220, 150),
            warning: Color::Rgb(240, 200, 120),
            error: Color::Rgb(240, 100, 120),
            info: Color::Rgb(220, 160, 200),
        }
    }

    fn container_effect(&self) -> ContainerEffect {
        ContainerEffect { blurred: true, glow: Color::Rgb(255, 105, 180) }
    }

    fn animation(&self) -> Option<AnimationKind> {
        Some(AnimationKind::CherryBlossom)
    }

    fn border_color(&self, tick: u64) -> Color {
        match (tick / 12) % 3 {
            0 => Color::Rgb(255, 130, 180),
            1 => Color::Rgb(220, 100, 150),
            _ => Color::Rgb(150, 80, 120),
        }
    }
}
