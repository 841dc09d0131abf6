use ratatui::style::Color;

use crate::prefs::DEFAULT_THEME;
use crate::ui::backgrounds::AnimationKind;

pub mod cherryblossom;
pub mod matrix;
pub mod office;

pub use cherryblossom::CherryBlossomTheme;
pub use matrix::MatrixTheme;
pub use office::OfficeTheme;

/// Trait for defining UI themes
pub trait Theme {
    /// Registry key, as persisted in prefs.
    fn name(&self) -> &'static str;

    /// Core style values. Every theme fills the whole struct, so the render
    /// code never falls back on a missing variable.
    fn colors(&self) -> ThemeColors;

    /// Accent colors for status elements.
    fn accents(&self) -> AccentColors;

    /// Per-theme container treatment (border texture + glow color).
    fn container_effect(&self) -> ContainerEffect;

    /// The decorative animation this theme runs, if any.
    fn animation(&self) -> Option<AnimationKind>;

    /// Border colors that cycle with animation
    fn border_color(&self, tick: u64) -> Color;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub accent: Color,
    pub border: Color,
    pub glow: Color,
    pub input: Color,
    pub log: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccentColors {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

/// Glass-container treatment: "blurred" panels get heavy double borders,
/// flat ones a plain border; the glow becomes the border highlight color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerEffect {
    pub blurred: bool,
    pub glow: Color,
}

/// Theme registry and selection.
pub struct ThemeManager {
    themes: Vec<Box<dyn Theme>>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes: Vec<Box<dyn Theme>> = vec![
            Box::new(MatrixTheme),
            Box::new(OfficeTheme),
            Box::new(CherryBlossomTheme),
        ];
        Self { themes, current_index: 0 }
    }

    pub fn current(&self) -> &dyn Theme {
        self.themes[self.current_index].as_ref()
    }

    pub fn current_name(&self) -> &'static str {
        self.current().name()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name()).collect()
    }

    /// Select a theme by its registry key. Unknown names select the default
    /// theme instead of failing silently. Returns the name actually applied.
    pub fn select_by_name(&mut self, name: &str) -> &'static str {
        match self.themes.iter().position(|t| t.name().eq_ignore_ascii_case(name)) {
            Some(idx) => self.current_index = idx,
            None => {
                tracing::warn!("unknown theme '{}', falling back to '{}'", name, DEFAULT_THEME);
                self.current_index = self
                    .themes
                    .iter()
                    .position(|t| t.name() == DEFAULT_THEME)
                    .unwrap_or(0);
            }
        }
        self.current_name()
    }

    pub fn cycle(&mut self) -> &'static str {
        self.current_index = (self.current_index + 1) % self.themes.len();
        self.current_name()
    }
}
