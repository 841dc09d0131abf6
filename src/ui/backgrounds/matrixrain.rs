use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::{Animation, AnimationKind};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*";
/// Rows of dimming glyphs rendered behind each head.
const TRAIL_LEN: i32 = 8;
/// Chance per frame that a column past the bottom edge restarts.
const RESTART_CHANCE: f64 = 0.025;

/// Falling-glyph columns. One column per terminal cell; each column carries
/// only its head row, advancing every frame and restarting from the top with
/// a small random chance once it has passed the bottom edge.
pub struct MatrixRain {
    running: bool,
    width: u16,
    height: u16,
    drops: Vec<i32>,
}

impl MatrixRain {
    pub fn new() -> Self {
        Self { running: false, width: 0, height: 0, drops: Vec::new() }
    }

    fn init(&mut self) {
        self.drops = vec![1; self.width as usize];
    }

    fn glyph(x: u16, y: i32, tick_salt: u64) -> char {
        // cheap per-cell pseudo-random pick; flicker comes from the salt
        let idx = (x as u64)
            .wrapping_mul(31)
            .wrapping_add((y as u64).wrapping_mul(17))
            .wrapping_add(tick_salt.wrapping_mul(13)) as usize
            % CHARSET.len();
        CHARSET[idx] as char
    }
}

impl Animation for MatrixRain {
    fn kind(&self) -> AnimationKind {
        AnimationKind::MatrixRain
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        if self.running {
            return;
        }
        self.init();
        self.running = true;
    }

    fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.drops.clear();
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        if self.running {
            self.init();
        }
    }

    fn tick(&mut self) {
        if !self.running {
            return;
        }
        let mut rng = rand::thread_rng();
        let height = self.height as i32;
        for drop in &mut self.drops {
            // restart is checked before the advance: a column keeps
            // falling off-screen until the dice land
            if *drop > height && rng.gen::<f64>() < RESTART_CHANCE {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        if !self.running {
            return;
        }
        let salt = self.drops.iter().map(|d| *d as u64).sum::<u64>();
        for (x, head) in self.drops.iter().enumerate() {
            if x as u16 >= area.width {
                break;
            }
            for k in 0..TRAIL_LEN {
                let y = head - k;
                if y < 0 || y >= area.height as i32 {
                    continue;
                }
                let (color, bold) = match k {
                    0 => (Color::White, true),
                    1 => (Color::LightGreen, true),
                    2 | 3 => (Color::Green, false),
                    4 | 5 => (Color::Rgb(0, 140, 0), false),
                    _ => (Color::Rgb(0, 90, 0), false),
                };
                let mut style = Style::default().fg(color);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let ch = Self::glyph(x as u16, y, salt);
                f.render_widget(
                    Paragraph::new(ch.to_string()).style(style),
                    Rect::new(area.x + x as u16, area.y + y as u16, 1, 1),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rain(width: u16, height: u16) -> MatrixRain {
        let mut rain = MatrixRain::new();
        rain.resize(width, height);
        rain.start();
        rain
    }

    #[test]
    fn start_builds_one_column_per_cell() {
        let rain = rain(40, 12);
        assert!(rain.is_running());
        assert_eq!(rain.drops.len(), 40);
        assert!(rain.drops.iter().all(|d| *d == 1));
    }

    #[test]
    fn start_is_idempotent() {
        let mut rain = rain(40, 12);
        for _ in 0..5 {
            rain.tick();
        }
        let drops = rain.drops.clone();
        rain.start();
        assert_eq!(rain.drops, drops);
    }

    #[test]
    fn stop_drops_state_and_restart_is_fresh() {
        let mut rain = rain(40, 12);
        for _ in 0..5 {
            rain.tick();
        }
        rain.stop();
        assert!(!rain.is_running());
        assert!(rain.drops.is_empty());
        rain.stop(); // second stop is a no-op
        rain.start();
        assert!(rain.drops.iter().all(|d| *d == 1));
    }

    #[test]
    fn tick_advances_every_column() {
        let mut rain = rain(10, 8);
        rain.tick();
        assert!(rain.drops.iter().all(|d| *d == 2));
    }

    #[test]
    fn columns_past_the_bottom_eventually_restart() {
        let mut rain = rain(30, 4);
        // plenty of frames for the 2.5% restart dice to land on each column
        for _ in 0..4000 {
            rain.tick();
        }
        let restarted = rain.drops.iter().filter(|d| **d < 4000).count();
        assert!(restarted > 0, "no column ever restarted");
    }

    #[test]
    fn resize_reinitializes_columns() {
        let mut rain = rain(40, 12);
        for _ in 0..20 {
            rain.tick();
        }
        rain.resize(25, 10);
        assert_eq!(rain.drops.len(), 25);
        assert!(rain.drops.iter().all(|d| *d == 1));
    }
}
