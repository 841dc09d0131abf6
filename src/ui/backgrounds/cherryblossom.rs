use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    widgets::Paragraph,
    Frame,
};

use super::{Animation, AnimationKind};

pub const MAX_PETALS: usize = 100;
/// Chance per frame of spawning a new petal while under the cap.
const SPAWN_CHANCE: f64 = 0.25;
/// Horizontal drift amplitude per frame.
const DRIFT: f32 = 0.4;

const PETAL_GLYPHS: [char; 4] = ['❀', '✿', '❁', '✾'];
const PETAL_COLORS: [Color; 4] = [
    Color::Rgb(255, 183, 197),
    Color::Rgb(255, 150, 180),
    Color::Rgb(240, 120, 160),
    Color::Rgb(255, 210, 225),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub angle: f32,
    pub rotation_speed: f32,
    pub color: Color,
}

impl Petal {
    fn random(width: u16, height: Option<u16>) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: match height {
                Some(h) => rng.gen_range(0.0..h.max(1) as f32),
                None => 0.0,
            },
            size: rng.gen_range(0.5..2.0),
            speed: rng.gen_range(0.15..0.6),
            angle: rng.gen_range(0.0..std::f32::consts::TAU),
            rotation_speed: rng.gen_range(0.02..0.12),
            color: PETAL_COLORS[rng.gen_range(0..PETAL_COLORS.len())],
        }
    }

    /// Reuse the allocation: back to the top at a fresh horizontal position.
    fn recycle(&mut self, width: u16) {
        let fresh = Petal::random(width, None);
        *self = fresh;
    }

    fn step(&mut self, width: u16) {
        self.y += self.speed;
        self.angle += self.rotation_speed;
        self.x += self.angle.sin() * DRIFT;
        let w = width.max(1) as f32;
        if self.x < 0.0 {
            self.x += w;
        } else if self.x >= w {
            self.x -= w;
        }
    }

    fn glyph(&self) -> char {
        if self.size < 1.0 {
            '·'
        } else {
            // rotation shown by cycling through the petal glyphs
            let idx = (self.angle / (std::f32::consts::TAU / PETAL_GLYPHS.len() as f32))
                .rem_euclid(PETAL_GLYPHS.len() as f32) as usize;
            PETAL_GLYPHS[idx.min(PETAL_GLYPHS.len() - 1)]
        }
    }
}

/// Drifting petals over a vertical dusk gradient, repainted every frame.
pub struct CherryBlossom {
    running: bool,
    width: u16,
    height: u16,
    petals: Vec<Petal>,
}

impl CherryBlossom {
    pub fn new() -> Self {
        Self { running: false, width: 0, height: 0, petals: Vec::new() }
    }

    fn init(&mut self) {
        // seed a partial population scattered over the screen so the scene
        // doesn't start empty; spawning fills it to the cap over time
        self.petals = (0..MAX_PETALS / 3)
            .map(|_| Petal::random(self.width, Some(self.height)))
            .collect();
    }

    fn gradient_row(&self, row: u16) -> Color {
        let t = if self.height <= 1 {
            0.0
        } else {
            row as f32 / (self.height - 1) as f32
        };
        let lerp = |a: f32, b: f32| (a + (b - a) * t) as u8;
        Color::Rgb(lerp(26.0, 54.0), lerp(12.0, 22.0), lerp(22.0, 38.0))
    }
}

impl Animation for CherryBlossom {
    fn kind(&self) -> AnimationKind {
        AnimationKind::CherryBlossom
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
        self.petals.clear();
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
        let height = self.height.max(1) as f32;
        for petal in &mut self.petals {
            petal.step(self.width);
            if petal.y >= height {
                petal.recycle(self.width);
            }
        }
        if self.petals.len() < MAX_PETALS && rng.gen_bool(SPAWN_CHANCE) {
            self.petals.push(Petal::random(self.width, None));
        }
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        if !self.running {
            return;
        }
        // gradient backdrop, full repaint
        for row in 0..area.height {
            f.render_widget(
                Block::default().style(Style::default().bg(self.gradient_row(row))),
                Rect::new(area.x, area.y + row, area.width, 1),
            );
        }
        for petal in &self.petals {
            let x = petal.x as u16;
            let y = petal.y as u16;
            if x >= area.width || y >= area.height {
                continue;
            }
            f.render_widget(
                Paragraph::new(petal.glyph().to_string())
                    .style(Style::default().fg(petal.color).bg(self.gradient_row(y))),
                Rect::new(area.x + x, area.y + y, 1, 1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blossom(width: u16, height: u16) -> CherryBlossom {
        let mut blossom = CherryBlossom::new();
        blossom.resize(width, height);
        blossom.start();
        blossom
    }

    #[test]
    fn petal_count_never_exceeds_the_cap() {
        let mut blossom = blossom(60, 20);
        for _ in 0..2000 {
            blossom.tick();
            assert!(blossom.petals.len() <= MAX_PETALS);
        }
        // after this many frames the population should have reached the cap
        assert_eq!(blossom.petals.len(), MAX_PETALS);
    }

    #[test]
    fn fallen_petals_are_recycled_in_place() {
        let mut blossom = blossom(60, 20);
        let count = blossom.petals.len();
        blossom.petals[0].y = 25.0; // past the bottom edge
        blossom.petals[0].speed = 0.5;
        blossom.tick();
        // same slot, back near the top (a tick may also spawn one new petal)
        assert!(blossom.petals[0].y < 2.0);
        assert!(blossom.petals.len() >= count);
    }

    #[test]
    fn petals_drift_and_stay_in_horizontal_bounds() {
        let mut blossom = blossom(30, 10);
        for _ in 0..500 {
            blossom.tick();
            for petal in &blossom.petals {
                assert!(petal.x >= 0.0 && petal.x < 30.0);
            }
        }
    }

    #[test]
    fn stop_clears_petals_and_restart_reseeds() {
        let mut blossom = blossom(60, 20);
        assert!(!blossom.petals.is_empty());
        blossom.stop();
        assert!(blossom.petals.is_empty());
        assert!(!blossom.is_running());
        blossom.start();
        assert_eq!(blossom.petals.len(), MAX_PETALS / 3);
    }

    #[test]
    fn resize_regenerates_petals_within_new_bounds() {
        let mut blossom = blossom(80, 30);
        for _ in 0..50 {
            blossom.tick();
        }
        blossom.resize(20, 8);
        for petal in &blossom.petals {
            assert!(petal.x < 20.0);
            assert!(petal.y < 8.0);
        }
    }

    #[test]
    fn rotation_cycles_the_glyph() {
        let mut petal = Petal::random(10, None);
        petal.size = 1.5;
        petal.angle = 0.1;
        let first = petal.glyph();
        petal.angle += std::f32::consts::TAU / 4.0;
        let second = petal.glyph();
        assert_ne!(first, second);
    }
}
