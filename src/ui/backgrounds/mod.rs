use ratatui::{layout::Rect, Frame};

pub mod cherryblossom;
pub mod matrixrain;

pub use cherryblossom::CherryBlossom;
pub use matrixrain::MatrixRain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    MatrixRain,
    CherryBlossom,
}

/// A full-screen decorative animation with an explicit stopped/running state.
///
/// `start` and `stop` are idempotent. `stop` drops the particle state so a
/// later `start` begins fresh; `resize` re-initializes state for the new
/// dimensions rather than stretching the old state.
pub trait Animation {
    fn kind(&self) -> AnimationKind;
    fn is_running(&self) -> bool;
    fn start(&mut self);
    fn stop(&mut self);
    fn resize(&mut self, width: u16, height: u16);
    fn tick(&mut self);
    fn draw(&self, f: &mut Frame, area: Rect);
}

/// Owns every animation controller and guarantees at most one runs at a
/// time: any switch stops all controllers before starting the requested one.
pub struct BackgroundManager {
    animations: Vec<Box<dyn Animation>>,
    active: Option<AnimationKind>,
    size: (u16, u16),
}

impl BackgroundManager {
    pub fn new() -> Self {
        let animations: Vec<Box<dyn Animation>> = vec![
            Box::new(MatrixRain::new()),
            Box::new(CherryBlossom::new()),
        ];
        Self { animations, active: None, size: (0, 0) }
    }

    pub fn active(&self) -> Option<AnimationKind> {
        self.active
    }

    pub fn running_count(&self) -> usize {
        self.animations.iter().filter(|a| a.is_running()).count()
    }

    /// Stop everything, then start `kind` (if any) at the last known size.
    pub fn set_active(&mut self, kind: Option<AnimationKind>) {
        for animation in &mut self.animations {
            animation.stop();
        }
        self.active = kind;
        if let Some(kind) = kind {
            let (w, h) = self.size;
            if let Some(animation) = self.animations.iter_mut().find(|a| a.kind() == kind) {
                animation.resize(w, h);
                animation.start();
            }
        }
    }

    /// Viewport size changed: re-init the running animation's state.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        if let Some(kind) = self.active {
            if let Some(animation) = self.animations.iter_mut().find(|a| a.kind() == kind) {
                animation.resize(width, height);
            }
        }
    }

    pub fn tick(&mut self) {
        if let Some(kind) = self.active {
            if let Some(animation) = self.animations.iter_mut().find(|a| a.kind() == kind) {
                animation.tick();
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        // the draw area is the source of truth for dimensions
        self.resize(area.width, area.height);
        if let Some(kind) = self.active {
            if let Some(animation) = self.animations.iter().find(|a| a.kind() == kind) {
                animation.draw(f, area);
            }
        }
    }
}
