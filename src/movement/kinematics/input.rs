//! Input the controller polls each tick.

/// Raw input source: a horizontal axis and the jump button.
pub trait InputPort {
    /// Horizontal axis in `[-1, 1]`. Out-of-range values are clamped.
    fn horizontal_axis(&self) -> f32;

    fn jump_held(&self) -> bool;
}

/// Fixed input values, for scripted drivers and replays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeldInput {
    pub axis: f32,
    pub jump: bool,
}

impl HeldInput {
    pub fn axis(axis: f32) -> Self {
        Self { axis, jump: false }
    }

    pub fn jump() -> Self {
        Self {
            axis: 0.0,
            jump: true,
        }
    }
}

impl InputPort for HeldInput {
    fn horizontal_axis(&self) -> f32 {
        self.axis
    }

    fn jump_held(&self) -> bool {
        self.jump
    }
}
