use raylib::prelude::*;

use carousel::Direction;
use carousel::constants::TRANSITION_DURATION;

/// Horizontal slide-in between two carousel positions. Offsets are fractions
/// of the screen width.
pub struct Transition {
    shown: Option<usize>,
    outgoing: Option<usize>,
    sign: f32,
    progress: f32,
    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition {
    pub fn new() -> Self {
        Self {
            shown: None,
            outgoing: None,
            sign: 1.0,
            progress: 1.0,
            animation_timer: 0.0,
            tween: None,
        }
    }

    /// Start animating towards `current` if it differs from what is on screen.
    pub fn retarget(&mut self, current: Option<usize>, direction: Direction) {
        if current == self.shown {
            return;
        }
        self.outgoing = self.shown;
        self.shown = current;

        // First slide appears without animation
        if self.outgoing.is_none() {
            return;
        }

        // Forward: the new slide comes in from the right
        self.sign = match direction {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        };
        self.progress = 0.0;
        self.animation_timer = 0.0;
        self.tween = Some(ease::Tween::new(ease::cubic_out, 0.0, 1.0, TRANSITION_DURATION));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.progress = tween.apply(dt);
        self.animation_timer += dt;

        if self.animation_timer >= TRANSITION_DURATION {
            self.progress = 1.0;
            self.tween = None;
            self.outgoing = None;
        }
    }

    /// Slides to draw this frame with their horizontal offsets.
    pub fn layers(&self) -> Vec<(usize, f32)> {
        let mut layers = Vec::with_capacity(2);
        if let Some(outgoing) = self.outgoing {
            layers.push((outgoing, -self.sign * self.progress));
        }
        if let Some(shown) = self.shown {
            layers.push((shown, self.sign * (1.0 - self.progress)));
        }
        layers
    }
}
