//! Renderer-facing intents and the small gesture helpers that produce them

use std::time::Duration;

/// A named request from a renderer to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Next,
    Previous,
    GoTo(usize),
    Play,
    Pause,
    TogglePlay,
    HoverEnter,
    HoverLeave,
    /// Horizontal drag distance; negative means the pointer moved left
    Swipe(f32),
    Tick(Duration),
}

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Space,
}

impl Key {
    /// Map a key press onto an intent for a sequence of `len` slides.
    pub fn intent(self, len: usize) -> Option<Intent> {
        match self {
            Key::ArrowLeft => Some(Intent::Previous),
            Key::ArrowRight => Some(Intent::Next),
            Key::Home if len > 0 => Some(Intent::GoTo(0)),
            Key::End if len > 0 => Some(Intent::GoTo(len - 1)),
            Key::Home | Key::End => None,
            Key::Space => Some(Intent::TogglePlay),
        }
    }
}

/// Tracks one touch/drag gesture from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = x;
        }
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finish the gesture. The controller decides whether the distance is
    /// enough to navigate.
    pub fn end(&mut self) -> Option<Intent> {
        let start = self.start_x.take()?;
        Some(Intent::Swipe(self.last_x - start))
    }
}
