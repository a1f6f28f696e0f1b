use crate::controller::Snapshot;
use crate::input::Intent;

/// Drawing surface driven by a [`SlideshowController`](crate::SlideshowController).
///
/// Implementations own their window/DOM/terminal and translate raw gestures
/// into [`Intent`]s; they never mutate navigation state directly.
pub trait Renderer<S> {
    /// Gestures collected since the previous frame, oldest first.
    fn poll_intents(&mut self) -> Vec<Intent>;

    fn render(&mut self, snapshot: &Snapshot, slides: &[S]);
}
