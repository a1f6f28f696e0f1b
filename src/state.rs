/// Last navigation direction, used by renderers to pick the transition side
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Whether `tick` moves the autoplay clock
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    Advancing, // Playing and not held by hover
    Suspended, // Paused, or playing but hovered with pause-on-hover
}

impl PlaybackState {
    pub fn resolve(is_playing: bool, is_hovered: bool, pause_on_hover: bool) -> Self {
        if is_playing && !(pause_on_hover && is_hovered) {
            PlaybackState::Advancing
        } else {
            PlaybackState::Suspended
        }
    }
}
