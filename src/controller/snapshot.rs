use std::time::Duration;

use crate::state::{Direction, PlaybackState};

/// One indicator dot under the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotState {
    pub index: usize,
    pub active: bool,
}

/// Read-only view of the navigation state handed to renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// `None` only when there are no slides
    pub current_index: Option<usize>,
    pub len: usize,
    pub direction: Direction,
    pub is_playing: bool,
    pub is_hovered: bool,
    pub playback: PlaybackState,
    pub elapsed_in_slide: Duration,
    pub progress_percent: f32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub dots: Vec<DotState>,
}

impl Snapshot {
    pub(crate) fn progress_percent(current_index: Option<usize>, len: usize) -> f32 {
        match current_index {
            Some(index) if len > 1 => (index + 1) as f32 / len as f32 * 100.0,
            _ => 100.0,
        }
    }

    pub(crate) fn dots(current_index: Option<usize>, len: usize) -> Vec<DotState> {
        (0..len)
            .map(|index| DotState {
                index,
                active: Some(index) == current_index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(Snapshot::progress_percent(Some(0), 4), 25.0);
        assert_eq!(Snapshot::progress_percent(Some(3), 4), 100.0);
        assert_eq!(Snapshot::progress_percent(Some(0), 1), 100.0);
        assert_eq!(Snapshot::progress_percent(None, 0), 100.0);
    }

    #[test]
    fn test_single_active_dot() {
        let dots = Snapshot::dots(Some(1), 3);
        assert_eq!(dots.len(), 3);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[1].active);
        assert!(Snapshot::dots(None, 0).is_empty());
    }
}
