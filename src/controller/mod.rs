//! Navigation and autoplay state machine for a carousel

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::input::Intent;
use crate::renderer::Renderer;
use crate::slide::Slide;
use crate::state::{Direction, PlaybackState};

mod listeners;
mod snapshot;

pub use listeners::ListenerId;
pub use snapshot::{DotState, Snapshot};

use listeners::Listeners;

/// Owns the current slide, direction, autoplay clock and hover state for one
/// carousel. Time only moves through [`tick`](Self::tick); the controller
/// holds no timers of its own.
#[derive(Debug)]
pub struct SlideshowController<S = Slide> {
    slides: Vec<S>,
    config: CarouselConfig,

    current_index: usize,
    direction: Direction,
    is_playing: bool,
    is_hovered: bool,
    elapsed_in_slide: Duration,

    listeners: Listeners,
}

impl<S> SlideshowController<S> {
    pub fn new(slides: Vec<S>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        let is_playing = config.auto_play && slides.len() > 1;
        debug!(
            "carousel created with {} slides (autoplay: {}, infinite: {})",
            slides.len(),
            is_playing,
            config.infinite
        );

        Ok(Self {
            slides,
            config,
            current_index: 0,
            direction: Direction::Forward,
            is_playing,
            is_hovered: false,
            elapsed_in_slide: Duration::ZERO,
            listeners: Listeners::default(),
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.current_index)
    }

    pub fn current_slide(&self) -> Option<&S> {
        self.slides.get(self.current_index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn elapsed_in_slide(&self) -> Duration {
        self.elapsed_in_slide
    }

    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState::resolve(self.is_playing, self.is_hovered, self.config.pause_on_hover)
    }

    pub fn can_go_previous(&self) -> bool {
        !self.slides.is_empty() && (self.config.infinite || self.current_index > 0)
    }

    pub fn can_go_next(&self) -> bool {
        !self.slides.is_empty()
            && (self.config.infinite || self.current_index + 1 < self.slides.len())
    }

    /// Replace the whole sequence and start over from the first slide. The
    /// play/pause choice carries over unless there is nothing left to cycle.
    pub fn set_slides(&mut self, slides: Vec<S>) {
        debug!("slides replaced: {} -> {}", self.slides.len(), slides.len());
        self.slides = slides;
        self.current_index = 0;
        self.direction = Direction::Forward;
        self.elapsed_in_slide = Duration::ZERO;
        self.is_playing &= self.slides.len() > 1;
        self.notify();
    }

    /// Advance one slide. Returns false when nothing moved (empty sequence,
    /// or last slide without wrapping).
    pub fn next(&mut self) -> bool {
        let len = self.slides.len();
        if len == 0 {
            return false;
        }
        let target = if self.current_index + 1 < len {
            self.current_index + 1
        } else if self.config.infinite {
            0
        } else {
            trace!("next ignored at last slide");
            return false;
        };
        self.navigate(target, Direction::Forward);
        true
    }

    /// Step back one slide. Mirror image of [`next`](Self::next).
    pub fn previous(&mut self) -> bool {
        let len = self.slides.len();
        if len == 0 {
            return false;
        }
        let target = if self.current_index > 0 {
            self.current_index - 1
        } else if self.config.infinite {
            len - 1
        } else {
            trace!("previous ignored at first slide");
            return false;
        };
        self.navigate(target, Direction::Backward);
        true
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.slides.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        let direction = self.infer_direction(self.current_index, index);
        self.navigate(index, direction);
        Ok(())
    }

    pub fn play(&mut self) {
        if self.slides.len() <= 1 || self.config.interval_ms == 0 || self.is_playing {
            return;
        }
        debug!("autoplay started");
        self.is_playing = true;
        self.notify();
    }

    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }
        debug!("autoplay paused");
        self.is_playing = false;
        self.notify();
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn hover_enter(&mut self) {
        self.set_hovered(true);
    }

    pub fn hover_leave(&mut self) {
        self.set_hovered(false);
    }

    /// Navigate on a horizontal drag of `delta_x` pixels. Returns true if the
    /// gesture moved the carousel.
    pub fn swipe(&mut self, delta_x: f32) -> bool {
        if !self.config.touch_enabled {
            return false;
        }
        let threshold = self.config.swipe_threshold;
        if delta_x < -threshold {
            self.next()
        } else if delta_x > threshold {
            self.previous()
        } else {
            trace!("swipe of {delta_x}px below threshold {threshold}px");
            false
        }
    }

    /// Feed elapsed time into the autoplay clock. Advances at most one slide
    /// per call; any time past the interval is dropped.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.playback_state() != PlaybackState::Advancing {
            return;
        }
        self.elapsed_in_slide = self.elapsed_in_slide.saturating_add(elapsed);
        if self.elapsed_in_slide < self.config.interval() {
            return;
        }

        trace!("autoplay interval reached after {:?}", self.elapsed_in_slide);
        if !self.next() {
            self.elapsed_in_slide = Duration::ZERO;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let current_index = self.current_index();
        Snapshot {
            current_index,
            len: self.slides.len(),
            direction: self.direction,
            is_playing: self.is_playing,
            is_hovered: self.is_hovered,
            playback: self.playback_state(),
            elapsed_in_slide: self.elapsed_in_slide,
            progress_percent: Snapshot::progress_percent(current_index, self.slides.len()),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            dots: Snapshot::dots(current_index, self.slides.len()),
        }
    }

    /// Register a callback fired after every operation that changes the
    /// navigation or playback state.
    pub fn on_change(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> ListenerId {
        self.listeners.add(Box::new(callback))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Next => {
                self.next();
            }
            Intent::Previous => {
                self.previous();
            }
            Intent::GoTo(index) => self.go_to(index)?,
            Intent::Play => self.play(),
            Intent::Pause => self.pause(),
            Intent::TogglePlay => self.toggle_play(),
            Intent::HoverEnter => self.hover_enter(),
            Intent::HoverLeave => self.hover_leave(),
            Intent::Swipe(delta_x) => {
                self.swipe(delta_x);
            }
            Intent::Tick(elapsed) => self.tick(elapsed),
        }
        Ok(())
    }

    /// One frame: apply the renderer's gestures in order, advance the clock
    /// by `dt`, then draw. The frame is always rendered; the first rejected
    /// intent, if any, is returned afterwards.
    pub fn run_frame<R: Renderer<S>>(&mut self, renderer: &mut R, dt: Duration) -> Result<()> {
        let mut outcome = Ok(());
        for intent in renderer.poll_intents() {
            if let Err(err) = self.dispatch(intent) {
                warn!("rejected {:?}: {}", intent, err);
                if outcome.is_ok() {
                    outcome = Err(err);
                }
            }
        }

        self.tick(dt);

        let snapshot = self.snapshot();
        renderer.render(&snapshot, &self.slides);
        outcome
    }

    fn navigate(&mut self, target: usize, direction: Direction) {
        debug!("slide {} -> {} ({:?})", self.current_index, target, direction);
        self.current_index = target;
        self.direction = direction;
        self.elapsed_in_slide = Duration::ZERO;
        self.notify();
    }

    fn infer_direction(&self, from: usize, to: usize) -> Direction {
        if from == to {
            return self.direction;
        }
        if self.config.infinite {
            let len = self.slides.len();
            let forward = (to + len - from) % len;
            let backward = (from + len - to) % len;
            if forward <= backward {
                Direction::Forward
            } else {
                Direction::Backward
            }
        } else if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.is_hovered == hovered {
            return;
        }
        self.is_hovered = hovered;
        if self.config.pause_on_hover && self.is_playing {
            debug!("autoplay {} by hover", if hovered { "held" } else { "released" });
        }
        self.notify();
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot);
    }
}
