//! Framework-independent carousel controller.
//!
//! A [`SlideshowController`] owns which slide is showing, which way the last
//! move went, and the autoplay clock. Renderers read [`Snapshot`]s and send
//! back [`Intent`]s; time only advances through
//! [`SlideshowController::tick`].

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod renderer;
pub mod slide;
pub mod state;

pub use config::CarouselConfig;
pub use controller::{DotState, ListenerId, SlideshowController, Snapshot};
pub use error::{CarouselError, Result};
pub use input::{Intent, Key, SwipeTracker};
pub use renderer::Renderer;
pub use slide::{Slide, discover_slides};
pub use state::{Direction, PlaybackState};
