pub const DEFAULT_INTERVAL_MS: u64 = 4000;                 // Time each slide is shown before autoplay advances
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;             // Minimum horizontal drag (px) that counts as a swipe

pub const RENDER_WIDTH: i32 = 1280;                        // Initial viewer window width
pub const RENDER_HEIGHT: i32 = 720;                        // Initial viewer window height
pub const FPS: u32 = 60;                                   // Frames per second

pub const TRANSITION_DURATION: f32 = 0.4;                  // Slide-in animation length (seconds)
