use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use carousel::{CarouselConfig, SlideshowController, discover_slides};

mod viewer;

use crate::viewer::Viewer;

/// Browse a directory of images as a carousel
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the slide images
    image_directory: PathBuf,

    /// TOML file with carousel settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds each slide stays up during autoplay
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Start playing immediately
    #[arg(short, long)]
    autoplay: bool,

    /// Stop at the first and last slide instead of wrapping
    #[arg(long)]
    finite: bool,

    /// Keep playing while the pointer is over the window
    #[arg(long)]
    no_pause_on_hover: bool,

    /// Ignore drag gestures
    #[arg(long)]
    no_touch: bool,

    /// Minimum drag distance in pixels that changes slide
    #[arg(long)]
    swipe_threshold: Option<f32>,
}

impl Args {
    fn carousel_config(&self) -> Result<CarouselConfig> {
        let mut config = match &self.config {
            Some(path) => CarouselConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CarouselConfig::default(),
        };

        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(threshold) = self.swipe_threshold {
            config.swipe_threshold = threshold;
        }
        config.auto_play |= self.autoplay;
        config.infinite &= !self.finite;
        config.pause_on_hover &= !self.no_pause_on_hover;
        config.touch_enabled &= !self.no_touch;

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = args.carousel_config()?;

    let slides = discover_slides(&args.image_directory)
        .with_context(|| format!("loading slides from {}", args.image_directory.display()))?;
    tracing::info!("{} slides from {}", slides.len(), args.image_directory.display());

    let mut viewer = Viewer::open(&slides);
    let mut controller = SlideshowController::new(slides, config)?;

    while !viewer.should_close() {
        let dt = viewer.frame_time();
        // run_frame already logs rejected intents
        let _ = controller.run_frame(&mut viewer, dt);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Args {
        let argv = ["carousel-viewer", "photos"].iter().chain(flags).copied();
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_invalid_flags_rejected_before_window_opens() {
        assert!(parse(&["--autoplay", "--interval-ms", "0"]).carousel_config().is_err());
        assert!(parse(&["--swipe-threshold=-1"]).carousel_config().is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&["--autoplay", "--finite", "--interval-ms", "1500"])
            .carousel_config()
            .unwrap();
        assert!(config.auto_play);
        assert!(!config.infinite);
        assert_eq!(config.interval_ms, 1500);
        assert!(config.pause_on_hover);
    }
}
