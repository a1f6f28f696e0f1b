use std::time::Duration;

use carousel::{
    CarouselConfig, CarouselError, Direction, Intent, Renderer, SlideshowController, Snapshot,
};
use pretty_assertions::assert_eq;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn slides(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("slide {i}")).collect()
}

fn autoplay(interval: u64) -> CarouselConfig {
    CarouselConfig::default()
        .with_auto_play(true)
        .with_interval(ms(interval))
}

#[test]
fn next_n_times_wraps_to_start() {
    for n in 1..=7 {
        for start in 0..n {
            let mut c = SlideshowController::new(slides(n), CarouselConfig::default()).unwrap();
            c.go_to(start).unwrap();
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.current_index(), Some(start), "n={n} start={start}");
        }
    }
}

#[test]
fn finite_next_clamps_at_last_slide() {
    for n in 1..=6 {
        let config = CarouselConfig::default().with_infinite(false);
        let mut c = SlideshowController::new(slides(n), config).unwrap();
        for _ in 0..n + 5 {
            c.next();
        }
        assert_eq!(c.current_index(), Some(n - 1));
    }
}

#[test]
fn go_to_bounds() {
    let n = 4;
    let mut c = SlideshowController::new(slides(n), CarouselConfig::default()).unwrap();

    // -1 has no usize representation; its two's complement wrap is the largest index
    let minus_one = -1isize as usize;
    for bad in [minus_one, n] {
        match c.go_to(bad) {
            Err(CarouselError::IndexOutOfRange { index, len }) => {
                assert_eq!((index, len), (bad, n));
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    for k in 0..n {
        c.go_to(k).unwrap();
        assert_eq!(c.snapshot().current_index, Some(k));
    }
}

#[test]
fn autoplay_advances_once_per_interval() {
    let mut c = SlideshowController::new(slides(5), autoplay(100)).unwrap();

    c.tick(ms(50));
    assert_eq!(c.current_index(), Some(0));
    c.tick(ms(50));
    assert_eq!(c.current_index(), Some(1));
    c.tick(ms(50));
    assert_eq!(c.current_index(), Some(1));
    c.tick(ms(50));
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn hover_suspends_and_resumes_autoplay() {
    let mut c = SlideshowController::new(slides(3), autoplay(100)).unwrap();
    assert!(c.is_playing());

    c.hover_enter();
    for _ in 0..10 {
        c.tick(ms(60));
    }
    assert_eq!(c.current_index(), Some(0));
    assert!(c.is_playing());

    c.hover_leave();
    c.tick(ms(60));
    assert_eq!(c.current_index(), Some(0));
    c.tick(ms(60));
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn swipe_threshold() {
    let threshold = 50.0;
    let config = CarouselConfig::default().with_swipe_threshold(threshold);
    let mut c = SlideshowController::new(slides(4), config).unwrap();

    c.swipe(-threshold - 1.0);
    assert_eq!(c.current_index(), Some(1));

    c.swipe(-threshold + 1.0);
    assert_eq!(c.current_index(), Some(1));

    c.swipe(threshold + 1.0);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn three_slide_scenario() {
    let mut c = SlideshowController::new(slides(3), autoplay(100)).unwrap();

    c.tick(ms(100));
    assert_eq!(c.current_index(), Some(1));

    c.go_to(2).unwrap();
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.direction(), Direction::Forward);

    c.next();
    assert_eq!(c.current_index(), Some(0));

    c.previous();
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn snapshot_derived_fields() {
    let config = CarouselConfig::default().with_infinite(false);
    let mut c = SlideshowController::new(slides(4), config).unwrap();

    let first = c.snapshot();
    assert_eq!(first.progress_percent, 25.0);
    assert!(!first.can_go_previous);
    assert!(first.can_go_next);
    assert_eq!(first.len, 4);

    c.go_to(3).unwrap();
    let last = c.snapshot();
    assert_eq!(last.progress_percent, 100.0);
    assert!(last.can_go_previous);
    assert!(!last.can_go_next);
    let active: Vec<usize> = last.dots.iter().filter(|d| d.active).map(|d| d.index).collect();
    assert_eq!(active, vec![3]);

    let single = SlideshowController::new(slides(1), CarouselConfig::default()).unwrap();
    assert_eq!(single.snapshot().progress_percent, 100.0);
}

/// Scripted renderer: hands out one batch of intents per frame and records
/// what it was asked to draw.
#[derive(Default)]
struct ScriptedRenderer {
    frames: Vec<Vec<Intent>>,
    rendered: Vec<Snapshot>,
}

impl Renderer<String> for ScriptedRenderer {
    fn poll_intents(&mut self) -> Vec<Intent> {
        if self.frames.is_empty() {
            Vec::new()
        } else {
            self.frames.remove(0)
        }
    }

    fn render(&mut self, snapshot: &Snapshot, slides: &[String]) {
        assert_eq!(snapshot.len, slides.len());
        self.rendered.push(snapshot.clone());
    }
}

#[test]
fn run_frame_applies_intents_then_ticks_then_renders() {
    let mut c = SlideshowController::new(slides(3), autoplay(100)).unwrap();
    let mut renderer = ScriptedRenderer {
        frames: vec![
            vec![Intent::Next, Intent::Next],
            vec![Intent::HoverEnter],
            vec![],
            vec![Intent::HoverLeave],
        ],
        ..Default::default()
    };

    for _ in 0..4 {
        c.run_frame(&mut renderer, ms(60)).unwrap();
    }

    let indices: Vec<_> = renderer.rendered.iter().map(|s| s.current_index).collect();
    assert_eq!(indices, vec![Some(2), Some(2), Some(2), Some(0)]);
    assert!(renderer.rendered[1].is_hovered);
}

#[test]
fn run_frame_renders_even_when_an_intent_is_rejected() {
    let mut c = SlideshowController::new(slides(3), CarouselConfig::default()).unwrap();
    let mut renderer = ScriptedRenderer {
        frames: vec![vec![Intent::GoTo(9), Intent::Next]],
        ..Default::default()
    };

    let result = c.run_frame(&mut renderer, ms(16));
    assert!(matches!(result, Err(CarouselError::IndexOutOfRange { index: 9, len: 3 })));
    assert_eq!(renderer.rendered.len(), 1);
    assert_eq!(renderer.rendered[0].current_index, Some(1));
}
