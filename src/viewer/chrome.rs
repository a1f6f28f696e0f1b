use raylib::prelude::*;

use carousel::{Intent, Snapshot};

const ARROW_SIZE: f32 = 56.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;
const PROGRESS_HEIGHT: f32 = 4.0;
const BUTTON_SIZE: f32 = 36.0;

const ENABLED: Color = Color::new(255, 255, 255, 220);
const DISABLED: Color = Color::new(255, 255, 255, 60);
const SCRIM: Color = Color::new(0, 0, 0, 140);

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Positions of the carousel controls for one window size
pub struct ChromeLayout {
    previous: Rectangle,
    next: Rectangle,
    play: Rectangle,
    dots: Vec<Rectangle>,
    progress: Rectangle,
}

impl ChromeLayout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let arrow_y = (height - ARROW_SIZE) * 0.5;
        let dots_width = slide_count as f32 * DOT_SPACING;
        let dots_x = (width - dots_width) * 0.5;
        let dots_y = height - 40.0;

        Self {
            previous: Rectangle::new(16.0, arrow_y, ARROW_SIZE, ARROW_SIZE),
            next: Rectangle::new(width - 16.0 - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE),
            play: Rectangle::new(width - 16.0 - BUTTON_SIZE, 16.0, BUTTON_SIZE, BUTTON_SIZE),
            dots: (0..slide_count)
                .map(|i| {
                    Rectangle::new(
                        dots_x + i as f32 * DOT_SPACING,
                        dots_y - DOT_SPACING * 0.5,
                        DOT_SPACING,
                        DOT_SPACING,
                    )
                })
                .collect(),
            progress: Rectangle::new(0.0, height - PROGRESS_HEIGHT, width, PROGRESS_HEIGHT),
        }
    }

    /// Control under `point`, if any. Disabled arrows still report their
    /// intent; the controller ignores it at the boundary.
    pub fn hit(&self, point: Vector2) -> Option<Intent> {
        if contains(&self.previous, point) {
            return Some(Intent::Previous);
        }
        if contains(&self.next, point) {
            return Some(Intent::Next);
        }
        if contains(&self.play, point) {
            return Some(Intent::TogglePlay);
        }
        self.dots
            .iter()
            .position(|dot| contains(dot, point))
            .map(Intent::GoTo)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, snapshot: &Snapshot) {
        if snapshot.len > 1 {
            draw_arrow(d, &self.previous, "<", snapshot.can_go_previous);
            draw_arrow(d, &self.next, ">", snapshot.can_go_next);

            d.draw_rectangle_rec(self.play, SCRIM);
            let label = if snapshot.is_playing { "||" } else { ">" };
            d.draw_text(label, self.play.x as i32 + 12, self.play.y as i32 + 8, 20, ENABLED);
        }

        for (dot, state) in self.dots.iter().zip(snapshot.dots.iter()) {
            let color = if state.active { ENABLED } else { DISABLED };
            let radius = if state.active { DOT_RADIUS * 1.3 } else { DOT_RADIUS };
            d.draw_circle(
                (dot.x + dot.width * 0.5) as i32,
                (dot.y + dot.height * 0.5) as i32,
                radius,
                color,
            );
        }

        let mut filled = self.progress;
        filled.width *= snapshot.progress_percent / 100.0;
        d.draw_rectangle_rec(self.progress, SCRIM);
        d.draw_rectangle_rec(filled, Color::SKYBLUE);
    }
}

fn draw_arrow(d: &mut RaylibDrawHandle, rect: &Rectangle, glyph: &str, enabled: bool) {
    d.draw_rectangle_rec(*rect, SCRIM);
    let color = if enabled { ENABLED } else { DISABLED };
    d.draw_text(glyph, rect.x as i32 + 18, rect.y as i32 + 10, 36, color);
}
