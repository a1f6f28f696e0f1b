//! raylib window that renders a carousel and turns input into intents

use std::time::Duration;

use raylib::prelude::*;

use carousel::constants::*;
use carousel::{Intent, Key, Renderer, Slide, Snapshot, SwipeTracker};

mod chrome;
mod texture_loader;
mod transition;

use chrome::ChromeLayout;
use texture_loader::load_texture_with_exif_rotation;
use transition::Transition;

const KEY_BINDINGS: [(KeyboardKey, Key); 5] = [
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_HOME, Key::Home),
    (KeyboardKey::KEY_END, Key::End),
    (KeyboardKey::KEY_SPACE, Key::Space),
];

pub struct Viewer {
    rl: RaylibHandle,
    thread: RaylibThread,

    textures: Vec<Option<Texture2D>>,
    hovered: bool,
    swipe: SwipeTracker,
    transition: Transition,
}

impl Viewer {
    pub fn open(slides: &[Slide]) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(RENDER_WIDTH, RENDER_HEIGHT)
            .title("Carousel")
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        // Slides without a loadable image still take part in navigation
        let textures = slides
            .iter()
            .map(|slide| {
                let path = slide.image.as_ref()?;
                match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        tracing::warn!("{:#}", e);
                        None
                    }
                }
            })
            .collect();

        Self {
            rl,
            thread,
            textures,
            hovered: false,
            swipe: SwipeTracker::new(),
            transition: Transition::new(),
        }
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f32(self.rl.get_frame_time().max(0.0))
    }

    fn layout(&self) -> ChromeLayout {
        ChromeLayout::new(
            self.rl.get_screen_width() as f32,
            self.rl.get_screen_height() as f32,
            self.textures.len(),
        )
    }
}

impl Renderer<Slide> for Viewer {
    fn poll_intents(&mut self) -> Vec<Intent> {
        let mut intents = Vec::new();
        let slide_count = self.textures.len();

        for (raylib_key, key) in KEY_BINDINGS {
            if self.rl.is_key_pressed(raylib_key) {
                intents.extend(key.intent(slide_count));
            }
        }

        let on_screen = self.rl.is_cursor_on_screen();
        if on_screen != self.hovered {
            self.hovered = on_screen;
            intents.push(if on_screen { Intent::HoverEnter } else { Intent::HoverLeave });
        }

        let mouse = self.rl.get_mouse_position();
        if self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.layout().hit(mouse) {
                Some(intent) => intents.push(intent),
                None => self.swipe.begin(mouse.x),
            }
        } else if self.rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.swipe.update(mouse.x);
        } else if self.rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.swipe.update(mouse.x);
            intents.extend(self.swipe.end());
        }

        intents
    }

    fn render(&mut self, snapshot: &Snapshot, slides: &[Slide]) {
        let layout = self.layout();
        self.transition.retarget(snapshot.current_index, snapshot.direction);
        self.transition.update(self.rl.get_frame_time());

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        for (index, offset) in self.transition.layers() {
            if let Some(Some(texture)) = self.textures.get(index) {
                draw_slide_image(&mut d, texture, offset * screen_width, screen_width, screen_height);
            }
        }

        if let Some(slide) = snapshot.current_index.and_then(|i| slides.get(i)) {
            draw_caption(&mut d, slide, screen_height);
        }
        if slides.is_empty() {
            d.draw_text("No slides", 20, 20, 20, Color::RED);
        }

        layout.draw(&mut d, snapshot);
    }
}

// Fit the image inside 90% of the window, centered, shifted by `offset_x` pixels
fn draw_slide_image(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    offset_x: f32,
    screen_width: f32,
    screen_height: f32,
) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;

    let scale = (screen_width * 0.9 / tex_width)
        .min(screen_height * 0.9 / tex_height)
        .min(1.0);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(screen_width * 0.5 + offset_x, screen_height * 0.5, scaled_width, scaled_height),
        origin,
        0.0,
        Color::WHITE,
    );
}

fn draw_caption(d: &mut RaylibDrawHandle, slide: &Slide, screen_height: f32) {
    let base_y = screen_height as i32 - 150;
    d.draw_text(&slide.title, 40, base_y, 32, Color::WHITE);
    if let Some(description) = &slide.description {
        d.draw_text(description, 40, base_y + 40, 20, Color::LIGHTGRAY);
    }
    if let Some(label) = &slide.button_label {
        let width = label.len() as i32 * 11 + 24;
        d.draw_rectangle(40, base_y + 70, width, 32, Color::SKYBLUE);
        d.draw_text(label, 52, base_y + 76, 20, Color::BLACK);
    }
}
