//! A small interactive scene: a few fixed pixels, marked corners and a
//! crosshair following the mouse. Escape quits.

use pfe_core::{Application, Engine, Key, MouseButton, Pixel};

#[derive(Default)]
pub struct Demo {
    clicks: u32,
}

impl Demo {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_crosshair(engine: &mut Engine, x: i32, y: i32) {
        for d in -2..=2 {
            engine.draw(x + d, y, Pixel::WHITE);
            engine.draw(x, y + d, Pixel::WHITE);
        }
    }
}

impl Application for Demo {
    fn on_create(&mut self, engine: &mut Engine) -> bool {
        log::info!(
            "Demo started on a {}x{} screen",
            engine.screen_width(),
            engine.screen_height()
        );
        true
    }

    fn on_update(&mut self, engine: &mut Engine) -> bool {
        let enter = engine.key(Key::Enter);
        if enter.pressed {
            log::info!("Enter pressed");
        } else if enter.held && engine.frame_count() % 60 == 0 {
            log::debug!("Enter held");
        }
        if engine.mouse(MouseButton::Left).pressed {
            self.clicks += 1;
            log::info!(
                "Click {} at ({}, {})",
                self.clicks,
                engine.mouse_x(),
                engine.mouse_y()
            );
        }

        engine.clear(Pixel::YELLOW);
        engine.draw(10, 10, Pixel::RED);
        engine.draw(11, 11, Pixel::RED);

        let right = engine.screen_width() as i32 - 1;
        let bottom = engine.screen_height() as i32 - 1;
        for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
            engine.draw(x, y, Pixel::BLUE);
        }

        let (mouse_x, mouse_y) = (engine.mouse_x(), engine.mouse_y());
        Self::draw_crosshair(engine, mouse_x, mouse_y);

        !engine.key(Key::Escape).pressed
    }

    fn on_destroy(&mut self, engine: &mut Engine) -> bool {
        log::info!(
            "Demo finished after {} frames ({:.1} fps)",
            engine.frame_count(),
            engine.fps()
        );
        true
    }
}
