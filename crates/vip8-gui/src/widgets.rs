use iced::mouse::Cursor;
use iced::widget::canvas;
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme};

use vip8_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Framebuffer};

use crate::Message;

/// A custom widget based on Canvas, which draws *pixels* over a black screen in the native CHIP-8
/// resolution. It keeps its own copy of the screen, so it only has to be redrawn when the
/// interpreter reports a change.
#[derive(Default)]
pub struct Display {
    framebuffer: Framebuffer,
    cache: canvas::Cache,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes over the interpreter's screen and throws away the cached drawing
    pub fn update(&mut self, framebuffer: &Framebuffer) {
        self.framebuffer = framebuffer.clone();
        self.cache.clear();
    }

    /// Construct a canvas based on custom drawing logic
    pub fn view(&self) -> Element<'_, Message> {
        canvas::Canvas::new(self).width(Fill).height(Fill).into()
    }
}

impl canvas::Program<Message> for Display {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let cell_size = Size::new(
            bounds.width / f32::from(DISPLAY_WIDTH),
            bounds.height / f32::from(DISPLAY_HEIGHT),
        );

        let screen = self.cache.draw(renderer, bounds.size(), |frame| {
            // Fill frames background with black color
            let background = canvas::Path::rectangle(Point::ORIGIN, bounds.size());
            frame.fill(&background, Color::BLACK);

            for (row, pixels) in self.framebuffer.rows().enumerate() {
                for (column, pixel) in pixels.iter().enumerate() {
                    if *pixel == 0 {
                        continue;
                    }

                    let x = column as f32 * cell_size.width;
                    let y = row as f32 * cell_size.height;
                    let cell = canvas::Path::rectangle(Point::new(x, y), cell_size);
                    frame.fill(&cell, Color::WHITE);
                }
            }
        });

        vec![screen]
    }
}
