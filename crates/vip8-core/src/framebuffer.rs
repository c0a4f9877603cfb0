use std::fmt;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const WIDTH: usize = DISPLAY_WIDTH as usize;
const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// The 64x32 monochrome screen, one byte per pixel (0 or 1), row major with the
/// origin in the top left corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [u8; WIDTH * HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [0; WIDTH * HEIGHT],
        }
    }

    /// Turns all the pixels off
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Coordinates wrap around, so (64, 32) is the same pixel as (0, 0)
    fn index(x: usize, y: usize) -> usize {
        (y % HEIGHT) * WIDTH + (x % WIDTH)
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[Self::index(x, y)]
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixel(x, y) == 1
    }

    /// Flips a single pixel. Returns true when a lit pixel got turned off
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[Self::index(x, y)];
        let erased = *pixel == 1;
        *pixel ^= 1;
        erased
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(WIDTH)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Text dump of the screen, `#` for lit pixels and `.` for dark ones
impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for pixel in row {
                f.write_str(if *pixel == 1 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.pixels.iter().filter(|pixel| **pixel == 1).count();
        f.debug_struct("Framebuffer").field("lit", &lit).finish()
    }
}
