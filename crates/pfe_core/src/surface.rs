//! Fixed-size RGBA pixel grids.
//!
//! A [`Surface`] never changes size after construction. Writes addressed
//! outside `[0, width) x [0, height)` are ignored and reported through the
//! returned `bool`, so callers can draw with loosely clipped coordinates
//! every frame without checking bounds themselves.

use bytemuck::{Pod, Zeroable};

use crate::error::EngineError;

/// One RGBA8 texel, laid out exactly as the presentation backend uploads it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const RED: Pixel = Pixel::rgb(255, 0, 0);
    pub const GREEN: Pixel = Pixel::rgb(0, 255, 0);
    pub const BLUE: Pixel = Pixel::rgb(0, 0, 255);
    pub const YELLOW: Pixel = Pixel::rgb(255, 255, 0);

    /// Fully opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Surface {
    /// Allocate a `width * height` surface filled with opaque green, so a
    /// frame nobody drew into is easy to tell apart from the letterbox.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "surface size must be non-zero, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                EngineError::InvalidConfig(format!("surface {width}x{height} is too large"))
            })?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::GREEN; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Write an opaque colour at `(x, y)`. Returns `false` (and touches
    /// nothing) when the coordinate is out of bounds. The colour's alpha is
    /// ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = Pixel::rgb(color.r, color.g, color.b);
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set every pixel to the given opaque colour.
    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(Pixel::rgb(color.r, color.g, color.b));
    }

    /// Row-major pixel data, top row first.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The same data viewed as tightly packed RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
