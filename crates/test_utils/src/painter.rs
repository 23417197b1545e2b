//! Font-free Text Painter
//!
//! [`BlockPainter`] stands in for a real font. Every character is a solid
//! box half as wide as the font size, and every call is recorded so tests can
//! check where text went without loading font files.

use std::sync::{Arc, Mutex};

use image::{Rgba, RgbaImage};
use infra_render::{TextPainter, TextStyle};

/// Width of one character as a fraction of the font size
const ADVANCE_RATIO: f32 = 0.5;

/// Height of a character box as a fraction of the font size
const ASCENT_RATIO: f32 = 0.7;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub style: TextStyle,
    pub color: Rgba<u8>,
}

/// A text painter that draws boxes and remembers what it drew
#[derive(Debug, Default)]
pub struct BlockPainter {
    calls: Mutex<Vec<DrawCall>>,
}

impl BlockPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shared painter ready to hand to a canvas
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns every draw call so far
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Returns the text of every draw call so far
    pub fn drawn_text(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.text).collect()
    }

    /// Returns the first draw call with exactly this text
    pub fn find(&self, text: &str) -> Option<DrawCall> {
        self.calls().into_iter().find(|c| c.text == text)
    }

    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl TextPainter for BlockPainter {
    fn measure(&self, style: &TextStyle, text: &str) -> f32 {
        text.chars().count() as f32 * style.size_px * ADVANCE_RATIO
    }

    fn draw(
        &self,
        surface: &mut RgbaImage,
        style: &TextStyle,
        x: f32,
        baseline: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(DrawCall {
                text: text.to_string(),
                x,
                baseline,
                style: *style,
                color,
            });
        }

        let (width, height) = surface.dimensions();
        let left = x.max(0.0) as u32;
        let right = ((x + self.measure(style, text)).max(0.0) as u32).min(width);
        let top = (baseline - style.size_px * ASCENT_RATIO).max(0.0) as u32;
        let bottom = (baseline.max(0.0) as u32).min(height);

        for py in top..bottom {
            for px in left..right {
                surface.put_pixel(px, py, color);
            }
        }
    }
}
