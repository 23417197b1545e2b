//! The drawing surface
//!
//! Rendering is split in two phases: [`QuoteCanvas::paint`] fills a fresh
//! surface from a layout, [`QuoteCanvas::capture`] takes that surface and
//! encodes it. Both need `&mut self`, so one canvas can only ever hold one
//! render in flight.

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageBuffer, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::RenderError;
use crate::layout::{QuoteLayout, TextAlign, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::painter::TextPainter;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Smallest payload accepted as a real image
const MIN_IMAGE_BYTES: usize = 100;

/// Upper bound on the surface allocation
const MAX_SURFACE_BYTES: usize = 256 * 1024 * 1024;

/// A canvas that paints quote layouts and captures them as PNG
pub struct QuoteCanvas {
    width: u32,
    height: u32,
    painter: Arc<dyn TextPainter>,
    surface: Option<RgbaImage>,
}

impl QuoteCanvas {
    /// Creates a canvas of the given size
    pub fn new(width: u32, height: u32, painter: Arc<dyn TextPainter>) -> Self {
        Self {
            width,
            height,
            painter,
            surface: None,
        }
    }

    /// Creates a 1080x1080 canvas
    pub fn standard(painter: Arc<dyn TextPainter>) -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, painter)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns true if a painted surface is waiting to be captured
    pub fn is_painted(&self) -> bool {
        self.surface.is_some()
    }

    /// Paints a layout onto a fresh white surface
    ///
    /// Any surface painted earlier and not yet captured is discarded.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::SurfaceUnavailable` if the surface cannot be
    /// allocated. The canvas is left empty in that case.
    pub fn paint(&mut self, layout: &QuoteLayout) -> Result<(), RenderError> {
        self.surface = None;
        let mut surface = self.allocate()?;

        for command in layout.commands() {
            let left = match command.align {
                TextAlign::Left => command.x,
                TextAlign::Center => command.x - self.painter.measure(&command.style, &command.text) / 2.0,
                TextAlign::Right => command.x - self.painter.measure(&command.style, &command.text),
            };
            self.painter.draw(
                &mut surface,
                &command.style,
                left,
                command.y,
                command.color,
                &command.text,
            );
        }

        debug!(commands = layout.commands().len(), "Canvas painted");
        self.surface = Some(surface);
        Ok(())
    }

    /// Takes the painted surface and encodes it as PNG
    ///
    /// # Errors
    ///
    /// - `RenderError::NoCanvas` if nothing has been painted
    /// - `RenderError::Encoding` if PNG encoding fails
    /// - `RenderError::EmptyImage` if the payload is too small or not a PNG
    pub fn capture(&mut self) -> Result<Vec<u8>, RenderError> {
        let surface = self.surface.take().ok_or(RenderError::NoCanvas)?;

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(surface)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| RenderError::Encoding(e.to_string()))?;

        if png.len() < MIN_IMAGE_BYTES || !png.starts_with(&PNG_SIGNATURE) {
            return Err(RenderError::EmptyImage);
        }

        debug!(bytes = png.len(), "Canvas captured");
        Ok(png)
    }

    fn allocate(&self) -> Result<RgbaImage, RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::surface(format!(
                "canvas has no area ({}x{})",
                self.width, self.height
            )));
        }

        let fits = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .is_some_and(|bytes| bytes <= MAX_SURFACE_BYTES);
        if !fits {
            return Err(RenderError::surface(format!(
                "canvas too large ({}x{})",
                self.width, self.height
            )));
        }

        Ok(ImageBuffer::from_pixel(self.width, self.height, BACKGROUND))
    }
}
