//! Text painting
//!
//! The canvas never touches fonts directly; it goes through [`TextPainter`].
//! [`FontPainter`] rasterizes TrueType fonts with `rusttype`, blending glyph
//! coverage over whatever is already on the surface.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use serde::Deserialize;
use tracing::info;

use crate::error::RenderError;
use crate::layout::{FontFace, TextStyle};

/// Measures and draws text onto a surface
pub trait TextPainter: Send + Sync {
    /// Returns the advance width of `text` in pixels
    fn measure(&self, style: &TextStyle, text: &str) -> f32;

    /// Draws `text` with its left edge at `x` and its baseline at `baseline`
    fn draw(
        &self,
        surface: &mut RgbaImage,
        style: &TextStyle,
        x: f32,
        baseline: f32,
        color: Rgba<u8>,
        text: &str,
    );
}

/// Font files for each face
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontSources {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub italic: PathBuf,
}

impl Default for FontSources {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            bold: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            italic: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf"),
        }
    }
}

/// TrueType text painter
pub struct FontPainter {
    regular: Font<'static>,
    bold: Font<'static>,
    italic: Font<'static>,
}

impl FontPainter {
    /// Parses fonts from raw TrueType data
    pub fn from_bytes(regular: Vec<u8>, bold: Vec<u8>, italic: Vec<u8>) -> Result<Self, RenderError> {
        Ok(Self {
            regular: parse_font("regular", regular)?,
            bold: parse_font("bold", bold)?,
            italic: parse_font("italic", italic)?,
        })
    }

    /// Reads and parses the configured font files
    pub fn load(sources: &FontSources) -> Result<Self, RenderError> {
        let painter = Self::from_bytes(
            read_font(&sources.regular)?,
            read_font(&sources.bold)?,
            read_font(&sources.italic)?,
        )?;
        info!(regular = %sources.regular.display(), "Fonts loaded");
        Ok(painter)
    }

    fn font(&self, face: FontFace) -> &Font<'static> {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Italic => &self.italic,
        }
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>, RenderError> {
    std::fs::read(path)
        .map_err(|e| RenderError::font(format!("cannot read {}: {}", path.display(), e)))
}

fn parse_font(face: &str, data: Vec<u8>) -> Result<Font<'static>, RenderError> {
    Font::try_from_vec(data).ok_or_else(|| RenderError::font(format!("invalid {} font data", face)))
}

impl TextPainter for FontPainter {
    fn measure(&self, style: &TextStyle, text: &str) -> f32 {
        let scale = Scale::uniform(style.size_px);
        self.font(style.face)
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
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
        let scale = Scale::uniform(style.size_px);
        let (width, height) = surface.dimensions();

        for glyph in self.font(style.face).layout(text, scale, point(x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                blend(surface.get_pixel_mut(px as u32, py as u32), color, coverage);
            });
        }
    }
}

/// Blends `color` over `dst` with the given coverage in [0, 1]
pub(crate) fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    for channel in 0..3 {
        dst.0[channel] =
            (color.0[channel] as f32 * alpha + dst.0[channel] as f32 * inv).round() as u8;
    }
    dst.0[3] = 0xff;
}
