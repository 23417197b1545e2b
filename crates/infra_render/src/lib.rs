//! Quote Image Rendering
//!
//! This crate paints a validated quote onto a fixed 1080x1080 canvas and
//! exports it as a PNG.
//!
//! # Pipeline
//!
//! ```text
//! QuoteRecord -> QuoteLayout::compose -> QuoteCanvas::paint
//!             -> settle delay -> QuoteCanvas::capture -> QuoteImage -> ImageSink
//! ```
//!
//! Layout is pure and carries every line of text, so what the image says can
//! be checked without decoding pixels. Painting and capture are two separate
//! steps on a canvas that is borrowed mutably for both, which rules out two
//! renders overlapping on the same surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_render::{FontPainter, FontSources, QuoteImageGenerator, RenderSettings, DirectorySink};
//!
//! let painter = FontPainter::load(&FontSources::default())?;
//! let mut generator = QuoteImageGenerator::new(
//!     std::sync::Arc::new(painter),
//!     ReferenceData::standard(),
//!     RenderSettings::default(),
//! );
//! let generated = generator
//!     .generate(&record, &DirectorySink::new("quotes"), &TracingNotifier)
//!     .await?;
//! ```

pub mod layout;
pub mod painter;
pub mod canvas;
pub mod export;
pub mod generator;
pub mod error;

pub use layout::{
    FontFace, LayoutLine, QuoteLayout, TextAlign, TextCommand, TextStyle, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
pub use painter::{FontPainter, FontSources, TextPainter};
pub use canvas::QuoteCanvas;
pub use export::{file_name_for, DirectorySink, DiscardSink, ImageSink, QuoteImage};
pub use generator::{GeneratedQuote, QuoteImageGenerator, RenderSettings, DEFAULT_SETTLE_DELAY};
pub use error::RenderError;
