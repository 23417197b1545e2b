//! Quote image generation
//!
//! [`QuoteImageGenerator`] ties layout, canvas and export together:
//! compose, paint, wait for the surface to settle, capture, deliver, and
//! tell the user how it went.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use core_kernel::ReferenceData;
use domain_quote::{Notification, Notifier, QuoteRecord};
use tracing::{error, info};

use crate::canvas::QuoteCanvas;
use crate::error::RenderError;
use crate::export::{file_name_for, ImageSink, QuoteImage};
use crate::layout::{QuoteLayout, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::painter::TextPainter;

/// Default pause between painting and capture
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Rendering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pause between paint and capture
    pub settle_delay: Duration,
    pub width: u32,
    pub height: u32,
}

impl RenderSettings {
    /// Settings with no settle delay
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// A delivered quote together with the record it was drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuote {
    pub record: QuoteRecord,
    pub image: QuoteImage,
}

/// Renders validated quotes into PNG images
///
/// The generator owns its canvas. Renders through one generator run one
/// after another; build one generator per render to run them in parallel.
pub struct QuoteImageGenerator {
    canvas: QuoteCanvas,
    reference: ReferenceData,
    settings: RenderSettings,
}

impl QuoteImageGenerator {
    pub fn new(
        painter: Arc<dyn TextPainter>,
        reference: ReferenceData,
        settings: RenderSettings,
    ) -> Self {
        let canvas = QuoteCanvas::new(settings.width, settings.height, painter);
        Self::with_canvas(canvas, reference, settings)
    }

    /// Uses an existing canvas instead of one sized from the settings
    pub fn with_canvas(canvas: QuoteCanvas, reference: ReferenceData, settings: RenderSettings) -> Self {
        Self {
            canvas,
            reference,
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Lays out a record without painting it
    pub fn layout(&self, record: &QuoteRecord, generated_at: DateTime<Utc>) -> QuoteLayout {
        QuoteLayout::compose(record, &self.reference, generated_at)
    }

    /// Paints a record, waits for the settle delay and captures the image
    ///
    /// # Errors
    ///
    /// Returns the first `RenderError` raised by painting or capture.
    pub async fn render_image(
        &mut self,
        record: &QuoteRecord,
        generated_at: DateTime<Utc>,
    ) -> Result<QuoteImage, RenderError> {
        let layout = self.layout(record, generated_at);

        info!(customer = %record.fullname, "Drawing canvas");
        self.canvas.paint(&layout)?;
        info!("Canvas drawn");

        if !self.settings.settle_delay.is_zero() {
            tokio::time::sleep(self.settings.settle_delay).await;
        }

        let png = self.canvas.capture()?;
        let (width, height) = self.canvas.dimensions();

        Ok(QuoteImage {
            png,
            file_name: file_name_for(generated_at),
            generated_at,
            width,
            height,
        })
    }

    /// Renders a record, delivers the image and notifies the user
    ///
    /// On success the notifier receives the submitted-quote notification
    /// carrying the record. On failure it receives the notification for the
    /// error and nothing is delivered.
    pub async fn generate(
        &mut self,
        record: &QuoteRecord,
        sink: &dyn ImageSink,
        notifier: &dyn Notifier,
    ) -> Result<GeneratedQuote, RenderError> {
        let result = self.render_and_deliver(record, sink).await;

        match &result {
            Ok(generated) => {
                info!(file = %generated.image.file_name, "Image downloaded");
                notifier.notify(Notification::quote_submitted(record));
            }
            Err(e) => {
                error!(error = %e, "Error generating image");
                notifier.notify(e.notification());
            }
        }

        result
    }

    async fn render_and_deliver(
        &mut self,
        record: &QuoteRecord,
        sink: &dyn ImageSink,
    ) -> Result<GeneratedQuote, RenderError> {
        let image = self.render_image(record, Utc::now()).await?;
        sink.deliver(&image).await?;
        Ok(GeneratedQuote {
            record: record.clone(),
            image,
        })
    }
}
