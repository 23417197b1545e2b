//! Image export
//!
//! A captured quote image is handed to an [`ImageSink`]. The HTTP layer
//! streams it back as an attachment; [`DirectorySink`] writes it to disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::RenderError;

/// Returns the download name for an image generated at `at`
pub fn file_name_for(at: DateTime<Utc>) -> String {
    format!("car-insurance-quote-{}.png", at.timestamp_millis())
}

/// An encoded quote image ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteImage {
    pub png: Vec<u8>,
    pub file_name: String,
    pub generated_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
}

impl QuoteImage {
    pub fn content_type(&self) -> &'static str {
        "image/png"
    }

    pub fn len(&self) -> usize {
        self.png.len()
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}

/// Destination for finished quote images
#[async_trait]
pub trait ImageSink: Send + Sync {
    /// Delivers one image
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Delivery` if the image could not be handed over.
    async fn deliver(&self, image: &QuoteImage) -> Result<(), RenderError>;
}

/// Accepts every image without keeping it
///
/// For callers that hand the image back themselves, such as an HTTP
/// response.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

#[async_trait]
impl ImageSink for DiscardSink {
    async fn deliver(&self, _image: &QuoteImage) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Writes images into a directory under their download name
///
/// The file is written under a temporary name first and renamed once
/// complete, so a failed delivery never leaves a partial image behind.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the image will be written to
    pub fn path_for(&self, image: &QuoteImage) -> PathBuf {
        self.dir.join(&image.file_name)
    }
}

#[async_trait]
impl ImageSink for DirectorySink {
    async fn deliver(&self, image: &QuoteImage) -> Result<(), RenderError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RenderError::delivery(format!("{}: {}", self.dir.display(), e)))?;

        let target = self.path_for(image);
        let partial = target.with_extension("png.part");

        if let Err(e) = tokio::fs::write(&partial, &image.png).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(RenderError::delivery(format!("{}: {}", partial.display(), e)));
        }

        if let Err(e) = tokio::fs::rename(&partial, &target).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(RenderError::delivery(format!("{}: {}", target.display(), e)));
        }

        info!(path = %target.display(), bytes = image.len(), "Quote image saved");
        Ok(())
    }
}
