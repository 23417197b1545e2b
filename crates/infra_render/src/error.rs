//! Rendering errors
//!
//! Each variant aborts the current render attempt. None of them leave a file
//! behind, and all of them map to a notification for the user.

use domain_quote::Notification;
use thiserror::Error;

/// Errors that can occur while rendering or exporting a quote image
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing surface could not be allocated
    #[error("Failed to get canvas surface: {0}")]
    SurfaceUnavailable(String),

    /// Capture was requested but nothing has been painted
    #[error("No quote canvas found")]
    NoCanvas,

    /// The encoded image is empty or not a PNG
    #[error("Generated image is empty")]
    EmptyImage,

    /// PNG encoding failed
    #[error("Image encoding failed: {0}")]
    Encoding(String),

    /// A font could not be read or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// The image could not be handed over to its destination
    #[error("Image delivery failed: {0}")]
    Delivery(String),
}

impl RenderError {
    pub fn surface(message: impl Into<String>) -> Self {
        RenderError::SurfaceUnavailable(message.into())
    }

    pub fn font(message: impl Into<String>) -> Self {
        RenderError::Font(message.into())
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        RenderError::Delivery(message.into())
    }

    /// Returns the notification shown to the user for this failure
    pub fn notification(&self) -> Notification {
        match self {
            RenderError::SurfaceUnavailable(_) | RenderError::Font(_) => {
                Notification::error("Failed to create quote image")
            }
            RenderError::NoCanvas => Notification::error("No quote canvas found"),
            RenderError::EmptyImage | RenderError::Encoding(_) | RenderError::Delivery(_) => {
                Notification::error("Failed to generate quote image. Please try again.")
            }
        }
    }
}
