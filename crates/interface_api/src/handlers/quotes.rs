//! Quote handlers

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use domain_quote::{FormValues, QuoteError, QuoteRecord, QuoteValidator, TracingNotifier};
use infra_render::{DirectorySink, DiscardSink, QuoteImageGenerator, RenderError};
use serde_json::Value;
use tracing::warn;

use crate::{AppState, error::ApiError};
use crate::dto::quote::*;

/// Validates a quote form
pub async fn validate_quote(
    State(_state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ValidateQuoteResponse>, ApiError> {
    let record = validate(&body)?;
    Ok(Json(ValidateQuoteResponse::new(record)))
}

/// Validates a quote form and returns it drawn as a PNG attachment
pub async fn render_quote_image(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let record = validate(&body)?;

    let painter = state
        .painter
        .clone()
        .ok_or_else(|| RenderError::font("no fonts loaded"))?;
    let mut generator = QuoteImageGenerator::new(painter, state.reference, state.settings);

    let generated = match &state.config.output_dir {
        Some(dir) => {
            generator
                .generate(&record, &DirectorySink::new(dir), &TracingNotifier)
                .await?
        }
        None => generator.generate(&record, &DiscardSink, &TracingNotifier).await?,
    };

    let image = generated.image;
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", image.file_name))
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(image.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        image.png,
    )
        .into_response())
}

fn validate(body: &Value) -> Result<QuoteRecord, ApiError> {
    let values = FormValues::from_json(body)?;
    QuoteValidator::validate(&values).map_err(|errors| {
        warn!(fields = ?errors.paths(), "Quote failed validation");
        ApiError::from(QuoteError::from(errors))
    })
}
