//! Reference data handlers

use axum::{extract::{Path, State}, Json};

use crate::{AppState, error::ApiError};
use crate::dto::reference::*;

/// Returns every select field of the quote form
pub async fn get_reference_data(State(state): State<AppState>) -> Json<ReferenceDataResponse> {
    Json(ReferenceDataResponse::from(&state.reference))
}

/// Returns one lookup table by name
pub async fn get_lookup_table(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LookupTableResponse>, ApiError> {
    let table = state.reference.table(&name)?;
    Ok(Json(LookupTableResponse::from(table)))
}
