//! CSV export handler

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::{export, AppResult, AppState};

use super::FilterQuery;

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    success: bool,
    filename: String,
    records: usize,
    message: String,
}

/// Export the filtered rows as a timestamped CSV file
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Json<ExportResponse>> {
    let today = Utc::now().date_naive();
    let rows = state.store.filter(&query.criteria(), today);

    let filename = format!("sales_data_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
    export::write_csv_file(&rows, &state.config.export_dir, &filename)?;

    tracing::info!("Exported {} records to {}", rows.len(), filename);

    Ok(Json(ExportResponse {
        success: true,
        records: rows.len(),
        message: format!("Exported {} records to {}", rows.len(), filename),
        filename,
    }))
}
