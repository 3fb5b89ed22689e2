//! Store statistics handler

use axum::{extract::State, Json};

use crate::analytics::{self, StoreStats};
use crate::AppState;

/// Statistics over the entire unfiltered store
pub async fn overview(State(state): State<AppState>) -> Json<StoreStats> {
    Json(analytics::dataset_stats(&state.store.snapshot()))
}
