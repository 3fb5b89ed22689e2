//! Simulated realtime feed handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RealtimeResponse {
    success: bool,
    new_records: usize,
    total_records: usize,
}

/// Append a small synthetic batch dated today, mimicking a live feed
pub async fn simulate(State(state): State<AppState>) -> Json<RealtimeResponse> {
    let today = Utc::now().date_naive();
    let batch = state.generator.lock().live(today);
    let new_records = batch.len();

    state.store.append(batch);
    let total_records = state.store.len();

    tracing::debug!("Appended {} live records ({} total)", new_records, total_records);

    Json(RealtimeResponse {
        success: true,
        new_records,
        total_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::generator::SampleGenerator;
    use crate::store::RecordStore;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(RecordStore::new()),
            generator: Arc::new(Mutex::new(SampleGenerator::new(9))),
            config: Config {
                port: 0,
                seed_records: 0,
                rng_seed: 9,
                export_dir: std::env::temp_dir(),
            },
        }
    }

    #[tokio::test]
    async fn test_simulate_appends_one_to_five_records() {
        let state = test_state();

        let first = simulate(State(state.clone())).await;
        let json = serde_json::to_value(&first.0).unwrap();

        let new_records = json["new_records"].as_u64().unwrap();
        assert!((1..=5).contains(&new_records));
        assert_eq!(json["total_records"].as_u64().unwrap(), new_records);
        assert_eq!(state.store.len() as u64, new_records);

        // a second call only ever grows the store
        let second = simulate(State(state.clone())).await;
        let json = serde_json::to_value(&second.0).unwrap();
        assert_eq!(json["total_records"].as_u64().unwrap(), state.store.len() as u64);
        assert!(state.store.len() as u64 >= new_records + 1);
    }
}
