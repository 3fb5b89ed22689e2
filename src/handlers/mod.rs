//! HTTP handlers

use serde::Deserialize;

use crate::models::FilterCriteria;

pub mod data;
pub mod export;
pub mod health;
pub mod realtime;
pub mod stats;

/// Common dashboard filter parameters. Absent, `"all"`, or unparseable
/// values fall back to match-everything rather than failing the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub region: Option<String>,
    pub product: Option<String>,
    pub date_range: Option<String>,
}

impl FilterQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_params(
            self.region.as_deref(),
            self.product.as_deref(),
            self.date_range.as_deref(),
        )
    }
}
