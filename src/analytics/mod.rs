//! Aggregation engine
//!
//! Pure reducers over a filtered row slice. None of them mutate their
//! input, and every one of them returns a zeroed/empty result for an
//! empty slice instead of erroring.

pub mod metrics;
pub mod pivot;
pub mod series;
pub mod stats;

pub use metrics::{kpi_summary, KpiSummary};
pub use pivot::{region_product_pivot, PivotTable};
pub use series::{monthly_growth, product_series, region_series, sales_trend};
pub use series::{GrowthSeries, ProductSeries, RegionSeries, TrendSeries};
pub use stats::{dataset_stats, StoreStats};

/// Round to 2 decimal places at the response boundary. Intermediate
/// sums keep full precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (conversion rate only).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
