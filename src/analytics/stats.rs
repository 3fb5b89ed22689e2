//! Whole-store statistics
//!
//! Backs the stats endpoint. Always runs over the unfiltered store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SalesRecord;

use super::round2;

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_records: usize,
    pub date_range: DateRange,
    pub regions: BTreeMap<String, usize>,
    pub products: BTreeMap<String, usize>,
    pub sales_stats: SalesStats,
}

pub fn dataset_stats(records: &[SalesRecord]) -> StoreStats {
    let mut regions: BTreeMap<String, usize> = BTreeMap::new();
    let mut products: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *regions.entry(record.region.as_str().to_string()).or_insert(0) += 1;
        *products.entry(record.product.as_str().to_string()).or_insert(0) += 1;
    }

    StoreStats {
        total_records: records.len(),
        date_range: DateRange {
            start: records.iter().map(|r| r.date).min(),
            end: records.iter().map(|r| r.date).max(),
        },
        regions,
        products,
        sales_stats: sales_stats(records),
    }
}

fn sales_stats(records: &[SalesRecord]) -> SalesStats {
    if records.is_empty() {
        return SalesStats {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            median: 0.0,
        };
    }

    let mut sales: Vec<f64> = records.iter().map(|r| r.sales).collect();
    sales.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = sales.iter().sum();
    let mid = sales.len() / 2;
    let median = if sales.len() % 2 == 0 {
        (sales[mid - 1] + sales[mid]) / 2.0
    } else {
        sales[mid]
    };

    SalesStats {
        min: sales[0],
        max: sales[sales.len() - 1],
        mean: round2(total / sales.len() as f64),
        median: round2(median),
    }
}
