//! Scalar KPI computation

use std::collections::HashSet;

use crate::models::SalesRecord;

use super::{round1, round2};

/// Headline numbers for the filtered row set.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_orders: u64,
    pub avg_order_value: f64,
    pub unique_customers: usize,
    pub conversion_rate: f64,
}

/// Compute the KPI summary. Zero rows produce all-zero KPIs; the two
/// ratios are defined as 0 when their denominator is 0.
pub fn kpi_summary(rows: &[SalesRecord]) -> KpiSummary {
    let total_sales: f64 = rows.iter().map(|r| r.sales).sum();
    let total_orders: u64 = rows.iter().map(|r| r.orders as u64).sum();

    let unique_customers = rows
        .iter()
        .map(|r| r.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let avg_order_value = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    let conversion_rate = if unique_customers > 0 {
        total_orders as f64 / unique_customers as f64 * 100.0
    } else {
        0.0
    };

    KpiSummary {
        total_sales: round2(total_sales),
        total_orders,
        avg_order_value: round2(avg_order_value),
        unique_customers,
        conversion_rate: round1(conversion_rate),
    }
}
