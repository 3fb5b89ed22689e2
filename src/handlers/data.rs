//! Dashboard data handler

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::analytics::{self, GrowthSeries, PivotTable, ProductSeries, RegionSeries, TrendSeries};
use crate::AppState;

use super::FilterQuery;

#[derive(Debug, Serialize)]
pub struct Metrics {
    total_sales: f64,
    total_orders: u64,
    avg_order_value: f64,
    conversion_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct Charts {
    sales_trend: TrendSeries,
    region_data: RegionSeries,
    product_data: ProductSeries,
    growth_data: GrowthSeries,
    heatmap_data: PivotTable,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    metrics: Metrics,
    charts: Charts,
}

/// Filtered metrics and chart series for the dashboard
pub async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<DashboardResponse> {
    let today = Utc::now().date_naive();
    let rows = state.store.filter(&query.criteria(), today);

    let kpis = analytics::kpi_summary(&rows);

    Json(DashboardResponse {
        metrics: Metrics {
            total_sales: kpis.total_sales,
            total_orders: kpis.total_orders,
            avg_order_value: kpis.avg_order_value,
            conversion_rate: kpis.conversion_rate,
        },
        charts: Charts {
            sales_trend: analytics::sales_trend(&rows),
            region_data: analytics::region_series(&rows),
            product_data: analytics::product_series(&rows),
            growth_data: analytics::monthly_growth(&rows),
            heatmap_data: analytics::region_product_pivot(&rows),
        },
    })
}
