//! Chart series reducers
//!
//! Each reducer partitions the rows by one key and sums sales per
//! partition. The 1-D group-bys emit groups in first-appearance order
//! and omit absent groups; the date-keyed series sort their keys
//! instead.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Product, Region, SalesRecord};

/// Daily sales totals, dates ascending. Parallel arrays; no gap filling
/// for days with no rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendSeries {
    pub dates: Vec<NaiveDate>,
    pub sales: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionSeries {
    pub regions: Vec<Region>,
    pub sales: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductSeries {
    pub products: Vec<Product>,
    pub sales: Vec<f64>,
}

/// Month-over-month growth. `months` are `YYYY-MM` labels sorted
/// chronologically; `growth_rates[0]` is always 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GrowthSeries {
    pub months: Vec<String>,
    pub growth_rates: Vec<f64>,
}

pub fn sales_trend(rows: &[SalesRecord]) -> TrendSeries {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *by_date.entry(row.date).or_insert(0.0) += row.sales;
    }

    TrendSeries {
        dates: by_date.keys().copied().collect(),
        sales: by_date.values().copied().collect(),
    }
}

pub fn region_series(rows: &[SalesRecord]) -> RegionSeries {
    let (regions, sales) = group_sum(rows, |r| r.region);
    RegionSeries { regions, sales }
}

pub fn product_series(rows: &[SalesRecord]) -> ProductSeries {
    let (products, sales) = group_sum(rows, |r| r.product);
    ProductSeries { products, sales }
}

/// 1-D group-by-sum keeping first-appearance key order.
fn group_sum<K, F>(rows: &[SalesRecord], key_of: F) -> (Vec<K>, Vec<f64>)
where
    K: Copy + Eq + std::hash::Hash,
    F: Fn(&SalesRecord) -> K,
{
    let mut order: Vec<K> = Vec::new();
    let mut totals: HashMap<K, f64> = HashMap::new();

    for row in rows {
        let key = key_of(row);
        totals
            .entry(key)
            .and_modify(|sum| *sum += row.sales)
            .or_insert_with(|| {
                order.push(key);
                row.sales
            });
    }

    let sales = order.iter().map(|k| totals[k]).collect();
    (order, sales)
}

pub fn monthly_growth(rows: &[SalesRecord]) -> GrowthSeries {
    // (year, month) keys sort chronologically, never lexically
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for row in rows {
        let key = (row.date.year(), row.date.month());
        *by_month.entry(key).or_insert(0.0) += row.sales;
    }

    let months = by_month
        .keys()
        .map(|(year, month)| format!("{:04}-{:02}", year, month))
        .collect();

    let sums: Vec<f64> = by_month.values().copied().collect();
    let growth_rates = growth_rates(&sums);

    GrowthSeries {
        months,
        growth_rates,
    }
}

/// Period-over-period growth in percent. The first period and any
/// period following a zero-sales month are pinned to 0 rather than
/// dividing by zero.
fn growth_rates(sums: &[f64]) -> Vec<f64> {
    sums.iter()
        .enumerate()
        .map(|(i, &current)| {
            if i == 0 {
                return 0.0;
            }
            let previous = sums[i - 1];
            if previous == 0.0 {
                0.0
            } else {
                (current - previous) / previous * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::kpi_summary;

    fn record(date: NaiveDate, region: Region, product: Product, sales: f64) -> SalesRecord {
        SalesRecord {
            date,
            region,
            product,
            sales,
            orders: 1,
            customers: 20,
            customer_id: "CUST_1000".to_string(),
            order_id: "ORD_10000".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_rows_give_empty_series() {
        assert!(sales_trend(&[]).dates.is_empty());
        assert!(region_series(&[]).regions.is_empty());
        assert!(product_series(&[]).products.is_empty());
        assert!(monthly_growth(&[]).months.is_empty());
    }

    #[test]
    fn test_trend_dates_ascending_and_unique() {
        let rows = vec![
            record(day(2025, 6, 3), Region::North, Product::Electronics, 10.0),
            record(day(2025, 6, 1), Region::South, Product::Clothing, 20.0),
            record(day(2025, 6, 3), Region::East, Product::Sports, 5.0),
        ];

        let trend = sales_trend(&rows);
        assert_eq!(trend.dates, vec![day(2025, 6, 1), day(2025, 6, 3)]);
        assert_eq!(trend.sales, vec![20.0, 15.0]);

        for pair in trend.dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_trend_total_matches_kpi_total() {
        let rows = vec![
            record(day(2025, 6, 1), Region::North, Product::Electronics, 12.5),
            record(day(2025, 6, 2), Region::South, Product::Clothing, 30.25),
            record(day(2025, 6, 2), Region::East, Product::Sports, 7.25),
        ];

        let trend_total: f64 = sales_trend(&rows).sales.iter().sum();
        let kpi_total = kpi_summary(&rows).total_sales;
        assert!((trend_total - kpi_total).abs() < 1e-9);
    }

    #[test]
    fn test_group_order_is_first_appearance() {
        let rows = vec![
            record(day(2025, 6, 1), Region::West, Product::Sports, 1.0),
            record(day(2025, 6, 2), Region::North, Product::Clothing, 2.0),
            record(day(2025, 6, 3), Region::West, Product::Sports, 3.0),
        ];

        let by_region = region_series(&rows);
        assert_eq!(by_region.regions, vec![Region::West, Region::North]);
        assert_eq!(by_region.sales, vec![4.0, 2.0]);

        // absent groups are omitted, not zero-filled
        let by_product = product_series(&rows);
        assert_eq!(by_product.products, vec![Product::Sports, Product::Clothing]);
    }

    #[test]
    fn test_growth_rates_with_zero_month() {
        // monthly sums [100, 150, 0, 50] -> [0, 50, -100, 0]
        assert_eq!(
            growth_rates(&[100.0, 150.0, 0.0, 50.0]),
            vec![0.0, 50.0, -100.0, 0.0]
        );
    }

    #[test]
    fn test_months_sort_chronologically() {
        let rows = vec![
            record(day(2024, 10, 5), Region::North, Product::Electronics, 150.0),
            record(day(2024, 9, 20), Region::North, Product::Electronics, 100.0),
            record(day(2025, 1, 2), Region::North, Product::Electronics, 300.0),
        ];

        let growth = monthly_growth(&rows);
        assert_eq!(growth.months, vec!["2024-09", "2024-10", "2025-01"]);
        assert_eq!(growth.growth_rates[0], 0.0);
        assert_eq!(growth.growth_rates[1], 50.0);
        assert_eq!(growth.growth_rates[2], 100.0);
    }
}
