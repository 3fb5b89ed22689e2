//! Region × product pivot
//!
//! Two-key grouping densified against the cross product of observed
//! axis values: a composite-key accumulator plus ordered axis lists,
//! zero-filled where a (region, product) pair has no rows. Unlike the
//! 1-D series, absent combinations DO appear, as 0 cells.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Product, Region, SalesRecord};

/// Dense heatmap matrix. `values` is row-major, rows aligned to
/// `regions`, columns to `products`. Empty input gives empty axes and
/// an empty matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PivotTable {
    pub regions: Vec<Region>,
    pub products: Vec<Product>,
    pub values: Vec<Vec<f64>>,
}

pub fn region_product_pivot(rows: &[SalesRecord]) -> PivotTable {
    let mut regions: Vec<Region> = Vec::new();
    let mut products: Vec<Product> = Vec::new();
    let mut cells: HashMap<(Region, Product), f64> = HashMap::new();

    for row in rows {
        if !regions.contains(&row.region) {
            regions.push(row.region);
        }
        if !products.contains(&row.product) {
            products.push(row.product);
        }
        *cells.entry((row.region, row.product)).or_insert(0.0) += row.sales;
    }

    let values = regions
        .iter()
        .map(|&region| {
            products
                .iter()
                .map(|&product| cells.get(&(region, product)).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    PivotTable {
        regions,
        products,
        values,
    }
}
