//! Synthetic data generator
//!
//! Seeds the store with a reproducible two-year corpus and produces the
//! small "live" batches the realtime endpoint appends. The bulk batch
//! is deterministic for a fixed seed so initial-state tests are
//! reproducible; live batches draw from the same stream and are only
//! ever asserted on for count and shape.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Product, Region, SalesRecord};

/// Trailing window covered by the bulk corpus, in days.
const BULK_WINDOW_DAYS: i64 = 730;

fn seasonal_multiplier(month: u32) -> f64 {
    match month {
        11 | 12 => 1.5, // holiday season
        6..=8 => 1.2,   // summer
        _ => 1.0,
    }
}

fn regional_multiplier(region: Region) -> f64 {
    match region {
        Region::North => 1.1,
        Region::South => 0.9,
        Region::East => 1.2,
        Region::West => 1.0,
    }
}

fn base_price(product: Product) -> f64 {
    match product {
        Product::Electronics => 500.0,
        Product::Clothing => 80.0,
        Product::HomeGarden => 150.0,
        Product::Sports => 120.0,
    }
}

pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the initial corpus: `count` records spread over the two
    /// years ending at `end_date`, with seasonal, regional, and
    /// per-category price patterns.
    pub fn bulk(&mut self, count: usize, end_date: NaiveDate) -> Vec<SalesRecord> {
        let start_date = end_date - Duration::days(BULK_WINDOW_DAYS);

        (0..count)
            .map(|_| {
                let date = start_date + Duration::days(self.rng.gen_range(0..BULK_WINDOW_DAYS));
                let region = self.pick_region();
                let product = self.pick_product();

                let base = base_price(product) * self.rng.gen_range(0.5..2.5);
                let sales = base * seasonal_multiplier(date.month()) * regional_multiplier(region);

                self.record(date, region, product, round2(sales))
            })
            .collect()
    }

    /// One simulated realtime batch: 1 to 5 records dated `today`.
    /// These skip the multiplier pipeline; the feed just needs
    /// plausible values, not seasonal shape.
    pub fn live(&mut self, today: NaiveDate) -> Vec<SalesRecord> {
        let count = self.rng.gen_range(1..=5);

        (0..count)
            .map(|_| {
                let region = self.pick_region();
                let product = self.pick_product();
                let sales = round2(self.rng.gen_range(50.0..1000.0));
                self.record(today, region, product, sales)
            })
            .collect()
    }

    fn record(
        &mut self,
        date: NaiveDate,
        region: Region,
        product: Product,
        sales: f64,
    ) -> SalesRecord {
        SalesRecord {
            date,
            region,
            product,
            sales,
            orders: self.rng.gen_range(1..=5),
            customers: self.rng.gen_range(20..=100),
            customer_id: format!("CUST_{}", self.rng.gen_range(1000..10000)),
            order_id: format!("ORD_{}", self.rng.gen_range(10000..100000)),
        }
    }

    fn pick_region(&mut self) -> Region {
        Region::ALL[self.rng.gen_range(0..Region::ALL.len())]
    }

    fn pick_product(&mut self) -> Product {
        Product::ALL[self.rng.gen_range(0..Product::ALL.len())]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
