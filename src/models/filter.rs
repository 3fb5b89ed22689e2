//! Filter criteria
//!
//! Each dashboard filter dimension is either wide open or pinned to one
//! value. Query parameters that are missing, `"all"`, or unparseable
//! coerce to `Any` — a malformed filter is never a request error.

use chrono::{Duration, NaiveDate};

use super::record::{Product, Region, SalesRecord};

/// One filter dimension: match everything, or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionFilter<T> {
    Any,
    Exact(T),
}

impl<T: PartialEq> DimensionFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            DimensionFilter::Any => true,
            DimensionFilter::Exact(expected) => expected == value,
        }
    }
}

/// Conjunction of the three dashboard filters.
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria {
    pub region: DimensionFilter<Region>,
    pub product: DimensionFilter<Product>,
    /// Trailing window in days, evaluated against a caller-supplied "today".
    pub recency_days: DimensionFilter<u32>,
}

impl FilterCriteria {
    /// Match-everything criteria.
    pub fn any() -> Self {
        Self {
            region: DimensionFilter::Any,
            product: DimensionFilter::Any,
            recency_days: DimensionFilter::Any,
        }
    }

    /// Build criteria from raw query parameters, coercing anything
    /// unrecognized to `Any`.
    pub fn from_params(
        region: Option<&str>,
        product: Option<&str>,
        date_range: Option<&str>,
    ) -> Self {
        Self {
            region: match region.and_then(Region::parse) {
                Some(r) => DimensionFilter::Exact(r),
                None => DimensionFilter::Any,
            },
            product: match product.and_then(Product::parse) {
                Some(p) => DimensionFilter::Exact(p),
                None => DimensionFilter::Any,
            },
            recency_days: match date_range.and_then(|s| s.parse::<u32>().ok()) {
                Some(days) => DimensionFilter::Exact(days),
                None => DimensionFilter::Any,
            },
        }
    }

    /// Whether a record passes every active predicate. `today` is the
    /// recency anchor; the caller supplies it so tests can pin the clock.
    pub fn matches(&self, record: &SalesRecord, today: NaiveDate) -> bool {
        if !self.region.matches(&record.region) {
            return false;
        }
        if !self.product.matches(&record.product) {
            return false;
        }
        if let DimensionFilter::Exact(days) = self.recency_days {
            let cutoff = today - Duration::days(days as i64);
            if record.date < cutoff {
                return false;
            }
        }
        true
    }

    /// Filter a row slice. Empty results are expected and fine.
    pub fn apply(&self, records: &[SalesRecord], today: NaiveDate) -> Vec<SalesRecord> {
        records
            .iter()
            .filter(|r| self.matches(r, today))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: NaiveDate, region: Region, product: Product) -> SalesRecord {
        SalesRecord {
            date,
            region,
            product,
            sales: 100.0,
            orders: 1,
            customers: 20,
            customer_id: "CUST_1000".to_string(),
            order_id: "ORD_10000".to_string(),
        }
    }

    fn sample_rows(today: NaiveDate) -> Vec<SalesRecord> {
        vec![
            record(today, Region::North, Product::Electronics),
            record(today - Duration::days(10), Region::South, Product::Clothing),
            record(today - Duration::days(100), Region::East, Product::Sports),
            record(today - Duration::days(400), Region::North, Product::HomeGarden),
        ]
    }

    #[test]
    fn test_garbage_params_coerce_to_any() {
        let criteria = FilterCriteria::from_params(Some("Atlantis"), Some("all"), Some("soon"));
        assert_eq!(criteria.region, DimensionFilter::Any);
        assert_eq!(criteria.product, DimensionFilter::Any);
        assert_eq!(criteria.recency_days, DimensionFilter::Any);

        let criteria = FilterCriteria::from_params(Some("North"), Some("Home & Garden"), Some("30"));
        assert_eq!(criteria.region, DimensionFilter::Exact(Region::North));
        assert_eq!(criteria.product, DimensionFilter::Exact(Product::HomeGarden));
        assert_eq!(criteria.recency_days, DimensionFilter::Exact(30));
    }

    #[test]
    fn test_recency_cutoff_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rows = vec![
            record(today - Duration::days(30), Region::North, Product::Electronics),
            record(today - Duration::days(31), Region::North, Product::Electronics),
        ];

        let mut criteria = FilterCriteria::any();
        criteria.recency_days = DimensionFilter::Exact(30);

        let kept = criteria.apply(&rows, today);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, today - Duration::days(30));
    }

    #[test]
    fn test_filtered_is_subset() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rows = sample_rows(today);

        let criteria = FilterCriteria::from_params(Some("North"), None, Some("90"));
        let kept = criteria.apply(&rows, today);

        assert!(kept.len() <= rows.len());
        for r in &kept {
            assert_eq!(r.region, Region::North);
            assert!(r.date >= today - Duration::days(90));
        }
    }

    #[test]
    fn test_region_product_partition_unions_to_whole() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rows = sample_rows(today);

        let mut total = 0;
        for region in Region::ALL {
            for product in Product::ALL {
                let criteria = FilterCriteria {
                    region: DimensionFilter::Exact(region),
                    product: DimensionFilter::Exact(product),
                    recency_days: DimensionFilter::Any,
                };
                total += criteria.apply(&rows, today).len();
            }
        }
        assert_eq!(total, rows.len());
    }

    #[test]
    fn test_empty_result_is_fine() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rows = sample_rows(today);

        let criteria = FilterCriteria {
            region: DimensionFilter::Exact(Region::West),
            product: DimensionFilter::Any,
            recency_days: DimensionFilter::Any,
        };
        assert!(criteria.apply(&rows, today).is_empty());
    }
}
