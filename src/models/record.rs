//! Sales record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    /// Parse a region name; returns `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            "East" => Some(Region::East),
            "West" => Some(Region::West),
            _ => None,
        }
    }
}

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    Sports,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::Electronics,
        Product::Clothing,
        Product::HomeGarden,
        Product::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Electronics => "Electronics",
            Product::Clothing => "Clothing",
            Product::HomeGarden => "Home & Garden",
            Product::Sports => "Sports",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Electronics" => Some(Product::Electronics),
            "Clothing" => Some(Product::Clothing),
            "Home & Garden" => Some(Product::HomeGarden),
            "Sports" => Some(Product::Sports),
            _ => None,
        }
    }
}

/// A single sales transaction. Immutable once created; the store only
/// ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: Region,
    pub product: Product,
    pub sales: f64,
    pub orders: u32,
    pub customers: u32,
    pub customer_id: String,
    pub order_id: String,
}
