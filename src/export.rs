//! CSV export
//!
//! Renders a row set to delimited text and writes timestamped export
//! files. Zero rows produce a header-only file, not an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::SalesRecord;

/// Column order is fixed and part of the export contract.
const HEADER: &str = "date,region,product,sales,orders,customers,customer_id,order_id";

/// Render rows as CSV text, header first.
pub fn to_csv(rows: &[SalesRecord]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            row.date.format("%Y-%m-%d"),
            quote(row.region.as_str()),
            quote(row.product.as_str()),
            row.sales,
            row.orders,
            row.customers,
            quote(&row.customer_id),
            quote(&row.order_id),
        ));
    }

    out
}

/// Quote a field if it contains the delimiter, a quote, or a newline.
/// Embedded quotes double per the usual CSV convention.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write a CSV export into `dir` (created on demand). Returns the path
/// written.
pub fn write_csv_file(rows: &[SalesRecord], dir: &Path, filename: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, to_csv(rows))?;
    Ok(path)
}
