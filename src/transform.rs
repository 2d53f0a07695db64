// Normalization: raw string table -> numeric Record sequence

use crate::data::TableData;
use crate::ir::{Dataset, Record};
use anyhow::Result;
use std::collections::HashMap;

/// Convert raw tabular input into a Dataset of numeric records.
///
/// Every cell is coerced to f64. Cells that fail coercion become NaN and
/// flow through the downstream formulas unchanged; no row is dropped.
pub fn normalize(table: TableData) -> Result<Dataset> {
    if table.headers.is_empty() {
        anyhow::bail!("Dataset has no columns");
    }
    if table.rows.is_empty() {
        anyhow::bail!("Dataset must contain at least one data row");
    }

    let mut records = Vec::with_capacity(table.rows.len());
    let mut bad_cells = 0usize;

    for row in &table.rows {
        let mut data = HashMap::with_capacity(table.headers.len());
        for (header, cell) in table.headers.iter().zip(row.iter()) {
            let value = coerce_number(cell);
            if value.is_nan() {
                bad_cells += 1;
            }
            data.insert(header.clone(), value);
        }
        records.push(Record::new(data));
    }

    if bad_cells > 0 {
        tracing::warn!(bad_cells, "non-numeric cells coerced to NaN");
    }

    Ok(Dataset::new(table.headers, records))
}

/// Numeric coercion matching the loose `Number(value)` rule the glyph
/// formulas were written against: blank cells read as 0, anything that is
/// not a number reads as NaN.
fn coerce_number(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
