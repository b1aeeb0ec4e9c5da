//! Pipeline configuration and canonical column names.
//!
//! Every stage refers to columns through this module; the canonical
//! spellings live here once instead of as string literals scattered
//! through the stages.

use serde::{Deserialize, Serialize};

/// Canonical column names, as produced by the rename stage.
pub mod columns {
    /// Business key identifying a logical record.
    pub const SKU: &str = "sku";
    /// Sale price, coerced to numeric.
    pub const SALE_PRICE: &str = "precio_venta";
    /// Purchase price; critical but kept in its source representation.
    pub const PURCHASE_PRICE: &str = "precio_compra";
    /// Margin, coerced to numeric.
    pub const MARGIN: &str = "margen";
    /// Last-updated timestamp; recency key for duplicate resolution.
    pub const LAST_UPDATED: &str = "fecha_actualizacion";
    /// Category; optional, filled with a default when missing.
    pub const CATEGORY: &str = "categoria";
}

/// Default fill value for missing categories.
pub const DEFAULT_CATEGORY_FILL: &str = "unknown";

/// Column roles and fill policy for one pipeline run.
///
/// The defaults describe the product catalog layout; external wrappers may
/// deserialize an alternative layout for other datasets with the same
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Columns coerced to numeric; absent columns are skipped.
    pub numeric_columns: Vec<String>,
    /// Column standardized to ISO 8601; absent column is skipped.
    pub date_column: String,
    /// Business key column; mandatory for duplicate resolution.
    pub key_column: String,
    /// Recency column used to pick the surviving duplicate; mandatory.
    pub recency_column: String,
    /// Category column; mandatory, nulls are filled.
    pub category_column: String,
    /// Literal written into null category cells.
    pub category_fill: String,
    /// Columns whose null disqualifies the whole row; all mandatory.
    pub critical_columns: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            numeric_columns: vec![columns::SALE_PRICE.to_string(), columns::MARGIN.to_string()],
            date_column: columns::LAST_UPDATED.to_string(),
            key_column: columns::SKU.to_string(),
            recency_column: columns::LAST_UPDATED.to_string(),
            category_column: columns::CATEGORY.to_string(),
            category_fill: DEFAULT_CATEGORY_FILL.to_string(),
            critical_columns: vec![
                columns::PURCHASE_PRICE.to_string(),
                columns::SALE_PRICE.to_string(),
                columns::LAST_UPDATED.to_string(),
            ],
        }
    }
}
