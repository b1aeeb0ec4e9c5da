//! Stage-level tests over small frames.

use polars::prelude::{AnyValue, Column, DataFrame};
use scrub_common::{is_null, value_to_string};
use scrub_core::{
    CleanError, Stage, coerce_numeric, drop_missing_critical, fill_missing_category,
    rename_columns, resolve_duplicates, standardize_dates, trim_text,
};

fn cell(df: &DataFrame, column: &str, row: usize) -> String {
    value_to_string(df.column(column).unwrap().get(row).unwrap())
}

fn column_strings(df: &DataFrame, column: &str) -> Vec<String> {
    (0..df.height()).map(|row| cell(df, column, row)).collect()
}

// ============================================================================
// Column renaming
// ============================================================================

#[test]
fn rename_canonicalizes_every_column() {
    let df = DataFrame::new(vec![
        Column::new("  SKU ".into(), ["A1"]),
        Column::new("Precio Venta".into(), ["10"]),
        Column::new("Fecha Actualización".into(), ["2024-01-01"]),
        Column::new("Precio-Compra".into(), ["5"]),
    ])
    .unwrap();

    let renamed = rename_columns(df).unwrap();
    let names: Vec<String> = renamed
        .get_column_names_owned()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, ["sku", "precio_venta", "fecha_actualizacion", "precio_compra"]);
}

#[test]
fn rename_rejects_colliding_names() {
    let df = DataFrame::new(vec![
        Column::new("precio venta".into(), ["1"]),
        Column::new("Precio-Venta".into(), ["2"]),
    ])
    .unwrap();

    let err = rename_columns(df).unwrap_err();
    match err {
        CleanError::ColumnNameCollision { first, second, canonical } => {
            assert_eq!(first, "precio venta");
            assert_eq!(second, "Precio-Venta");
            assert_eq!(canonical, "precio_venta");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Numeric coercion
// ============================================================================

#[test]
fn numeric_coercion_strips_formatting() {
    let df = DataFrame::new(vec![Column::new(
        "precio_venta".into(),
        ["$10.50", " 11 ", "n/a", ""],
    )])
    .unwrap();

    let coerced = coerce_numeric(df, &["precio_venta".to_string()]).unwrap();
    let column = coerced.column("precio_venta").unwrap();
    assert!(matches!(column.get(0).unwrap(), AnyValue::Float64(v) if v == 10.5));
    assert!(matches!(column.get(1).unwrap(), AnyValue::Float64(v) if v == 11.0));
    assert!(is_null(&column.get(2).unwrap()));
    assert!(is_null(&column.get(3).unwrap()));
}

#[test]
fn numeric_coercion_skips_absent_columns() {
    let df = DataFrame::new(vec![Column::new("sku".into(), ["A1"])]).unwrap();
    let out = coerce_numeric(df.clone(), &["margen".to_string()]).unwrap();
    assert!(out.equals_missing(&df));
}

#[test]
fn numeric_coercion_is_stable_on_numeric_columns() {
    let df = DataFrame::new(vec![Column::new("margen".into(), [Some(0.35), None])]).unwrap();
    let out = coerce_numeric(df.clone(), &["margen".to_string()]).unwrap();
    assert!(out.equals_missing(&df));
}

// ============================================================================
// Date standardization
// ============================================================================

#[test]
fn date_standardization_infers_formats_per_cell() {
    let df = DataFrame::new(vec![Column::new(
        "fecha_actualizacion".into(),
        ["2024-01-15", "15/01/2024", "Jan 20, 2024", "2024-01-15 10:30:00", "bogus"],
    )])
    .unwrap();

    let out = standardize_dates(df, "fecha_actualizacion").unwrap();
    assert_eq!(cell(&out, "fecha_actualizacion", 0), "2024-01-15");
    assert_eq!(cell(&out, "fecha_actualizacion", 1), "2024-01-15");
    assert_eq!(cell(&out, "fecha_actualizacion", 2), "2024-01-20");
    assert_eq!(cell(&out, "fecha_actualizacion", 3), "2024-01-15T10:30:00");
    assert!(is_null(&out.column("fecha_actualizacion").unwrap().get(4).unwrap()));
}

#[test]
fn date_standardization_skips_absent_column() {
    let df = DataFrame::new(vec![Column::new("sku".into(), ["A1"])]).unwrap();
    let out = standardize_dates(df.clone(), "fecha_actualizacion").unwrap();
    assert!(out.equals_missing(&df));
}

// ============================================================================
// Whitespace trimming
// ============================================================================

#[test]
fn trim_strips_edges_and_preserves_nulls() {
    let df = DataFrame::new(vec![
        Column::new("categoria".into(), [Some("  shoes  "), None, Some("hand  bags")]),
        Column::new("margen".into(), [Some(0.1), Some(0.2), None]),
    ])
    .unwrap();

    let out = trim_text(df).unwrap();
    assert_eq!(cell(&out, "categoria", 0), "shoes");
    assert!(is_null(&out.column("categoria").unwrap().get(1).unwrap()));
    // interior whitespace untouched
    assert_eq!(cell(&out, "categoria", 2), "hand  bags");
    // non-string columns unaffected
    assert!(matches!(
        out.column("margen").unwrap().get(0).unwrap(),
        AnyValue::Float64(v) if v == 0.1
    ));
}

// ============================================================================
// Duplicate resolution
// ============================================================================

#[test]
fn dedupe_keeps_most_recent_row_per_key() {
    let df = DataFrame::new(vec![
        Column::new("sku".into(), ["W1", "W2", "W1"]),
        Column::new("fecha_actualizacion".into(), ["2024-01-05", "2024-01-02", "2024-01-07"]),
        Column::new("stock".into(), ["3", "9", "4"]),
    ])
    .unwrap();

    let out = resolve_duplicates(df, "sku", "fecha_actualizacion").unwrap();
    assert_eq!(column_strings(&out, "sku"), ["W1", "W2"]);
    assert_eq!(column_strings(&out, "stock"), ["4", "9"]);
}

#[test]
fn dedupe_tie_keeps_earlier_input_row() {
    let df = DataFrame::new(vec![
        Column::new("sku".into(), ["T1", "T1"]),
        Column::new("fecha_actualizacion".into(), ["2024-03-01", "2024-03-01"]),
        Column::new("origin".into(), ["first", "second"]),
    ])
    .unwrap();

    let out = resolve_duplicates(df, "sku", "fecha_actualizacion").unwrap();
    assert_eq!(column_strings(&out, "origin"), ["first"]);
}

#[test]
fn dedupe_sorts_null_recency_after_dated_rows() {
    let df = DataFrame::new(vec![
        Column::new("sku".into(), ["X1", "X1", "Y2"]),
        Column::new("fecha_actualizacion".into(), [None, Some("2024-01-03"), None::<&str>]),
        Column::new("origin".into(), ["undated", "dated", "only"]),
    ])
    .unwrap();

    let out = resolve_duplicates(df, "sku", "fecha_actualizacion").unwrap();
    assert_eq!(column_strings(&out, "sku"), ["X1", "Y2"]);
    assert_eq!(column_strings(&out, "origin"), ["dated", "only"]);
}

#[test]
fn dedupe_requires_key_and_recency_columns() {
    let df = DataFrame::new(vec![Column::new("sku".into(), ["A"])]).unwrap();
    let err = resolve_duplicates(df, "sku", "fecha_actualizacion").unwrap_err();
    assert!(matches!(
        err,
        CleanError::MissingColumn { column, stage }
            if column == "fecha_actualizacion" && stage == Stage::ResolveDuplicates
    ));
}

// ============================================================================
// Missing-value handling
// ============================================================================

#[test]
fn fill_replaces_only_null_categories() {
    let df = DataFrame::new(vec![Column::new(
        "categoria".into(),
        [None, Some("shoes"), Some("")],
    )])
    .unwrap();

    let out = fill_missing_category(df, "categoria", "unknown").unwrap();
    assert_eq!(column_strings(&out, "categoria"), ["unknown", "shoes", ""]);
    assert_eq!(out.column("categoria").unwrap().null_count(), 0);
}

#[test]
fn drop_removes_rows_with_null_criticals() {
    let df = DataFrame::new(vec![
        Column::new("sku".into(), ["A", "B", "C"]),
        Column::new("precio_compra".into(), [Some("5"), None, Some("7")]),
        Column::new("precio_venta".into(), [Some(10.0), Some(20.0), None]),
    ])
    .unwrap();

    let out = drop_missing_critical(
        df,
        &["precio_compra".to_string(), "precio_venta".to_string()],
    )
    .unwrap();
    assert_eq!(column_strings(&out, "sku"), ["A"]);
}

#[test]
fn missing_handler_requires_its_columns() {
    let df = DataFrame::new(vec![Column::new("sku".into(), ["A"])]).unwrap();

    let err = fill_missing_category(df.clone(), "categoria", "unknown").unwrap_err();
    assert!(matches!(err, CleanError::MissingColumn { column, .. } if column == "categoria"));

    let err = drop_missing_critical(df, &["precio_venta".to_string()]).unwrap_err();
    assert!(matches!(err, CleanError::MissingColumn { column, .. } if column == "precio_venta"));
}
