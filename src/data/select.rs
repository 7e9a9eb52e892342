use std::collections::BTreeSet;

use thiserror::Error;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// MissingColumnError
// ---------------------------------------------------------------------------

/// A requested projection references columns absent from the source schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dataset is missing required column(s): {}", missing.join(", "))]
pub struct MissingColumnError {
    /// The absent column names, in request order.
    pub missing: Vec<String>,
}

// ---------------------------------------------------------------------------
// Column selection
// ---------------------------------------------------------------------------

/// Project `feature_names` followed by `target_name` out of `dataset`.
///
/// The result is a new dataset whose schema is exactly the requested names in
/// the requested order. Row count and row order are preserved and cell values
/// are copied unchanged; there is no row filtering, type coercion, or null
/// handling. The source dataset is only read.
///
/// Fails with [`MissingColumnError`] naming every requested column that is
/// not part of the source schema.
pub fn select_columns(
    dataset: &Dataset,
    feature_names: &[&str],
    target_name: &str,
) -> Result<Dataset, MissingColumnError> {
    let requested: Vec<&str> = feature_names
        .iter()
        .copied()
        .chain(std::iter::once(target_name))
        .collect();

    let schema: BTreeSet<&str> = dataset.column_names.iter().map(String::as_str).collect();
    let missing: Vec<String> = requested
        .iter()
        .filter(|name| !schema.contains(*name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(MissingColumnError { missing });
    }

    let rows: Vec<Row> = dataset
        .rows
        .iter()
        .map(|row| {
            requested
                .iter()
                .filter_map(|name| {
                    row.get(*name)
                        .map(|val| (name.to_string(), val.clone()))
                })
                .collect()
        })
        .collect();

    log::debug!(
        "selected {} of {} columns across {} rows",
        requested.len(),
        dataset.column_names.len(),
        rows.len()
    );

    Ok(Dataset::new(
        requested.into_iter().map(str::to_string).collect(),
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::schema::{FEATURE_COLUMNS, TARGET_COLUMN};

    /// Three loan records carrying all 13 required columns plus `extra_col`.
    fn sample_dataset() -> Dataset {
        let rows: Vec<Row> = (0..3)
            .map(|i| {
                let mut row = Row::new();
                row.insert("grade".into(), CellValue::String("B".into()));
                row.insert("sub_grade".into(), CellValue::String(format!("B{i}")));
                row.insert("short_emp".into(), CellValue::Integer(0));
                row.insert("emp_length_num".into(), CellValue::Integer(3 + i));
                row.insert("home_ownership".into(), CellValue::String("rent".into()));
                row.insert("dti".into(), CellValue::Float(14.5 + i as f64));
                row.insert("purpose".into(), CellValue::String("car".into()));
                row.insert("term".into(), CellValue::String("36 months".into()));
                row.insert("last_delinq_none".into(), CellValue::Bool(true));
                row.insert("last_major_derog_none".into(), CellValue::Bool(true));
                row.insert("revol_util".into(), CellValue::Float(41.2));
                row.insert("total_rec_late_fee".into(), CellValue::Float(0.0));
                row.insert("bad_loans".into(), CellValue::Integer((i % 2) as i64));
                row.insert("extra_col".into(), CellValue::String("drop me".into()));
                row
            })
            .collect();
        Dataset::from_rows(rows)
    }

    #[test]
    fn selects_features_then_target_in_order() {
        let ds = sample_dataset();
        let out = select_columns(&ds, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap();

        let mut expected: Vec<String> =
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
        expected.push(TARGET_COLUMN.to_string());
        assert_eq!(out.column_names, expected);
        assert_eq!(out.column_names.len(), 13);
        assert!(!out.has_column("extra_col"));
    }

    #[test]
    fn preserves_rows_and_cell_values() {
        let ds = sample_dataset();
        let out = select_columns(&ds, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap();

        assert_eq!(out.len(), ds.len());
        for (src, dst) in ds.rows.iter().zip(&out.rows) {
            for col in &out.column_names {
                assert_eq!(dst.get(col), src.get(col), "column {col} changed");
            }
            assert!(!dst.contains_key("extra_col"));
        }
    }

    #[test]
    fn source_dataset_is_untouched() {
        let ds = sample_dataset();
        let before = ds.clone();
        let _ = select_columns(&ds, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap();
        assert_eq!(ds, before);
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let ds = sample_dataset();
        let once = select_columns(&ds, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap();
        let twice = select_columns(&once, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_column_fails_with_its_name() {
        let mut ds = sample_dataset();
        ds.column_names.retain(|c| c != "revol_util");
        for row in &mut ds.rows {
            row.remove("revol_util");
        }

        let err = select_columns(&ds, &FEATURE_COLUMNS, TARGET_COLUMN).unwrap_err();
        assert_eq!(err.missing, vec!["revol_util".to_string()]);
        assert!(err.to_string().contains("revol_util"));
    }

    #[test]
    fn reports_every_missing_column_in_request_order() {
        let ds = Dataset::from_rows(vec![]);
        let err = select_columns(&ds, &["a", "b"], "y").unwrap_err();
        assert_eq!(err.missing, vec!["a", "b", "y"]);
    }
}
