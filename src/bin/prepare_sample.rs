//! Dev utility: build a small in-memory loan dataset and run the training
//! projection over it, printing the result. Handy for eyeballing the schema
//! without wiring up a real loader.

use anyhow::Result;
use log::info;

use loan_prep::{select_training_columns, CellValue, Dataset, Row};

fn loan_row(
    grade: &str,
    sub_grade: &str,
    emp_years: i64,
    ownership: &str,
    dti: f64,
    purpose: &str,
    revol_util: f64,
    bad_loan: i64,
) -> Row {
    let mut row = Row::new();
    row.insert("grade".into(), CellValue::String(grade.into()));
    row.insert("sub_grade".into(), CellValue::String(sub_grade.into()));
    row.insert(
        "short_emp".into(),
        CellValue::Integer(i64::from(emp_years <= 1)),
    );
    row.insert("emp_length_num".into(), CellValue::Integer(emp_years));
    row.insert("home_ownership".into(), CellValue::String(ownership.into()));
    row.insert("dti".into(), CellValue::Float(dti));
    row.insert("purpose".into(), CellValue::String(purpose.into()));
    row.insert("term".into(), CellValue::String("36 months".into()));
    row.insert("last_delinq_none".into(), CellValue::Bool(true));
    row.insert("last_major_derog_none".into(), CellValue::Bool(true));
    row.insert("revol_util".into(), CellValue::Float(revol_util));
    row.insert("total_rec_late_fee".into(), CellValue::Float(0.0));
    row.insert("bad_loans".into(), CellValue::Integer(bad_loan));
    // A column the projection should drop.
    row.insert("loan_id".into(), CellValue::Integer(emp_years * 1000));
    row
}

fn main() -> Result<()> {
    env_logger::init();

    let dataset = Dataset::from_rows(vec![
        loan_row("A", "A3", 10, "mortgage", 11.2, "house", 23.4, 0),
        loan_row("B", "B5", 1, "rent", 19.8, "debt_consolidation", 71.0, 1),
        loan_row("C", "C1", 4, "own", 8.6, "car", 35.5, 0),
    ]);
    info!(
        "source dataset: {} rows, {} columns",
        dataset.len(),
        dataset.column_names.len()
    );

    let prepared = select_training_columns(&dataset)?;
    info!(
        "prepared dataset: {} rows, {} columns",
        prepared.len(),
        prepared.column_names.len()
    );

    println!("{}", prepared.column_names.join(","));
    for row in &prepared.rows {
        let cells: Vec<String> = prepared
            .column_names
            .iter()
            .map(|col| {
                row.get(col)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<null>".into())
            })
            .collect();
        println!("{}", cells.join(","));
    }

    Ok(())
}
