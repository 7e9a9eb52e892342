//! The fixed loan-risk schema.
//!
//! Training and inference code should import these constants rather than
//! spelling the column names out again, so both sides agree on the schema.

use crate::data::model::Dataset;
use crate::data::select::{select_columns, MissingColumnError};

/// The 12 feature columns, in projection order.
pub const FEATURE_COLUMNS: [&str; 12] = [
    "grade",                 // loan grade
    "sub_grade",             // loan sub-grade
    "short_emp",             // one year or less of employment
    "emp_length_num",        // number of years of employment
    "home_ownership",        // own, mortgage or rent
    "dti",                   // debt-to-income ratio
    "purpose",               // purpose of the loan
    "term",                  // term of the loan
    "last_delinq_none",      // has the borrower ever been delinquent
    "last_major_derog_none", // any 90-day-or-worse rating
    "revol_util",            // percent of available credit in use
    "total_rec_late_fee",    // total late fees received to date
];

/// The prediction target column.
///
/// The source data documents the label as "+1 means safe, 0 is risky", which
/// sits oddly under a column named `bad_loans`. That inconsistency comes from
/// the upstream data and is deliberately not resolved here: this crate copies
/// label values through untouched and enforces neither polarity.
pub const TARGET_COLUMN: &str = "bad_loans";

/// Project the fixed training schema (12 features, then the target) out of
/// `dataset`. See [`select_columns`] for the projection contract.
pub fn select_training_columns(dataset: &Dataset) -> Result<Dataset, MissingColumnError> {
    select_columns(dataset, &FEATURE_COLUMNS, TARGET_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn feature_columns_are_distinct_and_non_empty() {
        let unique: BTreeSet<&str> = FEATURE_COLUMNS.iter().copied().collect();
        assert_eq!(unique.len(), FEATURE_COLUMNS.len());
        assert!(FEATURE_COLUMNS.iter().all(|c| !c.is_empty()));
        assert!(!TARGET_COLUMN.is_empty());
        assert!(!FEATURE_COLUMNS.contains(&TARGET_COLUMN));
    }
}
