//! Two-category contingency tables against scheduled service

use airfield_core::{Dataset, Error, Result, ScheduledService};
use serde::Serialize;
use std::collections::BTreeSet;

/// Keep only airports whose type is `var1` or `var2`
pub fn restrict(dataset: &Dataset, var1: &str, var2: &str) -> Dataset {
    dataset.select(|r| r.airport_type() == var1 || r.airport_type() == var2)
}

/// Observed counts of scheduled service per airport type
///
/// Rows are the two compared types in the order given; columns are the
/// service levels actually present in the restricted data, `no` before `yes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    column_labels: Vec<ScheduledService>,
    observed: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Cross-tabulate `var1` and `var2` against scheduled service
    ///
    /// Fails with `InsufficientCategories` when both names are the same and
    /// with `InsufficientData` when neither type has any airport.
    pub fn build(dataset: &Dataset, var1: &str, var2: &str) -> Result<Self> {
        if var1 == var2 {
            return Err(Error::InsufficientCategories(format!(
                "both categories are '{var1}'; pick two different airport types"
            )));
        }

        let restricted = restrict(dataset, var1, var2);
        if restricted.is_empty() {
            return Err(Error::InsufficientData(format!(
                "no airports of type '{var1}' or '{var2}'"
            )));
        }

        let column_labels: Vec<ScheduledService> = restricted
            .iter()
            .map(|r| r.scheduled_service())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let row_labels = vec![var1.to_string(), var2.to_string()];
        let mut observed = vec![vec![0u64; column_labels.len()]; row_labels.len()];

        for record in &restricted {
            let row = usize::from(record.airport_type() != var1);
            // Present by construction of `column_labels`
            if let Some(col) = column_labels
                .iter()
                .position(|s| *s == record.scheduled_service())
            {
                observed[row][col] += 1;
            }
        }

        Ok(Self {
            row_labels,
            column_labels,
            observed,
        })
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[ScheduledService] {
        &self.column_labels
    }

    pub fn observed(&self) -> &[Vec<u64>] {
        &self.observed
    }

    pub fn row_totals(&self) -> Vec<u64> {
        self.observed.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<u64> {
        (0..self.column_labels.len())
            .map(|col| self.observed.iter().map(|row| row[col]).sum())
            .collect()
    }

    pub fn grand_total(&self) -> u64 {
        self.observed.iter().flatten().sum()
    }

    /// `(rows - 1) * (columns - 1)`
    pub fn degrees_of_freedom(&self) -> usize {
        self.row_labels.len().saturating_sub(1) * self.column_labels.len().saturating_sub(1)
    }

    /// Cell frequencies expected if type and service were independent
    pub fn expected(&self) -> Vec<Vec<f64>> {
        let rows = self.row_totals();
        let cols = self.column_totals();
        let total = self.grand_total() as f64;

        rows.iter()
            .map(|&r| {
                cols.iter()
                    .map(|&c| if total > 0.0 { r as f64 * c as f64 / total } else { 0.0 })
                    .collect()
            })
            .collect()
    }
}
