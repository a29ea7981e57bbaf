//! Pearson chi-square test of independence

use crate::{AssociationTest, ContingencyTable, Verdict};
use airfield_core::{Dataset, Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::{debug, instrument, warn};

/// Test whether scheduled service depends on airport type for two types
///
/// Restricts `dataset` to airports of type `var1` or `var2`, cross-tabulates
/// them against scheduled service and runs the uncorrected Pearson
/// chi-square test, also for 2×2 tables. When every restricted airport has
/// the same service level the table has zero degrees of freedom and the
/// result is `chi2 = 0`, `p = 1`, not associated.
///
/// # Errors
///
/// - `InsufficientCategories` when `var1 == var2`
/// - `InsufficientData` when no airport matches, or when an expected cell
///   frequency is zero (one of the types has no airports)
/// - `Computation` when the statistic is not finite
#[instrument(skip(dataset), fields(records = dataset.len()))]
pub fn test_association(dataset: &Dataset, var1: &str, var2: &str) -> Result<AssociationTest> {
    let table = ContingencyTable::build(dataset, var1, var2)?;
    chi_square_independence(table)
}

/// Run the chi-square test of independence on an observed table
pub fn chi_square_independence(table: ContingencyTable) -> Result<AssociationTest> {
    let expected = table.expected();

    if let Some(row) = table.row_totals().iter().position(|&total| total == 0) {
        warn!(category = %table.row_labels()[row], "category has no airports");
        return Err(Error::InsufficientData(format!(
            "no airports of type '{}'; expected frequencies would be zero",
            table.row_labels()[row]
        )));
    }

    if expected.iter().flatten().any(|&e| e <= 0.0) {
        return Err(Error::InsufficientData(
            "an expected cell frequency is zero".to_string(),
        ));
    }

    // A single observed service level leaves nothing to deviate from
    let dof = table.degrees_of_freedom();
    if dof == 0 {
        debug!("scheduled service takes a single value; no association");
        return Ok(AssociationTest {
            chi2: 0.0,
            p_value: 1.0,
            dof,
            expected,
            observed: table,
            verdict: Verdict::NotAssociated,
        });
    }

    let chi2: f64 = table
        .observed()
        .iter()
        .flatten()
        .zip(expected.iter().flatten())
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum();

    if !chi2.is_finite() {
        return Err(Error::non_finite("chi-square statistic"));
    }

    let distribution = ChiSquared::new(dof as f64)
        .map_err(|e| Error::Computation(format!("chi-square distribution: {e}")))?;
    let p_value = distribution.sf(chi2).clamp(0.0, 1.0);

    if !p_value.is_finite() {
        return Err(Error::non_finite("p-value"));
    }

    let verdict = Verdict::from_p_value(p_value);
    debug!(chi2, p_value, dof, %verdict, "chi-square test complete");

    Ok(AssociationTest {
        chi2,
        p_value,
        dof,
        expected,
        observed: table,
        verdict,
    })
}
