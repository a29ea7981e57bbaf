//! Result types of the association test

use crate::ContingencyTable;
use serde::Serialize;
use std::fmt;

/// p-values below this are reported as an association
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of comparing the p-value with [`SIGNIFICANCE_LEVEL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Associated,
    NotAssociated,
}

impl Verdict {
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            Self::Associated
        } else {
            Self::NotAssociated
        }
    }

    pub fn is_associated(&self) -> bool {
        matches!(self, Self::Associated)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Associated => "associated",
            Self::NotAssociated => "not associated",
        };
        write!(f, "{}", s)
    }
}

/// Pearson chi-square test of independence between airport type and
/// scheduled service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationTest {
    /// Chi-square statistic
    pub chi2: f64,
    /// Upper-tail probability of `chi2` under independence
    pub p_value: f64,
    /// Degrees of freedom of the reference distribution
    pub dof: usize,
    /// Expected frequencies, same shape as `observed`
    pub expected: Vec<Vec<f64>>,
    /// Observed counts
    pub observed: ContingencyTable,
    pub verdict: Verdict,
}

impl AssociationTest {
    /// First compared airport type
    pub fn var1(&self) -> &str {
        &self.observed.row_labels()[0]
    }

    /// Second compared airport type
    pub fn var2(&self) -> &str {
        &self.observed.row_labels()[1]
    }

    /// The question the test answers, phrased for readers
    pub fn question(&self) -> String {
        format!(
            "Is a {} more likely to have a scheduled service than a {}?",
            self.var1(),
            self.var2()
        )
    }

    /// One-line verdict for display
    pub fn headline(&self) -> &'static str {
        match self.verdict {
            Verdict::Associated => "They ARE significantly associated!",
            Verdict::NotAssociated => "They ARE NOT significantly associated!",
        }
    }
}

impl fmt::Display for AssociationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: chi2 = {:.4}, p = {:.4e}, dof = {} ({})",
            self.var1(),
            self.var2(),
            self.chi2,
            self.p_value,
            self.dof,
            self.verdict
        )
    }
}
