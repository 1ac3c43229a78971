//! Truncation-bound representations shared by the resolver, the source
//! descriptors, and the naming conventions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Rank of a stored interaction truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationRank {
    /// One-body truncation.
    Ob,
    /// Two-body truncation.
    Tb,
}

impl Display for TruncationRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TruncationRank::Ob => "ob",
            TruncationRank::Tb => "tb",
        };
        write!(f, "{label}")
    }
}

/// Truncation of a tabulated interaction file, e.g. `tb-20`.
///
/// Identifies both the file on disk (via the naming service) and, for
/// transformed sources, the truncation applied to the radial transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionTruncation {
    /// Truncation rank of the stored file.
    pub rank: TruncationRank,
    /// Oscillator quantum cutoff.
    pub cutoff: u32,
}

impl Display for InteractionTruncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.cutoff)
    }
}

/// Normalized two-body weight ceiling for target indexing.
///
/// Opaque to downstream consumers beyond its formatting into the
/// `set-target-indexing` directive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightMax {
    /// One-body-only restriction: the two-body ceiling is implied as
    /// twice the one-body weight cap.
    Ob(f64),
    /// Explicit one-body and two-body weight ceilings.
    Pair(f64, f64),
}

impl WeightMax {
    /// Builds an explicit pair bound from integer oscillator cutoffs.
    pub fn from_nmax(n1_max: u32, n2_max: u32) -> Self {
        WeightMax::Pair(f64::from(n1_max), f64::from(n2_max))
    }

    /// Returns the normalized (one-body, two-body) weight ceilings.
    pub fn pair(&self) -> (f64, f64) {
        match *self {
            WeightMax::Ob(w) => (w, 2.0 * w),
            WeightMax::Pair(w1, w2) => (w1, w2),
        }
    }

    /// Renders the five weight fields of the `set-target-indexing`
    /// directive: proton, neutron, pp, nn, pn.
    pub fn indexing_fields(&self) -> String {
        let (w1, w2) = self.pair();
        let one = format_scalar(w1);
        let two = format_scalar(w2);
        format!("{one} {one} {two} {two} {two}")
    }
}

/// Formats a weight or frequency scalar with trailing zeros trimmed, so
/// integral values render without a decimal point.
pub fn format_scalar(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1.0e12 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
