//! Enumerated run modes consumed by the derivation pipeline.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Strategy relating the interaction's native oscillator basis to the
/// target calculation basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasisMode {
    /// Interaction evaluated directly in the target basis; requires
    /// `hw == hw_int` and no radial transform.
    Direct,
    /// Interaction reused under a frequency dilation; the Coulomb source
    /// needs no transform (dilation rescales frequency, not basis
    /// content), the nuclear interaction does.
    Dilated,
    /// Fully general target basis; every file-backed source carries a
    /// radial transform.
    Generic,
}

impl Display for BasisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BasisMode::Direct => "direct",
            BasisMode::Dilated => "dilated",
            BasisMode::Generic => "generic",
        };
        write!(f, "{label}")
    }
}

/// Truncation mode applied to the single-particle orbital set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleParticleTruncationMode {
    /// Orbitals bounded by an oscillator quantum cutoff.
    Nmax,
    /// Orbitals bounded by a generalized weight ceiling.
    WeightMax,
}

impl Display for SingleParticleTruncationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SingleParticleTruncationMode::Nmax => "nmax",
            SingleParticleTruncationMode::WeightMax => "weight-max",
        };
        write!(f, "{label}")
    }
}

/// Truncation mode applied to the many-body configuration space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManyBodyTruncationMode {
    /// Total oscillator excitation quanta bounded by Nmax.
    Nmax,
    /// Full configuration interaction over the single-particle space.
    Fci,
    /// Total configuration weight bounded by a weight ceiling.
    WeightMax,
}

impl Display for ManyBodyTruncationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ManyBodyTruncationMode::Nmax => "nmax",
            ManyBodyTruncationMode::Fci => "fci",
            ManyBodyTruncationMode::WeightMax => "weight-max",
        };
        write!(f, "{label}")
    }
}

/// Optional observable families a task may request beyond the standard
/// Hamiltonian, radius, and center-of-mass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservableSet {
    /// Diagnostic decomposition of the Hamiltonian (Trel, Tcm, VNN, VC).
    #[serde(rename = "H-components")]
    HComponents,
    /// Squared angular momentum operators (L2, Sp2, Sn2, S2, J2).
    #[serde(rename = "am-sqr")]
    AmSqr,
    /// Squared isospin operator (T2).
    #[serde(rename = "isospin")]
    Isospin,
}
