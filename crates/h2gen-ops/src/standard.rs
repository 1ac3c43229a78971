//! Constructors for the standard physical two-body operators.
//!
//! Coefficients are expressed over the dimensionless kinematic sources
//! defined with respect to the basis oscillator length `b`:
//! `r2 = sum_i r_i^2/b^2`, `k2 = sum_i k_i^2 b^2`,
//! `r1r2 = sum_{i<j} r_i.r_j/b^2`, `k1k2 = sum_{i<j} k_i.k_j b^2`.
//! One-body sums are upgraded to two-body form by the mixer itself, using
//! the mass number declared in the script.

use crate::operator::Operator;
use crate::source::{VC_UNSCALED, VNN};

/// hbar*c in MeV fm.
pub const HBARC: f64 = 197.326_980_4;

/// Average nucleon rest energy in MeV.
pub const NUCLEON_MASS: f64 = 938.918_755;

/// Squared oscillator length `b^2` in fm^2 for the given frequency (MeV).
pub fn oscillator_bsqr(hw: f64) -> f64 {
    HBARC * HBARC / (NUCLEON_MASS * hw)
}

/// Physical parameters of the many-body Hamiltonian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HamiltonianParams {
    /// Mass number.
    pub a: u32,
    /// Basis oscillator frequency (MeV).
    pub hw: f64,
    /// Lawson term coefficient on Ncm.
    pub a_cm: f64,
    /// Frequency ratio hw/hw_cm entering the Lawson term.
    pub bsqr_intr: f64,
    /// Whether the Coulomb interaction contributes.
    pub use_coulomb: bool,
    /// Frequency ratio hw_coul_rescaled/hw_coul for Coulomb dilation.
    pub bsqr_coul: f64,
}

/// Identity operator.
pub fn identity() -> Operator {
    Operator::single("identity", 1.0)
}

/// Intrinsic (relative) kinetic energy, in MeV.
pub fn trel(a: u32, hw: f64) -> Operator {
    let a = f64::from(a);
    Operator::new()
        .with_term("k2", hw * (a - 1.0) / (2.0 * a))
        .with_term("k1k2", -hw / a)
}

/// Center-of-mass kinetic energy, in MeV.
pub fn tcm(a: u32, hw: f64) -> Operator {
    let a = f64::from(a);
    Operator::new()
        .with_term("k2", hw / (2.0 * a))
        .with_term("k1k2", hw / a)
}

/// Number of center-of-mass oscillator quanta.
///
/// `bsqr` is the frequency ratio hw/hw_cm between the basis and the
/// center-of-mass oscillator.
pub fn ncm(a: u32, bsqr: f64) -> Operator {
    let a = f64::from(a);
    Operator::new()
        .with_term("identity", -1.5)
        .with_term("r2", 1.0 / (2.0 * a * bsqr))
        .with_term("r1r2", 1.0 / (a * bsqr))
        .with_term("k2", bsqr / (2.0 * a))
        .with_term("k1k2", bsqr / a)
}

/// Intrinsic mean-square radius operator, in fm^2.
pub fn rrel2(a: u32, hw: f64) -> Operator {
    let bsqr = oscillator_bsqr(hw);
    let a = f64::from(a);
    Operator::new()
        .with_term("r2", bsqr * (a - 1.0) / (a * a))
        .with_term("r1r2", -2.0 * bsqr / (a * a))
}

/// Raw nucleon-nucleon interaction.
pub fn vnn() -> Operator {
    Operator::single(VNN, 1.0)
}

/// Coulomb interaction under frequency dilation.
///
/// A 1/r potential scales as the inverse oscillator length, hence the
/// square root of the frequency ratio `bsqr_coul`.
pub fn vc(bsqr_coul: f64) -> Operator {
    Operator::single(VC_UNSCALED, bsqr_coul.sqrt())
}

/// Squared orbital angular momentum.
pub fn l2() -> Operator {
    Operator::single("L2", 1.0)
}

/// Squared proton spin.
pub fn sp2() -> Operator {
    Operator::single("Sp2", 1.0)
}

/// Squared neutron spin.
pub fn sn2() -> Operator {
    Operator::single("Sn2", 1.0)
}

/// Squared total spin.
pub fn s2() -> Operator {
    Operator::single("S2", 1.0)
}

/// Squared total angular momentum.
pub fn j2() -> Operator {
    Operator::single("J2", 1.0)
}

/// Squared total isospin.
pub fn t2() -> Operator {
    Operator::single("T2", 1.0)
}

/// Many-body Hamiltonian: Trel + a_cm * Ncm + VNN, plus the dilated
/// Coulomb term when enabled. The Lawson term is omitted entirely when
/// `a_cm` is zero so no zero-coefficient terms reach the script.
pub fn hamiltonian(params: &HamiltonianParams) -> Operator {
    let mut operator = trel(params.a, params.hw);
    if params.a_cm != 0.0 {
        operator = operator + ncm(params.a, params.bsqr_intr).scaled(params.a_cm);
    }
    operator = operator + vnn();
    if params.use_coulomb {
        operator = operator + vc(params.bsqr_coul);
    }
    operator
}
