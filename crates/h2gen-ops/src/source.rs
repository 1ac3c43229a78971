//! The fixed vocabulary of named matrix-element sources.
//!
//! Built-in sources are computed natively by the mixer from the radial
//! matrix elements declared in the script; `VNN` and `VC_unscaled` are
//! backed by tabulated interaction files. Any further id must come from a
//! user-supplied operator together with a matching source override.

/// Tabulated nucleon-nucleon interaction.
pub const VNN: &str = "VNN";

/// Tabulated Coulomb interaction, prior to dilation rescaling.
pub const VC_UNSCALED: &str = "VC_unscaled";

/// Source ids the mixer evaluates natively.
///
/// The kinematic family (`r2`, `k2`, `r1r2`, `k1k2`) is assembled by the
/// mixer from the declared `r`/`k` radial matrix elements, with one-body
/// terms upgraded to two-body form using the mass set by `set-mass`.
pub const BUILTIN_SOURCES: [&str; 11] = [
    "identity", "r2", "k2", "r1r2", "k1k2", "L2", "Sp2", "Sn2", "S2", "J2", "T2",
];

/// Returns true if the id names a source the mixer computes natively.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_SOURCES.contains(&id)
}
