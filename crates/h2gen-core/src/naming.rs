//! File and directory naming conventions, consumed as an interface.
//!
//! Every name that appears inside the generated script or on disk flows
//! through [`NamingService`], so callers can namespace concurrent
//! invocations with a postfix and relocate inputs without touching the
//! pipeline.

use std::path::PathBuf;

use crate::truncation::{format_scalar, InteractionTruncation};

/// Radial one-body operator family declared to the mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialOperatorKind {
    /// Position operator.
    R,
    /// Momentum operator.
    K,
}

impl RadialOperatorKind {
    /// Returns the single-letter label used in filenames and directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            RadialOperatorKind::R => "r",
            RadialOperatorKind::K => "k",
        }
    }
}

/// Naming conventions for every file the pipeline reads, writes, or
/// mentions in the generated script.
pub trait NamingService {
    /// Orbital listing consumed by the mixer's target indexing.
    fn orbitals_filename(&self, postfix: &str) -> String;

    /// Radial matrix element file for the given operator and power.
    fn radial_me_filename(&self, postfix: &str, kind: RadialOperatorKind, power: u32) -> String;

    /// Proton-neutron overlap matrix element file.
    fn pn_overlap_filename(&self, postfix: &str) -> String;

    /// Radial overlap file transforming the interaction basis.
    fn interaction_xform_filename(&self, postfix: &str) -> String;

    /// Radial overlap file transforming the Coulomb basis.
    fn coulomb_xform_filename(&self, postfix: &str) -> String;

    /// Default filename of a tabulated interaction.
    fn interaction_filename(
        &self,
        interaction: &str,
        truncation: &InteractionTruncation,
        hw: f64,
    ) -> String;

    /// Name of a target matrix element file inside the work directory.
    fn target_filename(&self, postfix: &str, basename: &str) -> String;

    /// Path of the diagnostic copy of the compiled script.
    fn script_filename(&self, postfix: &str) -> PathBuf;

    /// Work directory the mixer writes target files into.
    fn work_dir(&self, postfix: &str) -> PathBuf;

    /// Path of the external mixer executable.
    fn mixer_executable(&self) -> PathBuf;
}

/// Standard naming conventions.
#[derive(Debug, Clone)]
pub struct StandardNaming {
    /// Mixer executable to invoke; defaults to `h2mixer` on the PATH.
    pub mixer_executable: PathBuf,
}

impl Default for StandardNaming {
    fn default() -> Self {
        Self {
            mixer_executable: PathBuf::from("h2mixer"),
        }
    }
}

impl NamingService for StandardNaming {
    fn orbitals_filename(&self, postfix: &str) -> String {
        format!("orbitals{postfix}.dat")
    }

    fn radial_me_filename(&self, postfix: &str, kind: RadialOperatorKind, power: u32) -> String {
        format!("radial-me-{}{power}{postfix}.dat", kind.as_str())
    }

    fn pn_overlap_filename(&self, postfix: &str) -> String {
        format!("radial-pn-olap{postfix}.dat")
    }

    fn interaction_xform_filename(&self, postfix: &str) -> String {
        format!("radial-olap-int{postfix}.dat")
    }

    fn coulomb_xform_filename(&self, postfix: &str) -> String {
        format!("radial-olap-coul{postfix}.dat")
    }

    fn interaction_filename(
        &self,
        interaction: &str,
        truncation: &InteractionTruncation,
        hw: f64,
    ) -> String {
        format!("{interaction}-{truncation}-{}.bin", format_scalar(hw))
    }

    fn target_filename(&self, postfix: &str, basename: &str) -> String {
        format!("work{postfix}/{basename}.bin")
    }

    fn script_filename(&self, postfix: &str) -> PathBuf {
        PathBuf::from(format!("h2mixer{postfix}.in"))
    }

    fn work_dir(&self, postfix: &str) -> PathBuf {
        PathBuf::from(format!("work{postfix}"))
    }

    fn mixer_executable(&self) -> PathBuf {
        self.mixer_executable.clone()
    }
}
