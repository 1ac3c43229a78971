use std::fs;
use std::path::Path;

use h2gen_core::errors::{ErrorInfo, H2Error};
use h2gen_core::modes::{
    BasisMode, ManyBodyTruncationMode, ObservableSet, SingleParticleTruncationMode,
};
use h2gen_core::truncation::{format_scalar, InteractionTruncation, WeightMax};
use h2gen_ops::Operator;
use serde::{Deserialize, Serialize};

use crate::serde::from_yaml_slice;
use crate::sources::SourceDescriptor;

fn config_error(code: &str, message: impl Into<String>) -> H2Error {
    H2Error::Config(ErrorInfo::new(code, message))
}

fn io_error(code: &str, err: impl ToString) -> H2Error {
    H2Error::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Numeric truncation parameters; which keys are required depends on the
/// mode combination (see [`crate::truncation`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TruncationParameters {
    /// Valence shell quantum number (Nmax-based truncations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nv: Option<u32>,
    /// Many-body excitation cutoff (Nmax-based truncations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nmax: Option<u32>,
    /// Single-particle weight ceiling (weight-based truncations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_weight_max: Option<f64>,
    /// Many-body weight ceiling (weight-based truncations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mb_weight_max: Option<f64>,
}

fn default_h2_format() -> u32 {
    15099
}

/// Declarative description of one TBME generation task.
///
/// This is the external collaborator consumed by the pipeline; every
/// derived quantity is computed explicitly by [`TaskSpec::derived`], never
/// read from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Nuclide composition as (Z, N).
    pub nuclide: (u32, u32),
    /// Lawson term coefficient on Ncm.
    pub a_cm: f64,
    /// Basis oscillator frequency (MeV).
    pub hw: f64,
    /// Center-of-mass oscillator frequency; defaults to `hw`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_cm: Option<f64>,
    /// Native oscillator frequency of the interaction file (MeV).
    pub hw_int: f64,
    /// Native oscillator frequency of the Coulomb file (MeV).
    pub hw_coul: f64,
    /// Frequency the Coulomb interaction is dilated to; defaults to `hw`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_coul_rescaled: Option<f64>,
    /// Interaction name used for default file resolution.
    pub interaction: String,
    /// Truncation of the stored interaction file.
    pub truncation_int: InteractionTruncation,
    /// Truncation of the stored Coulomb file.
    pub truncation_coul: InteractionTruncation,
    /// Transform truncation for the interaction; defaults to
    /// `truncation_int`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xform_truncation_int: Option<InteractionTruncation>,
    /// Transform truncation for the Coulomb source; defaults to
    /// `truncation_coul`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xform_truncation_coul: Option<InteractionTruncation>,
    /// Basis mode relating interaction and target bases.
    pub basis_mode: BasisMode,
    /// Whether the Coulomb interaction contributes to the Hamiltonian.
    pub use_coulomb: bool,
    /// Output format identifier passed through to the mixer.
    #[serde(default = "default_h2_format")]
    pub h2_format: u32,
    /// Single-particle truncation mode.
    pub sp_truncation_mode: SingleParticleTruncationMode,
    /// Many-body truncation mode.
    pub mb_truncation_mode: ManyBodyTruncationMode,
    /// Numeric truncation parameters for the selected modes.
    #[serde(default)]
    pub truncation_parameters: TruncationParameters,
    /// Explicit target truncation; skips resolution entirely when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_truncation: Option<WeightMax>,
    /// Optional observable families to generate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observable_sets: Vec<ObservableSet>,
    /// User-supplied two-body observables as (basename, operator) pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tb_observables: Vec<(String, Operator)>,
    /// Full Hamiltonian override; bypasses the standard constructor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hamiltonian: Option<Operator>,
    /// Explicit interaction file path overriding the naming convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_file: Option<String>,
    /// Explicit Coulomb file path overriding the naming convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coulomb_file: Option<String>,
    /// Source descriptor overrides, applied by id after defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tbme_sources: Vec<(String, SourceDescriptor)>,
}

/// Quantities derived from a [`TaskSpec`] with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedParams {
    /// Mass number Z + N.
    pub a: u32,
    /// Center-of-mass frequency with the `hw` default applied.
    pub hw_cm: f64,
    /// Coulomb dilation target with the `hw` default applied.
    pub hw_coul_rescaled: f64,
    /// Interaction transform truncation with its default applied.
    pub xform_truncation_int: InteractionTruncation,
    /// Coulomb transform truncation with its default applied.
    pub xform_truncation_coul: InteractionTruncation,
}

impl TaskSpec {
    /// Mass number of the nuclide.
    pub fn mass_number(&self) -> u32 {
        self.nuclide.0 + self.nuclide.1
    }

    /// Applies defaults and validates cross-field consistency.
    ///
    /// The direct basis mode reuses the interaction file as-is, so the
    /// basis and interaction frequencies must agree exactly.
    pub fn derived(&self) -> Result<DerivedParams, H2Error> {
        if self.basis_mode == BasisMode::Direct && self.hw != self.hw_int {
            return Err(H2Error::Config(
                ErrorInfo::new(
                    "hw-mismatch",
                    "direct basis mode requires matching basis and interaction frequencies",
                )
                .with_context("basis_mode", self.basis_mode.to_string())
                .with_context("hw", format_scalar(self.hw))
                .with_context("hw_int", format_scalar(self.hw_int)),
            ));
        }
        Ok(DerivedParams {
            a: self.mass_number(),
            hw_cm: self.hw_cm.unwrap_or(self.hw),
            hw_coul_rescaled: self.hw_coul_rescaled.unwrap_or(self.hw),
            xform_truncation_int: self.xform_truncation_int.unwrap_or(self.truncation_int),
            xform_truncation_coul: self.xform_truncation_coul.unwrap_or(self.truncation_coul),
        })
    }
}

/// Loads a task specification from a YAML file.
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskSpec, H2Error> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| io_error("task-read", err))?;
    let task: TaskSpec = from_yaml_slice(&bytes)?;
    if task.nuclide.0 + task.nuclide.1 == 0 {
        return Err(config_error("empty-nuclide", "nuclide has no particles"));
    }
    Ok(task)
}
