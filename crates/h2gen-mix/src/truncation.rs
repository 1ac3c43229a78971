use h2gen_core::errors::{ErrorInfo, H2Error};
use h2gen_core::modes::{ManyBodyTruncationMode, SingleParticleTruncationMode};
use h2gen_core::truncation::{format_scalar, WeightMax};

use crate::task::{TaskSpec, TruncationParameters};

fn missing_parameter(
    key: &str,
    sp_mode: SingleParticleTruncationMode,
    mb_mode: ManyBodyTruncationMode,
) -> H2Error {
    H2Error::Config(
        ErrorInfo::new(
            "missing-truncation-parameter",
            format!("truncation parameter `{key}` is required"),
        )
        .with_context("sp_truncation_mode", sp_mode.to_string())
        .with_context("mb_truncation_mode", mb_mode.to_string()),
    )
}

fn require_u32(
    value: Option<u32>,
    key: &str,
    sp_mode: SingleParticleTruncationMode,
    mb_mode: ManyBodyTruncationMode,
) -> Result<u32, H2Error> {
    value.ok_or_else(|| missing_parameter(key, sp_mode, mb_mode))
}

fn require_f64(
    value: Option<f64>,
    key: &str,
    sp_mode: SingleParticleTruncationMode,
    mb_mode: ManyBodyTruncationMode,
) -> Result<f64, H2Error> {
    value.ok_or_else(|| missing_parameter(key, sp_mode, mb_mode))
}

/// Resolves the normalized target truncation bound for a task.
///
/// An explicit `target_truncation` is used verbatim; otherwise the bound
/// follows from the single-particle and many-body truncation modes. The
/// match is exhaustive so a new mode cannot fall through silently.
pub fn resolve_target_weight_max(task: &TaskSpec) -> Result<WeightMax, H2Error> {
    if let Some(explicit) = task.target_truncation {
        return Ok(explicit);
    }

    let sp_mode = task.sp_truncation_mode;
    let mb_mode = task.mb_truncation_mode;
    let parameters: &TruncationParameters = &task.truncation_parameters;

    match (sp_mode, mb_mode) {
        (SingleParticleTruncationMode::Nmax, ManyBodyTruncationMode::Nmax) => {
            // The orbital file truncation, the one-body interaction
            // truncation, and the underlying shell truncation must all
            // stay consistent under this arithmetic relation.
            let nv = require_u32(parameters.nv, "nv", sp_mode, mb_mode)?;
            let nmax = require_u32(parameters.nmax, "nmax", sp_mode, mb_mode)?;
            Ok(WeightMax::from_nmax(nv + nmax, 2 * nv + nmax))
        }
        (SingleParticleTruncationMode::Nmax, ManyBodyTruncationMode::Fci) => {
            let nmax = require_u32(parameters.nmax, "nmax", sp_mode, mb_mode)?;
            Ok(WeightMax::Ob(f64::from(nmax)))
        }
        (SingleParticleTruncationMode::WeightMax, ManyBodyTruncationMode::Fci) => {
            let w1_max = require_f64(parameters.sp_weight_max, "sp_weight_max", sp_mode, mb_mode)?;
            Ok(WeightMax::Ob(w1_max))
        }
        (SingleParticleTruncationMode::WeightMax, ManyBodyTruncationMode::WeightMax) => {
            let w1_max = require_f64(parameters.sp_weight_max, "sp_weight_max", sp_mode, mb_mode)?;
            let mb_weight_max =
                require_f64(parameters.mb_weight_max, "mb_weight_max", sp_mode, mb_mode)?;
            // TODO tighten the two-body cap below; doubling the one-body
            // ceiling is known to overshoot for most orbital sets.
            let w2_max = mb_weight_max.min(2.0 * w1_max);
            Ok(WeightMax::Pair(w1_max, w2_max))
        }
        (SingleParticleTruncationMode::Nmax, ManyBodyTruncationMode::WeightMax)
        | (SingleParticleTruncationMode::WeightMax, ManyBodyTruncationMode::Nmax) => {
            Err(H2Error::Config(
                ErrorInfo::new(
                    "unsupported-truncation-modes",
                    "the single-particle and many-body truncation modes cannot be combined",
                )
                .with_context("sp_truncation_mode", sp_mode.to_string())
                .with_context("mb_truncation_mode", mb_mode.to_string())
                .with_context(
                    "nmax",
                    parameters
                        .nmax
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "unset".to_string()),
                )
                .with_context(
                    "mb_weight_max",
                    parameters
                        .mb_weight_max
                        .map(format_scalar)
                        .unwrap_or_else(|| "unset".to_string()),
                ),
            ))
        }
    }
}
