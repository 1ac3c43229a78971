use std::collections::{BTreeMap, BTreeSet};

use h2gen_core::errors::{ErrorInfo, H2Error};
use h2gen_core::modes::BasisMode;
use h2gen_core::naming::NamingService;
use h2gen_core::truncation::InteractionTruncation;
use h2gen_ops::source::{is_builtin, VC_UNSCALED, VNN};
use serde::{Deserialize, Serialize};

use crate::task::{DerivedParams, TaskSpec};

/// How the mixer obtains matrix elements for one source id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceDescriptor {
    /// Computed natively by the mixer; no file reference.
    Builtin,
    /// Read from a tabulated file in the target basis.
    Input {
        /// Matrix element file.
        filename: String,
    },
    /// Read from a tabulated file and transformed into the target basis.
    Xform {
        /// Matrix element file in its native basis.
        filename: String,
        /// Radial overlap file implementing the basis transform.
        xform_filename: String,
        /// Truncation applied to the transform.
        xform_truncation: InteractionTruncation,
    },
}

impl SourceDescriptor {
    /// Renders the mixer declaration line for this source.
    pub fn mixer_line(&self, id: &str) -> String {
        match self {
            SourceDescriptor::Builtin => format!("define-source operator {id}"),
            SourceDescriptor::Input { filename } => {
                format!("define-source input {id} {filename}")
            }
            SourceDescriptor::Xform {
                filename,
                xform_filename,
                xform_truncation,
            } => format!(
                "define-source xform {id} {filename} {} {} {xform_filename}",
                xform_truncation.rank, xform_truncation.cutoff
            ),
        }
    }
}

/// Resolves every required source id to a concrete descriptor.
///
/// Defaults are computed first for all required ids; caller-supplied
/// overrides then fully replace matching descriptors (no merging). The
/// returned map is restricted to the required set and its iteration order
/// is the lexical id order used for emission.
pub fn resolve_sources(
    task: &TaskSpec,
    derived: &DerivedParams,
    required: &BTreeSet<String>,
    naming: &dyn NamingService,
    postfix: &str,
) -> Result<BTreeMap<String, SourceDescriptor>, H2Error> {
    let mut resolved = BTreeMap::new();

    for id in required {
        if is_builtin(id) {
            resolved.insert(id.clone(), SourceDescriptor::Builtin);
        }
    }

    if required.contains(VNN) {
        let filename = match &task.interaction_file {
            Some(filename) => filename.clone(),
            None => naming.interaction_filename(&task.interaction, &task.truncation_int, task.hw_int),
        };
        let descriptor = match task.basis_mode {
            BasisMode::Direct => SourceDescriptor::Input { filename },
            BasisMode::Dilated | BasisMode::Generic => SourceDescriptor::Xform {
                filename,
                xform_filename: naming.interaction_xform_filename(postfix),
                xform_truncation: derived.xform_truncation_int,
            },
        };
        resolved.insert(VNN.to_string(), descriptor);
    }

    // Dilation rescales the Coulomb frequency rather than the basis
    // content, so only the fully general basis needs a transform here.
    if required.contains(VC_UNSCALED) {
        let filename = match &task.coulomb_file {
            Some(filename) => filename.clone(),
            None => naming.interaction_filename("VC", &task.truncation_coul, task.hw_coul),
        };
        let descriptor = match task.basis_mode {
            BasisMode::Direct | BasisMode::Dilated => SourceDescriptor::Input { filename },
            BasisMode::Generic => SourceDescriptor::Xform {
                filename,
                xform_filename: naming.coulomb_xform_filename(postfix),
                xform_truncation: derived.xform_truncation_coul,
            },
        };
        resolved.insert(VC_UNSCALED.to_string(), descriptor);
    }

    for (id, descriptor) in &task.tbme_sources {
        resolved.insert(id.clone(), descriptor.clone());
    }
    resolved.retain(|id, _| required.contains(id));

    for id in required {
        if !resolved.contains_key(id) {
            return Err(H2Error::Resolve(
                ErrorInfo::new(
                    "unresolved-source",
                    format!("no descriptor available for required source `{id}`"),
                )
                .with_context("source_id", id.clone())
                .with_hint("supply a tbme_sources override for this id"),
            ));
        }
    }

    Ok(resolved)
}
