#![deny(missing_docs)]
#![doc = "Derivation pipeline from a declarative task to an h2mixer instruction script, plus the runner that dispatches the external mixer."]

/// Pipeline assembly from task to script lines.
pub mod generate;
/// Canonical hashing helpers.
pub mod hash;
/// Mixer invocation and diagnostics persistence.
pub mod runner;
/// Script line assembly and numeric formatting.
pub mod script;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
/// Source descriptor resolution.
pub mod sources;
/// Task specification loading and parameter derivation.
pub mod task;
/// Target set assembly.
pub mod targets;
/// Target truncation bound resolution.
pub mod truncation;

pub use generate::generate_lines;
pub use runner::{run_mixer, MixerRunReport};
pub use script::{compile_script, format_coefficient};
pub use sources::{resolve_sources, SourceDescriptor};
pub use task::{load_task, DerivedParams, TaskSpec, TruncationParameters};
pub use targets::{assemble_targets, required_sources, TargetSet};
pub use truncation::resolve_target_weight_max;
