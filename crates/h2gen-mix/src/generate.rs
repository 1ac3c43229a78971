use h2gen_core::errors::H2Error;
use h2gen_core::naming::NamingService;

use crate::script::compile_script;
use crate::sources::resolve_sources;
use crate::targets::{assemble_targets, required_sources};
use crate::task::TaskSpec;
use crate::truncation::resolve_target_weight_max;

/// Runs the derivation pipeline and returns the ordered script lines.
///
/// Derive targets, union their source ids, resolve the truncation bound
/// and every source descriptor, then serialize. No filesystem or process
/// interaction happens here; see [`crate::runner`] for dispatch.
pub fn generate_lines(
    task: &TaskSpec,
    postfix: &str,
    naming: &dyn NamingService,
) -> Result<Vec<String>, H2Error> {
    let derived = task.derived()?;
    let targets = assemble_targets(task, &derived);
    let required = required_sources(&targets);
    let weight_max = resolve_target_weight_max(task)?;
    let sources = resolve_sources(task, &derived, &required, naming, postfix)?;
    compile_script(task, &targets, &sources, &weight_max, naming, postfix)
}
