use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::Utc;
use h2gen_core::errors::{ErrorInfo, H2Error};
use h2gen_core::naming::NamingService;
use serde::{Deserialize, Serialize};

use crate::generate::generate_lines;
use crate::hash::stable_hash_string;
use crate::task::TaskSpec;

fn run_error(code: &str, err: impl ToString) -> H2Error {
    H2Error::Run(ErrorInfo::new(code, err.to_string()))
}

/// Outcome of one successful mixer invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixerRunReport {
    /// Path of the diagnostic script copy.
    pub script_path: PathBuf,
    /// Work directory the mixer wrote target files into.
    pub work_dir: PathBuf,
    /// Stable hash of the compiled script lines.
    pub script_hash: String,
    /// Number of script lines fed to the mixer.
    pub line_count: usize,
    /// Exit code reported by the mixer.
    pub exit_code: i32,
    /// Invocation start time, RFC 3339.
    pub started_at: String,
}

/// Compiles the script, persists it, and dispatches the external mixer.
///
/// The diagnostic script file is always written before invocation so a
/// failed run can be inspected post mortem. The mixer's nonzero exit
/// status is propagated as a fatal error carrying the code.
pub fn run_mixer(
    task: &TaskSpec,
    postfix: &str,
    naming: &dyn NamingService,
) -> Result<MixerRunReport, H2Error> {
    let started_at = Utc::now().to_rfc3339();
    let lines = generate_lines(task, postfix, naming)?;
    let payload = lines.join("\n") + "\n";

    let script_path = naming.script_filename(postfix);
    fs::write(&script_path, &payload).map_err(|err| run_error("script-write", err))?;

    let work_dir = naming.work_dir(postfix);
    fs::create_dir_all(&work_dir).map_err(|err| run_error("work-dir", err))?;

    let executable = naming.mixer_executable();
    let mut child = Command::new(&executable)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| {
            H2Error::Run(
                ErrorInfo::new("mixer-spawn", err.to_string())
                    .with_context("executable", executable.display().to_string()),
            )
        })?;

    // The mixer may exit before draining stdin; in that case the exit
    // status is the more useful diagnostic than the broken pipe.
    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(payload.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().map_err(|err| run_error("mixer-wait", err))?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(H2Error::Run(
            ErrorInfo::new("mixer-exit", "the external mixer reported failure")
                .with_context("executable", executable.display().to_string())
                .with_context("exit_code", code.to_string())
                .with_context("script_path", script_path.display().to_string()),
        ));
    }
    write_result.map_err(|err| run_error("mixer-stdin", err))?;

    Ok(MixerRunReport {
        script_path,
        work_dir,
        script_hash: stable_hash_string(&lines)?,
        line_count: lines.len(),
        exit_code: status.code().unwrap_or(0),
        started_at,
    })
}
