use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use h2gen_core::naming::StandardNaming;
use h2gen_mix::serde::to_canonical_json_bytes;
use h2gen_mix::{generate_lines, load_task, run_mixer};

#[derive(Parser, Debug)]
#[command(name = "h2gen", about = "TBME mixing-script generation and dispatch")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile the mixer script for a task without invoking the mixer.
    Script(ScriptArgs),
    /// Compile the mixer script and run the external mixer.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// YAML task specification.
    #[arg(long)]
    task: PathBuf,
    /// Identifier namespacing filenames and the work directory.
    #[arg(long, default_value = "")]
    postfix: String,
    /// Write the script here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// YAML task specification.
    #[arg(long)]
    task: PathBuf,
    /// Identifier namespacing filenames and the work directory.
    #[arg(long, default_value = "")]
    postfix: String,
    /// Mixer executable overriding the default `h2mixer`.
    #[arg(long)]
    mixer: Option<PathBuf>,
    /// Destination for the canonical JSON run report.
    #[arg(long, default_value = "h2gen-report.json")]
    report: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Script(args) => emit_script(&args),
        Command::Run(args) => execute_run(&args),
    }
}

fn emit_script(args: &ScriptArgs) -> Result<(), Box<dyn Error>> {
    let task = load_task(&args.task)?;
    let naming = StandardNaming::default();
    let lines = generate_lines(&task, &args.postfix, &naming)?;
    let payload = lines.join("\n") + "\n";
    match &args.out {
        Some(path) => fs::write(path, payload)?,
        None => print!("{payload}"),
    }
    Ok(())
}

fn execute_run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let task = load_task(&args.task)?;
    let mut naming = StandardNaming::default();
    if let Some(mixer) = &args.mixer {
        naming.mixer_executable = mixer.clone();
    }
    let report = run_mixer(&task, &args.postfix, &naming)?;
    fs::write(&args.report, to_canonical_json_bytes(&report)?)?;
    println!("{}", report.script_hash);
    Ok(())
}
