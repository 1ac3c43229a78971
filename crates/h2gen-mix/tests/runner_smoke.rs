#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use h2gen_core::errors::H2Error;
use h2gen_core::modes::{BasisMode, ManyBodyTruncationMode, SingleParticleTruncationMode};
use h2gen_core::naming::{NamingService, RadialOperatorKind, StandardNaming};
use h2gen_core::truncation::{InteractionTruncation, TruncationRank};
use h2gen_mix::{run_mixer, TaskSpec, TruncationParameters};

fn base_task() -> TaskSpec {
    TaskSpec {
        nuclide: (2, 2),
        a_cm: 40.0,
        hw: 20.0,
        hw_cm: None,
        hw_int: 20.0,
        hw_coul: 20.0,
        hw_coul_rescaled: None,
        interaction: "JISP16".to_string(),
        truncation_int: InteractionTruncation {
            rank: TruncationRank::Tb,
            cutoff: 20,
        },
        truncation_coul: InteractionTruncation {
            rank: TruncationRank::Tb,
            cutoff: 20,
        },
        xform_truncation_int: None,
        xform_truncation_coul: None,
        basis_mode: BasisMode::Direct,
        use_coulomb: false,
        h2_format: 15099,
        sp_truncation_mode: SingleParticleTruncationMode::Nmax,
        mb_truncation_mode: ManyBodyTruncationMode::Nmax,
        truncation_parameters: TruncationParameters {
            nv: Some(0),
            nmax: Some(2),
            sp_weight_max: None,
            mb_weight_max: None,
        },
        target_truncation: None,
        observable_sets: Vec::new(),
        tb_observables: Vec::new(),
        hamiltonian: None,
        interaction_file: None,
        coulomb_file: None,
        tbme_sources: Vec::new(),
    }
}

/// Naming service rooting all filesystem outputs in a scratch directory
/// while keeping the standard protocol-visible names.
struct ScratchNaming {
    root: PathBuf,
    mixer: PathBuf,
    standard: StandardNaming,
}

impl NamingService for ScratchNaming {
    fn orbitals_filename(&self, postfix: &str) -> String {
        self.standard.orbitals_filename(postfix)
    }

    fn radial_me_filename(&self, postfix: &str, kind: RadialOperatorKind, power: u32) -> String {
        self.standard.radial_me_filename(postfix, kind, power)
    }

    fn pn_overlap_filename(&self, postfix: &str) -> String {
        self.standard.pn_overlap_filename(postfix)
    }

    fn interaction_xform_filename(&self, postfix: &str) -> String {
        self.standard.interaction_xform_filename(postfix)
    }

    fn coulomb_xform_filename(&self, postfix: &str) -> String {
        self.standard.coulomb_xform_filename(postfix)
    }

    fn interaction_filename(
        &self,
        interaction: &str,
        truncation: &InteractionTruncation,
        hw: f64,
    ) -> String {
        self.standard.interaction_filename(interaction, truncation, hw)
    }

    fn target_filename(&self, postfix: &str, basename: &str) -> String {
        self.standard.target_filename(postfix, basename)
    }

    fn script_filename(&self, postfix: &str) -> PathBuf {
        self.root.join(self.standard.script_filename(postfix))
    }

    fn work_dir(&self, postfix: &str) -> PathBuf {
        self.root.join(self.standard.work_dir(postfix))
    }

    fn mixer_executable(&self) -> PathBuf {
        self.mixer.clone()
    }
}

fn write_stub_mixer(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    let path = dir.join(name);
    let body = format!("#!/bin/sh\ncat > /dev/null\nexit {exit_code}\n");
    fs::write(&path, body).expect("write stub");
    let mut permissions = fs::metadata(&path).expect("stat stub").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("chmod stub");
    path
}

#[test]
fn successful_run_persists_script_and_work_dir() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let naming = ScratchNaming {
        root: scratch.path().to_path_buf(),
        mixer: write_stub_mixer(scratch.path(), "mixer-ok", 0),
        standard: StandardNaming::default(),
    };

    let report = run_mixer(&base_task(), "-n1", &naming).expect("run");
    assert_eq!(report.exit_code, 0);
    assert!(report.line_count > 0);
    assert!(!report.script_hash.is_empty());
    assert!(naming.script_filename("-n1").is_file());
    assert!(naming.work_dir("-n1").is_dir());

    let script = fs::read_to_string(naming.script_filename("-n1")).expect("read script");
    assert!(script.contains("define-target work-n1/tbme-H.bin"));
    assert!(script.ends_with("\n"));
}

#[test]
fn mixer_failure_propagates_the_exit_code() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let naming = ScratchNaming {
        root: scratch.path().to_path_buf(),
        mixer: write_stub_mixer(scratch.path(), "mixer-fail", 3),
        standard: StandardNaming::default(),
    };

    let err = run_mixer(&base_task(), "", &naming).expect_err("must fail");
    match &err {
        H2Error::Run(info) => {
            assert_eq!(info.code, "mixer-exit");
            assert_eq!(info.context.get("exit_code").map(String::as_str), Some("3"));
        }
        other => panic!("unexpected error family: {other:?}"),
    }
    // The diagnostic script is written before invocation regardless of
    // the mixer outcome.
    assert!(naming.script_filename("").is_file());
}

#[test]
fn missing_mixer_executable_is_a_spawn_error() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let naming = ScratchNaming {
        root: scratch.path().to_path_buf(),
        mixer: scratch.path().join("no-such-mixer"),
        standard: StandardNaming::default(),
    };

    let err = run_mixer(&base_task(), "", &naming).expect_err("must fail");
    match &err {
        H2Error::Run(info) => assert_eq!(info.code, "mixer-spawn"),
        other => panic!("unexpected error family: {other:?}"),
    }
}
