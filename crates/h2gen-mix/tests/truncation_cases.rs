use h2gen_core::errors::H2Error;
use h2gen_core::modes::{BasisMode, ManyBodyTruncationMode, SingleParticleTruncationMode};
use h2gen_core::naming::StandardNaming;
use h2gen_core::truncation::{InteractionTruncation, TruncationRank, WeightMax};
use h2gen_mix::{generate_lines, resolve_target_weight_max, TaskSpec, TruncationParameters};

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

#[test]
fn nmax_nmax_combines_valence_and_excitation_quanta() {
    let mut task = base_task();
    task.truncation_parameters.nv = Some(0);
    task.truncation_parameters.nmax = Some(2);
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Pair(2.0, 2.0));

    task.truncation_parameters.nv = Some(2);
    task.truncation_parameters.nmax = Some(4);
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Pair(6.0, 8.0));
}

#[test]
fn nmax_fci_restricts_one_body_only() {
    let mut task = base_task();
    task.mb_truncation_mode = ManyBodyTruncationMode::Fci;
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Ob(2.0));
}

#[test]
fn weight_fci_keys_off_the_one_body_ceiling() {
    let mut task = base_task();
    task.sp_truncation_mode = SingleParticleTruncationMode::WeightMax;
    task.mb_truncation_mode = ManyBodyTruncationMode::Fci;
    task.truncation_parameters.sp_weight_max = Some(3.5);
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Ob(3.5));
}

#[test]
fn weight_weight_caps_the_two_body_ceiling() {
    let mut task = base_task();
    task.sp_truncation_mode = SingleParticleTruncationMode::WeightMax;
    task.mb_truncation_mode = ManyBodyTruncationMode::WeightMax;
    task.truncation_parameters.sp_weight_max = Some(2.5);
    task.truncation_parameters.mb_weight_max = Some(6.0);
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Pair(2.5, 5.0));

    task.truncation_parameters.sp_weight_max = Some(4.0);
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Pair(4.0, 6.0));
}

#[test]
fn mixed_mode_combinations_are_fatal() {
    let mut task = base_task();
    task.mb_truncation_mode = ManyBodyTruncationMode::WeightMax;
    task.truncation_parameters.mb_weight_max = Some(6.0);
    let err = resolve_target_weight_max(&task).expect_err("must fail");
    match &err {
        H2Error::Config(info) => {
            assert_eq!(info.code, "unsupported-truncation-modes");
            assert_eq!(
                info.context.get("sp_truncation_mode").map(String::as_str),
                Some("nmax")
            );
            assert_eq!(
                info.context.get("mb_truncation_mode").map(String::as_str),
                Some("weight-max")
            );
        }
        other => panic!("unexpected error family: {other:?}"),
    }

    let mut task = base_task();
    task.sp_truncation_mode = SingleParticleTruncationMode::WeightMax;
    task.truncation_parameters.sp_weight_max = Some(2.0);
    let err = resolve_target_weight_max(&task).expect_err("must fail");
    assert!(matches!(err, H2Error::Config(_)));
    assert_eq!(err.info().code, "unsupported-truncation-modes");
}

#[test]
fn missing_parameters_name_the_mode_combination() {
    let mut task = base_task();
    task.truncation_parameters.nmax = None;
    let err = resolve_target_weight_max(&task).expect_err("must fail");
    match &err {
        H2Error::Config(info) => {
            assert_eq!(info.code, "missing-truncation-parameter");
            assert!(info.message.contains("nmax"));
        }
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn explicit_override_short_circuits_resolution() {
    let mut task = base_task();
    // Parameters deliberately inconsistent; the override must win without
    // ever inspecting them.
    task.truncation_parameters = TruncationParameters::default();
    task.target_truncation = Some(WeightMax::Pair(6.1, 9.3));
    let bound = resolve_target_weight_max(&task).expect("resolve");
    assert_eq!(bound, WeightMax::Pair(6.1, 9.3));

    let naming = StandardNaming::default();
    let lines = generate_lines(&task, "", &naming).expect("generate");
    assert!(lines
        .iter()
        .any(|line| line == "set-target-indexing orbitals.dat 6.1 6.1 9.3 9.3 9.3"));
}
