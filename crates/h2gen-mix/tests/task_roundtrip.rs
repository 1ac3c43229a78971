use std::path::PathBuf;

use h2gen_core::modes::{BasisMode, ObservableSet};
use h2gen_mix::serde::{from_yaml_slice, to_yaml_string};
use h2gen_mix::{load_task, TaskSpec};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(relative)
}

#[test]
fn sample_task_loads_with_expected_fields() {
    let task = load_task(fixture_path("configs/sample-task.yaml")).expect("task loads");
    assert_eq!(task.nuclide, (2, 2));
    assert_eq!(task.mass_number(), 4);
    assert_eq!(task.interaction, "JISP16");
    assert_eq!(task.basis_mode, BasisMode::Direct);
    assert_eq!(task.observable_sets, vec![ObservableSet::AmSqr]);
    assert_eq!(task.h2_format, 15099);
    assert_eq!(task.truncation_parameters.nmax, Some(2));
}

#[test]
fn task_roundtrips_through_yaml() {
    let task = load_task(fixture_path("configs/sample-task.yaml")).expect("task loads");
    let serialized = to_yaml_string(&task).expect("serialize");
    let reparsed: TaskSpec = from_yaml_slice(serialized.as_bytes()).expect("reparse");
    assert_eq!(reparsed, task);
}

#[test]
fn omitted_output_format_defaults() {
    let yaml = br#"
nuclide: [3, 4]
a_cm: 0.0
hw: 16.0
hw_int: 16.0
hw_coul: 20.0
interaction: Daejeon16
truncation_int: { rank: tb, cutoff: 13 }
truncation_coul: { rank: tb, cutoff: 13 }
basis_mode: dilated
use_coulomb: false
sp_truncation_mode: nmax
mb_truncation_mode: nmax
truncation_parameters: { nv: 1, nmax: 4 }
"#;
    let task: TaskSpec = from_yaml_slice(yaml).expect("parse");
    assert_eq!(task.h2_format, 15099);
    assert!(task.tb_observables.is_empty());
    assert!(task.target_truncation.is_none());
    let derived = task.derived().expect("derive");
    assert_eq!(derived.a, 7);
    assert_eq!(derived.hw_cm, 16.0);
    assert_eq!(derived.xform_truncation_int, task.truncation_int);
}
