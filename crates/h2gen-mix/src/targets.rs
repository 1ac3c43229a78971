use std::collections::BTreeSet;

use h2gen_core::modes::ObservableSet;
use h2gen_ops::standard::{
    hamiltonian, j2, l2, ncm, rrel2, s2, sn2, sp2, t2, tcm, trel, vc, vnn, HamiltonianParams,
};
use h2gen_ops::Operator;

use crate::task::{DerivedParams, TaskSpec};

/// Ordered mapping from target basename to operator.
///
/// Insertion order controls the emitted `define-target` block order, which
/// the downstream tool consumes positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetSet {
    entries: Vec<(String, Operator)>,
}

impl TargetSet {
    /// Creates an empty target set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if a target with the given basename exists.
    pub fn contains(&self, basename: &str) -> bool {
        self.entries.iter().any(|(known, _)| known == basename)
    }

    /// Appends a target, replacing any existing entry with the same
    /// basename in place.
    pub fn insert(&mut self, basename: impl Into<String>, operator: Operator) {
        let basename = basename.into();
        if let Some(entry) = self.entries.iter_mut().find(|(known, _)| *known == basename) {
            entry.1 = operator;
        } else {
            self.entries.push((basename, operator));
        }
    }

    /// Iterates targets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operator)> {
        self.entries
            .iter()
            .map(|(basename, operator)| (basename.as_str(), operator))
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no targets have been assembled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assembles the ordered target set for a task.
///
/// Order: Hamiltonian, user observables, the rrel2 and Ncm fill-ins, then
/// the optional observable families in fixed categorical order.
pub fn assemble_targets(task: &TaskSpec, derived: &DerivedParams) -> TargetSet {
    let mut targets = TargetSet::new();

    match &task.hamiltonian {
        Some(operator) => targets.insert("tbme-H", operator.clone()),
        None => targets.insert(
            "tbme-H",
            hamiltonian(&HamiltonianParams {
                a: derived.a,
                hw: task.hw,
                a_cm: task.a_cm,
                bsqr_intr: task.hw / derived.hw_cm,
                use_coulomb: task.use_coulomb,
                bsqr_coul: derived.hw_coul_rescaled / task.hw_coul,
            }),
        ),
    }

    for (basename, operator) in &task.tb_observables {
        targets.insert(format!("tbme-{basename}"), operator.clone());
    }

    if !targets.contains("tbme-rrel2") {
        targets.insert("tbme-rrel2", rrel2(derived.a, task.hw));
    }
    if !targets.contains("tbme-Ncm") {
        targets.insert("tbme-Ncm", ncm(derived.a, task.hw / derived.hw_cm));
    }

    if task.observable_sets.contains(&ObservableSet::HComponents) {
        targets.insert("tbme-Trel", trel(derived.a, task.hw));
        targets.insert("tbme-Tcm", tcm(derived.a, task.hw));
        targets.insert("tbme-VNN", vnn());
        if task.use_coulomb {
            targets.insert("tbme-VC", vc(derived.hw_coul_rescaled / task.hw_coul));
        }
    }
    if task.observable_sets.contains(&ObservableSet::AmSqr) {
        targets.insert("tbme-L2", l2());
        targets.insert("tbme-Sp2", sp2());
        targets.insert("tbme-Sn2", sn2());
        targets.insert("tbme-S2", s2());
        targets.insert("tbme-J2", j2());
    }
    if task.observable_sets.contains(&ObservableSet::Isospin) {
        targets.insert("tbme-T2", t2());
    }

    targets
}

/// Union of source ids referenced by any target operator.
pub fn required_sources(targets: &TargetSet) -> BTreeSet<String> {
    let mut required = BTreeSet::new();
    for (_, operator) in targets.iter() {
        for id in operator.source_ids() {
            required.insert(id.to_string());
        }
    }
    required
}
