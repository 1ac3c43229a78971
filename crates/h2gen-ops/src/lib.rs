#![deny(missing_docs)]
#![doc = "Two-body operator algebra: ordered coefficient mappings over the mixer's source vocabulary and constructors for the standard physical operators."]

pub mod operator;
pub mod source;
pub mod standard;

pub use operator::Operator;
pub use source::{is_builtin, BUILTIN_SOURCES, VC_UNSCALED, VNN};
pub use standard::{
    hamiltonian, identity, j2, l2, ncm, rrel2, s2, sn2, sp2, t2, tcm, trel, vc, vnn,
    HamiltonianParams,
};
