#![deny(missing_docs)]
#![doc = "Core modes, truncation bounds, naming conventions, and error types shared across the h2gen crates."]

pub mod errors;
pub mod modes;
pub mod naming;
pub mod truncation;

pub use errors::{ErrorInfo, H2Error};
pub use modes::{BasisMode, ManyBodyTruncationMode, ObservableSet, SingleParticleTruncationMode};
pub use naming::{NamingService, RadialOperatorKind, StandardNaming};
pub use truncation::{format_scalar, InteractionTruncation, TruncationRank, WeightMax};
