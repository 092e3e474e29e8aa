//! This module contains the main material used to define Abstract Argumentation frameworks.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod acceptance;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod semantics;
pub use semantics::Semantics;

mod semantics_cache;
pub(crate) use semantics_cache::IdSet;
pub(crate) use semantics_cache::IdSets;
pub(crate) use semantics_cache::MultipleSlot;
pub(crate) use semantics_cache::UniqueSlot;
