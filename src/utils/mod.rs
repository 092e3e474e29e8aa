//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub(crate) use grounded_extension_computer::grounded_extension;

mod random_framework_generator;
pub use random_framework_generator::RandomFrameworkGenerator;

mod set_lattice;
pub use set_lattice::maximal_members;
pub use set_lattice::minimal_members;
pub use set_lattice::remove_non_maximal_members;
pub use set_lattice::remove_non_minimal_members;
