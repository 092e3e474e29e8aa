//! Solvers dedicated to Abstract Argumentation frameworks.
//!
//! All the solvers rely on the defence sets of the arguments (see [DefenceSetComputer]),
//! except the one dedicated to the grounded semantics.
//! Multiple-extension semantics are handled by [ExtensionsComputer] implementations,
//! while the other ones are handled by [UniqueExtensionComputer] implementations.
//!
//! The results of the solvers are recorded by the frameworks.
//! The frameworks also provide functions (like [`AAFramework::preferred_extensions`](crate::aa::AAFramework::preferred_extensions))
//! that build the solvers for the caller.

mod admissible_sets_solver;
pub use admissible_sets_solver::AdmissibleSetsSolver;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod defence_set_computer;
pub use defence_set_computer::DefenceSetComputer;

mod extension_queries;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solver;
pub use ideal_semantics_solver::EagerSemanticsSolver;
pub use ideal_semantics_solver::IdealSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredScepticalSolver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod semi_stable_semantics_solver;
pub use semi_stable_semantics_solver::SemiStableSemanticsSolver;

mod specs;
pub use specs::ExtensionsComputer;
pub use specs::UniqueExtensionComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod utils;
