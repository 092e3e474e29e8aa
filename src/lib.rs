//! Dungaf is an abstract argumentation reasoner based on defence sets.
//!
//! An Abstract Argumentation framework (see [`AAFramework`](aa::AAFramework)) is made of arguments and attacks between them.
//! The library computes the extensions of such frameworks under the grounded, admissible, complete, preferred,
//! stable, semi-stable, ideal and eager semantics.
//! Most of them are derived from the defence sets of the arguments, that is the minimal admissible sets containing them.
//!
//! ```
//! # use dungaf::aa::AAFramework;
//! # use std::collections::BTreeSet;
//! let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"]]).unwrap();
//! assert_eq!(
//!     BTreeSet::from([BTreeSet::from(["a", "c"]), BTreeSet::from(["b"])]),
//!     af.preferred_extensions()
//! );
//! assert!(af.grounded_extension().is_empty());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod solvers;

pub mod utils;
