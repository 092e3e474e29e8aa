use super::UniqueExtensionComputer;
use crate::{
    aa::{AAFramework, IdSet, LabelType, UniqueSlot},
    utils,
};
use std::collections::BTreeSet;

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework, without computing any defence set.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, LabelType};
    /// # use dungaf::solvers::{GroundedSemanticsSolver, UniqueExtensionComputer};
    /// fn print_grounded_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_extension();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # print_grounded_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSet {
        self.af
            .cached_extension(UniqueSlot::Grounded, || utils::grounded_extension(self.af))
    }
}

impl<T> UniqueExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extension(&mut self) -> BTreeSet<T> {
        self.af.labels_of(&self.extension_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::Semantics;

    #[test]
    fn test_grounded_solver() {
        let af = AAFramework::new_with_attacks(&[["a0", "a1"]]).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        assert_eq!(BTreeSet::from(["a0"]), solver.compute_extension());
        assert!(solver.is_accepted(&"a0"));
        assert!(!solver.is_accepted(&"a1"));
        assert!(!solver.is_accepted(&"a2"));
    }

    #[test]
    fn test_grounded_extension_is_recorded() {
        let af = AAFramework::new_with_attacks(&[["a0", "a1"]]).unwrap();
        assert!(!af.semantics_cache().records(Semantics::Grounded));
        GroundedSemanticsSolver::new(&af).compute_extension();
        assert!(af.semantics_cache().records(Semantics::Grounded));
    }

    #[test]
    fn test_self_attack() {
        let af = AAFramework::new_with_attacks(&[["a", "a"]]).unwrap();
        assert!(GroundedSemanticsSolver::new(&af)
            .compute_extension()
            .is_empty());
    }
}
