use super::{
    utils as solver_utils, PreferredSemanticsSolver, SemiStableSemanticsSolver,
    UniqueExtensionComputer,
};
use crate::aa::{AAFramework, IdSet, IdSets, LabelType, UniqueSlot};
use std::collections::BTreeSet;

/// Computes the greatest admissible subset of the intersection of some extensions.
fn greatest_admissible_subset_of_intersection<T>(af: &AAFramework<T>, extensions: &IdSets) -> IdSet
where
    T: LabelType,
{
    solver_utils::strip_unaccepted(af, solver_utils::intersection_of(extensions))
}

/// A solver for the ideal semantics.
///
/// The ideal extension is the greatest admissible set included in all the preferred extensions.
/// It always contains the grounded extension.
pub struct IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the ideal semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use dungaf::solvers::{IdealSemanticsSolver, UniqueExtensionComputer};
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["d", "e"], ["e", "d"]]).unwrap();
    /// let mut solver = IdealSemanticsSolver::new(&af);
    /// assert_eq!(BTreeSet::from(["a", "c"]), solver.compute_extension());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSet {
        self.af.cached_extension(UniqueSlot::Ideal, || {
            let preferred = PreferredSemanticsSolver::new(self.af).extension_ids();
            greatest_admissible_subset_of_intersection(self.af, &preferred)
        })
    }
}

impl<T> UniqueExtensionComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extension(&mut self) -> BTreeSet<T> {
        self.af.labels_of(&self.extension_ids())
    }
}

/// A solver for the eager semantics.
///
/// The eager extension is the greatest admissible set included in all the semi-stable extensions.
/// It contains the ideal extension.
pub struct EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the eager semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSet {
        self.af.cached_extension(UniqueSlot::Eager, || {
            let semi_stable = SemiStableSemanticsSolver::new(self.af).extension_ids();
            greatest_admissible_subset_of_intersection(self.af, &semi_stable)
        })
    }
}

impl<T> UniqueExtensionComputer<T> for EagerSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extension(&mut self) -> BTreeSet<T> {
        self.af.labels_of(&self.extension_ids())
    }
}
