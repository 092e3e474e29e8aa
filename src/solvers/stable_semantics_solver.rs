use super::{ExtensionsComputer, PreferredSemanticsSolver};
use crate::aa::{AAFramework, IdSet, IdSets, LabelType, MultipleSlot};
use std::collections::BTreeSet;

/// A solver for the stable semantics.
///
/// A stable extension is a conflict-free set attacking all the arguments it does not contain.
/// Stable extensions are preferred extensions; they are found among them by a check on their range.
/// Some frameworks, like the ones made of an odd-length cycle of attacks, have no stable extension.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use dungaf::solvers::{ExtensionsComputer, StableSemanticsSolver};
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["c", "a"]]).unwrap();
    /// let mut solver = StableSemanticsSolver::new(&af);
    /// assert!(solver.compute_extensions().is_empty());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSets {
        self.af.cached_extensions(MultipleSlot::Stable, || {
            PreferredSemanticsSolver::new(self.af)
                .extension_ids()
                .into_iter()
                .filter(|s| self.has_full_range(s))
                .collect()
        })
    }

    fn has_full_range(&self, set: &IdSet) -> bool {
        self.af.range_of_ids(set).len() == self.af.n_arguments()
    }
}

impl<T> ExtensionsComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> BTreeSet<BTreeSet<T>> {
        self.af.labels_of_all(&self.extension_ids())
    }

    fn is_extension(&mut self, arguments: &BTreeSet<T>) -> bool {
        self.af
            .ids_of(arguments)
            .map(|set| {
                self.af
                    .recorded_membership(MultipleSlot::Stable, &set)
                    .unwrap_or_else(|| {
                        self.af.id_set_is_conflict_free(&set) && self.has_full_range(&set)
                    })
            })
            .unwrap_or(false)
    }
}
