use super::{utils as solver_utils, ExtensionsComputer, UniqueExtensionComputer};
use crate::{
    aa::{AAFramework, IdSet, IdSets, LabelType, MultipleSlot, UniqueSlot},
    utils,
};
use log::debug;
use permutator::CartesianProduct;
use std::collections::BTreeSet;

/// A solver for the preferred semantics, based on defence sets.
///
/// For each argument that has a defence set, the solver builds the set of arguments
/// having a defence set compatible with one of its own.
/// This set contains all the preferred extensions including the argument.
/// If it is not conflict-free, all the minimal ways to break its conflicts are considered,
/// and the arguments left without defence are removed from the resulting sets.
/// The maximal sets obtained this way are the preferred extensions.
///
/// The number of ways to break the conflicts may be exponential in the number of conflicts.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use dungaf::solvers::{ExtensionsComputer, PreferredSemanticsSolver};
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"]]).unwrap();
    /// let mut solver = PreferredSemanticsSolver::new(&af);
    /// assert_eq!(
    ///     BTreeSet::from([BTreeSet::from(["a"]), BTreeSet::from(["b"])]),
    ///     solver.compute_extensions(),
    /// );
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSets {
        self.af
            .cached_extensions(MultipleSlot::Preferred, || self.compute_extension_ids())
    }

    fn compute_extension_ids(&self) -> IdSets {
        let defence_sets = solver_utils::all_defence_sets(self.af);
        let admissible_args = defence_sets
            .iter()
            .filter(|(_, sets)| !sets.is_empty())
            .map(|(id, _)| *id)
            .collect::<Vec<usize>>();
        let candidates = admissible_args
            .iter()
            .map(|a| {
                admissible_args
                    .iter()
                    .filter(|b| {
                        self.have_compatible_defence_sets(&defence_sets[a], &defence_sets[*b])
                    })
                    .copied()
                    .collect::<IdSet>()
            })
            .collect::<IdSets>();
        debug!(
            "{} admissible argument(s) lead to {} preferred candidate(s)",
            admissible_args.len(),
            candidates.len()
        );
        let mut extensions = vec![];
        for candidate in candidates {
            for removal in self.minimal_removal_sets(&candidate) {
                let residual = candidate.difference(&removal).copied().collect::<IdSet>();
                let residual = solver_utils::strip_undefended(residual, &defence_sets);
                let disqualified = extensions
                    .iter()
                    .any(|e: &IdSet| e.len() > residual.len() && e.is_superset(&residual));
                if !disqualified {
                    extensions.push(residual);
                }
            }
        }
        utils::remove_non_maximal_members(&mut extensions);
        let extensions = extensions.into_iter().collect::<IdSets>();
        if extensions.is_empty() {
            IdSets::from([IdSet::new()])
        } else {
            extensions
        }
    }

    fn have_compatible_defence_sets(&self, sets_a: &IdSets, sets_b: &IdSets) -> bool {
        sets_a.iter().any(|d_a| {
            sets_b.iter().any(|d_b| {
                self.af
                    .id_set_is_conflict_free(&d_a.union(d_b).copied().collect())
            })
        })
    }

    /// Returns the minimal sets of arguments to remove from the candidate to make it conflict-free.
    fn minimal_removal_sets(&self, candidate: &IdSet) -> Vec<IdSet> {
        let conflicts = candidate
            .iter()
            .flat_map(|a| {
                self.af
                    .target_ids(*a)
                    .iter()
                    .filter(|b| candidate.contains(b))
                    .map(|b| if a <= b { [*a, *b] } else { [*b, *a] })
                    .collect::<Vec<[usize; 2]>>()
            })
            .collect::<BTreeSet<[usize; 2]>>();
        if conflicts.is_empty() {
            return vec![IdSet::new()];
        }
        let conflict_refs = conflicts
            .iter()
            .map(|c| c.as_slice())
            .collect::<Vec<&[usize]>>();
        let mut removal_sets = conflict_refs
            .as_slice()
            .cart_prod()
            .map(|p| p.into_iter().copied().collect::<IdSet>())
            .collect::<BTreeSet<IdSet>>()
            .into_iter()
            .collect::<Vec<IdSet>>();
        utils::remove_non_minimal_members(&mut removal_sets);
        debug!(
            "{} conflict(s) in a candidate of size {} lead to {} removal set(s)",
            conflicts.len(),
            candidate.len(),
            removal_sets.len()
        );
        removal_sets
    }

    /// Returns `true` iff the set is admissible and no defence set can extend it.
    pub(crate) fn ids_form_extension(&self, set: &IdSet) -> bool {
        if !self.af.id_set_is_admissible(set) {
            return false;
        }
        solver_utils::all_defence_sets(self.af)
            .values()
            .flatten()
            .all(|d| {
                d.is_subset(set)
                    || !self
                        .af
                        .id_set_is_conflict_free(&set.union(d).copied().collect())
            })
    }
}

impl<T> ExtensionsComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> BTreeSet<BTreeSet<T>> {
        self.af.labels_of_all(&self.extension_ids())
    }

    fn is_extension(&mut self, arguments: &BTreeSet<T>) -> bool {
        let set = match self.af.ids_of(arguments) {
            Some(s) => s,
            None => return false,
        };
        self.af
            .recorded_membership(MultipleSlot::Preferred, &set)
            .unwrap_or_else(|| self.ids_form_extension(&set))
    }

    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.af
            .id_of(arg)
            .map(|id| !super::DefenceSetComputer::new(self.af).defence_set_ids(id).is_empty())
            .unwrap_or(false)
    }
}

/// A solver for the sceptical preferred semantics.
///
/// The extension is the intersection of the preferred extensions.
/// Contrary to the ideal extension (see [IdealSemanticsSolver](crate::solvers::IdealSemanticsSolver)), it may not be admissible.
pub struct PreferredScepticalSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredScepticalSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the sceptical preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSet {
        self.af.cached_extension(UniqueSlot::PreferredSceptical, || {
            solver_utils::intersection_of(&PreferredSemanticsSolver::new(self.af).extension_ids())
        })
    }
}

impl<T> UniqueExtensionComputer<T> for PreferredScepticalSolver<'_, T>
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

    fn sets(v: &[&[&'static str]]) -> BTreeSet<BTreeSet<&'static str>> {
        v.iter().map(|s| s.iter().copied().collect()).collect()
    }

    fn preferred(af: &AAFramework<&'static str>) -> BTreeSet<BTreeSet<&'static str>> {
        PreferredSemanticsSolver::new(af).compute_extensions()
    }

    #[test]
    fn test_empty_framework() {
        let af = AAFramework::<&str>::new();
        assert_eq!(sets(&[&[]]), preferred(&af));
    }

    #[test]
    fn test_self_attack() {
        let af = AAFramework::new_with_attacks(&[["a", "a"]]).unwrap();
        assert_eq!(sets(&[&[]]), preferred(&af));
    }

    #[test]
    fn test_odd_cycle() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["c", "a"]]).unwrap();
        assert_eq!(sets(&[&[]]), preferred(&af));
    }

    #[test]
    fn test_mutual_attack_with_chain() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"], ["c", "d"]])
            .unwrap();
        assert_eq!(sets(&[&["a", "c"], &["b", "d"]]), preferred(&af));
    }

    #[test]
    fn test_conflicting_candidate() {
        let af = AAFramework::new_with_attacks(&[
            ["a", "b"],
            ["b", "a"],
            ["c", "d"],
            ["d", "c"],
            ["e", "e"],
        ])
        .unwrap();
        assert_eq!(
            sets(&[&["a", "c"], &["a", "d"], &["b", "c"], &["b", "d"]]),
            preferred(&af)
        );
    }

    #[test]
    fn test_odd_cycle_attacking_a_mutual_attack() {
        let af = AAFramework::new_with_attacks(&[
            ["a", "b"],
            ["b", "c"],
            ["c", "a"],
            ["a", "d"],
            ["d", "e"],
            ["e", "d"],
        ])
        .unwrap();
        assert_eq!(sets(&[&["e"]]), preferred(&af));
    }

    #[test]
    fn test_membership() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"], ["c", "d"]])
            .unwrap();
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_extension(&BTreeSet::from(["a", "c"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a", "b"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a", "z"])));
        solver.compute_extensions();
        assert!(solver.is_extension(&BTreeSet::from(["b", "d"])));
        assert!(!solver.is_extension(&BTreeSet::from(["b"])));
    }

    #[test]
    fn test_acceptance() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"], ["c", "d"]])
            .unwrap();
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_credulously_accepted(&"d"));
        assert!(!solver.is_skeptically_accepted(&"d"));
        assert!(!solver.is_credulously_accepted(&"z"));
    }

    #[test]
    fn test_preferred_sceptical() {
        let af = AAFramework::new_with_attacks(&[
            ["a", "b"],
            ["b", "a"],
            ["a", "c"],
            ["b", "c"],
            ["c", "d"],
        ])
        .unwrap();
        let mut solver = PreferredScepticalSolver::new(&af);
        assert_eq!(BTreeSet::from(["d"]), solver.compute_extension());
    }
}
