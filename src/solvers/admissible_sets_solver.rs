use super::{utils as solver_utils, DefenceSetComputer, ExtensionsComputer, PreferredSemanticsSolver};
use crate::aa::{AAFramework, IdSet, IdSets, LabelType, MultipleSlot};
use log::debug;
use std::collections::BTreeSet;

/// A solver used to enumerate the admissible sets.
///
/// The empty set, the defence sets and the preferred extensions are admissible.
/// Other admissible sets are found by removing one argument at a time from known ones,
/// and then removing the arguments that lost all their defence sets.
///
/// The number of admissible sets may be exponential in the number of arguments.
/// Checking whether an argument belongs to an admissible set does not require this enumeration,
/// and relies on defence sets instead.
pub struct AdmissibleSetsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> AdmissibleSetsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the admissible sets.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use dungaf::solvers::{AdmissibleSetsSolver, ExtensionsComputer};
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
    /// let mut solver = AdmissibleSetsSolver::new(&af);
    /// assert_eq!(3, solver.compute_extensions().len());
    /// assert!(solver.is_credulously_accepted(&"c"));
    /// assert!(!solver.is_credulously_accepted(&"b"));
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSets {
        self.af
            .cached_extensions(MultipleSlot::Admissible, || self.compute_extension_ids())
    }

    fn compute_extension_ids(&self) -> IdSets {
        let defence_sets = solver_utils::all_defence_sets(self.af);
        let mut known = IdSets::from([IdSet::new()]);
        known.extend(defence_sets.values().flatten().cloned());
        known.extend(PreferredSemanticsSolver::new(self.af).extension_ids());
        let mut to_expand = known.iter().cloned().collect::<Vec<IdSet>>();
        while let Some(set) = to_expand.pop() {
            for id in set.iter() {
                let mut reduced = set.clone();
                reduced.remove(id);
                let reduced = solver_utils::strip_undefended(reduced, &defence_sets);
                if known.insert(reduced.clone()) {
                    to_expand.push(reduced);
                }
            }
        }
        debug!("found {} admissible set(s)", known.len());
        known
    }
}

impl<T> ExtensionsComputer<T> for AdmissibleSetsSolver<'_, T>
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
                    .recorded_membership(MultipleSlot::Admissible, &set)
                    .unwrap_or_else(|| self.af.id_set_is_admissible(&set))
            })
            .unwrap_or(false)
    }

    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.af
            .id_of(arg)
            .map(|id| !DefenceSetComputer::new(self.af).defence_set_ids(id).is_empty())
            .unwrap_or(false)
    }

    fn is_skeptically_accepted(&mut self, _arg: &T) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(v: &[&[&'static str]]) -> BTreeSet<BTreeSet<&'static str>> {
        v.iter().map(|s| s.iter().copied().collect()).collect()
    }

    #[test]
    fn test_self_attack() {
        let af = AAFramework::new_with_attacks(&[["a", "a"]]).unwrap();
        assert_eq!(
            sets(&[&[]]),
            AdmissibleSetsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_chain_and_mutual_attack() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["d", "e"], ["e", "d"]])
            .unwrap();
        assert_eq!(
            sets(&[
                &[],
                &["a"],
                &["a", "c"],
                &["d"],
                &["e"],
                &["a", "d"],
                &["a", "e"],
                &["a", "c", "d"],
                &["a", "c", "e"],
            ]),
            AdmissibleSetsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_admissible_set_below_a_defence_set() {
        let af = AAFramework::new_with_attacks(&[["b", "a"], ["y", "b"], ["x", "x"]]).unwrap();
        assert_eq!(
            sets(&[&[], &["y"], &["a", "y"]]),
            AdmissibleSetsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_all_sets_are_admissible() {
        let af = AAFramework::new_with_attacks(&[
            ["a", "b"],
            ["b", "a"],
            ["b", "c"],
            ["c", "d"],
            ["d", "c"],
            ["e", "c"],
        ])
        .unwrap();
        let mut solver = AdmissibleSetsSolver::new(&af);
        let extensions = solver.compute_extensions();
        assert!(extensions.contains(&BTreeSet::new()));
        for ext in extensions {
            assert!(solver.is_extension(&ext));
        }
    }

    #[test]
    fn test_membership() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
        let mut solver = AdmissibleSetsSolver::new(&af);
        assert!(solver.is_extension(&BTreeSet::from(["a", "c"])));
        assert!(solver.is_extension(&BTreeSet::new()));
        assert!(!solver.is_extension(&BTreeSet::from(["c"])));
        assert!(!solver.is_extension(&BTreeSet::from(["z"])));
        assert!(!solver.is_skeptically_accepted(&"a"));
    }
}
