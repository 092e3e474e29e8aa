use super::{ExtensionsComputer, PreferredSemanticsSolver, StableSemanticsSolver};
use crate::aa::{AAFramework, IdSet, IdSets, LabelType, MultipleSlot};
use std::collections::BTreeSet;

/// A solver for the semi-stable semantics.
///
/// When the framework has stable extensions, they are the semi-stable extensions.
/// Otherwise, the semi-stable extensions are the preferred extensions with a maximal range,
/// the range of a set being the set itself and the arguments it attacks.
/// Contrary to the stable semantics, the semi-stable semantics always admits an extension.
pub struct SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the semi-stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSets {
        self.af.cached_extensions(MultipleSlot::SemiStable, || {
            let stable = StableSemanticsSolver::new(self.af).extension_ids();
            if !stable.is_empty() {
                return stable;
            }
            let preferred = PreferredSemanticsSolver::new(self.af).extension_ids();
            let ranges = self.ranges_of(&preferred);
            preferred
                .into_iter()
                .zip(ranges.iter())
                .filter(|(_, r)| !Self::is_strictly_included_in_any(r, &ranges))
                .map(|(s, _)| s)
                .collect()
        })
    }

    fn ranges_of(&self, sets: &IdSets) -> Vec<IdSet> {
        sets.iter().map(|s| self.af.range_of_ids(s)).collect()
    }

    fn is_strictly_included_in_any(range: &IdSet, ranges: &[IdSet]) -> bool {
        ranges
            .iter()
            .any(|other| other.len() > range.len() && other.is_superset(range))
    }
}

impl<T> ExtensionsComputer<T> for SemiStableSemanticsSolver<'_, T>
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
        if let Some(answer) = self.af.recorded_membership(MultipleSlot::SemiStable, &set) {
            return answer;
        }
        let stable = StableSemanticsSolver::new(self.af).extension_ids();
        if !stable.is_empty() {
            return stable.contains(&set);
        }
        let preferred_solver = PreferredSemanticsSolver::new(self.af);
        if !preferred_solver.ids_form_extension(&set) {
            return false;
        }
        let ranges = self.ranges_of(&preferred_solver.extension_ids());
        !Self::is_strictly_included_in_any(&self.af.range_of_ids(&set), &ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(v: &[&[&'static str]]) -> BTreeSet<BTreeSet<&'static str>> {
        v.iter().map(|s| s.iter().copied().collect()).collect()
    }

    fn no_stable_af() -> AAFramework<&'static str> {
        AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"], ["c", "c"], ["x", "x"]])
            .unwrap()
    }

    #[test]
    fn test_stable_extensions_exist() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["b", "c"], ["c", "c"]])
            .unwrap();
        assert_eq!(
            sets(&[&["b"]]),
            SemiStableSemanticsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_no_stable_extension() {
        let af = no_stable_af();
        assert!(StableSemanticsSolver::new(&af).compute_extensions().is_empty());
        assert_eq!(
            sets(&[&["a"], &["b"]]),
            PreferredSemanticsSolver::new(&af).compute_extensions()
        );
        assert_eq!(
            sets(&[&["b"]]),
            SemiStableSemanticsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_odd_cycle() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["c", "a"]]).unwrap();
        assert_eq!(
            sets(&[&[]]),
            SemiStableSemanticsSolver::new(&af).compute_extensions()
        );
    }

    #[test]
    fn test_membership() {
        let af = no_stable_af();
        let mut solver = SemiStableSemanticsSolver::new(&af);
        assert!(solver.is_extension(&BTreeSet::from(["b"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a", "b"])));
        solver.compute_extensions();
        assert!(solver.is_extension(&BTreeSet::from(["b"])));
        assert!(!solver.is_extension(&BTreeSet::from(["a"])));
    }
}
