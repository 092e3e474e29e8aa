use std::collections::BTreeSet;

/// Removes the sets that are a strict superset of another set of the collection.
///
/// Sets are only compared by inclusion; duplicated sets are kept.
///
/// # Example
///
/// ```
/// # use dungaf::utils::remove_non_minimal_members;
/// # use std::collections::BTreeSet;
/// let mut sets = vec![
///     BTreeSet::from([0, 1]),
///     BTreeSet::from([1]),
///     BTreeSet::from([2]),
/// ];
/// remove_non_minimal_members(&mut sets);
/// assert_eq!(vec![BTreeSet::from([1]), BTreeSet::from([2])], sets);
/// ```
pub fn remove_non_minimal_members<S>(sets: &mut Vec<BTreeSet<S>>)
where
    S: Ord,
{
    retain_undominated(sets, |dominating, other| {
        dominating.len() < other.len() && dominating.is_subset(other)
    })
}

/// Removes the sets that are a strict subset of another set of the collection.
///
/// Sets are only compared by inclusion; duplicated sets are kept.
///
/// # Example
///
/// ```
/// # use dungaf::utils::remove_non_maximal_members;
/// # use std::collections::BTreeSet;
/// let mut sets = vec![
///     BTreeSet::from([0, 1]),
///     BTreeSet::from([1]),
///     BTreeSet::from([2]),
/// ];
/// remove_non_maximal_members(&mut sets);
/// assert_eq!(vec![BTreeSet::from([0, 1]), BTreeSet::from([2])], sets);
/// ```
pub fn remove_non_maximal_members<S>(sets: &mut Vec<BTreeSet<S>>)
where
    S: Ord,
{
    retain_undominated(sets, |dominating, other| {
        dominating.len() > other.len() && dominating.is_superset(other)
    })
}

/// Returns the sets of the collection that are not a strict superset of another one.
pub fn minimal_members<S>(sets: BTreeSet<BTreeSet<S>>) -> BTreeSet<BTreeSet<S>>
where
    S: Ord,
{
    let mut sets: Vec<BTreeSet<S>> = sets.into_iter().collect();
    remove_non_minimal_members(&mut sets);
    sets.into_iter().collect()
}

/// Returns the sets of the collection that are not a strict subset of another one.
pub fn maximal_members<S>(sets: BTreeSet<BTreeSet<S>>) -> BTreeSet<BTreeSet<S>>
where
    S: Ord,
{
    let mut sets: Vec<BTreeSet<S>> = sets.into_iter().collect();
    remove_non_maximal_members(&mut sets);
    sets.into_iter().collect()
}

fn retain_undominated<S, F>(sets: &mut Vec<BTreeSet<S>>, strictly_dominates: F)
where
    S: Ord,
    F: Fn(&BTreeSet<S>, &BTreeSet<S>) -> bool,
{
    let dominated = sets
        .iter()
        .map(|s| sets.iter().any(|other| strictly_dominates(other, s)))
        .collect::<Vec<bool>>();
    let mut flags = dominated.into_iter();
    sets.retain(|_| !flags.next().unwrap_or(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_with_duplicates() {
        let mut sets = vec![
            BTreeSet::from([1, 2]),
            BTreeSet::from([1]),
            BTreeSet::from([1]),
            BTreeSet::from([1, 2, 3]),
        ];
        remove_non_minimal_members(&mut sets);
        assert_eq!(vec![BTreeSet::from([1]), BTreeSet::from([1])], sets);
    }

    #[test]
    fn test_maximal_with_duplicates() {
        let mut sets = vec![
            BTreeSet::from([1, 2]),
            BTreeSet::from([1]),
            BTreeSet::from([1, 2]),
            BTreeSet::from([3]),
        ];
        remove_non_maximal_members(&mut sets);
        assert_eq!(
            vec![
                BTreeSet::from([1, 2]),
                BTreeSet::from([1, 2]),
                BTreeSet::from([3])
            ],
            sets
        );
    }

    #[test]
    fn test_empty_set_is_below_everything() {
        let sets = BTreeSet::from([BTreeSet::new(), BTreeSet::from(["a"])]);
        assert_eq!(BTreeSet::from([BTreeSet::new()]), minimal_members(sets.clone()));
        assert_eq!(BTreeSet::from([BTreeSet::from(["a"])]), maximal_members(sets));
    }

    #[test]
    fn test_incomparable_sets_are_kept() {
        let sets = BTreeSet::from([BTreeSet::from([0, 1]), BTreeSet::from([1, 2])]);
        assert_eq!(sets, minimal_members(sets.clone()));
        assert_eq!(sets, maximal_members(sets.clone()));
    }

    #[test]
    fn test_empty_collection() {
        let mut sets: Vec<BTreeSet<usize>> = vec![];
        remove_non_minimal_members(&mut sets);
        assert!(sets.is_empty());
        assert!(maximal_members(BTreeSet::<BTreeSet<usize>>::new()).is_empty());
    }
}
