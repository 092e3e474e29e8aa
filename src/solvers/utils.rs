use super::DefenceSetComputer;
use crate::aa::{AAFramework, IdSet, IdSets, LabelType};
use std::collections::BTreeMap;

/// Computes the defence sets of all the arguments of a framework.
pub(crate) fn all_defence_sets<T>(af: &AAFramework<T>) -> BTreeMap<usize, IdSets>
where
    T: LabelType,
{
    let computer = DefenceSetComputer::new(af);
    af.argument_ids()
        .map(|id| (id, computer.defence_set_ids(id)))
        .collect()
}

/// Removes the arguments that have no defence set included in the set, until no such argument remains.
///
/// If the input set is conflict-free, the result is admissible.
pub(crate) fn strip_undefended(mut set: IdSet, defence_sets: &BTreeMap<usize, IdSets>) -> IdSet {
    loop {
        let undefended = set
            .iter()
            .filter(|id| {
                !defence_sets
                    .get(id)
                    .map(|sets| sets.iter().any(|d| d.is_subset(&set)))
                    .unwrap_or(false)
            })
            .copied()
            .collect::<Vec<usize>>();
        if undefended.is_empty() {
            return set;
        }
        undefended.iter().for_each(|id| {
            set.remove(id);
        });
    }
}

/// Removes the arguments that are not defended by the set, until no such argument remains.
///
/// If the input set is conflict-free, the result is its greatest admissible subset.
pub(crate) fn strip_unaccepted<T>(af: &AAFramework<T>, mut set: IdSet) -> IdSet
where
    T: LabelType,
{
    loop {
        let accepted = af.ids_accepted_by(&set);
        let before = set.len();
        set.retain(|id| accepted.contains(id));
        if set.len() == before {
            return set;
        }
    }
}

/// Returns the arguments shared by all the sets, or an empty set if there is no set.
pub(crate) fn intersection_of(sets: &IdSets) -> IdSet {
    let mut it = sets.iter();
    match it.next() {
        Some(first) => it.fold(first.clone(), |acc, s| {
            acc.intersection(s).copied().collect()
        }),
        None => IdSet::new(),
    }
}

/// Returns the arguments that belong to at least one set.
pub(crate) fn union_of(sets: &IdSets) -> IdSet {
    sets.iter().flatten().copied().collect()
}
