use super::semantics_cache::IdSet;
use super::{AAFramework, LabelType};
use std::collections::BTreeSet;

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Returns `true` iff the arguments belong to this framework and form a conflict-free set.
    ///
    /// A set is conflict-free if none of its arguments attacks itself or another argument of the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["c", "c"]]).unwrap();
    /// assert!(af.has_as_conflict_free_set(&["a"]));
    /// assert!(!af.has_as_conflict_free_set(&["a", "b"]));
    /// assert!(!af.has_as_conflict_free_set(&["c"]));
    /// assert!(!af.has_as_conflict_free_set(&["d"]));
    /// ```
    pub fn has_as_conflict_free_set<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        self.ids_of(arguments)
            .map(|ids| self.id_set_is_conflict_free(&ids))
            .unwrap_or(false)
    }

    /// Returns `true` iff none of the arguments attacks itself or another one.
    ///
    /// Contrary to [`has_as_conflict_free_set`](Self::has_as_conflict_free_set),
    /// the arguments are not required to belong to this framework;
    /// unknown arguments are not involved in any attack.
    pub fn contains_no_conflict_among<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        self.id_set_is_conflict_free(&self.known_ids_of(arguments))
    }

    /// Same as [`has_as_conflict_free_set`](Self::has_as_conflict_free_set), applied to the union of several collections.
    pub fn has_union_of_as_conflict_free_set<'b, I, C>(&self, collections: I) -> bool
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        self.has_as_conflict_free_set(collections.into_iter().flatten())
    }

    /// Same as [`contains_no_conflict_among`](Self::contains_no_conflict_among), applied to the union of several collections.
    pub fn contains_no_conflict_among_union_of<'b, I, C>(&self, collections: I) -> bool
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        self.contains_no_conflict_among(collections.into_iter().flatten())
    }

    /// Returns `true` iff an argument of the collection attacks, or is attacked by, one of the given arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["c", "d"]]).unwrap();
    /// assert!(af.is_in_conflict_with_any_of(&["b"], &["c", "a"]));
    /// assert!(!af.is_in_conflict_with_any_of(&["b"], &["c", "d"]));
    /// ```
    pub fn is_in_conflict_with_any_of<'b, 'c, I, J>(&self, collection: I, arguments: J) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        J: IntoIterator<Item = &'c T>,
        T: 'b + 'c,
    {
        let collection = self.known_ids_of(collection);
        let arguments = self.known_ids_of(arguments);
        collection.iter().any(|id| {
            !self.target_ids(*id).is_disjoint(&arguments)
                || !self.attacker_ids(*id).is_disjoint(&arguments)
        })
    }

    /// Returns `true` iff the accepting arguments defend each argument to check.
    ///
    /// An argument is defended by a set if each of its attackers is attacked by an argument of the set.
    /// Unknown arguments to check have no attackers, and are thus accepted.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
    /// assert!(af.args_accept(&["a"], &["c"]));
    /// assert!(!af.args_accept(&["b"], &["c"]));
    /// assert!(af.args_accept(&[], &["a"]));
    /// ```
    pub fn args_accept<'b, 'c, I, J>(&self, accepting: I, to_check: J) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        J: IntoIterator<Item = &'c T>,
        T: 'b + 'c,
    {
        let accepting = self.known_ids_of(accepting);
        self.ids_accept(&accepting, self.known_ids_of(to_check).iter())
    }

    /// Returns the arguments defended by the given ones.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
    /// assert_eq!(BTreeSet::from(["a", "c"]), af.args_accepted_by(&["a"]));
    /// assert_eq!(BTreeSet::from(["a"]), af.args_accepted_by(&[]));
    /// ```
    pub fn args_accepted_by<'b, I>(&self, arguments: I) -> BTreeSet<T>
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        let accepting = self.known_ids_of(arguments);
        self.labels_of(&self.ids_accepted_by(&accepting))
    }

    pub(crate) fn id_set_is_conflict_free(&self, ids: &IdSet) -> bool {
        ids.iter()
            .all(|id| self.attacker_ids(*id).is_disjoint(ids))
    }

    /// Returns the arguments attacked by at least one argument of the set.
    pub(crate) fn targets_of_ids(&self, ids: &IdSet) -> IdSet {
        ids.iter()
            .flat_map(|id| self.target_ids(*id).iter().copied())
            .collect()
    }

    /// Returns the set together with the arguments it attacks.
    pub(crate) fn range_of_ids(&self, ids: &IdSet) -> IdSet {
        let mut range = self.targets_of_ids(ids);
        range.extend(ids.iter().copied());
        range
    }

    pub(crate) fn ids_accept<'b, I>(&self, accepting: &IdSet, to_check: I) -> bool
    where
        I: IntoIterator<Item = &'b usize>,
    {
        let defeated = self.targets_of_ids(accepting);
        to_check
            .into_iter()
            .all(|id| self.attacker_ids(*id).is_subset(&defeated))
    }

    pub(crate) fn ids_accepted_by(&self, accepting: &IdSet) -> IdSet {
        let defeated = self.targets_of_ids(accepting);
        self.argument_ids()
            .filter(|id| self.attacker_ids(*id).is_subset(&defeated))
            .collect()
    }

    pub(crate) fn id_set_is_admissible(&self, ids: &IdSet) -> bool {
        self.id_set_is_conflict_free(ids) && self.ids_accept(ids, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_af() -> AAFramework<&'static str> {
        AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["c", "d"], ["e", "e"]]).unwrap()
    }

    #[test]
    fn test_conflict_free() {
        let af = chain_af();
        assert!(af.has_as_conflict_free_set(&["a", "c"]));
        assert!(af.has_as_conflict_free_set(&[]));
        assert!(!af.has_as_conflict_free_set(&["b", "c"]));
        assert!(!af.has_as_conflict_free_set(&["c", "b"]));
        assert!(!af.has_as_conflict_free_set(&["e"]));
        assert!(!af.has_as_conflict_free_set(&["a", "z"]));
    }

    #[test]
    fn test_no_conflict_among() {
        let af = chain_af();
        assert!(af.contains_no_conflict_among(&["a", "z"]));
        assert!(!af.contains_no_conflict_among(&["a", "b", "z"]));
        assert!(!af.contains_no_conflict_among(&["e"]));
    }

    #[test]
    fn test_union_conflict_checks() {
        let af = chain_af();
        let collections = [vec!["a"], vec!["c"]];
        assert!(af.has_union_of_as_conflict_free_set(collections.iter()));
        assert!(af.contains_no_conflict_among_union_of(collections.iter()));
        let collections = [vec!["a", "z"], vec!["c"]];
        assert!(!af.has_union_of_as_conflict_free_set(collections.iter()));
        assert!(af.contains_no_conflict_among_union_of(collections.iter()));
        let collections = [vec!["a"], vec!["b"]];
        assert!(!af.contains_no_conflict_among_union_of(collections.iter()));
    }

    #[test]
    fn test_conflict_with_any_of() {
        let af = chain_af();
        assert!(af.is_in_conflict_with_any_of(&["c"], &["b"]));
        assert!(af.is_in_conflict_with_any_of(&["c"], &["d"]));
        assert!(!af.is_in_conflict_with_any_of(&["c"], &["a", "e"]));
        assert!(af.is_in_conflict_with_any_of(&["e"], &["e"]));
        assert!(!af.is_in_conflict_with_any_of(&[], &["a"]));
    }

    #[test]
    fn test_acceptance() {
        let af = chain_af();
        assert!(af.args_accept(&["a"], &["a", "c"]));
        assert!(!af.args_accept(&["a"], &["d"]));
        assert!(af.args_accept(&["a", "c"], &["a", "c"]));
        assert!(!af.args_accept(&["a", "b"], &["e"]));
        assert!(af.args_accept(&["e"], &["e"]));
        assert_eq!(BTreeSet::from(["a"]), af.args_accepted_by(&[]));
        assert_eq!(BTreeSet::from(["a", "c"]), af.args_accepted_by(&["a"]));
        assert_eq!(BTreeSet::from(["a", "c", "e"]), af.args_accepted_by(&["a", "e"]));
    }

    #[test]
    fn test_range_and_admissibility() {
        let af = chain_af();
        let ids = af.ids_of(&["a", "c"]).unwrap();
        assert_eq!(
            BTreeSet::from(["a", "b", "c", "d"]),
            af.labels_of(&af.range_of_ids(&ids))
        );
        assert!(af.id_set_is_admissible(&ids));
        assert!(!af.id_set_is_admissible(&af.ids_of(&["c"]).unwrap()));
        assert!(af.id_set_is_admissible(&IdSet::new()));
    }
}
