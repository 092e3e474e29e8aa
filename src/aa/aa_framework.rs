use super::semantics_cache::{IdSet, IdSets, MultipleSlot, SemanticsCache, UniqueSlot};
use super::{Argument, ArgumentSet, LabelType};
use anyhow::{anyhow, Context, Result};
use log::trace;
use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::fmt::Display;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework owns its arguments and its attacks, and records the extensions computed so far for its semantics.
/// These records are discarded each time the framework changes;
/// until then, asking twice for the same extensions does not trigger a new computation.
///
/// The attacks form a set: adding an attack twice has no effect.
/// Each argument involved in an attack belongs to the argument set.
///
/// Queries are available through a shared reference, even the ones that record their results.
/// As a consequence, a framework must not be shared between threads.
#[derive(Clone, Debug)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: BTreeSet<(usize, usize)>,
    attackers: Vec<IdSet>,
    targets: Vec<IdSet>,
    cache: RefCell<SemanticsCache>,
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: ArgumentSet::default(),
            attacks: BTreeSet::new(),
            attackers: vec![],
            targets: vec![],
            cache: RefCell::new(SemanticsCache::default()),
        }
    }
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use dungaf::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

/// Checks that each item denotes an attack, that is an attacker followed by an attacked argument.
fn read_attacks<T, A>(attacks: &[A]) -> Result<Vec<(T, T)>>
where
    T: LabelType,
    A: AsRef<[T]>,
{
    attacks
        .iter()
        .enumerate()
        .map(|(i, a)| match a.as_ref() {
            [from, to] => Ok((from.clone(), to.clone())),
            other => Err(anyhow!(
                "attack at index {} has {} element(s) instead of 2: {:?}",
                i,
                other.len(),
                other
            )),
        })
        .collect()
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an empty AA framework.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an AA framework with no attacks.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attackers = (0..arguments.id_bound()).map(|_| IdSet::new()).collect();
        let targets = (0..arguments.id_bound()).map(|_| IdSet::new()).collect();
        AAFramework {
            arguments,
            attacks: BTreeSet::new(),
            attackers,
            targets,
            cache: RefCell::new(SemanticsCache::default()),
        }
    }

    /// Builds the AA framework made of the given attacks and of the arguments involved in them.
    ///
    /// Each attack must be given as a sequence of exactly two labels (the attacker and the attacked argument);
    /// if it is not the case, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let framework = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["a", "b"]]).unwrap();
    /// assert_eq!(2, framework.n_arguments());
    /// assert_eq!(2, framework.n_attacks());
    /// assert!(AAFramework::new_with_attacks(&[vec!["a"]]).is_err());
    /// ```
    pub fn new_with_attacks<A>(attacks: &[A]) -> Result<Self>
    where
        A: AsRef<[T]>,
    {
        Self::new_with_arguments_and_attacks(&[], attacks)
    }

    /// Builds the AA framework made of the given arguments and attacks.
    ///
    /// The arguments involved in the attacks are added to the framework, even if they are not part of `arguments`.
    /// Each attack must be given as a sequence of exactly two labels;
    /// if it is not the case, an error is returned.
    pub fn new_with_arguments_and_attacks<A>(arguments: &[T], attacks: &[A]) -> Result<Self>
    where
        A: AsRef<[T]>,
    {
        let attacks = read_attacks(attacks).context("while building a framework")?;
        let mut af = Self::new_with_argument_set(ArgumentSet::new_with_labels(arguments));
        attacks.iter().for_each(|(from, to)| {
            af.insert_attack(from, to);
        });
        Ok(af)
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn new_argument(&mut self, label: T) -> bool {
        self.new_arguments(&[label])
    }

    /// Adds new arguments to this argumentation framework.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let mut framework = AAFramework::new();
    /// assert!(framework.new_arguments(&["a", "b"]));
    /// assert!(!framework.new_arguments(&["b"]));
    /// assert_eq!(2, framework.n_arguments());
    /// ```
    pub fn new_arguments(&mut self, labels: &[T]) -> bool {
        let changed = labels
            .iter()
            .fold(false, |acc, l| self.insert_argument(l).1 || acc);
        self.invalidate_if(changed)
    }

    /// Adds a new attack to this argumentation framework.
    ///
    /// The arguments are added if needed.
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn new_attack(&mut self, from: &T, to: &T) -> bool {
        let changed = self.insert_attack(from, to);
        self.invalidate_if(changed)
    }

    /// Adds new attacks to this argumentation framework.
    ///
    /// Each attack must be given as a sequence of exactly two labels (the attacker and the attacked argument).
    /// If one of them does not, an error is returned and the framework is left unchanged.
    /// The arguments involved in the attacks are added if needed.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let mut framework = AAFramework::new();
    /// assert!(framework.new_attacks(&[["a", "b"]]).unwrap());
    /// assert!(!framework.new_attacks(&[["a", "b"]]).unwrap());
    /// assert!(framework.new_attacks(&[vec!["b", "c"], vec!["c"]]).is_err());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attacks<A>(&mut self, attacks: &[A]) -> Result<bool>
    where
        A: AsRef<[T]>,
    {
        let attacks = read_attacks(attacks).context("while adding attacks")?;
        let changed = attacks
            .iter()
            .fold(false, |acc, (from, to)| self.insert_attack(from, to) || acc);
        Ok(self.invalidate_if(changed))
    }

    /// Removes an argument, and the attacks it is involved in, from this argumentation framework.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn remove_argument(&mut self, label: &T) -> bool {
        self.remove_arguments(std::slice::from_ref(label))
    }

    /// Removes arguments, and the attacks they are involved in, from this argumentation framework.
    ///
    /// Unknown arguments are ignored.
    /// The identifiers of the removed arguments are not attributed to new arguments.
    /// When the removed identifiers outnumber the remaining arguments, the identifiers are renumbered
    /// so that the memory used by the framework stays proportional to its size.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn remove_arguments(&mut self, labels: &[T]) -> bool {
        let changed = labels
            .iter()
            .fold(false, |acc, l| self.delete_argument(l) || acc);
        self.compact_if_sparse();
        self.invalidate_if(changed)
    }

    /// Removes an attack from this argumentation framework.
    ///
    /// The arguments are kept.
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn remove_attack(&mut self, from: &T, to: &T) -> bool {
        let changed = self.delete_attack(from, to);
        self.invalidate_if(changed)
    }

    /// Removes attacks from this argumentation framework.
    ///
    /// Each attack must be given as a sequence of exactly two labels.
    /// If one of them does not, an error is returned and the framework is left unchanged.
    /// Attacks that do not belong to the framework are ignored, and the arguments are kept.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn remove_attacks<A>(&mut self, attacks: &[A]) -> Result<bool>
    where
        A: AsRef<[T]>,
    {
        let attacks = read_attacks(attacks).context("while removing attacks")?;
        let changed = attacks
            .iter()
            .fold(false, |acc, (from, to)| self.delete_attack(from, to) || acc);
        Ok(self.invalidate_if(changed))
    }

    /// Ensures this framework contains all the arguments and attacks of another one.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn ensure_subsumes(&mut self, other: &AAFramework<T>) -> bool {
        let mut changed = other
            .arguments
            .iter()
            .fold(false, |acc, a| self.insert_argument(a.label()).1 || acc);
        changed = other
            .iter_attacks()
            .fold(changed, |acc, att| {
                self.insert_attack(att.attacker().label(), att.attacked().label()) || acc
            });
        self.invalidate_if(changed)
    }

    /// Ensures this framework contains none of the arguments of another one.
    ///
    /// Returns `true` iff the framework changed as a result of the call.
    pub fn ensure_disjoint_with(&mut self, other: &AAFramework<T>) -> bool {
        let changed = other
            .arguments
            .iter()
            .fold(false, |acc, a| self.delete_argument(a.label()) || acc);
        self.compact_if_sparse();
        self.invalidate_if(changed)
    }

    /// Removes all the arguments and attacks of this framework.
    pub fn clear(&mut self) {
        self.arguments.clear();
        self.attacks.clear();
        self.attackers.clear();
        self.targets.clear();
        self.cache.get_mut().clear();
    }

    /// Returns `true` iff this framework contains all the arguments and attacks of another one.
    ///
    /// The extensions recorded by the frameworks are not taken into account.
    pub fn subsumes(&self, other: &AAFramework<T>) -> bool {
        other.arguments.iter().all(|a| self.arguments.contains(a.label()))
            && other.iter_attacks().all(|att| {
                self.contains_attack(att.attacker().label(), att.attacked().label())
            })
    }

    /// Returns `true` iff this framework and another one have no argument in common.
    pub fn is_disjoint_with(&self, other: &AAFramework<T>) -> bool {
        other
            .arguments
            .iter()
            .all(|a| !self.arguments.contains(a.label()))
    }

    /// Returns `true` iff the attack belongs to this framework.
    pub fn contains_attack(&self, from: &T, to: &T) -> bool {
        match (self.id_of(from), self.id_of(to)) {
            (Some(f), Some(t)) => self.attacks.contains(&(f, t)),
            _ => false,
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns a copy of the labels of the arguments.
    pub fn arguments(&self) -> BTreeSet<T> {
        self.arguments.iter().map(|a| a.label().clone()).collect()
    }

    /// Returns a copy of the attacks, as couples of labels.
    pub fn attacks(&self) -> BTreeSet<(T, T)> {
        self.iter_attacks()
            .map(|att| (att.attacker().label().clone(), att.attacked().label().clone()))
            .collect()
    }

    /// Provides an iterator to the attacks.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Returns the arguments attacking the given one.
    ///
    /// If the argument does not belong to the framework, an empty set is returned.
    pub fn attackers_of(&self, label: &T) -> BTreeSet<T> {
        self.id_of(label)
            .map(|id| self.labels_of(&self.attackers[id]))
            .unwrap_or_default()
    }

    /// Returns the arguments attacked by the given one.
    ///
    /// If the argument does not belong to the framework, an empty set is returned.
    pub fn targets_of(&self, label: &T) -> BTreeSet<T> {
        self.id_of(label)
            .map(|id| self.labels_of(&self.targets[id]))
            .unwrap_or_default()
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    fn insert_argument(&mut self, label: &T) -> (usize, bool) {
        if let Ok(id) = self.arguments.get_argument_index(label) {
            return (id, false);
        }
        self.arguments.new_argument(label.clone());
        self.attackers.push(IdSet::new());
        self.targets.push(IdSet::new());
        (self.arguments.id_bound() - 1, true)
    }

    fn insert_attack(&mut self, from: &T, to: &T) -> bool {
        let (from_id, _) = self.insert_argument(from);
        let (to_id, _) = self.insert_argument(to);
        if !self.attacks.insert((from_id, to_id)) {
            return false;
        }
        self.attackers[to_id].insert(from_id);
        self.targets[from_id].insert(to_id);
        true
    }

    fn delete_argument(&mut self, label: &T) -> bool {
        let id = match self.arguments.remove_argument(label) {
            Some(a) => a.id(),
            None => return false,
        };
        let targets = std::mem::take(&mut self.targets[id]);
        let attackers = std::mem::take(&mut self.attackers[id]);
        targets.iter().for_each(|t| {
            self.attacks.remove(&(id, *t));
            self.attackers[*t].remove(&id);
        });
        attackers.iter().for_each(|a| {
            self.attacks.remove(&(*a, id));
            self.targets[*a].remove(&id);
        });
        true
    }

    fn delete_attack(&mut self, from: &T, to: &T) -> bool {
        let (from_id, to_id) = match (self.id_of(from), self.id_of(to)) {
            (Some(f), Some(t)) => (f, t),
            _ => return false,
        };
        if !self.attacks.remove(&(from_id, to_id)) {
            return false;
        }
        self.attackers[to_id].remove(&from_id);
        self.targets[from_id].remove(&to_id);
        true
    }

    /// Renumbers the arguments when most of the identifiers given so far belong to removed arguments.
    ///
    /// The relative order of the identifiers is kept.
    /// Recorded results refer to identifiers, so they must be discarded by the caller.
    fn compact_if_sparse(&mut self) {
        let n_removed = self.arguments.id_bound() - self.arguments.len();
        if n_removed <= self.arguments.len() {
            return;
        }
        let mut new_ids = vec![usize::MAX; self.arguments.id_bound()];
        let labels = self
            .arguments
            .iter()
            .enumerate()
            .map(|(new_id, a)| {
                new_ids[a.id()] = new_id;
                a.label().clone()
            })
            .collect::<Vec<T>>();
        trace!(
            "renumbering {} argument(s) after {} removal(s)",
            labels.len(),
            n_removed
        );
        let attacks = std::mem::take(&mut self.attacks);
        *self = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        attacks.into_iter().for_each(|(from, to)| {
            let (from, to) = (new_ids[from], new_ids[to]);
            self.attacks.insert((from, to));
            self.attackers[to].insert(from);
            self.targets[from].insert(to);
        });
    }

    fn invalidate_if(&mut self, changed: bool) -> bool {
        if changed {
            self.cache.get_mut().clear();
        }
        changed
    }

    pub(crate) fn id_of(&self, label: &T) -> Option<usize> {
        self.arguments.get_argument_index(label).ok()
    }

    /// Translates labels into identifiers, or returns `None` if one of the labels is unknown.
    pub(crate) fn ids_of<'b, I>(&self, labels: I) -> Option<IdSet>
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        labels.into_iter().map(|l| self.id_of(l)).collect()
    }

    /// Translates labels into identifiers, ignoring the unknown ones.
    pub(crate) fn known_ids_of<'b, I>(&self, labels: I) -> IdSet
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        labels.into_iter().filter_map(|l| self.id_of(l)).collect()
    }

    pub(crate) fn labels_of(&self, ids: &IdSet) -> BTreeSet<T> {
        ids.iter()
            .map(|id| self.arguments.get_argument_by_id(*id).label().clone())
            .collect()
    }

    pub(crate) fn labels_of_all(&self, sets: &IdSets) -> BTreeSet<BTreeSet<T>> {
        sets.iter().map(|s| self.labels_of(s)).collect()
    }

    pub(crate) fn argument_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.arguments.iter().map(|a| a.id())
    }

    pub(crate) fn attacker_ids(&self, id: usize) -> &IdSet {
        &self.attackers[id]
    }

    pub(crate) fn target_ids(&self, id: usize) -> &IdSet {
        &self.targets[id]
    }

    pub(crate) fn semantics_cache(&self) -> Ref<'_, SemanticsCache> {
        self.cache.borrow()
    }

    /// Returns whether the set is one of the recorded extensions of the semantics, or `None` if they are not recorded.
    pub(crate) fn recorded_membership(&self, slot: MultipleSlot, set: &IdSet) -> Option<bool> {
        self.cache
            .borrow()
            .extensions(slot)
            .map(|exts| exts.contains(set))
    }

    /// Returns the recorded extensions of a multiple-extension semantics, computing and recording them if needed.
    pub(crate) fn cached_extensions<F>(&self, slot: MultipleSlot, compute: F) -> IdSets
    where
        F: FnOnce() -> IdSets,
    {
        let recorded = self.cache.borrow().extensions(slot).cloned();
        if let Some(extensions) = recorded {
            return extensions;
        }
        let extensions = compute();
        self.cache
            .borrow_mut()
            .set_extensions(slot, extensions.clone());
        extensions
    }

    /// Returns the recorded extension of a unique-extension semantics, computing and recording it if needed.
    pub(crate) fn cached_extension<F>(&self, slot: UniqueSlot, compute: F) -> IdSet
    where
        F: FnOnce() -> IdSet,
    {
        let recorded = self.cache.borrow().extension(slot).cloned();
        if let Some(extension) = recorded {
            return extension;
        }
        let extension = compute();
        self.cache
            .borrow_mut()
            .set_extension(slot, extension.clone());
        extension
    }

    /// Returns the recorded defence sets of an argument, computing and recording them if needed.
    pub(crate) fn cached_defence_sets<F>(&self, id: usize, compute: F) -> IdSets
    where
        F: FnOnce() -> IdSets,
    {
        let recorded = self.cache.borrow().defence_sets(id).cloned();
        if let Some(sets) = recorded {
            return sets;
        }
        let sets = compute();
        self.cache.borrow_mut().set_defence_sets(id, sets.clone());
        sets
    }
}

impl<T> PartialEq for AAFramework<T>
where
    T: LabelType,
{
    /// Two frameworks are equal if they have the same arguments and the same attacks.
    ///
    /// The extensions they record are not taken into account.
    fn eq(&self, other: &Self) -> bool {
        self.n_arguments() == other.n_arguments()
            && self.n_attacks() == other.n_attacks()
            && self.subsumes(other)
    }
}

impl<T> Eq for AAFramework<T> where T: LabelType {}

impl<T> Display for AAFramework<T>
where
    T: LabelType,
{
    /// Writes the framework in the conventional format `({a1, a2, ...}, {(a1, a2), (a2, a1), ...})`.
    ///
    /// Arguments and attacks are sorted by labels.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        let attacks = self
            .attacks()
            .iter()
            .map(|(a, b)| format!("({}, {})", a, b))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "({{{}}}, {{{}}})", arguments, attacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_af() -> AAFramework<&'static str> {
        AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["c", "a"]]).unwrap()
    }

    #[test]
    fn test_new_with_attacks() {
        let af = cycle_af();
        assert_eq!(3, af.n_arguments());
        assert_eq!(3, af.n_attacks());
        assert_eq!(BTreeSet::from(["c"]), af.attackers_of(&"a"));
        assert_eq!(BTreeSet::from(["b"]), af.targets_of(&"a"));
    }

    #[test]
    fn test_new_with_attacks_malformed() {
        let err = AAFramework::new_with_attacks(&[vec!["a", "b"], vec!["a", "b", "c"]]).unwrap_err();
        assert!(format!("{:?}", err).contains("index 1"));
    }

    #[test]
    fn test_new_with_arguments_and_attacks() {
        let af = AAFramework::new_with_arguments_and_attacks(&["a", "d"], &[["a", "b"]]).unwrap();
        assert_eq!(BTreeSet::from(["a", "b", "d"]), af.arguments());
        assert_eq!(BTreeSet::from([("a", "b")]), af.attacks());
    }

    #[test]
    fn test_self_attack() {
        let mut af = AAFramework::new();
        assert!(af.new_attack(&"a", &"a"));
        assert_eq!(1, af.n_arguments());
        assert_eq!(BTreeSet::from(["a"]), af.attackers_of(&"a"));
        assert!(af.remove_argument(&"a"));
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attacks_malformed_leaves_framework_unchanged() {
        let mut af = cycle_af();
        let before = af.clone();
        af.new_attacks(&[vec!["a", "d"], vec!["d"]]).unwrap_err();
        assert_eq!(before, af);
        assert!(!af.argument_set().contains(&"d"));
    }

    #[test]
    fn test_remove_attacks_malformed_leaves_framework_unchanged() {
        let mut af = cycle_af();
        af.remove_attacks(&[vec!["a", "b"], vec![]]).unwrap_err();
        assert_eq!(3, af.n_attacks());
    }

    #[test]
    fn test_remove_argument_cascades() {
        let mut af = cycle_af();
        assert!(af.remove_arguments(&["a", "z"]));
        assert!(!af.remove_arguments(&["a"]));
        assert_eq!(BTreeSet::from([("b", "c")]), af.attacks());
        assert!(af.attackers_of(&"b").is_empty());
        assert!(af.targets_of(&"c").is_empty());
        assert!(af.attackers_of(&"a").is_empty());
    }

    #[test]
    fn test_remove_attack() {
        let mut af = cycle_af();
        assert!(af.remove_attack(&"a", &"b"));
        assert!(!af.remove_attack(&"a", &"b"));
        assert!(!af.remove_attack(&"z", &"b"));
        assert_eq!(3, af.n_arguments());
        assert!(af.attackers_of(&"b").is_empty());
        assert!(af.targets_of(&"a").is_empty());
        assert!(af.remove_attacks(&[["b", "c"], ["c", "a"]]).unwrap());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_readd_removed_argument() {
        let mut af = cycle_af();
        af.remove_argument(&"a");
        assert!(af.new_attack(&"a", &"b"));
        assert_eq!(BTreeSet::from(["a"]), af.attackers_of(&"b"));
        assert!(af.attackers_of(&"a").is_empty());
    }

    #[test]
    fn test_ensure_subsumes_and_disjoint() {
        let mut af = AAFramework::new_with_attacks(&[["a", "b"]]).unwrap();
        let other = AAFramework::new_with_arguments_and_attacks(&["e"], &[["c", "d"]]).unwrap();
        assert!(!af.subsumes(&other));
        assert!(af.is_disjoint_with(&other));
        assert!(af.ensure_subsumes(&other));
        assert!(!af.ensure_subsumes(&other));
        assert!(af.subsumes(&other));
        assert!(!af.is_disjoint_with(&other));
        assert_eq!(5, af.n_arguments());
        assert!(af.ensure_disjoint_with(&other));
        assert!(!af.ensure_disjoint_with(&other));
        assert_eq!(AAFramework::new_with_attacks(&[["a", "b"]]).unwrap(), af);
    }

    #[test]
    fn test_equality_and_subsumption() {
        let af1 = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"]]).unwrap();
        let af2 = AAFramework::new_with_attacks(&[["b", "a"], ["a", "b"]]).unwrap();
        let af3 = AAFramework::new_with_attacks(&[["a", "b"]]).unwrap();
        assert_eq!(af1, af2);
        assert_ne!(af1, af3);
        assert!(af1.subsumes(&af3));
        assert!(!af3.subsumes(&af1));
        assert!(af1.subsumes(&af1));
    }

    #[test]
    fn test_clear() {
        let mut af = cycle_af();
        af.clear();
        assert_eq!(AAFramework::new(), af);
        assert!(af.new_attack(&"x", &"y"));
        assert_eq!(BTreeSet::from([("x", "y")]), af.attacks());
    }

    #[test]
    fn test_display() {
        let af = AAFramework::new_with_arguments_and_attacks(&["d"], &[["b", "a"], ["a", "b"]])
            .unwrap();
        assert_eq!("({a, b, d}, {(a, b), (b, a)})", af.to_string());
        assert_eq!("({}, {})", AAFramework::<String>::new().to_string());
    }

    #[test]
    fn test_round_trip() {
        let af = cycle_af();
        let args = af.arguments().into_iter().collect::<Vec<_>>();
        let attacks = af
            .attacks()
            .into_iter()
            .map(|(a, b)| [a, b])
            .collect::<Vec<_>>();
        assert_eq!(
            af,
            AAFramework::new_with_arguments_and_attacks(&args, &attacks).unwrap()
        );
    }

    #[test]
    fn test_attackers_of_unknown_argument() {
        let af = cycle_af();
        assert!(af.attackers_of(&"z").is_empty());
        assert!(af.targets_of(&"z").is_empty());
    }

    #[test]
    fn test_no_op_mutations_do_not_report_changes() {
        let mut af = cycle_af();
        assert!(!af.new_argument("a"));
        assert!(!af.new_attack(&"a", &"b"));
        assert!(!af.new_attacks(&[["b", "c"]]).unwrap());
        assert!(!af.remove_argument(&"z"));
        assert!(!af.remove_attacks(&[["a", "c"]]).unwrap());
    }

    #[test]
    fn test_repeated_removals_keep_identifiers_dense() {
        let (a, b) = ("a".to_string(), "b".to_string());
        let mut af = AAFramework::new_with_attacks(&[[a.clone(), b.clone()]]).unwrap();
        for i in 0..1000 {
            let label = format!("x{}", i);
            assert!(af.new_attack(&label, &b));
            assert!(af.remove_argument(&label));
            assert!(af.argument_set().id_bound() <= 2 * af.n_arguments());
        }
        assert_eq!(BTreeSet::from([(a.clone(), b.clone())]), af.attacks());
        assert_eq!(BTreeSet::from([a.clone()]), af.attackers_of(&b));
        assert_eq!(BTreeSet::from([b.clone()]), af.targets_of(&a));
        assert_eq!(BTreeSet::from([a]), af.grounded_extension());
    }

    #[test]
    fn test_renumbering_keeps_attacks() {
        let mut af = AAFramework::new_with_attacks(&[
            ["a", "b"],
            ["b", "c"],
            ["c", "d"],
            ["d", "e"],
            ["e", "c"],
        ])
        .unwrap();
        assert!(af.remove_arguments(&["a", "b", "d"]));
        assert_eq!(2, af.argument_set().id_bound());
        assert_eq!(BTreeSet::from([("e", "c")]), af.attacks());
        assert!(af.new_attack(&"c", &"e"));
        assert_eq!(
            AAFramework::new_with_attacks(&[["e", "c"], ["c", "e"]]).unwrap(),
            af
        );
    }
}
