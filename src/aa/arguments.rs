use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
/// The ordering is only used to give a deterministic order to the sets returned by the frameworks.
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use dungaf::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Identifiers of removed arguments are never given to new arguments,
/// so that an identifier always denotes the same label during the life of the set (or until it is cleared).
#[derive(Clone, Debug)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Option<Argument<T>>>,
    label_to_id: HashMap<T, usize>,
    n_removed: usize,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: vec![],
            label_to_id: HashMap::new(),
            n_removed: 0,
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_removed: 0,
        };
        labels.iter().for_each(|l| {
            argument_set.new_argument(l.clone());
        });
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// In an argument with the same label is already defined, no argument is added and `false` is returned.
    pub fn new_argument(&mut self, label: T) -> bool {
        if self.label_to_id.contains_key(&label) {
            return false;
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Some(Argument { id, label }));
        true
    }

    /// Removes an argument from this set.
    ///
    /// The argument id will not be attributed to new arguments.
    /// Returns `None` if there is no argument with this label.
    pub fn remove_argument(&mut self, label: &T) -> Option<Argument<T>> {
        let id = self.label_to_id.remove(label)?;
        self.n_removed += 1;
        self.arguments[id].take()
    }

    /// Removes all the arguments, and resets the identifiers.
    pub fn clear(&mut self) {
        self.arguments.clear();
        self.label_to_id.clear();
        self.n_removed = 0;
    }

    /// Returns the number of arguments in the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_removed
    }

    /// Returns the number of identifiers given so far, including the ones of removed arguments.
    ///
    /// This is the size needed by vectors indexed by argument identifiers.
    pub fn id_bound(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.len() == self.n_removed
    }

    /// Returns `true` iff an argument has this label.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .ok_or_else(|| anyhow!("no such argument: {}", label))
            .map(|i| *i)
    }

    /// Returns the argument associated to an argument label.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .and_then(|i| self.arguments[*i].as_ref())
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(&labels[1], arguments.get_argument_by_id(1).label());
    /// ```
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        self.arguments[id].as_ref().unwrap()
    }

    /// Returns an iterator to the arguments, in increasing order of identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter_map(|o| o.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.arguments.len());
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, opt_a) in args.arguments.iter().enumerate() {
            let a = opt_a.as_ref().unwrap();
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.arguments.len());
    }

    #[test]
    fn test_add_arguments() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        assert!(args.new_argument("c"));
        assert!(!args.new_argument("c"));
        assert_eq!(3, args.len());
        assert_eq!(2, args.get_argument(&"c").unwrap().id())
    }

    #[test]
    fn test_remove_argument() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        assert_eq!("b", *args.remove_argument(&"b").unwrap().label());
        assert!(args.remove_argument(&"b").is_none());
        assert_eq!(1, args.len());
        assert_eq!(2, args.id_bound());
        assert!(!args.contains(&"b"));
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.remove_argument(&"a");
        args.new_argument("a");
        assert_eq!(2, args.get_argument_index(&"a").unwrap());
        assert_eq!(vec![1, 2], args.iter().map(|a| a.id()).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.remove_argument(&"a");
        args.clear();
        assert!(args.is_empty());
        assert_eq!(0, args.id_bound());
        args.new_argument("c");
        assert_eq!(0, args.get_argument_index(&"c").unwrap());
    }

    #[test]
    #[should_panic]
    fn test_get_removed_argument_by_id() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.remove_argument(&"a");
        args.get_argument_by_id(0);
    }
}
