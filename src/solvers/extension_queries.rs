use super::{
    utils as solver_utils, AdmissibleSetsSolver, CompleteSemanticsSolver, DefenceSetComputer,
    EagerSemanticsSolver, ExtensionsComputer, GroundedSemanticsSolver, IdealSemanticsSolver,
    PreferredScepticalSolver, PreferredSemanticsSolver, SemiStableSemanticsSolver,
    StableSemanticsSolver, UniqueExtensionComputer,
};
use crate::aa::{AAFramework, IdSets, LabelType, Semantics};
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeSet;

/// Semantics queries.
///
/// These functions build the dedicated solvers and return their results.
/// The extensions are recorded by the framework, so that asking twice for the same extensions does not trigger a new computation.
impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Returns the grounded extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
    /// assert_eq!(BTreeSet::from(["a", "c"]), af.grounded_extension());
    /// ```
    pub fn grounded_extension(&self) -> BTreeSet<T> {
        GroundedSemanticsSolver::new(self).compute_extension()
    }

    /// Returns all the admissible sets.
    pub fn admissible_sets(&self) -> BTreeSet<BTreeSet<T>> {
        AdmissibleSetsSolver::new(self).compute_extensions()
    }

    /// Returns the arguments that belong to at least one admissible set.
    ///
    /// These are the arguments of the preferred extensions.
    pub fn admissible_args(&self) -> BTreeSet<T> {
        self.preferred_args()
    }

    /// Returns `true` iff the arguments form an admissible set.
    pub fn admissible_sets_contain<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        AdmissibleSetsSolver::new(self).is_extension(&arguments.into_iter().cloned().collect())
    }

    /// Returns the defence sets of an argument, that is the minimal admissible sets containing it.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"]]).unwrap();
    /// assert!(!af.records_defence_sets_around(&"c"));
    /// assert_eq!(BTreeSet::from([BTreeSet::from(["a", "c"])]), af.defence_sets_around(&"c"));
    /// assert!(af.records_defence_sets_around(&"c"));
    /// ```
    pub fn defence_sets_around(&self, arg: &T) -> BTreeSet<BTreeSet<T>> {
        DefenceSetComputer::new(self).defence_sets_around(arg)
    }

    /// Returns `true` iff the defence sets of the argument are recorded by the framework.
    pub fn records_defence_sets_around(&self, arg: &T) -> bool {
        self.id_of(arg)
            .map(|id| self.semantics_cache().defence_sets(id).is_some())
            .unwrap_or(false)
    }

    /// Returns the preferred extensions.
    pub fn preferred_extensions(&self) -> BTreeSet<BTreeSet<T>> {
        PreferredSemanticsSolver::new(self).compute_extensions()
    }

    /// Returns the arguments that belong to at least one preferred extension.
    pub fn preferred_args(&self) -> BTreeSet<T> {
        self.labels_of(&solver_utils::union_of(
            &PreferredSemanticsSolver::new(self).extension_ids(),
        ))
    }

    /// Returns the intersection of the preferred extensions.
    pub fn preferred_sceptical_extension(&self) -> BTreeSet<T> {
        PreferredScepticalSolver::new(self).compute_extension()
    }

    /// Returns `true` iff the arguments form a preferred extension.
    pub fn preferred_extensions_contain<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        PreferredSemanticsSolver::new(self).is_extension(&arguments.into_iter().cloned().collect())
    }

    /// Returns the complete extensions.
    pub fn complete_extensions(&self) -> BTreeSet<BTreeSet<T>> {
        CompleteSemanticsSolver::new(self).compute_extensions()
    }

    /// Returns `true` iff the arguments form a complete extension.
    pub fn complete_extensions_contain<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        CompleteSemanticsSolver::new(self).is_extension(&arguments.into_iter().cloned().collect())
    }

    /// Returns the stable extensions.
    ///
    /// The result may be empty.
    pub fn stable_extensions(&self) -> BTreeSet<BTreeSet<T>> {
        StableSemanticsSolver::new(self).compute_extensions()
    }

    /// Returns the arguments that belong to at least one stable extension.
    pub fn stable_args(&self) -> BTreeSet<T> {
        self.labels_of(&solver_utils::union_of(
            &StableSemanticsSolver::new(self).extension_ids(),
        ))
    }

    /// Returns `true` iff the arguments form a stable extension.
    pub fn stable_extensions_contain<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        StableSemanticsSolver::new(self).is_extension(&arguments.into_iter().cloned().collect())
    }

    /// Returns the semi-stable extensions.
    pub fn semi_stable_extensions(&self) -> BTreeSet<BTreeSet<T>> {
        SemiStableSemanticsSolver::new(self).compute_extensions()
    }

    /// Returns the arguments that belong to at least one semi-stable extension.
    pub fn semi_stable_args(&self) -> BTreeSet<T> {
        self.labels_of(&solver_utils::union_of(
            &SemiStableSemanticsSolver::new(self).extension_ids(),
        ))
    }

    /// Returns `true` iff the arguments form a semi-stable extension.
    pub fn semi_stable_extensions_contain<'b, I>(&self, arguments: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        SemiStableSemanticsSolver::new(self).is_extension(&arguments.into_iter().cloned().collect())
    }

    /// Returns the ideal extension.
    pub fn ideal_extension(&self) -> BTreeSet<T> {
        IdealSemanticsSolver::new(self).compute_extension()
    }

    /// Returns the eager extension.
    pub fn eager_extension(&self) -> BTreeSet<T> {
        EagerSemanticsSolver::new(self).compute_extension()
    }

    /// Returns the extensions of a semantics.
    ///
    /// For unique-extension semantics, the result is made of this extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, Semantics};
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"]]).unwrap();
    /// assert_eq!(2, af.extensions(Semantics::Stable).len());
    /// assert_eq!(BTreeSet::from([BTreeSet::new()]), af.extensions(Semantics::Grounded));
    /// ```
    pub fn extensions(&self, semantics: Semantics) -> BTreeSet<BTreeSet<T>> {
        self.labels_of_all(&self.extension_ids_of(semantics))
    }

    /// Returns the union of the extensions of a multiple-extension semantics given by its name.
    ///
    /// The union of the admissible sets and the one of the complete extensions are the union of the preferred extensions.
    /// An error is returned if the name does not denote a semantics, or if it denotes a unique-extension semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// # use std::collections::BTreeSet;
    /// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["c", "c"]]).unwrap();
    /// assert_eq!(BTreeSet::from(["a", "b"]), af.extensions_union("complete").unwrap());
    /// assert!(af.extensions_union("grounded").is_err());
    /// assert!(af.extensions_union("foo").is_err());
    /// ```
    pub fn extensions_union(&self, semantics_name: &str) -> Result<BTreeSet<T>> {
        let semantics = Semantics::try_from(semantics_name)
            .context("while computing the union of extensions")?;
        match semantics {
            Semantics::Admissible | Semantics::Complete | Semantics::Preferred => {
                Ok(self.preferred_args())
            }
            Semantics::SemiStable => Ok(self.semi_stable_args()),
            Semantics::Stable => Ok(self.stable_args()),
            Semantics::Eager
            | Semantics::Grounded
            | Semantics::Ideal
            | Semantics::PreferredSceptical => Err(anyhow!(
                "{} is a unique-extension semantics",
                semantics.as_ref()
            )),
        }
    }

    /// Returns `true` iff the framework records the extensions of the semantics.
    ///
    /// Extensions are recorded once computed, until the next change of the framework.
    pub fn records_extensions(&self, semantics: Semantics) -> bool {
        self.semantics_cache().records(semantics)
    }

    /// Same as [`records_extensions`](Self::records_extensions), with the semantics given by its name.
    ///
    /// An error is returned if the name does not denote a semantics.
    pub fn records_extensions_of(&self, semantics_name: &str) -> Result<bool> {
        let semantics = Semantics::try_from(semantics_name)
            .context("while checking the recorded extensions")?;
        Ok(self.records_extensions(semantics))
    }

    /// Returns `true` iff the argument belongs to at least one extension of the semantics.
    pub fn is_credulously_accepted(&self, semantics: Semantics, arg: &T) -> bool {
        match semantics {
            Semantics::Admissible => AdmissibleSetsSolver::new(self).is_credulously_accepted(arg),
            Semantics::Complete => CompleteSemanticsSolver::new(self).is_credulously_accepted(arg),
            Semantics::Preferred => PreferredSemanticsSolver::new(self).is_credulously_accepted(arg),
            Semantics::SemiStable => {
                SemiStableSemanticsSolver::new(self).is_credulously_accepted(arg)
            }
            Semantics::Stable => StableSemanticsSolver::new(self).is_credulously_accepted(arg),
            Semantics::Eager
            | Semantics::Grounded
            | Semantics::Ideal
            | Semantics::PreferredSceptical => self.is_in_unique_extension(semantics, arg),
        }
    }

    /// Returns `true` iff the argument belongs to all the extensions of the semantics.
    ///
    /// If the semantics admits no extension (this may only happen for the stable semantics), any argument is skeptically accepted.
    pub fn is_skeptically_accepted(&self, semantics: Semantics, arg: &T) -> bool {
        match semantics {
            Semantics::Admissible => AdmissibleSetsSolver::new(self).is_skeptically_accepted(arg),
            Semantics::Complete => CompleteSemanticsSolver::new(self).is_skeptically_accepted(arg),
            Semantics::Preferred => PreferredSemanticsSolver::new(self).is_skeptically_accepted(arg),
            Semantics::SemiStable => {
                SemiStableSemanticsSolver::new(self).is_skeptically_accepted(arg)
            }
            Semantics::Stable => StableSemanticsSolver::new(self).is_skeptically_accepted(arg),
            Semantics::Eager
            | Semantics::Grounded
            | Semantics::Ideal
            | Semantics::PreferredSceptical => self.is_in_unique_extension(semantics, arg),
        }
    }

    fn is_in_unique_extension(&self, semantics: Semantics, arg: &T) -> bool {
        self.id_of(arg)
            .map(|id| {
                self.extension_ids_of(semantics)
                    .iter()
                    .all(|ext| ext.contains(&id))
            })
            .unwrap_or(false)
    }

    fn extension_ids_of(&self, semantics: Semantics) -> IdSets {
        match semantics {
            Semantics::Admissible => AdmissibleSetsSolver::new(self).extension_ids(),
            Semantics::Complete => CompleteSemanticsSolver::new(self).extension_ids(),
            Semantics::Eager => IdSets::from([EagerSemanticsSolver::new(self).extension_ids()]),
            Semantics::Grounded => {
                IdSets::from([GroundedSemanticsSolver::new(self).extension_ids()])
            }
            Semantics::Ideal => IdSets::from([IdealSemanticsSolver::new(self).extension_ids()]),
            Semantics::Preferred => PreferredSemanticsSolver::new(self).extension_ids(),
            Semantics::PreferredSceptical => {
                IdSets::from([PreferredScepticalSolver::new(self).extension_ids()])
            }
            Semantics::SemiStable => SemiStableSemanticsSolver::new(self).extension_ids(),
            Semantics::Stable => StableSemanticsSolver::new(self).extension_ids(),
        }
    }
}
