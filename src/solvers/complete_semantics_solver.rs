use super::{
    AdmissibleSetsSolver, DefenceSetComputer, ExtensionsComputer, GroundedSemanticsSolver,
    PreferredSemanticsSolver,
};
use crate::aa::{AAFramework, IdSets, LabelType, MultipleSlot};
use std::collections::BTreeSet;

/// A solver for the complete semantics.
///
/// A complete extension is an admissible set that contains exactly the arguments it defends.
/// The preferred extensions are complete, and the grounded extension is the minimal complete extension.
///
/// Enumerating the complete extensions requires the enumeration of the admissible sets
/// (see [AdmissibleSetsSolver](crate::solvers::AdmissibleSetsSolver)).
/// Acceptance queries do not: an argument is credulously accepted iff it has a defence set,
/// and it is skeptically accepted iff it belongs to the grounded extension.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, LabelType};
    /// # use dungaf::solvers::{CompleteSemanticsSolver, ExtensionsComputer};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &T) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     if solver.is_credulously_accepted(arg) {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// # let af = AAFramework::new_with_attacks(&[["a", "b"]]).unwrap();
    /// # check_credulous_acceptance(&af, &"a");
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn extension_ids(&self) -> IdSets {
        self.af.cached_extensions(MultipleSlot::Complete, || {
            let mut extensions = AdmissibleSetsSolver::new(self.af)
                .extension_ids()
                .into_iter()
                .filter(|s| self.af.ids_accepted_by(s) == *s)
                .collect::<IdSets>();
            extensions.extend(PreferredSemanticsSolver::new(self.af).extension_ids());
            extensions
        })
    }
}

impl<T> ExtensionsComputer<T> for CompleteSemanticsSolver<'_, T>
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
                    .recorded_membership(MultipleSlot::Complete, &set)
                    .unwrap_or_else(|| {
                        self.af.id_set_is_conflict_free(&set)
                            && self.af.ids_accepted_by(&set) == set
                    })
            })
            .unwrap_or(false)
    }

    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.af
            .id_of(arg)
            .map(|id| !DefenceSetComputer::new(self.af).defence_set_ids(id).is_empty())
            .unwrap_or(false)
    }

    fn is_skeptically_accepted(&mut self, arg: &T) -> bool {
        self.af
            .id_of(arg)
            .map(|id| GroundedSemanticsSolver::new(self.af).extension_ids().contains(&id))
            .unwrap_or(false)
    }
}
