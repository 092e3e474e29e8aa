use crate::{
    aa::{AAFramework, IdSet, IdSets, LabelType},
    utils,
};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Computes the defence sets of arguments, that is the minimal admissible sets containing them.
///
/// The search is a dispute between a proponent, which builds candidate defence sets,
/// and an opponent, which attacks the arguments put forward by the proponent.
/// The proponent must answer each attack with a counter-attack compatible with the candidate it extends.
/// Candidates that already counter-attack an opponent argument are left unchanged.
/// After each step, only the minimal candidates are kept.
/// The dispute is run on an explicit stack of plies.
///
/// The defence sets are recorded by the framework until it changes.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::DefenceSetComputer;
/// # use std::collections::BTreeSet;
/// let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "c"], ["d", "b"]]).unwrap();
/// let computer = DefenceSetComputer::new(&af);
/// assert_eq!(
///     BTreeSet::from([BTreeSet::from(["a", "c"]), BTreeSet::from(["c", "d"])]),
///     computer.defence_sets_around(&"c"),
/// );
/// ```
pub struct DefenceSetComputer<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> DefenceSetComputer<'a, T>
where
    T: LabelType,
{
    /// Builds a new computer for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Returns the defence sets of an argument.
    ///
    /// If the argument does not belong to the framework or is not acceptable at all, an empty set is returned.
    pub fn defence_sets_around(&self, arg: &T) -> BTreeSet<BTreeSet<T>> {
        match self.af.id_of(arg) {
            Some(id) => self.af.labels_of_all(&self.defence_set_ids(id)),
            None => BTreeSet::new(),
        }
    }

    pub(crate) fn defence_set_ids(&self, id: usize) -> IdSets {
        self.af.cached_defence_sets(id, || {
            let sets = self.search(id);
            debug!(
                "found {} defence set(s) for argument {}",
                sets.len(),
                self.af.argument_set().get_argument_by_id(id)
            );
            sets
        })
    }

    /// Runs the dispute from the given argument, using an explicit stack of plies.
    fn search(&self, id: usize) -> IdSets {
        let mut stack = match ProponentPly::start(self.af, id, IdSets::from([IdSet::new()])) {
            Some(ply) => vec![Ply::Proponent(ply)],
            None => return IdSets::new(),
        };
        let mut returned = None;
        let mut max_depth = stack.len();
        while let Some(top) = stack.last_mut() {
            let step = match top {
                Ply::Proponent(ply) => ply.resume(self.af, returned.take()),
                Ply::Opponent(ply) => ply.resume(self.af, returned.take()),
            };
            match step {
                Step::Push(ply) => {
                    stack.push(ply);
                    max_depth = usize::max(max_depth, stack.len());
                }
                Step::Return(sets) => {
                    stack.pop();
                    returned = Some(sets);
                }
            }
        }
        trace!("the dispute from argument {} reached depth {}", id, max_depth);
        returned.unwrap_or_default()
    }
}

enum Ply {
    Proponent(ProponentPly),
    Opponent(OpponentPly),
}

enum Step {
    Push(Ply),
    Return(IdSets),
}

/// The proponent puts an argument forward, then answers each of its attackers in turn.
struct ProponentPly {
    id: usize,
    attackers: Vec<usize>,
    next_attacker: usize,
    candidates: IdSets,
    defended: IdSets,
}

impl ProponentPly {
    /// Adds the argument to the candidates, or returns `None` if it attacks itself.
    fn start<T>(af: &AAFramework<T>, id: usize, candidates: IdSets) -> Option<Self>
    where
        T: LabelType,
    {
        if af.attacker_ids(id).contains(&id) {
            return None;
        }
        let candidates = candidates
            .into_iter()
            .map(|mut c| {
                c.insert(id);
                c
            })
            .collect();
        Some(Self {
            id,
            attackers: af.attacker_ids(id).iter().copied().collect(),
            next_attacker: 0,
            candidates,
            defended: IdSets::new(),
        })
    }

    fn resume<T>(&mut self, af: &AAFramework<T>, returned: Option<IdSets>) -> Step
    where
        T: LabelType,
    {
        if let Some(sets) = returned {
            let mut candidates = std::mem::take(&mut self.defended);
            candidates.extend(sets);
            if candidates.is_empty() {
                trace!("no candidate survives the attacks on argument {}", self.id);
                return Step::Return(candidates);
            }
            self.candidates = utils::minimal_members(candidates);
        }
        while let Some(attacker) = self.attackers.get(self.next_attacker).copied() {
            self.next_attacker += 1;
            let counters = af.attacker_ids(attacker);
            let (defended, undefended): (IdSets, IdSets) = std::mem::take(&mut self.candidates)
                .into_iter()
                .partition(|c| !c.is_disjoint(counters));
            if !undefended.is_empty() {
                self.defended = defended;
                return Step::Push(Ply::Opponent(OpponentPly::start(af, attacker, undefended)));
            }
            self.candidates = utils::minimal_members(defended);
        }
        Step::Return(std::mem::take(&mut self.candidates))
    }
}

/// The opponent puts an attacker forward; the proponent may answer with any compatible counter-attack.
struct OpponentPly {
    counters: Vec<usize>,
    next_counter: usize,
    candidates: IdSets,
    answers: IdSets,
}

impl OpponentPly {
    fn start<T>(af: &AAFramework<T>, id: usize, candidates: IdSets) -> Self
    where
        T: LabelType,
    {
        Self {
            counters: af.attacker_ids(id).iter().copied().collect(),
            next_counter: 0,
            candidates,
            answers: IdSets::new(),
        }
    }

    fn resume<T>(&mut self, af: &AAFramework<T>, returned: Option<IdSets>) -> Step
    where
        T: LabelType,
    {
        if let Some(sets) = returned {
            self.answers.extend(sets);
        }
        while let Some(counter) = self.counters.get(self.next_counter).copied() {
            self.next_counter += 1;
            let is_compatible = |c: &IdSet| {
                af.attacker_ids(counter).is_disjoint(c) && af.target_ids(counter).is_disjoint(c)
            };
            let compatible = if self.next_counter == self.counters.len() {
                std::mem::take(&mut self.candidates)
                    .into_iter()
                    .filter(|c| is_compatible(c))
                    .collect::<IdSets>()
            } else {
                self.candidates
                    .iter()
                    .filter(|c| is_compatible(*c))
                    .cloned()
                    .collect::<IdSets>()
            };
            if compatible.is_empty() {
                continue;
            }
            if let Some(ply) = ProponentPly::start(af, counter, compatible) {
                return Step::Push(Ply::Proponent(ply));
            }
        }
        Step::Return(utils::minimal_members(std::mem::take(&mut self.answers)))
    }
}
