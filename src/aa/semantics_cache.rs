use super::Semantics;
use std::collections::{BTreeSet, HashMap};

/// A set of argument identifiers.
pub(crate) type IdSet = BTreeSet<usize>;

/// A collection of sets of argument identifiers.
pub(crate) type IdSets = BTreeSet<IdSet>;

/// The cache slots holding a collection of extensions, one per multiple-extension semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MultipleSlot {
    Admissible,
    Complete,
    Preferred,
    SemiStable,
    Stable,
}

/// The cache slots holding a single extension, one per unique-extension semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UniqueSlot {
    Eager,
    Grounded,
    Ideal,
    PreferredSceptical,
}

/// The slot a semantics is recorded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Multiple(MultipleSlot),
    Unique(UniqueSlot),
}

impl From<Semantics> for Slot {
    fn from(semantics: Semantics) -> Self {
        match semantics {
            Semantics::Admissible => Slot::Multiple(MultipleSlot::Admissible),
            Semantics::Complete => Slot::Multiple(MultipleSlot::Complete),
            Semantics::Preferred => Slot::Multiple(MultipleSlot::Preferred),
            Semantics::SemiStable => Slot::Multiple(MultipleSlot::SemiStable),
            Semantics::Stable => Slot::Multiple(MultipleSlot::Stable),
            Semantics::Eager => Slot::Unique(UniqueSlot::Eager),
            Semantics::Grounded => Slot::Unique(UniqueSlot::Grounded),
            Semantics::Ideal => Slot::Unique(UniqueSlot::Ideal),
            Semantics::PreferredSceptical => Slot::Unique(UniqueSlot::PreferredSceptical),
        }
    }
}

/// The results computed so far for a framework.
///
/// There is one slot per semantics, and a map from argument identifiers to their defence sets.
/// An empty slot means the corresponding extensions have not been computed yet.
/// The whole structure is cleared each time the framework changes.
#[derive(Clone, Debug, Default)]
pub(crate) struct SemanticsCache {
    defence_sets: HashMap<usize, IdSets>,
    admissible: Option<IdSets>,
    complete: Option<IdSets>,
    preferred: Option<IdSets>,
    semi_stable: Option<IdSets>,
    stable: Option<IdSets>,
    eager: Option<IdSet>,
    grounded: Option<IdSet>,
    ideal: Option<IdSet>,
    preferred_sceptical: Option<IdSet>,
}

impl SemanticsCache {
    pub(crate) fn clear(&mut self) {
        *self = SemanticsCache::default();
    }

    pub(crate) fn defence_sets(&self, id: usize) -> Option<&IdSets> {
        self.defence_sets.get(&id)
    }

    pub(crate) fn set_defence_sets(&mut self, id: usize, sets: IdSets) {
        self.defence_sets.insert(id, sets);
    }

    pub(crate) fn records(&self, semantics: Semantics) -> bool {
        match Slot::from(semantics) {
            Slot::Multiple(slot) => self.extensions(slot).is_some(),
            Slot::Unique(slot) => self.extension(slot).is_some(),
        }
    }

    fn multiple_slot_mut(&mut self, slot: MultipleSlot) -> &mut Option<IdSets> {
        match slot {
            MultipleSlot::Admissible => &mut self.admissible,
            MultipleSlot::Complete => &mut self.complete,
            MultipleSlot::Preferred => &mut self.preferred,
            MultipleSlot::SemiStable => &mut self.semi_stable,
            MultipleSlot::Stable => &mut self.stable,
        }
    }

    pub(crate) fn extensions(&self, slot: MultipleSlot) -> Option<&IdSets> {
        match slot {
            MultipleSlot::Admissible => self.admissible.as_ref(),
            MultipleSlot::Complete => self.complete.as_ref(),
            MultipleSlot::Preferred => self.preferred.as_ref(),
            MultipleSlot::SemiStable => self.semi_stable.as_ref(),
            MultipleSlot::Stable => self.stable.as_ref(),
        }
    }

    pub(crate) fn set_extensions(&mut self, slot: MultipleSlot, extensions: IdSets) {
        *self.multiple_slot_mut(slot) = Some(extensions);
    }

    pub(crate) fn extension(&self, slot: UniqueSlot) -> Option<&IdSet> {
        match slot {
            UniqueSlot::Eager => self.eager.as_ref(),
            UniqueSlot::Grounded => self.grounded.as_ref(),
            UniqueSlot::Ideal => self.ideal.as_ref(),
            UniqueSlot::PreferredSceptical => self.preferred_sceptical.as_ref(),
        }
    }

    pub(crate) fn set_extension(&mut self, slot: UniqueSlot, extension: IdSet) {
        let slot = match slot {
            UniqueSlot::Eager => &mut self.eager,
            UniqueSlot::Grounded => &mut self.grounded,
            UniqueSlot::Ideal => &mut self.ideal,
            UniqueSlot::PreferredSceptical => &mut self.preferred_sceptical,
        };
        *slot = Some(extension);
    }
}
