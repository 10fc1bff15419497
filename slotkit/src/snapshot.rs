//! [`Snapshot`]: pure planning over an ordered copy of container contents.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Container, Item, Ix, Matcher, Patch, Slot};

/// An ordered, immutable copy of (slot index, contents) pairs.
///
/// Everything on this type is pure: queries and planners never mutate the
/// snapshot or any container, and repeated calls give identical results. The
/// planners ([`plan_take`](Snapshot::plan_take), [`plan_give`](Snapshot::plan_give))
/// return [`Patch`]es describing the writes that *would* happen, for the
/// caller — typically a [`Transaction`](crate::Transaction) — to apply or
/// discard as a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot<I> {
    /// Pairs in traversal order. Each index appears at most once.
    entries: Vec<(Ix, Slot<I>)>,
}

impl<I: Item> Snapshot<I> {
    /// A snapshot of no slots at all.
    pub fn empty() -> Self {
        Snapshot {
            entries: Vec::new(),
        }
    }

    /// Copies the container's current contents, in its enumeration order.
    pub fn from_container<C: Container<Item = I>>(container: &C) -> Self {
        Snapshot {
            entries: container
                .order()
                .into_iter()
                .map(|index| (index, container.read(index)))
                .collect(),
        }
    }

    /// Builds a snapshot from explicit pairs, keeping first-seen order.
    /// A repeated index overwrites the earlier contents in place.
    pub fn from_entries(entries: impl IntoIterator<Item = (Ix, Slot<I>)>) -> Self {
        let mut snapshot = Snapshot::empty();
        for (index, contents) in entries {
            match snapshot.entries.iter().position(|&(i, _)| i == index) {
                Some(position) => snapshot.entries[position].1 = contents,
                None => snapshot.entries.push((index, contents)),
            }
        }
        snapshot
    }

    /// The contents of the given slot; absent slots read as empty.
    pub fn get(&self, index: Ix) -> Slot<I> {
        self.entries
            .iter()
            .find(|&&(i, _)| i == index)
            .map(|(_, contents)| contents.clone())
            .unwrap_or(Slot::Empty)
    }

    /// The (index, contents) pairs in traversal order.
    pub fn entries(&self) -> impl Iterator<Item = (Ix, &Slot<I>)> {
        self.entries.iter().map(|(index, contents)| (*index, contents))
    }

    /// A snapshot restricted to the given slots, traversed in the given
    /// order. Slots absent from this snapshot appear as empty; duplicates are
    /// kept once, at their first occurrence.
    pub fn sub(&self, order: impl IntoIterator<Item = Ix>) -> Self {
        let mut entries: Vec<(Ix, Slot<I>)> = Vec::new();
        for index in order {
            if !entries.iter().any(|&(i, _)| i == index) {
                entries.push((index, self.get(index)));
            }
        }
        Snapshot { entries }
    }

    /// This snapshot with the given writes laid over it. Writes to slots not
    /// in the snapshot are appended, in ascending index order.
    pub fn updated(&self, writes: &BTreeMap<Ix, Slot<I>>) -> Self {
        let mut entries = self.entries.clone();
        for (&index, contents) in writes {
            match entries.iter().position(|&(i, _)| i == index) {
                Some(position) => entries[position].1 = contents.clone(),
                None => entries.push((index, contents.clone())),
            }
        }
        Snapshot { entries }
    }

    /// Per-slot insertable amounts for the given stack, in traversal order:
    /// empty slots take up to a full stack limit, same-item stacks take their
    /// headroom. Stops allocating once the stack's count is covered.
    pub fn find_spaces(&self, stack: &Slot<I>) -> Vec<(Ix, u16)> {
        match stack {
            Slot::Empty => Vec::new(),
            Slot::Stack(count, item) => self.find_spaces_by(
                count.get(),
                item.stack_limit().get(),
                |candidate| candidate == item,
            ),
        }
    }

    /// Low-level variant of [`find_spaces`](Self::find_spaces) with an explicit
    /// per-slot limit and stacking predicate.
    pub fn find_spaces_by(
        &self,
        amount: u16,
        limit: u16,
        mut stacks_with: impl FnMut(&I) -> bool,
    ) -> Vec<(Ix, u16)> {
        if amount == 0 || limit == 0 {
            return Vec::new();
        }
        let mut remaining = amount;
        let mut spaces = Vec::new();
        for (index, slot) in self.entries() {
            if remaining == 0 {
                break;
            }
            let space = match slot {
                Slot::Empty => limit.min(remaining),
                Slot::Stack(have, item) if stacks_with(item) => {
                    limit.saturating_sub(have.get()).min(remaining)
                }
                Slot::Stack(_, _) => 0,
            };
            if space >= 1 {
                spaces.push((index, space));
                remaining -= space;
            }
        }
        spaces
    }

    /// Per-slot takeable amounts for up to `count` matching units, in
    /// traversal order. Stops allocating once `count` is covered.
    pub fn find_slots(&self, matcher: Matcher<'_, I>, count: u32) -> Vec<(Ix, u16)> {
        let mut remaining = count;
        let mut slots = Vec::new();
        for (index, slot) in self.entries() {
            if remaining == 0 {
                break;
            }
            if let Slot::Stack(have, item) = slot {
                if matcher.matches(item) {
                    let amount = u32::from(have.get()).min(remaining) as u16;
                    slots.push((index, amount));
                    remaining -= u32::from(amount);
                }
            }
        }
        slots
    }

    /// Sums the counts of matching stacks.
    pub fn count_matching(&self, matcher: Matcher<'_, I>) -> u32 {
        self.entries()
            .map(|(_, slot)| match slot {
                Slot::Stack(count, item) if matcher.matches(item) => u32::from(count.get()),
                _ => 0,
            })
            .sum()
    }

    /// Whether at least the given stack's count of its exact item is present.
    /// An empty stack is trivially present.
    pub fn contains(&self, stack: &Slot<I>) -> bool {
        match stack {
            Slot::Empty => true,
            Slot::Stack(count, item) => {
                u32::from(count.get()) <= self.count_matching(Matcher::Exact(item))
            }
        }
    }

    /// Plans the removal of up to `count` matching units.
    ///
    /// `template` is the item used to materialize any shortfall stack in the
    /// resulting patch (for [`Matcher::Exact`] it is simply the matched item).
    /// Requests beyond [`u16::MAX`] units of shortfall saturate.
    pub fn plan_take(&self, matcher: Matcher<'_, I>, count: u32, template: &I) -> Patch<I> {
        let slots = self.find_slots(matcher, count);
        let mut writes = BTreeMap::new();
        let mut remaining = count;
        for (index, amount) in slots {
            if let Slot::Stack(have, item) = self.get(index) {
                writes.insert(index, Slot::stack(have.get() - amount, item));
                remaining -= u32::from(amount);
            }
        }
        let shortfall = Slot::stack(
            u16::try_from(remaining).unwrap_or(u16::MAX),
            template.clone(),
        );
        Patch::from_take(writes, shortfall)
    }

    /// Plans the insertion of a stack into the spaces found by
    /// [`find_spaces`](Self::find_spaces): one pass in traversal order, each
    /// slot taking as much as it can hold.
    ///
    /// With no room at all, the resulting patch has no writes and no recorded
    /// leftover — and is therefore not a success; a partial fit records the
    /// unplaced remainder as leftover.
    pub fn plan_give(&self, stack: &Slot<I>) -> Patch<I> {
        let Slot::Stack(count, item) = stack else {
            return Patch::empty();
        };
        let spaces = self.find_spaces(stack);
        if spaces.is_empty() {
            return Patch::empty();
        }
        let mut writes = BTreeMap::new();
        let mut remaining = count.get();
        for (index, amount) in spaces {
            let have = self.get(index).count();
            writes.insert(index, Slot::stack(have + amount, item.clone()));
            remaining -= amount;
        }
        Patch::from_give(writes, Slot::stack(remaining, item.clone()))
    }
}

impl<I: Item> Default for Snapshot<I> {
    fn default() -> Self {
        Self::empty()
    }
}
