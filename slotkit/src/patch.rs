//! [`Patch`]: an immutable description of planned slot writes and what they
//! could not accomplish.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Container, Item, Ix, Slot};

/// The result of planning one or more inventory operations against a
/// [`Snapshot`](crate::Snapshot): the slot writes to perform, plus any
/// shortage or leftover the plan accumulated.
///
/// Patches are values; merging two patches behaves as if the original
/// operations were planned in sequence, with later writes overriding earlier
/// ones for the same slot and failures concatenated. Callers should only
/// apply a patch to a real container when [`is_success`](Patch::is_success)
/// holds, unless partial application is deliberately wanted.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Patch<I> {
    writes: BTreeMap<Ix, Slot<I>>,
    shortfall: Vec<Slot<I>>,
    leftover: Vec<Slot<I>>,
}

impl<I> Patch<I> {
    /// A patch that writes nothing and records no failures.
    ///
    /// Note that an empty patch is *not* successful: success means some
    /// operation was planned and fully satisfied.
    pub fn empty() -> Self {
        Patch {
            writes: BTreeMap::new(),
            shortfall: Vec::new(),
            leftover: Vec::new(),
        }
    }

    pub(crate) fn from_take(writes: BTreeMap<Ix, Slot<I>>, shortfall: Slot<I>) -> Self {
        Patch {
            writes,
            shortfall: stack_or_nothing(shortfall),
            leftover: Vec::new(),
        }
    }

    pub(crate) fn from_give(writes: BTreeMap<Ix, Slot<I>>, leftover: Slot<I>) -> Self {
        Patch {
            writes,
            shortfall: Vec::new(),
            leftover: stack_or_nothing(leftover),
        }
    }

    /// The planned slot writes.
    pub fn writes(&self) -> &BTreeMap<Ix, Slot<I>> {
        &self.writes
    }

    /// Units a take plan asked for but could not find, as stacks of the
    /// requested item.
    pub fn shortfall(&self) -> &[Slot<I>] {
        &self.shortfall
    }

    /// Units a give plan could not place, as stacks of the given item.
    pub fn leftover(&self) -> &[Slot<I>] {
        &self.leftover
    }

    /// Whether any planned operation fell short or left units over.
    pub fn has_failures(&self) -> bool {
        !self.shortfall.is_empty() || !self.leftover.is_empty()
    }

    /// Whether this patch represents fully satisfied work: at least one slot
    /// write and no failures.
    pub fn is_success(&self) -> bool {
        !self.writes.is_empty() && !self.has_failures()
    }

    /// Combines two patches as if their operations had been planned in order.
    pub fn merge(mut self, other: Self) -> Self {
        self.writes.extend(other.writes);
        self.shortfall.extend(other.shortfall);
        self.leftover.extend(other.leftover);
        self
    }
}

impl<I: Item> Patch<I> {
    /// Performs every planned write against the container, unconditionally.
    ///
    /// Most callers want the success-checked path through
    /// [`Transaction::commit`](crate::Transaction::commit) instead.
    pub fn apply_to<C: Container<Item = I>>(&self, container: &mut C) {
        for (&index, contents) in &self.writes {
            container.write(index, contents.clone());
        }
    }
}

impl<I> Default for Patch<I> {
    fn default() -> Self {
        Self::empty()
    }
}

fn stack_or_nothing<I>(slot: Slot<I>) -> Vec<Slot<I>> {
    match slot {
        Slot::Empty => Vec::new(),
        stack => {
            let mut v = Vec::with_capacity(1);
            v.push(stack);
            v
        }
    }
}
