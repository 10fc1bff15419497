//! [`Transaction`]: composing planned operations with all-or-nothing commit.

use alloc::collections::BTreeMap;

use crate::{Container, Item, Matcher, Patch, Slot, Snapshot};

/// Accumulates several patch-producing steps against successive snapshots.
///
/// Each [`then`](Transaction::then) step plans against the inventory *as
/// modified by the previous steps*, so "take the fee, then give the goods"
/// composes correctly. After the first step that is not fully satisfied, the
/// snapshot stops advancing and later steps are skipped; [`commit`] then
/// refuses to touch the container, so a multi-step exchange either happens
/// entirely or not at all.
///
/// [`commit`]: Transaction::commit
#[derive(Clone, Debug)]
#[must_use]
pub struct Transaction<I> {
    snapshot: Snapshot<I>,
    patch: Patch<I>,
}

impl<I: Item> Transaction<I> {
    /// Starts a transaction from the given snapshot.
    pub fn new(snapshot: Snapshot<I>) -> Self {
        Transaction {
            snapshot,
            patch: Patch::empty(),
        }
    }

    /// Starts a transaction from the container's current contents.
    pub fn capture<C: Container<Item = I>>(container: &C) -> Self {
        Self::new(Snapshot::from_container(container))
    }

    /// The inventory as it would look after the successful steps so far.
    pub fn snapshot(&self) -> &Snapshot<I> {
        &self.snapshot
    }

    /// The accumulated patch.
    pub fn patch(&self) -> &Patch<I> {
        &self.patch
    }

    /// Whether every step so far was planned and fully satisfied.
    pub fn is_success(&self) -> bool {
        self.patch.is_success()
    }

    /// Plans one more operation against the current snapshot and merges its
    /// patch. Skipped entirely if an earlier step already failed.
    pub fn then(self, step: impl FnOnce(&Snapshot<I>) -> Patch<I>) -> Self {
        if self.patch.has_failures() {
            return self;
        }
        let patch = self.patch.merge(step(&self.snapshot));
        let snapshot = if patch.is_success() {
            self.snapshot.updated(patch.writes())
        } else {
            self.snapshot
        };
        Transaction { snapshot, patch }
    }

    /// Applies the accumulated writes to the container if, and only if, every
    /// step fully succeeded. Returns whether the commit happened.
    pub fn commit<C: Container<Item = I>>(&self, container: &mut C) -> bool {
        if self.patch.is_success() {
            log::trace!("committing {} slot writes", self.patch.writes().len());
            self.patch.apply_to(container);
            true
        } else {
            log::trace!(
                "refusing commit: {} writes, {} shortfall, {} leftover",
                self.patch.writes().len(),
                self.patch.shortfall().len(),
                self.patch.leftover().len(),
            );
            false
        }
    }
}

/// Removes every given stack from the container, or nothing at all.
///
/// Empty stacks in the list are ignored. Returns whether the removal
/// happened; nothing is written when any stack is short (or when the list
/// holds no nonempty stacks).
pub fn take_all<C: Container>(container: &mut C, stacks: &[Slot<C::Item>]) -> bool {
    let mut transaction = Transaction::capture(container);
    for stack in stacks {
        if let Slot::Stack(count, item) = stack {
            transaction = transaction.then(|snapshot| {
                snapshot.plan_take(Matcher::Exact(item), u32::from(count.get()), item)
            });
        }
    }
    transaction.commit(container)
}

/// Stores every given stack into the container, or nothing at all.
///
/// Empty stacks in the list are ignored. Returns whether the insertion
/// happened; nothing is written when any stack fails to fit completely.
pub fn give_all<C: Container>(container: &mut C, stacks: &[Slot<C::Item>]) -> bool {
    let mut transaction = Transaction::capture(container);
    for stack in stacks {
        if !stack.is_empty() {
            transaction = transaction.then(|snapshot| {
                let patch = snapshot.plan_give(stack);
                if patch.writes().is_empty() && !patch.has_failures() {
                    // A zero-room plan is an empty patch with no recorded
                    // failure; count the whole stack as leftover here.
                    Patch::from_give(BTreeMap::new(), stack.clone())
                } else {
                    patch
                }
            });
        }
    }
    transaction.commit(container)
}
