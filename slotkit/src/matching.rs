//! The matching engine: count, capacity check, take, and give over a [`Cursor`].
//!
//! All four operations are plain functions of the container contents, the
//! traversal order, and their parameters; they keep no state beyond one call.
//! Shortage and lack of space are reported through the outcome values, never
//! as errors.

use alloc::vec::Vec;

use crate::{Container, Cursor, Item, Slot};

/// Predicate selecting which stacks participate in a matching operation.
///
/// The two variants are the two notions of "the same item":
/// [`Exact`](Matcher::Exact) compares whole items, per-instance state
/// included, while [`Key`](Matcher::Key) compares only the stacking identity.
#[derive(Clone, Copy, Debug)]
pub enum Matcher<'a, I: Item> {
    /// Match stacks whose item equals the given item exactly.
    Exact(&'a I),
    /// Match stacks whose item carries the given key, whatever their
    /// per-instance state.
    Key(&'a I::Key),
}

impl<I: Item> Matcher<'_, I> {
    /// Whether stacks of `item` participate in the operation.
    pub fn matches(&self, item: &I) -> bool {
        match *self {
            Matcher::Exact(wanted) => item == wanted,
            Matcher::Key(key) => item.key() == *key,
        }
    }
}

/// What a [`Cursor::take`] removed from the container.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct TakeOutcome<I> {
    /// Total units removed. At most the requested count; less when the
    /// traversal ran out of matching stacks.
    pub taken: u32,
    /// The removed stacks, one per affected slot, each preserving the
    /// per-instance state of that slot's item.
    pub removed: Vec<Slot<I>>,
}

/// What a [`Cursor::give`] stored into the container.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct GiveOutcome<I> {
    /// Units stored.
    pub placed: u16,
    /// Units that did not fit. The engine only reports these; what becomes
    /// of them (dropped on the ground, returned to sender) is the caller's
    /// side effect.
    pub leftover: Slot<I>,
}

impl<C: Container> Cursor<'_, C> {
    /// Sums the counts of matching stacks over the remaining traversal.
    ///
    /// Does not mutate the container; empty slots contribute nothing. The
    /// cursor is left at the end of its order.
    pub fn count_matching(&mut self, matcher: Matcher<'_, C::Item>) -> u32 {
        let mut total: u32 = 0;
        while let Some(slot) = self.step_forward() {
            if let Slot::Stack(count, item) = slot {
                if matcher.matches(&item) {
                    total += u32::from(count.get());
                }
            }
        }
        total
    }

    /// Whether the remaining traversal has capacity for `amount` of `item`,
    /// counting empty slots at the full stack limit and same-item stacks at
    /// their remaining headroom.
    ///
    /// Returns as soon as enough capacity has accumulated; does not mutate.
    pub fn has_space(&mut self, item: &C::Item, amount: u16) -> bool {
        if amount == 0 {
            return true;
        }
        let mut found: u32 = 0;
        while let Some(slot) = self.step_forward() {
            found += u32::from(slot.space_for(item));
            if found >= u32::from(amount) {
                return true;
            }
        }
        false
    }

    /// Removes up to `count` units of matching items, in traversal order.
    ///
    /// A slot that empties exactly becomes [`Slot::Empty`]; a partially
    /// drained slot is written back reduced. Finding fewer than `count` units
    /// is not an error: the outcome reports what was actually removed.
    pub fn take(&mut self, matcher: Matcher<'_, C::Item>, count: u32) -> TakeOutcome<C::Item> {
        let mut remaining = count;
        let mut removed = Vec::new();
        while remaining > 0 {
            let Some(slot) = self.step_forward() else {
                break;
            };
            let Slot::Stack(have, item) = slot else {
                continue;
            };
            if !matcher.matches(&item) {
                continue;
            }
            let taken = u32::from(have.get()).min(remaining) as u16;
            self.write_last(Slot::stack(have.get() - taken, item.clone()));
            removed.push(Slot::stack(taken, item));
            remaining -= u32::from(taken);
        }
        TakeOutcome {
            taken: count - remaining,
            removed,
        }
    }

    /// Inserts a stack across the remaining traversal: first tops up partial
    /// stacks of the same item to their limit, in order, then splits what is
    /// left into empty slots.
    ///
    /// Running out of room is not an error; the outcome reports the units
    /// placed and carries the leftover for the caller to deal with.
    pub fn give(&mut self, stack: Slot<C::Item>) -> GiveOutcome<C::Item> {
        let Slot::Stack(count, item) = stack else {
            return GiveOutcome {
                placed: 0,
                leftover: Slot::Empty,
            };
        };
        let limit = item.stack_limit().get();
        let mut remaining = count.get();
        let start = self.position();

        // First pass: top up existing partial stacks of the same item.
        while remaining > 0 {
            let Some(slot) = self.step_forward() else {
                break;
            };
            if let Slot::Stack(have, existing) = slot {
                if existing == item && have.get() < limit {
                    let added = (limit - have.get()).min(remaining);
                    self.write_last(Slot::stack(have.get() + added, existing));
                    remaining -= added;
                }
            }
        }

        // Second pass: split the remainder into empty slots, a full stack at a time.
        self.rewind_to(start);
        while remaining > 0 {
            let Some(slot) = self.step_forward() else {
                break;
            };
            if slot.is_empty() {
                let added = limit.min(remaining);
                self.write_last(Slot::stack(added, item.clone()));
                remaining -= added;
            }
        }

        GiveOutcome {
            placed: count.get() - remaining,
            leftover: Slot::stack(remaining, item),
        }
    }
}

/// Inserts `stack` into the container over all its slots, handing any
/// leftover to `on_leftover` (commonly "drop it on the ground").
///
/// Returns the number of units stored.
pub fn give_or_else<C: Container>(
    container: &mut C,
    stack: Slot<C::Item>,
    on_leftover: impl FnOnce(Slot<C::Item>),
) -> u16 {
    let outcome = Cursor::new(container).give(stack);
    if let Slot::Stack(count, _) = &outcome.leftover {
        log::trace!("give left {count} units over");
        on_leftover(outcome.leftover);
    }
    outcome.placed
}
