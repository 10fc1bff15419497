//! [`Slot`]: the contents of one inventory position.

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU16;

use crate::Item;

/// The contents of one slot: nothing, or a stack of one or more identical items.
///
/// Representing emptiness as its own variant, rather than as a nullable item
/// or a zero count, keeps the matching algorithms total: every slot value is
/// meaningful and there is exactly one way to be empty.
///
/// A `Slot` is also used to describe an *amount in motion* — a request to give
/// or the result of a take — in which case its count may exceed the item's
/// [`stack_limit`](Item::stack_limit); the limit binds only what is stored in
/// a container slot.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Slot<I> {
    /// Slot contains nothing.
    Empty,
    /// Slot contains the given number of the given item.
    Stack(NonZeroU16, I),
}

impl<I> Slot<I> {
    /// Construct a [`Slot`] containing `count` copies of `item`.
    ///
    /// If `count` is zero, the `item` is discarded and the slot is empty.
    pub fn stack(count: u16, item: I) -> Self {
        match NonZeroU16::new(count) {
            Some(count) => Self::Stack(count, item),
            None => Self::Empty,
        }
    }

    /// Returns the count of items in this slot; zero if empty.
    pub fn count(&self) -> u16 {
        match self {
            Slot::Empty => 0,
            Slot::Stack(count, _) => count.get(),
        }
    }

    /// Returns whether this slot contains nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns the stacked item, if any.
    pub fn item(&self) -> Option<&I> {
        match self {
            Slot::Empty => None,
            Slot::Stack(_, item) => Some(item),
        }
    }
}

impl<I: Item> Slot<I> {
    /// If the given item is stacked in this slot, returns the count thereof.
    pub fn count_of(&self, item: &I) -> u16 {
        match self {
            Slot::Stack(count, stacked) if stacked == item => count.get(),
            Slot::Stack(_, _) | Slot::Empty => 0,
        }
    }

    /// How many more of `item` this slot could accept: the full stack limit if
    /// empty, the remaining capacity if it holds the same item, and zero if it
    /// holds anything else.
    pub fn space_for(&self, item: &I) -> u16 {
        match self {
            Slot::Empty => item.stack_limit().get(),
            Slot::Stack(count, stacked) if stacked == item => {
                item.stack_limit().get().saturating_sub(count.get())
            }
            Slot::Stack(_, _) => 0,
        }
    }

    /// The same item with its count raised to its stack limit.
    /// An empty slot stays empty.
    pub fn maximized(&self) -> Self {
        match self {
            Slot::Empty => Slot::Empty,
            Slot::Stack(_, item) => Slot::Stack(item.stack_limit(), item.clone()),
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Slot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Stack(count, item) => {
                write!(f, "{count} × ")?;
                item.fmt(f) // pass through formatter options
            }
        }
    }
}

impl<I> From<I> for Slot<I> {
    fn from(item: I) -> Self {
        Self::Stack(NonZeroU16::MIN, item)
    }
}

impl<I> From<Option<I>> for Slot<I> {
    fn from(item: Option<I>) -> Self {
        match item {
            Some(item) => Self::Stack(NonZeroU16::MIN, item),
            None => Self::Empty,
        }
    }
}

/// Merges a list of stacks so that each distinct item appears once, with the
/// sum of its counts, in first-seen order. Empty slots are dropped.
///
/// Sums that would exceed [`u16::MAX`] saturate.
pub fn collapse<I: Item>(stacks: impl IntoIterator<Item = Slot<I>>) -> Vec<Slot<I>> {
    let mut out: Vec<Slot<I>> = Vec::new();
    for stack in stacks {
        let Slot::Stack(count, item) = stack else {
            continue;
        };
        match out.iter().position(|s| s.item() == Some(&item)) {
            Some(position) => {
                if let Slot::Stack(total, _) = &mut out[position] {
                    *total = total.saturating_add(count.get());
                }
            }
            None => out.push(Slot::Stack(count, item)),
        }
    }
    out
}

/// Total count per item key over the given stacks, in first-seen key order.
/// Stacks of the same key but different items are summed together.
pub fn totals_by_key<I: Item>(
    stacks: impl IntoIterator<Item = Slot<I>>,
) -> Vec<(I::Key, u32)> {
    let mut out: Vec<(I::Key, u32)> = Vec::new();
    for stack in stacks {
        let Slot::Stack(count, item) = stack else {
            continue;
        };
        let key = item.key();
        match out.iter().position(|(k, _)| *k == key) {
            Some(position) => out[position].1 += u32::from(count.get()),
            None => out.push((key, u32::from(count.get()))),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Block, stack};
    use alloc::format;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn stack_of_zero_is_empty() {
        assert_eq!(Slot::stack(0, Block::new("amber")), Slot::Empty);
        assert_eq!(Slot::stack(0, Block::new("amber")).count(), 0);
    }

    #[test]
    fn count_of_distinguishes_items() {
        let slot = stack(5, "amber");
        assert_eq!(slot.count_of(&Block::new("amber")), 5);
        assert_eq!(slot.count_of(&Block::new("beryl")), 0);
        assert_eq!(Slot::<Block>::Empty.count_of(&Block::new("amber")), 0);
    }

    #[test]
    fn space_for_branches() {
        let amber = Block::new("amber");
        assert_eq!(Slot::Empty.space_for(&amber), 64);
        assert_eq!(stack(60, "amber").space_for(&amber), 4);
        assert_eq!(stack(64, "amber").space_for(&amber), 0);
        assert_eq!(stack(1, "beryl").space_for(&amber), 0);
    }

    #[test]
    fn space_for_ignores_key_equality() {
        // Same key, different per-instance state: not stackable together.
        let plain = Block::new("amber");
        let chipped = Block::with_note("amber", "chipped");
        assert_eq!(Slot::stack(10, chipped).space_for(&plain), 0);
    }

    #[test]
    fn maximized() {
        assert_eq!(stack(3, "amber").maximized(), stack(64, "amber"));
        assert_eq!(Slot::<Block>::Empty.maximized(), Slot::Empty);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", stack(3, "amber")), "3 × amber");
        assert_eq!(format!("{:?}", Slot::<Block>::Empty), "Empty");
    }

    #[test]
    fn collapse_merges_exact_items_only() {
        let chipped = Block::with_note("amber", "chipped");
        let merged = collapse(vec![
            stack(3, "amber"),
            Slot::Empty,
            Slot::stack(2, chipped.clone()),
            stack(4, "amber"),
        ]);
        // "amber" and the chipped amber share a key but are distinct items.
        assert_eq!(merged, vec![stack(7, "amber"), Slot::stack(2, chipped)]);
    }

    #[test]
    fn collapse_saturates() {
        let merged = collapse(vec![stack(u16::MAX, "amber"), stack(10, "amber")]);
        assert_eq!(merged, vec![stack(u16::MAX, "amber")]);
    }

    #[test]
    fn totals_by_key_sums_across_items() {
        let totals = totals_by_key(vec![
            stack(3, "amber"),
            Slot::stack(2, Block::with_note("amber", "chipped")),
            stack(10, "beryl"),
            Slot::Empty,
        ]);
        assert_eq!(totals, vec![("amber", 5), ("beryl", 10)]);
    }
}
