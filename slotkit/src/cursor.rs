//! [`Cursor`]: bidirectional traversal of a chosen sequence of slots.

use alloc::vec::Vec;
use core::fmt;

use crate::{Container, Ix, Slot};

/// A bidirectional cursor over an ordered selection of a container's slots.
///
/// Traversal follows the supplied index list, not numeric slot order, so
/// priority scans ("fill the hotbar before the backpack") fall out of the
/// order the caller provides. [`replace`](Cursor::replace) writes through to
/// the container slot at the last visited position, regardless of which
/// direction the cursor last moved.
///
/// Cursors are cheap and intended to be constructed fresh for each operation;
/// they hold an exclusive borrow of the container for their lifetime.
pub struct Cursor<'c, C: Container> {
    container: &'c mut C,
    order: Vec<Ix>,
    /// Position in `order` that `advance` would visit next.
    /// Invariant: always in `0..=order.len()`.
    next: usize,
    /// Position in `order` most recently visited, once any motion has happened.
    last: Option<usize>,
}

/// Ways to misuse a [`Cursor`]. These indicate bugs in the calling code and
/// are surfaced rather than recovered from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum CursorError {
    /// cursor moved past the end of its slot order
    OutOfBounds,
    /// no slot has been visited yet
    NoPosition,
}

impl core::error::Error for CursorError {}

impl<'c, C: Container> Cursor<'c, C> {
    /// A cursor over every slot, in the container's enumeration order.
    pub fn new(container: &'c mut C) -> Self {
        let order = container.order();
        Cursor {
            container,
            order,
            next: 0,
            last: None,
        }
    }

    /// A cursor over exactly the given slots, in the given order.
    ///
    /// A duplicated index is visited once, at its first occurrence. The given
    /// slots need not currently exist in the container; missing ones read as
    /// empty and are created on write.
    pub fn with_order(container: &'c mut C, order: impl IntoIterator<Item = Ix>) -> Self {
        let mut deduped: Vec<Ix> = Vec::new();
        for index in order {
            if !deduped.contains(&index) {
                deduped.push(index);
            }
        }
        Cursor {
            container,
            order: deduped,
            next: 0,
            last: None,
        }
    }

    /// The traversal order, as container slot indices.
    pub fn order(&self) -> &[Ix] {
        &self.order
    }

    /// Whether [`advance`](Self::advance) would succeed.
    pub fn has_next(&self) -> bool {
        self.next < self.order.len()
    }

    /// Whether [`retreat`](Self::retreat) would succeed.
    pub fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// The container slot index [`advance`](Self::advance) would visit,
    /// or [`None`] at the end.
    pub fn next_index(&self) -> Option<Ix> {
        self.order.get(self.next).copied()
    }

    /// The container slot index [`retreat`](Self::retreat) would visit,
    /// or [`None`] at the start.
    pub fn previous_index(&self) -> Option<Ix> {
        let position = self.next.checked_sub(1)?;
        self.order.get(position).copied()
    }

    /// Moves forward and returns the contents of the next slot in order.
    pub fn advance(&mut self) -> Result<Slot<C::Item>, CursorError> {
        self.step_forward().ok_or(CursorError::OutOfBounds)
    }

    /// Moves backward and returns the contents of the previous slot in order.
    pub fn retreat(&mut self) -> Result<Slot<C::Item>, CursorError> {
        self.step_back().ok_or(CursorError::OutOfBounds)
    }

    /// Replaces the contents of the slot returned by the most recent
    /// [`advance`](Self::advance) or [`retreat`](Self::retreat), writing
    /// through to the container.
    pub fn replace(&mut self, contents: Slot<C::Item>) -> Result<(), CursorError> {
        let position = self.last.ok_or(CursorError::NoPosition)?;
        self.container.write(self.order[position], contents);
        Ok(())
    }

    pub(crate) fn step_forward(&mut self) -> Option<Slot<C::Item>> {
        let index = *self.order.get(self.next)?;
        self.last = Some(self.next);
        self.next += 1;
        Some(self.container.read(index))
    }

    pub(crate) fn step_back(&mut self) -> Option<Slot<C::Item>> {
        let position = self.next.checked_sub(1)?;
        self.next = position;
        self.last = Some(position);
        Some(self.container.read(self.order[position]))
    }

    /// Writes at the last visited position. Callers must have moved first.
    pub(crate) fn write_last(&mut self, contents: Slot<C::Item>) {
        if let Some(position) = self.last {
            self.container.write(self.order[position], contents);
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.next
    }

    pub(crate) fn rewind_to(&mut self, position: usize) {
        debug_assert!(position <= self.next);
        self.next = position;
    }
}

impl<C: Container> fmt::Debug for Cursor<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("order", &self.order)
            .field("next", &self.next)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stack;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn visits_exactly_the_order_given() {
        let mut chest = vec![
            stack(1, "amber"),
            stack(2, "beryl"),
            stack(3, "coral"),
            stack(4, "diamond"),
        ];
        let mut cursor = Cursor::with_order(&mut chest, [3, 0, 2]);
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(cursor.advance().unwrap().count());
        }
        assert_eq!(seen, vec![4, 1, 3]);
        assert_eq!(cursor.advance(), Err(CursorError::OutOfBounds));
    }

    #[test]
    fn duplicate_indices_are_visited_once() {
        let mut chest = vec![stack(1, "amber"), stack(2, "beryl")];
        let cursor = Cursor::with_order(&mut chest, [1, 0, 1, 1, 0]);
        assert_eq!(cursor.order(), &[1, 0]);
    }

    #[test]
    fn bidirectional_motion_and_index_queries() {
        let mut chest = vec![stack(1, "amber"), stack(2, "beryl"), stack(3, "coral")];
        let mut cursor = Cursor::with_order(&mut chest, [2, 0]);

        assert_eq!(cursor.next_index(), Some(2));
        assert_eq!(cursor.previous_index(), None);
        assert!(!cursor.has_previous());

        assert_eq!(cursor.advance().unwrap(), stack(3, "coral"));
        assert_eq!(cursor.advance().unwrap(), stack(1, "amber"));
        assert_eq!(cursor.next_index(), None);
        assert_eq!(cursor.previous_index(), Some(0));

        assert_eq!(cursor.retreat().unwrap(), stack(1, "amber"));
        assert_eq!(cursor.retreat().unwrap(), stack(3, "coral"));
        assert_eq!(cursor.retreat(), Err(CursorError::OutOfBounds));
    }

    #[test]
    fn replace_before_motion_is_an_error() {
        let mut chest = vec![stack(1, "amber")];
        let mut cursor = Cursor::new(&mut chest);
        assert_eq!(
            cursor.replace(Slot::Empty),
            Err(CursorError::NoPosition)
        );
    }

    #[test]
    fn replace_writes_through_at_last_visited_position() {
        let mut chest = vec![stack(1, "amber"), stack(2, "beryl"), stack(3, "coral")];
        {
            let mut cursor = Cursor::with_order(&mut chest, [2, 1]);
            cursor.advance().unwrap();
            cursor.advance().unwrap();
            // Walked back to the first-ordered slot; the write must land in slot 2.
            cursor.retreat().unwrap();
            cursor.retreat().unwrap();
            cursor.replace(stack(9, "topaz")).unwrap();
        }
        assert_eq!(
            chest,
            vec![stack(1, "amber"), stack(2, "beryl"), stack(9, "topaz")]
        );
    }

    #[test]
    fn full_cursor_follows_container_enumeration_order() {
        let mut sparse = alloc::collections::BTreeMap::from([
            (8, stack(1, "amber")),
            (2, stack(2, "beryl")),
        ]);
        let cursor = Cursor::new(&mut sparse);
        assert_eq!(cursor.order(), &[2, 8]);
    }
}
