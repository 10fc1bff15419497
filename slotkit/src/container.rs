//! [`Container`]: the capability set this crate needs from slot storage.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Item, Ix, Slot};

/// Minimal abstraction over slot-addressed storage: indexed read, indexed
/// write, and enumeration of slot indices in a defined order.
///
/// Implementations exist for plain collections, so the operations in this
/// crate appear as ordinary method calls on everyday data; hosts with their
/// own container types join in by implementing this trait. No thread safety
/// is assumed — a container is a shared mutable resource whose access the
/// caller serializes.
pub trait Container {
    /// The item kind stored in this container.
    type Item: Item;

    /// Returns the contents of the given slot.
    ///
    /// Absent or out-of-range slots read as [`Slot::Empty`].
    fn read(&self, index: Ix) -> Slot<Self::Item>;

    /// Replaces the contents of the given slot.
    fn write(&mut self, index: Ix, contents: Slot<Self::Item>);

    /// The slot indices of this container, in its natural enumeration order.
    fn order(&self) -> Vec<Ix>;
}

/// Dense storage: the slot index is the position in the vector.
///
/// Writing past the end grows the vector, padding with empty slots.
impl<I: Item> Container for Vec<Slot<I>> {
    type Item = I;

    fn read(&self, index: Ix) -> Slot<I> {
        self.get(usize::from(index)).cloned().unwrap_or(Slot::Empty)
    }

    fn write(&mut self, index: Ix, contents: Slot<I>) {
        let index = usize::from(index);
        if index >= self.len() {
            self.resize(index + 1, Slot::Empty);
        }
        self[index] = contents;
    }

    fn order(&self) -> Vec<Ix> {
        // Positions beyond the index range are unreachable through this interface.
        (0..self.len().min(usize::from(Ix::MAX) + 1))
            .map(|position| position as Ix)
            .collect()
    }
}

/// Sparse storage: absent keys read as empty, and writing [`Slot::Empty`]
/// removes the entry, so the map holds exactly the occupied slots.
///
/// Enumeration order is ascending slot index.
impl<I: Item> Container for BTreeMap<Ix, Slot<I>> {
    type Item = I;

    fn read(&self, index: Ix) -> Slot<I> {
        self.get(&index).cloned().unwrap_or(Slot::Empty)
    }

    fn write(&mut self, index: Ix, contents: Slot<I>) {
        if contents.is_empty() {
            self.remove(&index);
        } else {
            self.insert(index, contents);
        }
    }

    fn order(&self) -> Vec<Ix> {
        self.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stack;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn vec_read_out_of_range_is_empty() {
        let v = vec![stack(1, "amber")];
        assert_eq!(v.read(0), stack(1, "amber"));
        assert_eq!(v.read(7), Slot::Empty);
    }

    #[test]
    fn vec_write_grows_with_empty_padding() {
        let mut v = vec![stack(1, "amber")];
        v.write(3, stack(2, "beryl"));
        assert_eq!(
            v,
            vec![stack(1, "amber"), Slot::Empty, Slot::Empty, stack(2, "beryl")]
        );
        assert_eq!(v.order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn map_absent_reads_empty_and_empty_write_removes() {
        let mut m = BTreeMap::from([(4, stack(1, "amber")), (9, stack(2, "beryl"))]);
        assert_eq!(m.read(5), Slot::Empty);
        assert_eq!(m.read(9), stack(2, "beryl"));

        m.write(4, Slot::Empty);
        assert!(!m.contains_key(&4));
        assert_eq!(m.read(4), Slot::Empty);

        m.write(2, stack(3, "amber"));
        assert_eq!(m.order(), vec![2, 9]);
    }
}
