//! Item types shared by the unit tests.

use core::num::NonZeroU16;

use crate::{Item, Slot};

/// Test item whose stacking identity is `id` and whose per-instance state is
/// `note` (think damage or an engraving: same kind, not stackable together).
#[derive(Clone, Eq, Hash, PartialEq)]
pub(crate) struct Block {
    pub id: &'static str,
    pub note: &'static str,
}

impl Block {
    pub fn new(id: &'static str) -> Self {
        Block { id, note: "" }
    }

    pub fn with_note(id: &'static str, note: &'static str) -> Self {
        Block { id, note }
    }
}

impl Item for Block {
    type Key = &'static str;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn stack_limit(&self) -> NonZeroU16 {
        match self.id {
            "anvil" => NonZeroU16::MIN,
            _ => NonZeroU16::new(64).unwrap(),
        }
    }
}

impl core::fmt::Debug for Block {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.note.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.id, self.note)
        }
    }
}

/// Shorthand for a stack of plain blocks.
pub(crate) fn stack(count: u16, id: &'static str) -> Slot<Block> {
    Slot::stack(count, Block::new(id))
}
