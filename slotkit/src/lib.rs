//! Slot-addressed inventory storage: containers of item stacks, ordered
//! bidirectional views over chosen slots, and stacking-aware
//! count / capacity / take / give operations.
//!
//! The crate is split into two layers:
//!
//! * [`Cursor`] operations mutate a [`Container`] in place, scanning slots in a
//!   caller-chosen order and reporting partial success through return values.
//! * [`Snapshot`] planning is pure: it computes [`Patch`]es describing the
//!   writes an operation *would* make, which a [`Transaction`] can accumulate
//!   and commit all-or-nothing.
//!
//! Insufficient quantity and insufficient space are ordinary outcomes here,
//! not errors: every operation reports how much it actually moved, and the
//! caller decides what to do with shortfall or leftover.
//!
//! # Example
//!
//! ```
//! use core::num::NonZeroU16;
//! use slotkit::{Cursor, Item, Matcher, Slot};
//!
//! #[derive(Clone, Debug, Eq, PartialEq)]
//! struct Gem(&'static str);
//! impl Item for Gem {
//!     type Key = &'static str;
//!     fn key(&self) -> Self::Key {
//!         self.0
//!     }
//!     fn stack_limit(&self) -> NonZeroU16 {
//!         NonZeroU16::new(64).unwrap()
//!     }
//! }
//!
//! let mut chest = vec![
//!     Slot::stack(3, Gem("amber")),
//!     Slot::Empty,
//!     Slot::stack(10, Gem("beryl")),
//! ];
//!
//! // Take up to five ambers; only three exist, and that is not an error.
//! let outcome = Cursor::new(&mut chest).take(Matcher::Key(&"amber"), 5);
//! assert_eq!(outcome.taken, 3);
//! assert_eq!(chest[0], Slot::Empty);
//!
//! // Give 70 ambers: slot 0 fills to the stack limit, slot 1 takes the rest.
//! let outcome = Cursor::new(&mut chest).give(Slot::stack(70, Gem("amber")));
//! assert_eq!(outcome.placed, 70);
//! assert_eq!((chest[0].count(), chest[1].count()), (64, 6));
//! ```

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(not(test), warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc))]

#[cfg(any(test, feature = "arbitrary"))]
extern crate std;
extern crate alloc;

mod container;
pub use container::*;
mod cursor;
pub use cursor::*;
mod item;
pub use item::*;
mod matching;
pub use matching::*;
mod patch;
pub use patch::*;
mod slot;
pub use slot::*;
mod snapshot;
pub use snapshot::*;
mod transaction;
pub use transaction::*;

#[cfg(test)]
mod testing;

/// Index/address of an inventory slot.
///
/// This is currently a type alias, but future versions may make it a struct.
/// It will always be convertible to [`usize`].
//---
// Design note: u16 is big enough for all reasonable inventories and small enough
// that it avoids practically-unbounded computations and memory usage.
pub type Ix = u16;
