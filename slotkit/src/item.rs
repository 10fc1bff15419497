//! [`Item`]: what containers know about the things they store.

use core::fmt;
use core::num::NonZeroU16;

/// Capabilities an item type must provide for stacking and matching.
///
/// Full equality (`Eq`) compares whole items, per-instance state included;
/// two items are *stackable together* exactly when they are equal. The
/// [`Key`](Self::Key) projection is the coarser identity used for header
/// matching: it must ignore any per-instance state that does not affect
/// what kind of thing the item is.
pub trait Item: Clone + Eq + fmt::Debug {
    /// Identity used for kind-only matching, independent of quantity and of
    /// per-instance state.
    type Key: Clone + Eq + fmt::Debug;

    /// Returns the key under which this item matches.
    fn key(&self) -> Self::Key;

    /// Maximum number of this item that one slot may hold.
    fn stack_limit(&self) -> NonZeroU16;
}
