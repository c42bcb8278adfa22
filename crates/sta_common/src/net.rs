//! Interned net identifiers for cheap cloning and O(1) equality comparison.
//!
//! A [`Net`] is identified by its verbatim textual name (plain or escaped Verilog
//! identifier). Rather than threading `String`s through the graph and every analysis
//! pass, net names are interned once into an opaque [`NetId`], so that `AT`, `RT`,
//! back-predecessor, and in-degree arrays can be index-keyed `Vec`s instead of
//! hash maps.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// A unique identifier for a net, interned from its textual name.
///
/// `NetId`s are `Copy`, `Hash`, and comparable in O(1); the underlying string is
/// recovered via [`Interner::resolve`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NetId(u32);

impl NetId {
    /// Creates a `NetId` from a raw `u32` index.
    ///
    /// Primarily intended for deserialization and testing. In normal use, identifiers
    /// are created through [`Interner::get_or_intern`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this identifier.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `NetId` wraps a `u32` which is always a valid `usize` on 32-bit and 64-bit
// platforms. `try_from_usize` rejects values that don't fit in `u32`.
unsafe impl lasso::Key for NetId {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(NetId)
    }
}

/// Thread-safe string interner mapping net names to [`NetId`]s.
///
/// Two nets with the same verbatim string (including any `[i]` subscript, and
/// distinguishing escaped from plain forms since the backslash is part of the
/// string) intern to the same `NetId`.
pub struct Interner {
    rodeo: ThreadedRodeo<NetId>,
}

impl Interner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a net name, returning its [`NetId`]. If the name was already
    /// interned, returns the existing identifier without allocating.
    pub fn get_or_intern(&self, name: &str) -> NetId {
        self.rodeo.get_or_intern(name)
    }

    /// Resolves a [`NetId`] back to its net name.
    ///
    /// # Panics
    ///
    /// Panics if the `NetId` was not created by this interner.
    pub fn resolve(&self, id: NetId) -> &str {
        self.rodeo.resolve(&id)
    }

    /// Returns the number of distinct nets interned so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no nets have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_resolve_roundtrip() {
        let interner = Interner::new();
        let id = interner.get_or_intern("\\acc[0] ");
        assert_eq!(interner.resolve(id), "\\acc[0] ");
    }

    #[test]
    fn same_string_same_id() {
        let interner = Interner::new();
        let a = interner.get_or_intern("n42");
        let b = interner.get_or_intern("n42");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_different_ids() {
        let interner = Interner::new();
        let a = interner.get_or_intern("foo");
        let b = interner.get_or_intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn escaped_and_plain_never_collide() {
        let interner = Interner::new();
        let escaped = interner.get_or_intern("\\n0");
        let plain = interner.get_or_intern("n0");
        assert_ne!(escaped, plain);
    }

    #[test]
    fn len_tracks_distinct_nets() {
        let interner = Interner::new();
        assert!(interner.is_empty());
        interner.get_or_intern("a");
        interner.get_or_intern("b");
        interner.get_or_intern("a");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn net_id_serde_roundtrip() {
        let id = NetId::from_raw(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: NetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn net_id_ordering() {
        let a = NetId::from_raw(1);
        let b = NetId::from_raw(2);
        assert!(a < b);
    }
}
