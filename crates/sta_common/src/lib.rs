//! Shared foundational types used across the STA engine's crates.
//!
//! This crate provides interned net identifiers, content hashing for source-file
//! change detection, and the common internal-bug result type.

#![warn(missing_docs)]

pub mod hash;
pub mod net;
pub mod result;

pub use hash::ContentHash;
pub use net::{Interner, NetId};
pub use result::{InternalError, StaResult};
