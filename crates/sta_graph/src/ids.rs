//! Opaque ID newtype for edges in the timing DAG.

use serde::{Deserialize, Serialize};

/// Opaque, copyable ID for an edge in the [`TimingDag`](crate::TimingDag).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimingEdgeId(u32);

impl TimingEdgeId {
    /// Creates an edge ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
