//! Scalar and override inputs to a timing-analysis run.

use std::collections::HashMap;
use sta_common::NetId;

/// Default tolerance for arrival-time tie-breaking during the forward sweep.
pub const DEFAULT_EPS: f64 = 1e-12;

/// The scalar and per-net inputs to one timing-analysis run.
#[derive(Debug, Clone)]
pub struct TimingParams {
    /// Clock period, in seconds.
    pub tclk: f64,
    /// Setup time, in seconds. Endpoint required times default to `tclk - setup`.
    pub setup: f64,
    /// Clock-to-Q delay, in seconds. Startpoint arrival times default to this value.
    pub clock_to_q: f64,
    /// Per-net arrival-time overrides, applied after the default seed.
    pub startpoint_overrides: HashMap<NetId, f64>,
    /// Per-net required-time overrides, applied after the default seed.
    pub endpoint_overrides: HashMap<NetId, f64>,
    /// Tolerance for arrival-time tie detection in the forward sweep.
    pub eps: f64,
}

impl TimingParams {
    /// Creates timing parameters with the given scalars, no overrides, and
    /// the default epsilon tolerance.
    pub fn new(tclk: f64, setup: f64, clock_to_q: f64) -> Self {
        Self {
            tclk,
            setup,
            clock_to_q,
            startpoint_overrides: HashMap::new(),
            endpoint_overrides: HashMap::new(),
            eps: DEFAULT_EPS,
        }
    }
}
