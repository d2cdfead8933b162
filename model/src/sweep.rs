use std::ops::AddAssign;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays after load at which the branding sweep is repeated.
///
/// The immediate sweep on load is not part of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSchedule {
    pub delays_ms: Vec<u32>,
}

impl Default for SweepSchedule {
    fn default() -> Self {
        Self { delays_ms: vec![1000, 3000, 5000] }
    }
}

impl SweepSchedule {
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.delays_ms.iter().map(|ms| Duration::from_millis(u64::from(*ms)))
    }

    pub fn len(&self) -> usize {
        self.delays_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays_ms.is_empty()
    }
}

/// Number of elements hidden by one sweep, per heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub links: usize,
    pub elements: usize,
    pub images: usize,
}

impl SweepReport {
    pub fn total(&self) -> usize {
        self.links + self.elements + self.images
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for SweepReport {
    fn add_assign(&mut self, rhs: Self) {
        self.links += rhs.links;
        self.elements += rhs.elements;
        self.images += rhs.images;
    }
}
