//! Heap accounting for a single search run.

use cap::Cap;
use std::alloc::System;

#[global_allocator]
pub static ALLOCATOR: Cap<System> = Cap::new(System, usize::MAX);

/// Heap usage attributed to one search, relative to the moment the probe was
/// created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Still allocated when the search returned.
    pub retained_bytes: usize,
    /// Highest level observed while the search was running.
    pub peak_bytes: usize,
}

/// Samples the counting allocator. The peak is only as fine-grained as the
/// calls to [`MemoryProbe::sample`], which the run observer makes on every
/// step event.
#[derive(Debug)]
pub struct MemoryProbe {
    baseline: usize,
    peak: usize,
}

impl MemoryProbe {
    pub fn start() -> Self {
        let baseline = ALLOCATOR.allocated();
        Self {
            baseline,
            peak: baseline,
        }
    }

    pub fn sample(&mut self) {
        self.peak = self.peak.max(ALLOCATOR.allocated());
    }

    pub fn finish(mut self) -> MemoryUsage {
        self.sample();
        MemoryUsage {
            retained_bytes: ALLOCATOR.allocated().saturating_sub(self.baseline),
            peak_bytes: self.peak.saturating_sub(self.baseline),
        }
    }
}
