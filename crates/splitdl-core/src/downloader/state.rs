//! Per-run download state: one write-once slot per planned part.

use std::sync::OnceLock;

use crate::error::DownloadError;
use crate::segmenter::{PartPlan, PartRange};

/// Bytes for exactly one planned range.
///
/// Construction enforces `data.len() == to - from + 1`, so a value of this
/// type is never a truncated part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartResult {
    range: PartRange,
    data: Vec<u8>,
}

impl PartResult {
    pub fn new(range: PartRange, data: Vec<u8>) -> Result<Self, DownloadError> {
        let received = data.len() as u64;
        if received != range.len() {
            return Err(DownloadError::LengthMismatch {
                index: range.index,
                expected: range.len(),
                received,
            });
        }
        Ok(Self { range, data })
    }

    pub fn index(&self) -> usize {
        self.range.index
    }

    pub fn from(&self) -> u64 {
        self.range.from
    }

    pub fn to(&self) -> u64 {
        self.range.to
    }

    pub fn range(&self) -> &PartRange {
        &self.range
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Plan plus one slot per part, filled as fetch tasks finish.
///
/// Slots are `OnceLock`s: each task publishes its own index exactly once and
/// later writes are rejected, so tasks share `&DownloadState` without locking.
#[derive(Debug)]
pub struct DownloadState {
    plan: PartPlan,
    slots: Vec<OnceLock<PartResult>>,
}

impl DownloadState {
    pub fn new(plan: PartPlan) -> Self {
        let slots = (0..plan.len()).map(|_| OnceLock::new()).collect();
        Self { plan, slots }
    }

    pub fn plan(&self) -> &PartPlan {
        &self.plan
    }

    pub fn total_size(&self) -> u64 {
        self.plan.total_size()
    }

    /// Stores `result` in its slot. Returns it back if the index is unknown,
    /// the range differs from the plan, or the slot is already filled.
    pub fn record(&self, result: PartResult) -> Result<(), PartResult> {
        let index = result.index();
        match (self.plan.parts().get(index), self.slots.get(index)) {
            (Some(planned), Some(slot)) if planned == result.range() => slot.set(result),
            _ => Err(result),
        }
    }

    pub fn get(&self, index: usize) -> Option<&PartResult> {
        self.slots.get(index).and_then(OnceLock::get)
    }

    /// Plan indices that have no result yet, ascending.
    pub fn missing(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.get().is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.get().is_some())
    }

    /// Slots in plan order (not completion order).
    pub fn parts_in_order(&self) -> impl Iterator<Item = Option<&PartResult>> + '_ {
        self.slots.iter().map(OnceLock::get)
    }
}
