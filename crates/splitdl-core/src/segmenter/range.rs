//! Part ranges and plan construction.

use crate::error::DownloadError;

/// One planned byte range `[from, to]` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRange {
    pub index: usize,
    pub from: u64,
    pub to: u64,
}

impl PartRange {
    /// Number of bytes covered by this range.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.to - self.from + 1
        }
    }

    /// True only for an inverted range; planned ranges are never empty.
    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    /// HTTP `Range` header value: `bytes=from-to`.
    pub fn range_header_value(&self) -> String {
        format!("bytes={}-{}", self.from, self.to)
    }
}

/// Ordered, contiguous, non-overlapping ranges covering `[0, total_size - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPlan {
    total_size: u64,
    parts: Vec<PartRange>,
}

impl PartPlan {
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[PartRange] {
        &self.parts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartRange> {
        self.parts.iter()
    }
}

impl<'a> IntoIterator for &'a PartPlan {
    type Item = &'a PartRange;
    type IntoIter = std::slice::Iter<'a, PartRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// Splits `total_size` bytes into `part_count` ranges.
///
/// Every part but the last gets `total_size / part_count` bytes; the last part
/// runs to `total_size - 1` and absorbs the remainder. Fails with
/// `InvalidPlan` when either input is zero or there are more parts than bytes.
pub fn plan_parts(total_size: u64, part_count: usize) -> Result<PartPlan, DownloadError> {
    if total_size == 0 || part_count == 0 || part_count as u64 > total_size {
        return Err(DownloadError::InvalidPlan {
            total_size,
            part_count,
        });
    }

    let each_size = total_size / part_count as u64;
    let last = part_count - 1;
    let mut parts: Vec<PartRange> = Vec::with_capacity(part_count);

    for index in 0..part_count {
        let from = parts.last().map_or(0, |prev| prev.to + 1);
        let to = if index == last {
            total_size - 1
        } else {
            from + each_size - 1
        };
        parts.push(PartRange { index, from, to });
    }

    Ok(PartPlan { total_size, parts })
}
