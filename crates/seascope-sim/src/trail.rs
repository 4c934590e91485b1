//! Position-history trail.
//!
//! A bounded, newest-first sequence of target fixes with deadband-gated
//! insertion: a fix that differs from the latest entry by no more than 1°
//! of bearing and 0.1 nm of range is dropped, so a near-stationary target
//! cannot flood the trail with duplicates.

use std::collections::VecDeque;

use seascope_core::constants::{TRAIL_BEARING_DEADBAND_DEG, TRAIL_RANGE_DEADBAND_NM};
use seascope_core::types::TargetFix;

/// Bounded trail of past target fixes, newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryTrail {
    fixes: VecDeque<TargetFix>,
    max_len: usize,
}

impl HistoryTrail {
    pub fn new(max_len: usize) -> Self {
        Self {
            fixes: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The most recent fix, if any.
    pub fn latest(&self) -> Option<&TargetFix> {
        self.fixes.front()
    }

    /// Fixes newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &TargetFix> {
        self.fixes.iter()
    }

    /// Record a fix. The first fix is always kept; later fixes must clear
    /// the position deadband against the latest entry. Returns whether the
    /// fix was recorded. The oldest entry is evicted past capacity.
    pub fn push(&mut self, fix: TargetFix) -> bool {
        if self.max_len == 0 {
            return false;
        }
        if let Some(last) = self.fixes.front() {
            let bearing_moved = (fix.bearing_deg - last.bearing_deg).abs();
            let range_moved = (fix.range_nm - last.range_nm).abs();
            if bearing_moved <= TRAIL_BEARING_DEADBAND_DEG && range_moved <= TRAIL_RANGE_DEADBAND_NM
            {
                return false;
            }
        }
        self.fixes.push_front(fix);
        self.fixes.truncate(self.max_len);
        true
    }

    /// Resize the trail. Clears all fixes and resets the bound atomically;
    /// existing entries are never partially migrated.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
        self.fixes.clear();
    }

    pub fn clear(&mut self) {
        self.fixes.clear();
    }
}
