//! Optimal (Belady) replacement.
//!
//! On each full-fault, evicts the resident page whose next use lies
//! farthest in the future; a page that is never used again counts as
//! infinitely far. This needs the full reference string, which a
//! simulator has, and gives the theoretical minimum fault count, so it
//! serves as the baseline the other policies are measured against.

use crate::common::PageId;

/// Belady frame set: resident pages kept in insertion order.
///
/// The order carries the tie-break rule: among equally distant victims,
/// the page that entered the set earliest is evicted. Keeping the rule
/// fixed makes eviction choices reproducible run over run.
pub struct OptimalFrames {
    /// Resident pages in insertion order.
    resident: Vec<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl OptimalFrames {
    /// Create an empty frame set with room for `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            resident: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Check whether `page` is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Whether no page is resident yet.
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Load `page` after the fault at position `pos`, evicting the
    /// farthest-next-use resident if the set is full. Returns the evicted
    /// page, if any.
    ///
    /// The forward scan per resident page is O(n); fine at simulation
    /// scale. A single backward pass precomputing next-use indices would
    /// bring an eviction to O(k) if this were ever reused on large inputs.
    pub fn load(&mut self, page: PageId, pos: usize, refs: &[PageId]) -> Option<PageId> {
        let evicted = if self.resident.len() == self.capacity {
            let victim_idx = self.pick_victim(pos, refs);
            Some(self.resident.remove(victim_idx))
        } else {
            None
        };

        self.resident.push(page);
        debug_assert!(self.resident.len() <= self.capacity);

        evicted
    }

    /// Index of the resident page with the farthest next use after `pos`.
    ///
    /// Strict `>` keeps the first maximum, so ties go to the earliest
    /// inserted page.
    fn pick_victim(&self, pos: usize, refs: &[PageId]) -> usize {
        let mut victim_idx = 0;
        let mut victim_dist = next_use(refs, pos, self.resident[0]);

        for (idx, &page) in self.resident.iter().enumerate().skip(1) {
            let dist = next_use(refs, pos, page);
            if dist > victim_dist {
                victim_idx = idx;
                victim_dist = dist;
            }
        }

        victim_idx
    }
}

/// Index of the first occurrence of `page` strictly after `pos`, or
/// `usize::MAX` when the page is never referenced again.
fn next_use(refs: &[PageId], pos: usize, page: PageId) -> usize {
    refs[pos + 1..]
        .iter()
        .position(|&r| r == page)
        .map_or(usize::MAX, |offset| pos + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PageId {
        PageId::new(id)
    }

    fn refs(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_next_use_finds_first_future_occurrence() {
        let r = refs(&[1, 2, 1, 3, 1]);
        assert_eq!(next_use(&r, 0, p(1)), 2);
        assert_eq!(next_use(&r, 2, p(1)), 4);
        assert_eq!(next_use(&r, 0, p(3)), 3);
    }

    #[test]
    fn test_next_use_absent_is_infinite() {
        let r = refs(&[1, 2, 3]);
        assert_eq!(next_use(&r, 0, p(9)), usize::MAX);
        assert_eq!(next_use(&r, 2, p(1)), usize::MAX);
    }

    #[test]
    fn test_optimal_evicts_farthest() {
        // At pos 2 the future is [.., 1, 2]: 1 returns sooner than 2,
        // and 3 is the page being loaded.
        let r = refs(&[1, 2, 3, 1, 2]);
        let mut frames = OptimalFrames::new(2);
        frames.load(p(1), 0, &r);
        frames.load(p(2), 1, &r);

        assert_eq!(frames.load(p(3), 2, &r), Some(p(2)));
        assert!(frames.contains(p(1)));
        assert!(frames.contains(p(3)));
    }

    #[test]
    fn test_optimal_prefers_never_used_again() {
        // 2 never appears after pos 2; 1 does.
        let r = refs(&[1, 2, 3, 1]);
        let mut frames = OptimalFrames::new(2);
        frames.load(p(1), 0, &r);
        frames.load(p(2), 1, &r);

        assert_eq!(frames.load(p(3), 2, &r), Some(p(2)));
    }

    #[test]
    fn test_optimal_tie_break_is_first_inserted() {
        // Neither 1 nor 2 is ever used again: both infinitely distant,
        // the earlier insertion (1) must go.
        let r = refs(&[1, 2, 3]);
        let mut frames = OptimalFrames::new(2);
        frames.load(p(1), 0, &r);
        frames.load(p(2), 1, &r);

        assert_eq!(frames.load(p(3), 2, &r), Some(p(1)));
    }

    #[test]
    fn test_optimal_never_exceeds_capacity() {
        let r = refs(&[1, 2, 3, 4, 5, 6]);
        let mut frames = OptimalFrames::new(2);
        for (pos, &page) in r.iter().enumerate() {
            frames.load(page, pos, &r);
            assert!(frames.len() <= 2);
        }
    }
}
