//! FIFO (First-In-First-Out) replacement.
//!
//! Evicts the page that has been resident longest, irrespective of how
//! recently it was used. Hits never reorder the queue; that is the whole
//! difference from LRU.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;

/// FIFO frame set: resident pages ordered oldest-first.
pub struct FifoFrames {
    /// Resident pages in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl FifoFrames {
    /// Create an empty frame set with room for `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Check whether `page` is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no page is resident yet.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Load `page` after a fault, evicting the oldest resident page if the
    /// set is full. Returns the evicted page, if any.
    pub fn load(&mut self, page: PageId) -> Option<PageId> {
        let evicted = if self.queue.len() == self.capacity {
            let victim = self.queue.pop_front();
            if let Some(v) = victim {
                self.resident.remove(&v);
            }
            victim
        } else {
            None
        };

        self.queue.push_back(page);
        self.resident.insert(page);
        debug_assert!(self.queue.len() <= self.capacity);

        evicted
    }
}
