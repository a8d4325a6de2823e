//! LRU (Least Recently Used) replacement.
//!
//! Same queue discipline as FIFO with one addition: a hit moves the page to
//! the most-recently-used end, so the front of the queue always holds the
//! page with the oldest *use*, not the oldest *load*.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;

/// LRU frame set: resident pages ordered oldest-use-first.
pub struct LruFrames {
    /// Resident pages, front = least recently used, back = most recent.
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl LruFrames {
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

    /// Mark a resident `page` as most recently used.
    ///
    /// Called on every hit. The linear scan is fine at simulation scale
    /// (the queue never exceeds the frame capacity).
    pub fn touch(&mut self, page: PageId) {
        if let Some(idx) = self.queue.iter().position(|&q| q == page) {
            let _ = self.queue.remove(idx);
            self.queue.push_back(page);
        }
    }

    /// Load `page` after a fault, evicting the least recently used page if
    /// the set is full. Returns the evicted page, if any.
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
