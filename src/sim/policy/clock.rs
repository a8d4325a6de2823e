//! Clock (second-chance) replacement.
//!
//! Frames form a circular buffer swept by a rotating hand. Each slot
//! carries a referenced bit; a set bit buys its page one extra sweep
//! (the "second chance") before eviction.
//!
//! ```text
//!        [0]      [1]      [2]      [3]
//!       ┌────┐   ┌────┐   ┌────┐   ┌────┐
//!       │ 7* │   │ 0  │   │ 1* │   │ 2  │      * = referenced bit set
//!       └────┘   └────┘   └────┘   └────┘
//!                  ▲
//!                 hand
//! ```
//!
//! The bit is set when a page is loaded and never on a hit. The canonical
//! second-chance algorithm also sets it on every access; this simulator
//! deliberately keeps the load-only variant so fault counts reproduce the
//! tool it models. Do not "fix" this without recomputing every expected
//! count.

use crate::common::PageId;

/// Clock frame set: slot array, parallel referenced bits, rotating hand.
pub struct ClockFrames {
    /// Resident pages by slot index. Grows to `capacity` during the
    /// initial fill, then stays fixed; slots are overwritten in place.
    slots: Vec<PageId>,

    /// Referenced bit per slot, parallel to `slots`.
    referenced: Vec<bool>,

    /// Next slot the sweep examines. Persists across faults within a run.
    hand: usize,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl ClockFrames {
    /// Create an empty frame set with room for `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            slots: Vec::with_capacity(capacity),
            referenced: vec![false; capacity],
            hand: 0,
            capacity,
        }
    }

    /// Check whether `page` is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no page is resident yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current hand position.
    #[cfg(test)]
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Load `page` after a fault. Sweeps from the hand: referenced slots
    /// lose their bit and are passed over; the first unreferenced slot
    /// receives the page (appended while the set is still filling,
    /// replaced in place once full). The placed slot's bit is set and the
    /// hand moves one position past it. Returns the evicted page, if any.
    ///
    /// Terminates within 2 x capacity steps: the first lap clears every
    /// set bit it visits, so the second lap must find a clear one.
    pub fn load(&mut self, page: PageId) -> Option<PageId> {
        loop {
            if self.referenced[self.hand] {
                // Second chance: clear and keep sweeping.
                self.referenced[self.hand] = false;
                self.hand = (self.hand + 1) % self.capacity;
                continue;
            }

            let evicted = if self.slots.len() == self.capacity {
                Some(std::mem::replace(&mut self.slots[self.hand], page))
            } else {
                // Still filling: the hand always sits on the first empty
                // slot, because bits are only ever set on occupied slots.
                debug_assert_eq!(self.hand, self.slots.len());
                self.slots.push(page);
                None
            };

            self.referenced[self.hand] = true;
            self.hand = (self.hand + 1) % self.capacity;
            debug_assert!(self.slots.len() <= self.capacity);

            return evicted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_clock_fills_slots_in_order() {
        let mut frames = ClockFrames::new(3);
        assert_eq!(frames.load(p(7)), None);
        assert_eq!(frames.load(p(0)), None);
        assert_eq!(frames.load(p(1)), None);

        assert_eq!(frames.len(), 3);
        assert!(frames.contains(p(7)));
        assert!(frames.contains(p(0)));
        assert!(frames.contains(p(1)));
    }

    #[test]
    fn test_clock_hand_advances_one_per_unreferenced_load() {
        let mut frames = ClockFrames::new(3);

        // Each load lands on an unreferenced slot: exactly one net step.
        assert_eq!(frames.hand(), 0);
        frames.load(p(1));
        assert_eq!(frames.hand(), 1);
        frames.load(p(2));
        assert_eq!(frames.hand(), 2);
        frames.load(p(3));
        assert_eq!(frames.hand(), 0);
    }

    #[test]
    fn test_clock_second_chance_spares_referenced_page() {
        let mut frames = ClockFrames::new(2);
        frames.load(p(1));
        frames.load(p(2));

        // Both bits set: the sweep clears 1 and 2, wraps, and evicts 1.
        // The fresh load of 3 re-sets slot 0's bit, so the next fault
        // finds slot 1 (page 2) unreferenced and spares 3.
        assert_eq!(frames.load(p(3)), Some(p(1)));
        assert_eq!(frames.load(p(4)), Some(p(2)));

        assert!(frames.contains(p(3)));
        assert!(frames.contains(p(4)));
    }

    #[test]
    fn test_clock_full_sweep_costs_one_extra_lap() {
        let mut frames = ClockFrames::new(3);
        frames.load(p(1));
        frames.load(p(2));
        frames.load(p(3));
        assert_eq!(frames.hand(), 0);

        // All three bits set: clear 0, 1, 2, wrap to 0, place there.
        assert_eq!(frames.load(p(4)), Some(p(1)));
        assert_eq!(frames.hand(), 1);
    }

    #[test]
    fn test_clock_capacity_one() {
        let mut frames = ClockFrames::new(1);
        assert_eq!(frames.load(p(1)), None);
        assert_eq!(frames.load(p(2)), Some(p(1)));
        assert_eq!(frames.load(p(3)), Some(p(2)));
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_clock_never_exceeds_capacity() {
        let mut frames = ClockFrames::new(3);
        for id in 0..12 {
            frames.load(p(id));
            assert!(frames.len() <= 3);
        }
    }
}
