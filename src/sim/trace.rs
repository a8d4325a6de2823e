//! The per-reference page sequence produced by a run.

use std::fmt;

use crate::common::PageId;

/// One entry per reference-string position: `Some(page)` when the
/// reference faulted and `page` was loaded, `None` when it hit.
///
/// The distinction matters downstream: a hit must render as "no point",
/// never as page 0, so consumers can tell a hit apart from a fault on a
/// page whose id happens to be 0. [`Display`] prints hits as `-` for the
/// same reason.
///
/// A trace is built once during a run and immutable afterwards.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    entries: Vec<Option<PageId>>,
}

impl Trace {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            entries: Vec::with_capacity(len),
        }
    }

    /// Record a fault that loaded `page` at the next position.
    pub(crate) fn record_fault(&mut self, page: PageId) {
        self.entries.push(Some(page));
    }

    /// Record a hit at the next position.
    pub(crate) fn record_hit(&mut self) {
        self.entries.push(None);
    }

    /// All entries, in reference-string order.
    pub fn entries(&self) -> &[Option<PageId>] {
        &self.entries
    }

    /// Number of entries (equals the reference string length after a run).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trace holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<PageId>> {
        self.entries.iter()
    }

    /// Number of faults recorded (entries holding a page).
    pub fn fault_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match entry {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Option<PageId>;
    type IntoIter = std::slice::Iter<'a, Option<PageId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_records_in_order() {
        let mut trace = Trace::with_capacity(3);
        trace.record_fault(PageId::new(7));
        trace.record_hit();
        trace.record_fault(PageId::new(0));

        assert_eq!(
            trace.entries(),
            &[Some(PageId::new(7)), None, Some(PageId::new(0))]
        );
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.fault_count(), 2);
    }

    #[test]
    fn test_trace_display_marks_hits() {
        let mut trace = Trace::with_capacity(4);
        trace.record_fault(PageId::new(7));
        trace.record_hit();
        trace.record_fault(PageId::new(0));
        trace.record_hit();

        // A hit is "-", never "0": page 0 faults must stay distinguishable.
        assert_eq!(format!("{}", trace), "7 - 0 -");
    }

    #[test]
    fn test_trace_empty() {
        let trace = Trace::default();
        assert!(trace.is_empty());
        assert_eq!(format!("{}", trace), "");
    }
}
