//! Change records for recorded batch mutation
//!
//! A record is an append-only log of the mutations one batch applied, sized
//! to the batch rather than the trace. It is the only undo facility: a
//! rejected move replays its record in reverse instead of restoring a
//! snapshot, trading O(batch) reversal for O(1) per-mutation bookkeeping.

use ctqmc_core::Operator;

/// What a recorded entry did to the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Insertion,
    Removal,
}

/// Ordered log of (operator, action) pairs from one recorded batch.
///
/// Owned by the caller for the accept/reject window of a single move:
/// dropped on accept, consumed by [`OperatorTrace::revert`] on reject.
/// Only the recording mutation paths append to it.
///
/// [`OperatorTrace::revert`]: crate::OperatorTrace::revert
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeRecord {
    entries: Vec<(Operator, Action)>,
}

impl ChangeRecord {
    #[inline]
    pub fn new() -> Self {
        ChangeRecord::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, op: Operator, action: Action) {
        self.entries.push((op, action));
    }

    /// Recorded entries in application order.
    #[inline]
    pub fn entries(&self) -> &[(Operator, Action)] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all entries, keeping the allocation for the next batch.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctqmc_core::{OperatorKind, OperatorTime};

    #[test]
    fn test_record_keeps_application_order() {
        let a = Operator::new(OperatorTime::from_time(1.0), OperatorKind::Creation, 0);
        let b = Operator::new(OperatorTime::from_time(2.0), OperatorKind::Annihilation, 1);

        let mut record = ChangeRecord::new();
        record.push(b, Action::Removal);
        record.push(a, Action::Insertion);

        assert_eq!(record.len(), 2);
        assert_eq!(record.entries()[0], (b, Action::Removal));
        assert_eq!(record.entries()[1], (a, Action::Insertion));
    }

    #[test]
    fn test_clear_empties_record() {
        let a = Operator::new(OperatorTime::from_time(1.0), OperatorKind::Creation, 0);
        let mut record = ChangeRecord::new();
        record.push(a, Action::Insertion);
        record.clear();
        assert!(record.is_empty());
    }
}
