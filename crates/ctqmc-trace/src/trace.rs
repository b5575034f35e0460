//! The time-ordered operator registry
//!
//! `OperatorTrace` holds the active operator set of one simulation worker,
//! keyed by the tie-broken time so that range reads come back in the exact
//! order the weight computation consumes them. Every mutation either
//! succeeds completely or reports a hard error: a silently dropped or
//! duplicated operator would corrupt every subsequent measurement with no
//! detectable symptom, so there is no silent-continue path.

use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::ops::{Bound, RangeBounds};

use ctqmc_core::{CoreError, CoreResult, Operator, OperatorTime};

use crate::{Action, ChangeRecord};

/// Unique-key, time-ordered set of operators.
///
/// One instance per worker, single-threaded by design. Replica exchange
/// between workers clones whole traces rather than sharing one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperatorTrace {
    ops: BTreeMap<OperatorTime, Operator>,
}

impl OperatorTrace {
    #[inline]
    pub fn new() -> Self {
        OperatorTrace::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True iff a stored operator compares fully equal to `op`.
    ///
    /// A key occupied by a different (kind, channel) payload does not count:
    /// that situation means the caller's picture of the trace is stale.
    #[inline]
    pub fn contains(&self, op: &Operator) -> bool {
        self.ops.get(&op.time()).is_some_and(|stored| stored == op)
    }

    /// Insert one operator at its time key.
    ///
    /// Fails with [`CoreError::DuplicateKey`] if the key is occupied,
    /// leaving the trace unchanged. A collision means the proposal mapped
    /// two operators to one key, which is a logic error in move
    /// construction, not a samplable outcome.
    pub fn insert(&mut self, op: Operator) -> CoreResult<()> {
        match self.ops.entry(op.time()) {
            Entry::Occupied(occupied) => {
                tracing::error!(
                    "insert collision at {}: trying {}, occupied by {}",
                    op.time(),
                    op,
                    occupied.get()
                );
                Err(CoreError::DuplicateKey(op.time()))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(op);
                Ok(())
            }
        }
    }

    /// Insert each operator in order.
    ///
    /// NOT atomic: on a mid-batch [`CoreError::DuplicateKey`] the earlier
    /// successful inserts remain applied and the failure is returned.
    /// Callers that need rollback must use
    /// [`insert_batch_recording`](Self::insert_batch_recording).
    pub fn insert_batch(&mut self, ops: &[Operator]) -> CoreResult<()> {
        for op in ops {
            self.insert(*op)?;
        }
        Ok(())
    }

    /// Insert each operator in order, appending an [`Action::Insertion`]
    /// entry to `record` per success.
    ///
    /// Stops (without rolling back) at the first failure; `record` then
    /// holds exactly the successful prefix, so [`revert`](Self::revert)
    /// still restores the pre-batch state.
    pub fn insert_batch_recording(
        &mut self,
        ops: &[Operator],
        record: &mut ChangeRecord,
    ) -> CoreResult<()> {
        for op in ops {
            self.insert(*op)?;
            record.push(*op, Action::Insertion);
        }
        Ok(())
    }

    /// Remove the stored operator fully equal to `op`.
    ///
    /// Fails with [`CoreError::NotFound`] if the key is vacant or holds a
    /// different operator; either way the trace no longer matches the
    /// caller's assumptions and the trace is left unchanged.
    pub fn erase(&mut self, op: &Operator) -> CoreResult<()> {
        match self.ops.get(&op.time()) {
            Some(stored) if stored == op => {
                self.ops.remove(&op.time());
                Ok(())
            }
            Some(stored) => {
                tracing::error!("erase mismatch at {}: wanted {}, found {}", op.time(), op, stored);
                Err(CoreError::NotFound(op.time()))
            }
            None => {
                tracing::error!("erase target not found: {}", op);
                Err(CoreError::NotFound(op.time()))
            }
        }
    }

    /// Erase each operator in order. NOT atomic, like
    /// [`insert_batch`](Self::insert_batch).
    pub fn erase_batch(&mut self, ops: &[Operator]) -> CoreResult<()> {
        for op in ops {
            self.erase(op)?;
        }
        Ok(())
    }

    /// Erase each operator in order, appending an [`Action::Removal`]
    /// entry to `record` per success. Stops at the first failure with the
    /// successful prefix recorded.
    pub fn erase_batch_recording(
        &mut self,
        ops: &[Operator],
        record: &mut ChangeRecord,
    ) -> CoreResult<()> {
        for op in ops {
            self.erase(op)?;
            record.push(*op, Action::Removal);
        }
        Ok(())
    }

    /// Undo a recorded batch by replaying it in strict reverse order: an
    /// insertion is undone by removing that key, a removal by re-inserting
    /// the operator. Consumes the record.
    ///
    /// Precondition (caller-enforced, not checked): the trace has not been
    /// mutated out-of-band since the record was captured. Under that
    /// precondition every reverse step applies cleanly and the pre-batch
    /// operator set is restored exactly.
    pub fn revert(&mut self, record: ChangeRecord) {
        for (op, action) in record.entries().iter().rev() {
            match action {
                Action::Insertion => {
                    self.ops.remove(&op.time());
                }
                Action::Removal => {
                    self.ops.insert(op.time(), *op);
                }
            }
        }
    }

    /// Operators with keys in `range`, ascending by the full key order.
    ///
    /// Endpoint inclusivity is the caller's choice via standard range
    /// syntax over [`OperatorTime`] bounds.
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = &Operator>
    where
        R: RangeBounds<OperatorTime>,
    {
        self.ops.range(range).map(|(_, op)| op)
    }

    /// Operators whose real time lies in the inclusive interval `[lo, hi]`,
    /// across all tie-break indices, ascending. Empty if `lo > hi`.
    pub fn window(&self, lo: f64, hi: f64) -> impl Iterator<Item = &Operator> {
        let start = OperatorTime::first_at(lo);
        let bounds = if lo <= hi {
            (
                Bound::Included(start),
                Bound::Included(OperatorTime::last_at(hi)),
            )
        } else {
            (Bound::Included(start), Bound::Excluded(start))
        };
        self.ops.range(bounds).map(|(_, op)| op)
    }

    /// All operators in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.ops.values()
    }
}

/// Diagnostic rendering of the full ordered sequence. Advisory only.
impl fmt::Display for OperatorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trace:")?;
        for op in self.ops.values() {
            write!(f, " {}", op)?;
        }
        Ok(())
    }
}
