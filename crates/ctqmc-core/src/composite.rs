//! Equal-time composite operators
//!
//! A composite bundles `M` channel ids acting at one shared instant, e.g.
//! the c†c pairs of an equal-time density correlator. The stored time is
//! bookkeeping only: ordering and equality compare the channel tuple
//! lexicographically and never consult the time, so composites with the
//! same channel pattern deduplicate regardless of when they occur.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CoreError, CoreResult};

/// Time value carried by a composite built without an explicit instant.
pub const UNSET_COMPOSITE_TIME: f64 = -1.0;

/// Fixed-arity tuple of channels sharing one instant.
///
/// `M` is the full tuple length (`2N` for an N-pair correlator).
#[derive(Clone, Copy, Debug)]
pub struct EqualTimeOperator<const M: usize> {
    channels: [u32; M],
    time: f64,
}

/// Single c†c pair, the equal-time density-matrix case.
pub type PairOperator = EqualTimeOperator<2>;

impl<const M: usize> EqualTimeOperator<M> {
    #[inline]
    pub fn new(channels: [u32; M], time: f64) -> Self {
        EqualTimeOperator { channels, time }
    }

    /// Composite with no meaningful instant attached.
    #[inline]
    pub fn at(channels: [u32; M]) -> Self {
        EqualTimeOperator {
            channels,
            time: UNSET_COMPOSITE_TIME,
        }
    }

    /// Build from a raw buffer, which must hold exactly `M` channels.
    pub fn from_slice(channels: &[u32], time: f64) -> CoreResult<Self> {
        if channels.len() != M {
            return Err(CoreError::ArityMismatch {
                expected: M,
                actual: channels.len(),
            });
        }
        let mut tuple = [0u32; M];
        tuple.copy_from_slice(channels);
        Ok(EqualTimeOperator {
            channels: tuple,
            time,
        })
    }

    /// Channel at position `idx`, bounds-checked against the arity.
    #[inline]
    pub fn channel(&self, idx: usize) -> CoreResult<u32> {
        self.channels
            .get(idx)
            .copied()
            .ok_or(CoreError::InvalidIndex {
                index: idx,
                arity: M,
            })
    }

    #[inline]
    pub fn channels(&self) -> &[u32; M] {
        &self.channels
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Arity of the tuple.
    #[inline]
    pub fn arity(&self) -> usize {
        M
    }
}

// Channel tuple only; time is excluded from equality, ordering, and hashing.

impl<const M: usize> PartialEq for EqualTimeOperator<M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
    }
}

impl<const M: usize> Eq for EqualTimeOperator<M> {}

impl<const M: usize> PartialOrd for EqualTimeOperator<M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const M: usize> Ord for EqualTimeOperator<M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.channels.cmp(&other.channels)
    }
}

impl<const M: usize> Hash for EqualTimeOperator<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels.hash(state);
    }
}

impl<const M: usize> fmt::Display for EqualTimeOperator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.channels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")@{}", self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_ignores_time() {
        let a = PairOperator::new([0, 1], 0.3);
        let b = PairOperator::new([0, 1], 7.9);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_lexicographic_over_full_tuple() {
        let a = EqualTimeOperator::<4>::at([0, 1, 2, 3]);
        let b = EqualTimeOperator::<4>::at([0, 1, 2, 4]);
        let c = EqualTimeOperator::<4>::at([0, 2, 0, 0]);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_channel_access_is_bounds_checked() {
        let p = PairOperator::at([5, 6]);
        assert_eq!(p.channel(0), Ok(5));
        assert_eq!(p.channel(1), Ok(6));
        assert_eq!(
            p.channel(2),
            Err(CoreError::InvalidIndex { index: 2, arity: 2 })
        );
    }

    #[test]
    fn test_from_slice_validates_arity() {
        let p = PairOperator::from_slice(&[3, 4], 1.0).unwrap();
        assert_eq!(p.channels(), &[3, 4]);
        assert_eq!(p.time(), 1.0);

        let bad = PairOperator::from_slice(&[3, 4, 5], 1.0);
        assert_eq!(
            bad,
            Err(CoreError::ArityMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_unset_time_sentinel() {
        let p = PairOperator::at([0, 0]);
        assert_eq!(p.time(), UNSET_COMPOSITE_TIME);
    }
}
