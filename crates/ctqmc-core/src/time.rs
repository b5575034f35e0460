//! Imaginary-time keys for the operator trace
//!
//! Operator positions are continuous times, but the trace needs a strict
//! total order: two operators proposed at numerically identical times are
//! still distinct events. `OperatorTime` pairs the real time with an integer
//! tie-break index, compared second. There is no tolerance comparison
//! anywhere; equal times are resolved by the index or not at all.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A point on the imaginary-time axis with an integer tie-break.
///
/// Ordering is by `time` first (via `f64::total_cmp`, so the order is total
/// and lawful for use as a map key), then by `index`. Callers inserting two
/// operators at the same real time must give them distinct indices, or the
/// trace will see a single key and reject the second insertion.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperatorTime {
    time: f64,
    index: i32,
}

impl OperatorTime {
    pub const ZERO: OperatorTime = OperatorTime {
        time: 0.0,
        index: 0,
    };

    #[inline]
    pub fn new(time: f64, index: i32) -> Self {
        OperatorTime { time, index }
    }

    /// Key at `time` with tie-break index 0.
    #[inline]
    pub fn from_time(time: f64) -> Self {
        OperatorTime { time, index: 0 }
    }

    #[inline]
    pub fn time(self) -> f64 {
        self.time
    }

    #[inline]
    pub fn index(self) -> i32 {
        self.index
    }

    #[inline]
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    #[inline]
    pub fn set_index(&mut self, index: i32) {
        self.index = index;
    }

    /// The smallest key at real time `t` (index `i32::MIN`).
    ///
    /// Lower bound for a range covering every tie-break index at `t`.
    #[inline]
    pub fn first_at(t: f64) -> Self {
        OperatorTime {
            time: t,
            index: i32::MIN,
        }
    }

    /// The largest key at real time `t` (index `i32::MAX`).
    ///
    /// Upper bound for a range covering every tie-break index at `t`.
    #[inline]
    pub fn last_at(t: f64) -> Self {
        OperatorTime {
            time: t,
            index: i32::MAX,
        }
    }
}

impl PartialEq for OperatorTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.time.to_bits() == other.time.to_bits() && self.index == other.index
    }
}

impl Eq for OperatorTime {}

impl PartialOrd for OperatorTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperatorTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.index.cmp(&other.index))
    }
}

impl Hash for OperatorTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.to_bits().hash(state);
        self.index.hash(state);
    }
}

/// Interval between two keys, as a plain number.
///
/// The tie-break index does not contribute; the result feeds weight-ratio
/// arithmetic, never ordering.
impl Sub for OperatorTime {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: OperatorTime) -> f64 {
        self.time - rhs.time
    }
}

impl Sub<f64> for OperatorTime {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: f64) -> f64 {
        self.time - rhs
    }
}

impl Sub<OperatorTime> for f64 {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: OperatorTime) -> f64 {
        self - rhs.time
    }
}

impl Add<f64> for OperatorTime {
    type Output = f64;

    #[inline]
    fn add(self, rhs: f64) -> f64 {
        self.time + rhs
    }
}

impl Add for OperatorTime {
    type Output = f64;

    #[inline]
    fn add(self, rhs: OperatorTime) -> f64 {
        self.time + rhs.time
    }
}

impl fmt::Display for OperatorTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} , {} )", self.time, self.index)
    }
}
