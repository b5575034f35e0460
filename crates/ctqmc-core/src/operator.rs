//! Operator values
//!
//! An operator is one instantaneous creation or annihilation event on one
//! channel. Operators take their place in the trace from their time key
//! alone; kind and channel never tie-break. Equality compares all three
//! fields, so the type carries no `Ord` of its own. Callers sort and
//! compare positions through [`Operator::time`], the key the trace uses.

use std::fmt;

use crate::OperatorTime;

/// Whether an operator creates or annihilates on its channel.
///
/// There is deliberately no invalid/sentinel variant: an unset operator is
/// `Option<Operator>` at the call site, so a placeholder can never be
/// committed to the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Creation,
    Annihilation,
}

/// A single operator event: time key, kind, and channel.
///
/// The setters rebind an existing value in place so that a time-shift move
/// can relocate an operator without destroy-and-recreate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operator {
    time: OperatorTime,
    kind: OperatorKind,
    channel: u32,
}

impl Operator {
    #[inline]
    pub fn new(time: OperatorTime, kind: OperatorKind, channel: u32) -> Self {
        Operator {
            time,
            kind,
            channel,
        }
    }

    #[inline]
    pub fn time(&self) -> OperatorTime {
        self.time
    }

    #[inline]
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    #[inline]
    pub fn channel(&self) -> u32 {
        self.channel
    }

    #[inline]
    pub fn set_time(&mut self, time: OperatorTime) {
        self.time = time;
    }

    #[inline]
    pub fn set_kind(&mut self, kind: OperatorKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }

    /// Copy of this operator relocated to a new time key.
    #[inline]
    pub fn shifted(&self, time: OperatorTime) -> Self {
        Operator { time, ..*self }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.kind {
            OperatorKind::Creation => "+",
            OperatorKind::Annihilation => "-",
        };
        write!(f, "{}[{}{}]", self.time, mark, self.channel)
    }
}
