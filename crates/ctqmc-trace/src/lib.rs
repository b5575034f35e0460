//! CT-QMC operator trace - the time-ordered operator registry
//!
//! This crate implements the mutable heart of the sampler:
//! - The unique-key, time-ordered operator set (`OperatorTrace`)
//! - Recorded batch mutation and replay-based rollback (`ChangeRecord`)
//!
//! One trace is owned by one simulation worker; mutation happens on every
//! proposed move and rollback on every rejected one, so the surface here is
//! deliberately small and allocation-light.

pub mod record;
pub mod trace;

pub use record::*;
pub use trace::*;
