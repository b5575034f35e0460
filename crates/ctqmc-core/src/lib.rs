//! CT-QMC operator primitives
//!
//! This crate defines the leaf types of the operator trace:
//! - Imaginary-time keys with integer tie-breaking (`OperatorTime`)
//! - Creation/annihilation operator values (`Operator`)
//! - Equal-time composite operators (`EqualTimeOperator`)
//! - The shared error taxonomy (`CoreError`)

pub mod composite;
pub mod error;
pub mod operator;
pub mod time;

pub use composite::*;
pub use error::*;
pub use operator::*;
pub use time::*;
