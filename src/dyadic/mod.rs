//! Exact dyadic arithmetic.
//!
//! Hackenbush values of blue-red stalks are always dyadic rationals, so the
//! valuation engine works entirely in this type and never touches floats.
//! Comparison and addition scale both operands to the larger denominator by
//! a left shift; nothing here can fail.

pub mod number;

pub use number::{DyadicNumber, NonDyadicError, MAX_LEVEL};
