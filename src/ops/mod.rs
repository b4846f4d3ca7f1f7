//! High-level operations on complex numbers.

pub mod arith;
pub mod err;
pub mod real;
pub mod round;

mod asin;
mod asinh;
