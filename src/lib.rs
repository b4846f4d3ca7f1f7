//! Astro-complex is a library of correctly rounded functions of arbitrary precision complex numbers.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! A complex number is defined by the data type `BigComplex`. Its real and imaginary parts are
//! `BigFloat` numbers from the `astro-float-num` crate, and each part has its own precision in bits.
//!
//! **Rounding**
//!
//! Functions take a pair of rounding modes, one for the real and one for the imaginary part.
//! Each part of the result is correctly rounded: it is equal to the exact result rounded with
//! the given mode. Functions return a pair of ternary values. Each ternary value tells whether the
//! rounded part is less than, equal to, or greater than the exact value.
//!
//! **Context**
//!
//! Functions take a context. It provides the constants cache, and the exponent range the result is
//! clamped to. `Consts` alone is a context with the full exponent range of `BigFloat`.
//!
//! **Error handling**
//!
//! Functions return `Result`. Errors are returned for invalid arguments, such as zero precision or
//! rounding modes which don't define the direction of rounding, and for memory allocation failures.
//!
//! ## Examples
//!
//! ```
//! use astro_complex::BigComplex;
//! use astro_complex::Consts;
//! use astro_complex::Radix;
//! use astro_complex::Rounding;
//! use astro_complex::RoundingMode;
//!
//! let mut cc = Consts::new().expect("Constants cache initialized");
//!
//! let rm = Rounding::new(RoundingMode::Down, RoundingMode::Up);
//!
//! let (z, _, _) = BigComplex::parse("(0.5 -1.25)", Radix::Dec, 128, 128, rm, &mut cc)
//!     .expect("Number parsed");
//!
//! let (w, (t_re, t_im)) = z.asin(128, 128, rm, &mut cc).expect("Arcsine computed");
//!
//! // The result is rounded toward negative infinity in the real part,
//! // and toward positive infinity in the imaginary part.
//! assert_eq!(t_re, core::cmp::Ordering::Less);
//! assert_eq!(t_im, core::cmp::Ordering::Greater);
//!
//! println!("{}", w);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
pub mod ctx;
mod defs;
mod num;
pub mod ops;
mod parser;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::ctx::Contextable;
pub use crate::ctx::ExponentRange;
pub use crate::defs::Error;
pub use crate::defs::Inexact;
pub use crate::defs::Rounding;
pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXACT;
pub use crate::num::BigComplex;

pub use astro_float_num::BigFloat;
pub use astro_float_num::Consts;
pub use astro_float_num::Radix;
pub use astro_float_num::RoundingMode;
