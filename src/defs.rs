//! Definitions.

use core::cmp::Ordering;
use core::fmt::Display;

use astro_float_num::RoundingMode;
use astro_float_num::Sign;

#[cfg(feature = "std")]
use std::collections::TryReserveError;

#[cfg(not(feature = "std"))]
use alloc::collections::TryReserveError;

/// Default rounding mode of both components.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision of both components.
pub const DEFAULT_P: usize = 128;

/// Direction of rounding of the real and the imaginary parts of a result.
///
/// For each component: `Less` if the returned value is smaller than the exact value,
/// `Greater` if it is larger, and `Equal` if the returned value is exact.
pub type Inexact = (Ordering, Ordering);

/// Ternary value of an exact result.
pub const EXACT: Inexact = (Ordering::Equal, Ordering::Equal);

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The exponent value becomes greater than the upper limit of the range of exponent values.
    ExponentOverflow(Sign),

    /// Divizor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// Memory allocation error.
    MemoryAllocation,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::ExponentOverflow(s) => {
                if s.is_positive() {
                    "positive overflow"
                } else {
                    "negative overflow"
                }
            }
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::MemoryAllocation => "memory allocation failure",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExponentOverflow(l0), Self::ExponentOverflow(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl From<astro_float_num::Error> for Error {
    fn from(e: astro_float_num::Error) -> Self {
        match e {
            astro_float_num::Error::ExponentOverflow(s) => Error::ExponentOverflow(s),
            astro_float_num::Error::DivisionByZero => Error::DivisionByZero,
            astro_float_num::Error::InvalidArgument => Error::InvalidArgument,
            astro_float_num::Error::MemoryAllocation => Error::MemoryAllocation,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::MemoryAllocation
    }
}

/// Rounding modes of the real and the imaginary part of a result.
///
/// Accepted modes are `Up` (toward positive infinity), `Down` (toward negative infinity),
/// `ToZero`, `FromZero` and `ToEven` (to nearest, ties to even).
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Rounding {
    /// Rounding mode of the real part.
    pub re: RoundingMode,

    /// Rounding mode of the imaginary part.
    pub im: RoundingMode,
}

impl Rounding {
    /// Creates a pair of rounding modes.
    pub fn new(re: RoundingMode, im: RoundingMode) -> Self {
        Rounding { re, im }
    }

    /// Uses the same rounding mode `rm` for both components.
    pub fn both(rm: RoundingMode) -> Self {
        Rounding { re: rm, im: rm }
    }

    /// Exchanges the rounding modes of the real and the imaginary part.
    pub fn swap(&self) -> Self {
        Rounding {
            re: self.im,
            im: self.re,
        }
    }

    /// Returns an error if any of the two modes can't be used for rounding a result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `RoundingMode::None` or `RoundingMode::ToOdd` is used.
    pub fn validate(&self) -> Result<(), Error> {
        if is_valid_rm(self.re) && is_valid_rm(self.im) {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Rounding::both(DEFAULT_RM)
    }
}

fn is_valid_rm(rm: RoundingMode) -> bool {
    !matches!(rm, RoundingMode::None | RoundingMode::ToOdd)
}

/// Returns the rounding mode giving the same result for a negated argument.
pub(crate) fn invert_rm_for_sign(rm: RoundingMode) -> RoundingMode {
    match rm {
        RoundingMode::Up => RoundingMode::Down,
        RoundingMode::Down => RoundingMode::Up,
        _ => rm,
    }
}

/// Returns true if `rm` rounds to nearest.
pub(crate) fn is_nearest(rm: RoundingMode) -> bool {
    matches!(rm, RoundingMode::ToEven | RoundingMode::ToOdd)
}
