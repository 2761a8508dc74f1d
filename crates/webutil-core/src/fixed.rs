//! Fixed-point decimal arithmetic over `f64` operands.
//!
//! Binary floating point cannot represent most decimal fractions, so naive
//! arithmetic accumulates representation error (`0.1 + 0.2 != 0.3`).
//! Scaling both operands by a power of ten, rounding into an
//! integer-equivalent domain and rescaling after the operation removes
//! this error for add, subtract and multiply. Division skips the operand
//! scaling since the scale factors cancel; only the final rounding
//! matters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::error::{Error, Result};

/// Arithmetic operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Addition
    Add,
    /// Subtraction
    Reduce,
    /// Multiplication
    Ride,
    /// Division
    Except,
}

impl Op {
    /// Returns the operation code as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Reduce => "reduce",
            Self::Ride => "ride",
            Self::Except => "except",
        }
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Self::Add),
            "reduce" => Ok(Self::Reduce),
            "ride" => Ok(Self::Ride),
            "except" => Ok(Self::Except),
            _ => Err(Error::range(format!("unknown operation: {s}"), "calc")),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the natural post-decimal digit count of `x`.
///
/// Counts digits after the decimal point in the shortest decimal
/// rendering of the value; integers yield zero. Used for the implicit
/// precision rule of [`calc`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_places(x: f64) -> u32 {
    let rendered = x.to_string();
    match rendered.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

/// Performs `op` on `a` and `b` with controlled decimal rounding.
///
/// The effective precision is `places` when given (zero included), else
/// the larger of the operands' natural decimal-place counts. Operands are
/// scaled by `10^p` and rounded into an integer-equivalent domain for
/// add, reduce and ride; except divides the unscaled operands and rounds
/// the quotient to `p` decimal places.
///
/// A zero divisor with [`Op::Except`] is not an error: the quotient is
/// returned as-is, so `a / 0` yields an infinity and `0 / 0` yields NaN.
///
/// # Errors
///
/// Returns an [`ErrorKind::Type`](crate::ErrorKind::Type) error when
/// either operand is non-finite.
pub fn calc(a: f64, b: f64, op: Op, places: Option<u32>) -> Result<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::type_error("operands must be finite numbers", "calc"));
    }
    let p = places.unwrap_or_else(|| decimal_places(a).max(decimal_places(b)));
    trace!(a, b, op = %op, precision = p, "fixed-point calculation");

    #[allow(clippy::cast_possible_wrap)]
    let pow = 10f64.powi(p as i32);
    let scaled_a = (a * pow).round();
    let scaled_b = (b * pow).round();
    Ok(match op {
        Op::Add => (scaled_a + scaled_b) / pow,
        Op::Reduce => (scaled_a - scaled_b) / pow,
        Op::Ride => (scaled_a * scaled_b) / (pow * pow),
        Op::Except => ((a / b) * pow).round() / pow,
    })
}
