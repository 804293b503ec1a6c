//! `ExactNumber`: an arbitrary-precision rational field element.
//!
//! Everything downstream of this module (points, polygons, predicates, the
//! Boolean kernel) is built on top of `ExactNumber` rather than `f64`. No
//! floating-point value is ever allowed to enter the kernel silently — see
//! [`ExactNumber::from_f64`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::NumberError;

/// A value in ℚ, normalised by `BigRational`'s own reduction (gcd-reduced,
/// denominator positive).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactNumber(BigRational);

impl ExactNumber {
  /// The additive identity.
  pub fn zero() -> ExactNumber {
    ExactNumber(BigRational::zero())
  }

  /// The multiplicative identity.
  pub fn one() -> ExactNumber {
    ExactNumber(BigRational::from_integer(BigInt::from(1)))
  }

  /// Build an exact rational directly from numerator and denominator.
  ///
  /// # Panics
  ///
  /// Panics if `den` is zero; callers that cannot rule this out should use
  /// [`ExactNumber::checked_div`] instead.
  pub fn from_ratio(num: BigInt, den: BigInt) -> ExactNumber {
    ExactNumber(BigRational::new(num, den))
  }

  fn from_bigint(n: BigInt) -> ExactNumber {
    ExactNumber(BigRational::from_integer(n))
  }

  /// Parse a machine integer.
  pub fn from_i64(n: i64) -> ExactNumber {
    ExactNumber::from_bigint(BigInt::from(n))
  }

  /// Lift an integer-valued `f64` into an exact rational; reject anything
  /// with a fractional part, per the hard rule in §4.1.
  pub fn from_f64(value: f64) -> Result<ExactNumber, NumberError> {
    if value.fract() != 0.0 || !value.is_finite() {
      return Err(NumberError::NonIntegerFloat(value));
    }
    // i64 covers every float that round-trips through `fract() == 0.0` for
    // instance coordinates of any realistic magnitude; anything larger is
    // parsed from its decimal string representation instead.
    if let Some(i) = num_traits::cast::<f64, i64>(value) {
      if i as f64 == value {
        return Ok(ExactNumber::from_i64(i));
      }
    }
    ExactNumber::from_decimal_str(&format!("{value:.0}"))
  }

  /// Parse an integer literal string, e.g. `"-017"` or a digit string longer
  /// than 18 characters (split and recombined to avoid any fixed-width
  /// overflow, matching the reference implementation's chunked parse).
  pub fn from_integer_str(raw: &str) -> Result<ExactNumber, NumberError> {
    let raw = raw.trim();
    if raw.is_empty() {
      return Err(NumberError::Parse(raw.to_string()));
    }
    let (sign, digits) = match raw.strip_prefix('-') {
      Some(rest) => (-1, rest),
      None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(NumberError::Parse(raw.to_string()));
    }
    let stripped = strip_leading_zeros(digits);
    if stripped.len() > 18 {
      let split_at = stripped.len() - 18;
      let head = &stripped[..split_at];
      let tail = &stripped[split_at..];
      let ten18 = BigInt::from(10u64).pow(18);
      let head_val = BigInt::from_str(head).map_err(|_| NumberError::Parse(raw.to_string()))?;
      let tail_val = BigInt::from_str(tail).map_err(|_| NumberError::Parse(raw.to_string()))?;
      let value = head_val * ten18 + tail_val;
      return Ok(ExactNumber::from_bigint(value * sign));
    }
    let value = BigInt::from_str(stripped).map_err(|_| NumberError::Parse(raw.to_string()))?;
    Ok(ExactNumber::from_bigint(value * sign))
  }

  /// Parse a decimal literal `"A.B"` (optional sign, optional fractional
  /// part) per the §4.1 decimal rule: `A.B` → `A + B / 10^len(B)`, where the
  /// length of `B` (not its stripped value) drives the denominator.
  pub fn from_decimal_str(raw: &str) -> Result<ExactNumber, NumberError> {
    let raw = raw.trim();
    if raw.is_empty() {
      return Err(NumberError::Parse(raw.to_string()));
    }
    match raw.split_once('.') {
      None => ExactNumber::from_integer_str(raw),
      Some((int_part, frac_part)) => {
        if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
          return Err(NumberError::Parse(raw.to_string()));
        }
        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let whole = ExactNumber::from_integer_str(int_part)?;
        let frac = ExactNumber::from_integer_str(frac_part)?;
        let scale = ExactNumber::from_bigint(BigInt::from(10u64).pow(frac_part.len() as u32));
        let fraction = frac.checked_div(&scale)?;
        if whole.0.is_negative() || raw.trim_start().starts_with('-') {
          Ok(ExactNumber(whole.0 - fraction.0))
        } else {
          Ok(ExactNumber(whole.0 + fraction.0))
        }
      }
    }
  }

  /// Parse a ratio literal `"p/q"`. Both `p` and `q` are themselves parsed
  /// recursively (they may be decimal literals). Exactly one `/` is allowed.
  pub fn from_ratio_str(raw: &str) -> Result<ExactNumber, NumberError> {
    let raw = raw.trim();
    let mut parts = raw.splitn(3, '/');
    let num = parts.next().ok_or_else(|| NumberError::Parse(raw.to_string()))?;
    let den = parts.next().ok_or_else(|| NumberError::Parse(raw.to_string()))?;
    if parts.next().is_some() {
      return Err(NumberError::Parse(raw.to_string()));
    }
    let num = ExactNumber::from_str_literal(num)?;
    let den = ExactNumber::from_str_literal(den)?;
    num.checked_div(&den)
  }

  /// Parse any supported literal string: a ratio (if it contains `/`), else
  /// a decimal (if it contains `.`), else a plain integer.
  pub fn from_str_literal(raw: &str) -> Result<ExactNumber, NumberError> {
    let raw = raw.trim();
    if raw.contains('/') {
      ExactNumber::from_ratio_str(raw)
    } else if raw.contains('.') {
      ExactNumber::from_decimal_str(raw)
    } else {
      ExactNumber::from_integer_str(raw)
    }
  }

  /// Checked division; the public counterpart to the `Div` operator impl,
  /// which panics (matching `BigRational`'s own behaviour) — use this when
  /// the divisor is untrusted input.
  pub fn checked_div(&self, rhs: &ExactNumber) -> Result<ExactNumber, NumberError> {
    if rhs.0.is_zero() {
      return Err(NumberError::DivisionByZero);
    }
    Ok(ExactNumber(&self.0 / &rhs.0))
  }

  /// Lossy conversion to `f64`, for reporting/diagnostics only — never used
  /// inside a predicate.
  pub fn to_f64(&self) -> f64 {
    self.0.to_f64().unwrap_or(f64::NAN)
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }

  pub fn is_positive(&self) -> bool {
    self.0.is_positive()
  }

  pub fn is_negative(&self) -> bool {
    self.0.is_negative()
  }

  pub fn signum(&self) -> i32 {
    if self.0.is_zero() {
      0
    } else if self.0.is_positive() {
      1
    } else {
      -1
    }
  }

  pub fn abs(&self) -> ExactNumber {
    ExactNumber(self.0.abs())
  }
}

fn strip_leading_zeros(digits: &str) -> &str {
  let trimmed = digits.trim_start_matches('0');
  if trimmed.is_empty() {
    "0"
  } else {
    trimmed
  }
}

impl fmt::Display for ExactNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0.is_integer() {
      write!(f, "{}", self.0.numer())
    } else {
      write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
  }
}

impl From<i64> for ExactNumber {
  fn from(n: i64) -> ExactNumber {
    ExactNumber::from_i64(n)
  }
}

impl From<i32> for ExactNumber {
  fn from(n: i32) -> ExactNumber {
    ExactNumber::from_i64(n as i64)
  }
}

macro_rules! forward_binop {
  ($trait:ident, $method:ident) => {
    impl $trait for ExactNumber {
      type Output = ExactNumber;
      fn $method(self, rhs: ExactNumber) -> ExactNumber {
        ExactNumber(self.0.$method(rhs.0))
      }
    }

    impl<'a> $trait<&'a ExactNumber> for &'a ExactNumber {
      type Output = ExactNumber;
      fn $method(self, rhs: &'a ExactNumber) -> ExactNumber {
        ExactNumber((&self.0).$method(&rhs.0))
      }
    }
  };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for ExactNumber {
  type Output = ExactNumber;
  fn neg(self) -> ExactNumber {
    ExactNumber(-self.0)
  }
}

impl<'a> Neg for &'a ExactNumber {
  type Output = ExactNumber;
  fn neg(self) -> ExactNumber {
    ExactNumber(-&self.0)
  }
}

impl PartialEq<i64> for ExactNumber {
  fn eq(&self, other: &i64) -> bool {
    self.0 == BigRational::from_integer(BigInt::from(*other))
  }
}

impl PartialOrd<i64> for ExactNumber {
  fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
    self.0.partial_cmp(&BigRational::from_integer(BigInt::from(*other)))
  }
}
