/// Validated newtype wrappers for vertex identifiers and edge weights.
///
/// Each newtype enforces its constraint at construction time via `TryFrom`.
/// Once constructed, the inner value is immutable (no `DerefMut`). Serde
/// `Deserialize` impls re-run validation so invalid data cannot enter the type
/// system from untrusted JSON.
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Deref};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from invalid input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    #[error("invalid {type_name}: expected {expected}, got {got:?}")]
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },

    /// The number was NaN, infinite, or negative.
    #[error("invalid {type_name}: expected {expected}, got {got}")]
    InvalidNumber {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the accepted range.
        expected: &'static str,
        /// The input that was rejected.
        got: f64,
    },
}

// ---------------------------------------------------------------------------
// VertexId
// ---------------------------------------------------------------------------

/// Opaque vertex label such as `"A"` or `"PS1"`.
///
/// The only constraint is that the label is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(String);

impl TryFrom<&str> for VertexId {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            Err(NewtypeError::InvalidFormat {
                type_name: "VertexId",
                expected: "non-empty string",
                got: s.to_owned(),
            })
        } else {
            Ok(Self(s.to_owned()))
        }
    }
}

impl Deref for VertexId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VertexId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        VertexId::try_from(raw.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Weight
// ---------------------------------------------------------------------------

/// Largest integral value that serializes as a JSON integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Non-negative, finite edge weight.
///
/// Ordering uses [`f64::total_cmp`], so `Weight` is [`Ord`] and can be used
/// directly as a sort key. Integral values serialize as JSON integers (`7`
/// rather than `7.0`); everything else serializes as a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weight(f64);

impl Weight {
    /// The zero weight.
    pub const ZERO: Weight = Weight(0.0);

    /// Returns the raw `f64` value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if `self` and `other` differ by no more than a relative
    /// tolerance of `1e-9` (absolute `1e-9` near zero).
    ///
    /// Sums of fractional weights accumulated in different orders are not
    /// bit-identical; totals produced by different algorithms are compared
    /// with this.
    pub fn approx_eq(self, other: Weight) -> bool {
        let diff = (self.0 - other.0).abs();
        let scale = self.0.abs().max(other.0.abs()).max(1.0);
        diff <= 1e-9 * scale
    }

    /// Returns `self - other`, clamped at zero.
    pub fn saturating_sub(self, other: Weight) -> Weight {
        Weight((self.0 - other.0).max(0.0))
    }
}

impl TryFrom<f64> for Weight {
    type Error = NewtypeError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v.is_finite() && v >= 0.0 {
            // Normalise -0.0 so that equality and hashing of totals is stable.
            Ok(Self(if v == 0.0 { 0.0 } else { v }))
        } else {
            Err(NewtypeError::InvalidNumber {
                type_name: "Weight",
                expected: "finite, non-negative number",
                got: v,
            })
        }
    }
}

impl From<u32> for Weight {
    fn from(v: u32) -> Self {
        Self(f64::from(v))
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        self.0 += rhs.0;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Weight {
        iter.copied().sum()
    }
}

/// Decimal places shown by `Display`; sums of two-decimal weights otherwise
/// print float noise such as `61.769999999999996`.
const DISPLAY_DECIMALS: usize = 6;

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.*}", DISPLAY_DECIMALS, self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}

impl Serialize for Weight {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INTEGER {
            s.serialize_u64(self.0 as u64)
        } else {
            s.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(d)?;
        Weight::try_from(raw).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
