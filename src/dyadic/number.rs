//! Dyadic rational numbers: `numerator / 2^k`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Neg};

/// Deepest level (power of two) a unit fraction may have.
///
/// Keeps sums of many edge values well inside `i128`.
pub const MAX_LEVEL: u32 = 100;

/// An exact rational whose denominator is a power of two.
///
/// Always stored in canonical form: zero is `0/1`, otherwise the numerator is
/// odd or the denominator is 1. Because of that, derived equality and hashing
/// agree with numeric equality.
///
/// ```
/// use hackenbush::dyadic::DyadicNumber;
///
/// let half = DyadicNumber::new(2, 4);
/// assert_eq!(half.numerator(), 1);
/// assert_eq!(half.denominator(), 2);
///
/// let sum = DyadicNumber::integer(1) + DyadicNumber::new(-1, 2);
/// assert_eq!(sum, half);
/// assert_eq!(sum.to_string(), "1/2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDyadic")]
pub struct DyadicNumber {
    numerator: i128,
    denominator: u128,
}

/// Wire form of a `DyadicNumber`, checked before it becomes one.
#[derive(Deserialize)]
struct RawDyadic {
    numerator: i128,
    denominator: u128,
}

/// Error returned when a denominator is not a power of two.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("dyadic denominator must be a power of two, got {0}")]
pub struct NonDyadicError(pub u128);

impl TryFrom<RawDyadic> for DyadicNumber {
    type Error = NonDyadicError;

    fn try_from(raw: RawDyadic) -> Result<Self, Self::Error> {
        if !raw.denominator.is_power_of_two() {
            return Err(NonDyadicError(raw.denominator));
        }
        Ok(Self {
            numerator: raw.numerator,
            denominator: raw.denominator,
        }
        .simplify())
    }
}

impl DyadicNumber {
    /// Create a dyadic number and simplify it.
    ///
    /// Panics if `denominator` is not a power of two.
    #[must_use]
    pub fn new(numerator: i128, denominator: u128) -> Self {
        assert!(
            denominator.is_power_of_two(),
            "Dyadic denominator must be a power of two, got {}",
            denominator
        );
        Self {
            numerator,
            denominator,
        }
        .simplify()
    }

    /// The value 0.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }

    /// An integer value `n/1`.
    #[must_use]
    pub const fn integer(n: i128) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// `+1/2^level` when `positive`, `-1/2^level` otherwise.
    ///
    /// Panics if `level > MAX_LEVEL`.
    #[must_use]
    pub fn unit_fraction(positive: bool, level: u32) -> Self {
        assert!(level <= MAX_LEVEL, "Level {} exceeds {}", level, MAX_LEVEL);
        let sign = if positive { 1 } else { -1 };
        Self::new(sign, 1u128 << level)
    }

    #[must_use]
    pub const fn numerator(&self) -> i128 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Reduce to canonical form.
    ///
    /// Idempotent: simplifying a canonical value returns it unchanged.
    #[must_use]
    pub fn simplify(self) -> Self {
        if self.numerator == 0 {
            return Self::zero();
        }

        let mut numerator = self.numerator;
        let mut denominator = self.denominator;
        while numerator % 2 == 0 && denominator > 1 {
            numerator /= 2;
            denominator /= 2;
        }

        Self {
            numerator,
            denominator,
        }
    }

    /// Numerators of `self` and `other` scaled to their larger denominator.
    fn aligned(&self, other: &Self) -> (i128, i128, u128) {
        let denominator = self.denominator.max(other.denominator);
        let lhs = self.numerator << (denominator.trailing_zeros() - self.denominator.trailing_zeros());
        let rhs = other.numerator << (denominator.trailing_zeros() - other.denominator.trailing_zeros());
        (lhs, rhs, denominator)
    }

    /// Compare two values exactly.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }

    /// Exact sum, simplified.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, denominator) = self.aligned(other);
        Self {
            numerator: lhs + rhs,
            denominator,
        }
        .simplify()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.numerator.signum() as i32
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Approximate decimal value, for display.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Default for DyadicNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for DyadicNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DyadicNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Add for DyadicNumber {
    type Output = DyadicNumber;

    fn add(self, rhs: Self) -> Self::Output {
        DyadicNumber::add(&self, &rhs)
    }
}

impl Neg for DyadicNumber {
    type Output = DyadicNumber;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Sum for DyadicNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}

impl std::fmt::Display for DyadicNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.numerator == 0 {
            write!(f, "0")
        } else if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
