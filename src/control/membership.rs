//! Triangular membership functions.
//!
//! A triangle `(a, b, c)` rises from 0 at `a` to 1 at the peak `b` and
//! falls back to 0 at `c`. Both ends are exclusive: `x == a` and `x == c`
//! score 0, the peak `x == b` scores 1.
//!
//! ## Degenerate edges
//!
//! The default tables use shoulder sets such as dry soil `(0, 0, 40)` and
//! wet soil `(60, 100, 100)`. With the branch order below, `a == b` makes
//! the rising branch `a < x <= a` unreachable and `b == c` makes the
//! falling branch `b < x < b` unreachable, so neither edge ever divides by
//! zero. The only shape that can never fire, `a == c`, is rejected by
//! [`TriangularSet::new`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Degree of membership of `x` in the triangle `(a, b, c)`.
///
/// Callers must pass `a <= b <= c`; out-of-order bounds give meaningless
/// results. NaN inputs score 0.
pub fn membership(x: f32, a: f32, b: f32, c: f32) -> f32 {
    if x <= a || x >= c {
        0.0
    } else if x <= b {
        (x - a) / (b - a)
    } else if x < c {
        (c - x) / (c - b)
    } else {
        0.0
    }
}

/// A validated triangular fuzzy set.
///
/// Serialized as the array `[a, b, c]`; deserialization runs the same
/// checks as [`TriangularSet::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 3]", into = "[f32; 3]")]
pub struct TriangularSet {
    a: f32,
    b: f32,
    c: f32,
}

impl TriangularSet {
    /// Build a set, rejecting non-finite, unordered or single-point bounds.
    pub fn new(a: f32, b: f32, c: f32) -> Result<Self, ConfigError> {
        Self::from_bounds(a, b, c).validated()
    }

    /// Unchecked constructor for the built-in tables. Every table entry is
    /// covered by `builtin_tables_are_valid` in `config`.
    pub(crate) const fn from_bounds(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    pub(crate) fn validated(self) -> Result<Self, ConfigError> {
        let Self { a, b, c } = self;
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(ConfigError::NonFiniteBound);
        }
        if a > b || b > c {
            return Err(ConfigError::UnorderedBounds { a, b, c });
        }
        if a == c {
            return Err(ConfigError::EmptySupport { at: a });
        }
        Ok(self)
    }

    pub fn start(&self) -> f32 {
        self.a
    }

    pub fn peak(&self) -> f32 {
        self.b
    }

    pub fn end(&self) -> f32 {
        self.c
    }

    /// Degree of membership of `x` in this set.
    #[inline]
    pub fn membership(&self, x: f32) -> f32 {
        membership(x, self.a, self.b, self.c)
    }
}

impl TryFrom<[f32; 3]> for TriangularSet {
    type Error = ConfigError;

    fn try_from([a, b, c]: [f32; 3]) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

impl From<TriangularSet> for [f32; 3] {
    fn from(set: TriangularSet) -> Self {
        [set.a, set.b, set.c]
    }
}
