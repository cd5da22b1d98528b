// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated immutable range values.
//!
//! Instead of hoping you remembered to check ordering, wrap the pair in
//! [`ValidatedRange`]. The `min <= max` invariant is checked once at
//! construction and holds forever after: the fields are private, there are
//! no setters, and an invalid construction attempt never produces an
//! instance.

use std::fmt;

use serde::Serialize;

// ============================================================================
// ERRORS
// ============================================================================

/// Error type for range invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `min > max` at construction. Input validation: the caller must
    /// supply ordered bounds, there is nothing to retry.
    MinExceedsMax { min: i64, max: i64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MinExceedsMax { min, max } => {
                write!(f, "min {} > max {}", min, max)
            }
        }
    }
}

impl std::error::Error for RangeError {}

// ============================================================================
// VALIDATED RANGE
// ============================================================================

/// An immutable `(min, max)` pair where `min <= max` always.
///
/// # Invariants (enforced at construction)
/// - `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatedRange {
    min: i64,
    max: i64,
}

impl ValidatedRange {
    /// Create a validated range.
    ///
    /// Returns `Err` iff `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::MinExceedsMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// The empty range at the origin, `new(0, 0)` without the fallible path.
    pub fn zero() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Lower bound (guaranteed `<= max`).
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (guaranteed `>= min`).
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Midpoint `(min + max) / 2` with integer truncation toward zero.
    ///
    /// Widened through `i128` so the sum cannot overflow; the result always
    /// fits back in `i64`. No failure mode.
    pub fn average(&self) -> i64 {
        ((self.min as i128 + self.max as i128) / 2) as i64
    }
}

impl fmt::Display for ValidatedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
