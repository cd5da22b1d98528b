// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record layout arithmetic for structured buffers.
//!
//! `RecordLayout` is the single source of truth for the record shape. Every
//! piece of code that reads or writes a field MUST compute its byte offset
//! through it. This prevents the "I updated the write path but forgot the
//! read path" class of bugs.
//!
//! The shape is fixed: two named 64-bit big-endian signed fields per record,
//! `real` at offset 0 and `image` at offset 8, stride 16. `real` exists to
//! give `image` a non-zero offset and the record its stride; it carries no
//! behavioral contract of its own.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Width of one field in bytes (64-bit value).
pub const FIELD_SIZE: usize = 8;

/// Stride of one record in bytes (two fields).
pub const RECORD_SIZE: usize = 2 * FIELD_SIZE;

/// Byte offset of the `real` field within a record.
pub const REAL_OFFSET: usize = 0;

/// Byte offset of the `image` field within a record.
pub const IMAGE_OFFSET: usize = FIELD_SIZE;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from hostile element counts)
// ============================================================================

/// Maximum records per buffer: 64M records = 1 GiB of backing storage.
pub const MAX_ELEMENT_COUNT: usize = 64 * 1024 * 1024;

// ============================================================================
// FIELDS
// ============================================================================

/// The two named fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First field, offset 0. Structural only: nothing in this crate walks it.
    Real,
    /// Second field, offset 8. The field the increment walk operates on.
    Image,
}

impl Field {
    /// Byte offset of this field within a record.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Field::Real => REAL_OFFSET,
            Field::Image => IMAGE_OFFSET,
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Offset arithmetic for a buffer of `element_count` records.
///
/// Offsets are fixed at creation and never change. All arithmetic is checked;
/// a layout that would overflow `usize` is not constructible.
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    element_count: usize,
}

impl RecordLayout {
    /// Layout for `element_count` records, or `None` when the total byte
    /// size overflows or exceeds [`MAX_ELEMENT_COUNT`].
    pub fn new(element_count: usize) -> Option<Self> {
        if element_count > MAX_ELEMENT_COUNT {
            return None;
        }
        element_count.checked_mul(RECORD_SIZE)?;
        Some(Self { element_count })
    }

    /// Number of records in the layout.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Total byte size of the backing storage.
    #[inline]
    pub fn byte_size(&self) -> usize {
        // Cannot overflow: checked in `new`.
        self.element_count * RECORD_SIZE
    }

    /// Absolute byte offset of `field` in record `index`, or `None` when
    /// `index` is out of `[0, element_count)`.
    #[inline]
    pub fn field_offset(&self, index: usize, field: Field) -> Option<usize> {
        if index >= self.element_count {
            return None;
        }
        Some(index * RECORD_SIZE + field.offset())
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// Verified properties:
// 1. Constructible layouts never overflow on byte_size
// 2. field_offset stays within byte_size for every in-range index
// 3. field_offset rejects every out-of-range index

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify every offset a layout hands out leaves room for a full field.
    #[kani::proof]
    fn verify_field_offset_in_bounds() {
        let element_count: usize = kani::any_where(|&n| n <= MAX_ELEMENT_COUNT);
        let layout = RecordLayout::new(element_count).unwrap();

        let index: usize = kani::any();
        let field = if kani::any() { Field::Real } else { Field::Image };

        match layout.field_offset(index, field) {
            Some(offset) => {
                kani::assert(index < element_count, "offset implies in-range index");
                kani::assert(
                    offset + FIELD_SIZE <= layout.byte_size(),
                    "field must fit within backing storage",
                );
            }
            None => {
                kani::assert(index >= element_count, "rejection implies out-of-range");
            }
        }
    }

    /// Verify the two fields of one record never alias.
    #[kani::proof]
    fn verify_fields_disjoint() {
        let element_count: usize = kani::any_where(|&n| n > 0 && n <= MAX_ELEMENT_COUNT);
        let layout = RecordLayout::new(element_count).unwrap();
        let index: usize = kani::any_where(|&i| i < element_count);

        let real = layout.field_offset(index, Field::Real).unwrap();
        let image = layout.field_offset(index, Field::Image).unwrap();
        kani::assert(real + FIELD_SIZE <= image, "real must end before image starts");
    }
}
