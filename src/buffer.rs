// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Owned, bounds-checked buffers of fixed-stride records.
//!
//! A [`StructuredBuffer`] is a contiguous zeroed byte region holding
//! `element_count` records of the shape fixed by [`crate::layout`]. Field
//! values live in the bytes big-endian; accessors decode on read and encode
//! on write, and every access is bounds checked against the layout. There is
//! no way to reach the backing bytes without going through a checked offset.
//!
//! Release is explicit and deterministic: [`StructuredBuffer::release`] drops
//! the backing storage immediately, and every later operation on the handle
//! (including a second `release`) reports [`BufferError::UseAfterRelease`].
//! Letting the buffer fall out of scope releases it too, on every exit path,
//! via ordinary ownership.
//!
//! Indices are `i64` rather than `usize`: the point of the bounds contract is
//! that `-1` and `element_count` are both expressible and both rejected, not
//! merely unrepresentable.

use std::fmt;

use crate::layout::{Field, RecordLayout, FIELD_SIZE, RECORD_SIZE};

// ============================================================================
// ERRORS
// ============================================================================

/// Error type for buffer contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Backing storage could not be obtained. Fatal, never retried.
    Allocation { element_count: usize },
    /// Access index outside `[0, element_count)`. Never silently clamped.
    IndexOutOfRange { index: i64, element_count: usize },
    /// Operation on a handle whose storage was already released.
    UseAfterRelease,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Allocation { element_count } => {
                write!(
                    f,
                    "cannot allocate backing storage for {} records of {} bytes",
                    element_count, RECORD_SIZE
                )
            }
            BufferError::IndexOutOfRange {
                index,
                element_count,
            } => {
                write!(
                    f,
                    "index {} outside [0, {}) for buffer of {} records",
                    index, element_count, element_count
                )
            }
            BufferError::UseAfterRelease => {
                write!(f, "buffer storage already released")
            }
        }
    }
}

impl std::error::Error for BufferError {}

// ============================================================================
// STRUCTURED BUFFER
// ============================================================================

/// A contiguous, zero-initialized block of fixed-stride two-field records.
///
/// # Invariants (enforced on every access)
/// - Every index access is in `[0, element_count)`
/// - Field offsets come from [`RecordLayout`] and never change after creation
/// - No operation mutates observable state when it fails
#[derive(Debug)]
pub struct StructuredBuffer {
    layout: RecordLayout,
    /// `None` once released. Exclusively owned: `&mut self` for mutation,
    /// external locking required if a future caller wants to share one.
    bytes: Option<Vec<u8>>,
}

impl StructuredBuffer {
    /// Allocate zeroed storage for `element_count` records.
    ///
    /// `element_count == 0` yields a valid buffer in which every access is
    /// out of range. Fails with [`BufferError::Allocation`] when the byte
    /// size overflows, exceeds [`crate::layout::MAX_ELEMENT_COUNT`], or the
    /// allocator refuses the request.
    pub fn create(element_count: usize) -> Result<Self, BufferError> {
        let layout =
            RecordLayout::new(element_count).ok_or(BufferError::Allocation { element_count })?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(layout.byte_size())
            .map_err(|_| BufferError::Allocation { element_count })?;
        bytes.resize(layout.byte_size(), 0);

        Ok(Self {
            layout,
            bytes: Some(bytes),
        })
    }

    /// Number of records this buffer was created with.
    pub fn element_count(&self) -> usize {
        self.layout.element_count()
    }

    /// Whether [`release`](Self::release) has already run on this handle.
    pub fn is_released(&self) -> bool {
        self.bytes.is_none()
    }

    /// Read the big-endian `image` field of record `index`.
    pub fn image(&self, index: i64) -> Result<i64, BufferError> {
        self.read_field(index, Field::Image)
    }

    /// Overwrite the `image` field of record `index` in place.
    pub fn set_image(&mut self, index: i64, value: i64) -> Result<(), BufferError> {
        self.write_field(index, Field::Image, value)
    }

    /// Read the big-endian `real` field of record `index`.
    pub fn real(&self, index: i64) -> Result<i64, BufferError> {
        self.read_field(index, Field::Real)
    }

    /// Overwrite the `real` field of record `index` in place.
    pub fn set_real(&mut self, index: i64, value: i64) -> Result<(), BufferError> {
        self.write_field(index, Field::Real, value)
    }

    /// Read `field` of record `index`.
    pub fn read_field(&self, index: i64, field: Field) -> Result<i64, BufferError> {
        let offset = self.checked_offset(index, field)?;
        let bytes = self.bytes.as_ref().ok_or(BufferError::UseAfterRelease)?;

        let mut raw = [0u8; FIELD_SIZE];
        raw.copy_from_slice(&bytes[offset..offset + FIELD_SIZE]);
        Ok(i64::from_be_bytes(raw))
    }

    /// Write `field` of record `index`. Fails without touching storage when
    /// the index is out of range or the buffer is released.
    pub fn write_field(&mut self, index: i64, field: Field, value: i64) -> Result<(), BufferError> {
        let offset = self.checked_offset(index, field)?;
        let bytes = self.bytes.as_mut().ok_or(BufferError::UseAfterRelease)?;

        bytes[offset..offset + FIELD_SIZE].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Deterministically free the backing storage.
    ///
    /// At most once per handle: a second call is a contract violation and
    /// fails with [`BufferError::UseAfterRelease`], never silently ignored.
    pub fn release(&mut self) -> Result<(), BufferError> {
        match self.bytes.take() {
            Some(_) => Ok(()),
            None => Err(BufferError::UseAfterRelease),
        }
    }

    /// Resolve `(index, field)` to an absolute byte offset, checking release
    /// state and bounds. Release state is checked first so a released handle
    /// never reports bounds errors.
    fn checked_offset(&self, index: i64, field: Field) -> Result<usize, BufferError> {
        if self.bytes.is_none() {
            return Err(BufferError::UseAfterRelease);
        }
        let element_count = self.layout.element_count();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.layout.field_offset(i, field))
            .ok_or(BufferError::IndexOutOfRange {
                index,
                element_count,
            })
    }
}
