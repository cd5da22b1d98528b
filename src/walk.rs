// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The increment walk over a structured buffer.
//!
//! Reads the `image` field of every record in strictly ascending index
//! order, increments it by one, and writes it back in place. The `real`
//! field is never touched. Each write happens only after the read of the
//! same index succeeded, so a failure at index `i` leaves record `i`
//! unmodified and earlier records already incremented.

use crate::buffer::{BufferError, StructuredBuffer};

/// Element count the `walk` subcommand allocates by default.
pub const DEMO_ELEMENT_COUNT: usize = 128;

/// Increment the `image` field of every record by one, ascending.
pub fn increment_images(buf: &mut StructuredBuffer) -> Result<(), BufferError> {
    for index in 0..buf.element_count() as i64 {
        let current = buf.image(index)?;
        buf.set_image(index, current.wrapping_add(1))?;
    }
    Ok(())
}
