//! Bounds-checked structured record buffers with validated range values.
//!
//! Two independent, stateless leaf components:
//!
//! - [`StructuredBuffer`] owns a contiguous zeroed block of fixed-stride
//!   records (two 64-bit big-endian fields each, `real` then `image`) and
//!   exposes indexed field-level access with every access bounds checked.
//!   Release is explicit and deterministic; use after release is an error.
//! - [`ValidatedRange`] is an immutable `(min, max)` pair whose `min <= max`
//!   invariant is enforced at construction and can never be violated after.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  layout.rs  │────▶│  buffer.rs   │────▶│     walk.rs      │
//! │ (Field,     │     │ (Structured  │     │ (increment_images│
//! │ RecordLayout)│    │  Buffer)     │     │  demo walk)      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!
//! ┌──────────────────┐
//! │     range.rs     │   independent leaf, no buffer dependency
//! │ (ValidatedRange) │
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use recbuf::{increment_images, StructuredBuffer, ValidatedRange};
//!
//! let mut buf = StructuredBuffer::create(128)?;
//! increment_images(&mut buf)?;
//! assert_eq!(buf.image(0)?, 1);
//! buf.release()?;
//!
//! let range = ValidatedRange::new(20, 22)?;
//! assert_eq!(range.average(), 21);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Module declarations
pub mod buffer;
pub mod layout;
pub mod range;
pub mod walk;

// Re-exports for public API
pub use buffer::{BufferError, StructuredBuffer};
pub use layout::{Field, RecordLayout, MAX_ELEMENT_COUNT, RECORD_SIZE};
pub use range::{RangeError, ValidatedRange};
pub use walk::{increment_images, DEMO_ELEMENT_COUNT};
