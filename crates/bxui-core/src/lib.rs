#![forbid(unsafe_code)]

//! Core: millimetre geometry, form-field number coercion, and logging.

pub mod geometry;
pub mod logging;
pub mod number;

pub use geometry::Size;
pub use number::{format_fixed, form_number, parse_float, round_to};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
