//! Image resizer adapters.
//!
//! The production adapter shells out to macOS `sips`; there is no pure-Rust
//! fallback.
//!
//! # Testability
//!
//! [`mock::MockResizer`] implements the same
//! [`ImageResizer`](crate::application::apply_design::ImageResizer) trait,
//! writes real output files, and records each call, so the whole apply flow
//! can run on any OS.

pub mod mock;
pub mod sips;
