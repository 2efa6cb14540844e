//! Infrastructure layer for the logo applicator.
//!
//! Contains OS-facing adapters: the external resize tool, the working
//! directory, the optional config file, and console rendering.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `logo_core`, but MUST NOT be imported by the `application` or domain layers.

pub mod console;
pub mod resizer;
pub mod storage;
