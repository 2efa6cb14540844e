//! Domain entities for the logo applicator.
//!
//! This module contains pure business rules with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of a Clean Architecture program is the **domain**.
//! Domain code describes *what* the program is about (here: which designs
//! exist and which image files a design turns into) without knowing *how*
//! files are read, written, or resized.  Outer layers depend on the domain;
//! the domain never depends on them.

/// Icon sizes, logo scales, and file naming conventions.
pub mod assets;

/// The static catalog of named logo designs.
pub mod catalog;
