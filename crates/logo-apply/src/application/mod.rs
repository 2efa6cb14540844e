//! Application layer use cases for the logo applicator.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (the design catalog and naming rules in `logo-core`) and the
//! infrastructure (the real file system and the `sips` child process).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "turn
//!   design 5 into every icon and logo the app needs").
//! - **Depend on abstractions** ([`assets::AssetStore`],
//!   [`apply_design::ImageResizer`]) rather than concrete implementations, so
//!   tests can run against a temporary directory and a fake resizer.
//! - **Contain no direct OS calls**.
//!
//! # Sub-modules
//!
//! - **`assets`**       – The working-directory abstraction and the
//!   configurable asset directory pair.
//! - **`list_designs`** – Pairs each catalog entry with whether its design
//!   file is present.
//! - **`apply_design`** – The four-step regenerate / backup / promote flow.

pub mod apply_design;
pub mod assets;
pub mod list_designs;
