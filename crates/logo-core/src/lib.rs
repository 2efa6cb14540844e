//! # logo-core
//!
//! Shared domain library for the logo applicator.
//!
//! This crate has zero dependencies on the file system, child processes, or
//! the command line.  Everything in here is a static table or a pure function,
//! so it can be tested on any platform without any setup.
//!
//! # Overview (for beginners)
//!
//! The logo applicator takes one of a handful of pre-rendered logo designs
//! (`logo_design_<N>.png`) and turns it into every image the iOS app needs:
//! the home-screen icon at 13 sizes and the in-app logo at 1x/2x/3x.
//!
//! This crate defines:
//!
//! - **`domain::catalog`** – The fixed list of seven named designs and the
//!   validated [`DesignNumber`] type used to pick one.
//!
//! - **`domain::assets`** – The fixed icon size list, the logo scale list,
//!   and the file naming conventions that tie them to paths on disk.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `logo_core::DesignCatalog` instead of `logo_core::domain::catalog::DesignCatalog`.
pub use domain::assets::{
    backup_file_name, design_file_name, icon_file_name, LogoScale, DEFAULT_ICON_DIR,
    DEFAULT_LOGO_DIR, DEFAULT_LOGO_FILE, ICON_SIZES,
};
pub use domain::catalog::{CatalogError, Design, DesignCatalog, DesignNumber};
