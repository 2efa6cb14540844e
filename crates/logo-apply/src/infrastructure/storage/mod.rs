//! Storage infrastructure: the working directory and the optional config file.
//!
//! - `local`  – [`AssetStore`](crate::application::assets::AssetStore) backed by
//!   a real directory (the process's working directory in production).
//! - `config` – Reads `logo-apply.toml` from that same directory, falling back
//!   to built-in defaults when the file is absent.

pub mod config;
pub mod local;
