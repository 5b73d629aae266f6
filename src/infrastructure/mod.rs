//! Infrastructure layer for sandbox filesystem paths.
//!
//! Zellij mounts the host filesystem under `/host`; everything the plugin
//! reads or writes on disk goes through the helpers here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_path};
