//! fwgather library exports.
//!
//! Exposes the pipeline components for integration testing; the binary in
//! `main.rs` is a thin CLI over these modules.

pub mod config;
pub mod context;
pub mod filemap;
pub mod logger;
pub mod manifest;
pub mod patch;
pub mod pipeline;
pub mod preflight;
pub mod process;
pub mod source;
