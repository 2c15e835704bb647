//! Shared utilities for journey
//!
//! This crate provides:
//! - The `Clock` time source (system and fixed implementations)
//! - Calendar-day helpers (local day boundaries, day arithmetic)
//! - Error types
//! - Default paths for config and data directories

mod error;
mod paths;
mod time;

pub use error::*;
pub use paths::*;
pub use time::*;
