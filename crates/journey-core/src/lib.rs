//! Progress model for journey
//!
//! This crate is the heart of journey, containing:
//! - The progress state (learned and frozen days, goal metadata)
//! - Streak and freeze accounting, always re-derived from "today"
//! - Goal completion and the reset transitions between goal periods
//! - Calendar day classification for display
//! - The persisted snapshot shape and its validation
//!
//! Nothing here performs I/O. Persistence lives in `journey-store`.

mod calendar;
mod events;
mod goal;
mod progress;
mod snapshot;

pub use calendar::*;
pub use events::*;
pub use goal::*;
pub use progress::*;
pub use snapshot::*;
