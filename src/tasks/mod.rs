//! Background Tasks Module
//!
//! # Tasks
//! - Sweeper: evicts stale cache entries at the configured interval

mod sweeper;

pub use sweeper::spawn_sweeper;
