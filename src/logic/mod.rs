//! Core Logic
//!
//! Everything below the command boundary: classification, polarity,
//! persistence and aggregation.

pub mod analysis;
pub mod sentiment;
pub mod stats;
pub mod store;
