//! Command Boundary
//!
//! Thin layer between the presentation front-end and the core logic.

pub mod commands;
