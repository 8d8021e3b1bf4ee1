//! Command handlers
//!
//! These are the entry points a front end calls. They map domain errors to
//! strings suitable for display.

pub mod config;
pub mod pipeline;
pub mod status;
