//! Foundation types for the NEXA shell.
//!
//! This crate holds the types shared by every NEXA crate: the error enum,
//! transcript lines, terminal input events, wall-clock timestamps, and the
//! shell identity configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod line;
pub mod time;
