//! Test helpers shared across crates.
//!
//! This crate provides in-memory output streams and a recording exit
//! callback, which together let tests drive the exit-on-error path of a
//! flag set without terminating the test process.

pub mod capture;
pub mod exit;
