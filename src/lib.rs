//! GpaGrip application library
//!
//! Terminal presentation for the course roster in `gpagrip-core`, plus the
//! config and CLI plumbing around it. Exposed as a library for testing.

pub mod cli;
pub mod config;
pub mod tui;
