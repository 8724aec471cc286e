//! GpaGrip Core - Pure domain logic with no external dependencies
//!
//! This crate contains the course roster, the grade and credit reference
//! tables, and the GPA aggregation rules. It knows nothing about terminals,
//! config files or key bindings - those live in the presentation layer.

pub mod domain;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
