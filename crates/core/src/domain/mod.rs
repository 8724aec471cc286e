pub mod course;
pub mod options;
pub mod aggregate;
pub mod roster;
pub mod events;

// Re-exports for convenience
pub use course::*;
pub use options::*;
pub use aggregate::*;
pub use roster::*;
pub use events::*;
