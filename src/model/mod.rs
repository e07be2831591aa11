//! Domain model types (pure).
//!
//! Plain data shared by the addressing core, the markers and the shell.

pub mod error;
pub mod listeners;
pub mod position;
pub mod range;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use listeners::{ListenerId, Listeners};
pub use position::BytePosition;
pub use range::ByteRange;
