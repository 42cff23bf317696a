//! fg-core: shared error taxonomy and stream metadata model.
//!
//! Every other fg-* crate reports failures through [`Error`] and hands
//! recovered addon payloads around as [`StreamMetadata`].

pub mod error;
pub mod stream;

// Re-export the most commonly used items at the crate root.
pub use error::{EncodingStage, Error, ErrorKind, Result};
pub use stream::StreamMetadata;
