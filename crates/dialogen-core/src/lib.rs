pub mod dialogue;
pub mod error;
pub mod schema;

// Re-export common error type
pub use error::{DialogenError, Result};
pub use schema::SchemaModel;
