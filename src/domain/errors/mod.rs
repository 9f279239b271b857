//! Domain error types.

mod storage_error;

pub use storage_error::StorageError;
