//! Result type alias for the user service.

use crate::AppError;

/// A specialized `Result` type for user service operations.
pub type AppResult<T> = Result<T, AppError>;
