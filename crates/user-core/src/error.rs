//! Unified error taxonomy shared by every layer of the user service.
//!
//! An [`AppError`] is a classified failure: a closed [`ErrorKind`], which
//! fixes the stable code and the HTTP-style status hint, plus a
//! human-readable message. Two errors are the same kind when their kinds
//! match, whatever their messages say.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Closed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration could not be loaded or failed validation.
    ConfigLoad,
    /// The document store could not be reached at startup.
    StoreInit,
    /// A store query or document decode failed.
    StoreRead,
    /// A store insert, update, or delete failed or touched nothing.
    StoreWrite,
    /// No stored user matches the requested identifier.
    NotFound,
    /// The cache could not be reached at startup.
    CacheInit,
    /// A cache read failed for a reason other than a missing key.
    CacheRead,
    /// A cache write failed.
    CacheWrite,
    /// The cache holds no value for the key.
    CacheMiss,
    /// A request failed field validation.
    Validation,
    /// A numeric request field could not be parsed.
    Parse,
    /// An identifier string is not a valid UUID.
    Conversion,
    /// The password hash function failed.
    Hashing,
    /// A cached payload could not be decoded.
    Unmarshal,
    /// Failure surfaced at the RPC boundary.
    Controller,
}

impl ErrorKind {
    /// Returns the stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigLoad => "ENV_PARSE_ERR",
            Self::StoreInit => "MONGO_DB_INIT_ERR",
            Self::StoreRead => "USER_REPO_READ_ERR",
            Self::StoreWrite => "USER_REPO_WRITE_ERR",
            Self::NotFound => "USER_NOT_FOUND",
            Self::CacheInit => "REDIS_INIT_ERR",
            Self::CacheRead => "REDIS_READ_ERR",
            Self::CacheWrite => "REDIS_WRITE_ERR",
            Self::CacheMiss => "REDIS_KEY_NOT_FOUND",
            Self::Validation => "VALIDATION_ERR",
            Self::Parse => "PARSE_ERR",
            Self::Conversion => "UUID_CONVERSION_ERR",
            Self::Hashing => "HASH_PASSWORD_ERR",
            Self::Unmarshal => "UNMARSHAL_ERR",
            Self::Controller => "CONTROLLER_ERR",
        }
    }

    /// Returns the HTTP status hint for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound | Self::CacheMiss => 404,
            Self::Validation | Self::Parse | Self::Conversion | Self::Controller => 400,
            Self::ConfigLoad
            | Self::StoreInit
            | Self::StoreRead
            | Self::StoreWrite
            | Self::CacheInit
            | Self::CacheRead
            | Self::CacheWrite
            | Self::Hashing
            | Self::Unmarshal => 500,
        }
    }

    /// Returns a new error of this kind.
    #[must_use]
    pub fn error(self, message: impl Into<String>) -> AppError {
        AppError::new(self, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A classified, immutable failure value.
#[derive(Error, Debug, Clone)]
#[error("{code}: {message}", code = .kind.code())]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Returns a new error with `context` appended to the message.
    ///
    /// Kind, code, and status are preserved; `self` is left untouched.
    #[must_use]
    pub fn with_context(&self, context: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{} : {}", self.message, context),
        }
    }

    /// Returns true when this error belongs to `kind`.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Returns true when both errors carry the same kind.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Classifies an arbitrary error against a known kind.
///
/// Returns false for anything that is not an [`AppError`].
#[must_use]
pub fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    err.downcast_ref::<AppError>().is_some_and(|e| e.is(kind))
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let detail = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    format!("{field}: {detail}")
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::new(ErrorKind::Validation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_message() {
        let err = ErrorKind::StoreRead.error("Failed decodeUsers");
        assert_eq!(err.to_string(), "USER_REPO_READ_ERR: Failed decodeUsers");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::CacheMiss.status_code(), 404);
        assert_eq!(ErrorKind::Validation.status_code(), 400);
        assert_eq!(ErrorKind::Parse.status_code(), 400);
        assert_eq!(ErrorKind::Conversion.status_code(), 400);
        assert_eq!(ErrorKind::StoreWrite.status_code(), 500);
        assert_eq!(ErrorKind::Hashing.status_code(), 500);
    }

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ErrorKind::ConfigLoad,
            ErrorKind::StoreInit,
            ErrorKind::StoreRead,
            ErrorKind::StoreWrite,
            ErrorKind::NotFound,
            ErrorKind::CacheInit,
            ErrorKind::CacheRead,
            ErrorKind::CacheWrite,
            ErrorKind::CacheMiss,
            ErrorKind::Validation,
            ErrorKind::Parse,
            ErrorKind::Conversion,
            ErrorKind::Hashing,
            ErrorKind::Unmarshal,
            ErrorKind::Controller,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_with_context_preserves_kind_and_original() {
        let original = ErrorKind::StoreWrite.error("Failed UpdateUserByID");
        let extended = original.with_context("not found 42");

        assert_eq!(original.message(), "Failed UpdateUserByID");
        assert_eq!(extended.message(), "Failed UpdateUserByID : not found 42");
        assert_eq!(extended.code(), original.code());
        assert_eq!(extended.status_code(), original.status_code());
        assert!(extended.same_kind(&original));
    }

    #[test]
    fn test_same_kind_ignores_message() {
        let a = ErrorKind::CacheMiss.error("key a");
        let b = ErrorKind::CacheMiss.error("key b").with_context("more");
        let c = ErrorKind::CacheRead.error("key a");

        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
    }

    #[test]
    fn test_is_kind_on_dyn_error() {
        let err: Box<dyn StdError> = Box::new(ErrorKind::CacheMiss.error("missing"));
        assert!(is_kind(err.as_ref(), ErrorKind::CacheMiss));
        assert!(!is_kind(err.as_ref(), ErrorKind::CacheRead));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!is_kind(&io, ErrorKind::CacheMiss));
    }

    #[test]
    fn test_validation_errors_conversion() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "must not be empty"))]
            first_name: String,
        }

        let errors = Probe {
            first_name: String::new(),
        }
        .validate()
        .unwrap_err();
        let err = AppError::from(errors);

        assert!(err.is(ErrorKind::Validation));
        assert_eq!(err.message(), "first_name: must not be empty");
    }
}
