//! Explicit outcome type for fallible domain operations.
//!
//! Domain failures are **data**, not panics: every validated factory returns
//! a [`DomainResult`] and the caller inspects it before touching the payload.
//! Panics are reserved for caller bugs (reading the wrong variant).

use crate::error::DomainError;

/// Outcome of a fallible domain operation.
///
/// Exactly one side is ever populated. `value()` is only valid on a success,
/// `error()` only on a failure; crossing them is a programming error at the
/// call site and panics with a message naming the misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainResult<T> {
    Success(T),
    Failure(DomainError),
}

impl<T> DomainResult<T> {
    /// Wrap a payload in a success outcome.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a failure. Accepts a plain message (`fail("reason")`) or a
    /// ready-made [`DomainError`].
    pub fn fail(error: impl Into<DomainError>) -> Self {
        Self::Failure(error.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the payload.
    ///
    /// # Panics
    /// When called on a failure outcome.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("value accessed on a failure result"),
        }
    }

    /// Take the payload out of the outcome.
    ///
    /// # Panics
    /// When called on a failure outcome.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("value accessed on a failure result"),
        }
    }

    /// Borrow the failure.
    ///
    /// # Panics
    /// When called on a success outcome.
    pub fn error(&self) -> &DomainError {
        match self {
            Self::Success(_) => panic!("error accessed on a success result"),
            Self::Failure(error) => error,
        }
    }

    /// The payload, discarding a failure.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure, discarding a payload.
    pub fn err(self) -> Option<DomainError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

/// Bridge into `?`-based code.
impl<T> From<DomainResult<T>> for Result<T, DomainError> {
    fn from(outcome: DomainResult<T>) -> Self {
        match outcome {
            DomainResult::Success(value) => Ok(value),
            DomainResult::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, DomainError>> for DomainResult<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
