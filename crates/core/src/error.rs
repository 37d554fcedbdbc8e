//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, contract sentinels). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A required factory override is missing on a concrete type.
    ///
    /// The message already names the offending type; Display adds nothing.
    #[error("{0}")]
    NotImplemented(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Sentinel for a concrete aggregate that never supplied its own `create`.
    pub fn unimplemented_factory(type_name: &str) -> Self {
        Self::NotImplemented(format!(
            "Static method [create] not implemented on aggregate {type_name}"
        ))
    }

    /// The human-readable message without any Display prefix.
    ///
    /// Factory failures are asserted on by message, so this must round-trip
    /// the exact string the factory supplied.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::InvariantViolation(msg) | Self::NotImplemented(msg) => {
                msg
            }
        }
    }
}

impl From<&str> for DomainError {
    fn from(msg: &str) -> Self {
        Self::Validation(msg.to_owned())
    }
}

impl From<String> for DomainError {
    fn from(msg: String) -> Self {
        Self::Validation(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips_the_input_string() {
        let err = DomainError::validation("age out of range");
        assert_eq!(err.message(), "age out of range");

        let err = DomainError::invariant("id already assigned");
        assert_eq!(err.message(), "id already assigned");
    }

    #[test]
    fn unimplemented_factory_names_the_offending_type() {
        let err = DomainError::unimplemented_factory("OrderAggregate");
        assert_eq!(
            err.message(),
            "Static method [create] not implemented on aggregate OrderAggregate"
        );
        // No Display prefix for the sentinel: the sentence stands on its own.
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn display_prefixes_validation_and_invariant() {
        assert_eq!(
            DomainError::validation("bad").to_string(),
            "validation failed: bad"
        );
        assert_eq!(
            DomainError::invariant("broken").to_string(),
            "invariant violated: broken"
        );
    }

    #[test]
    fn str_conversions_build_validation_errors() {
        let err: DomainError = "too short".into();
        assert_eq!(err, DomainError::Validation("too short".to_owned()));

        let err: DomainError = String::from("too long").into();
        assert_eq!(err, DomainError::Validation("too long".to_owned()));
    }
}
