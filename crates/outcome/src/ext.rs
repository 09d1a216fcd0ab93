//! Logged convenience helpers layered on [`Outcome`].

use std::fmt::Display;

use crate::types::Outcome;

/// Extension trait for consuming an [`Outcome`] at an edge where only the
/// success value matters, without losing the error silently.
///
/// The failure path is reported through `tracing` before being discarded.
pub trait OutcomeExt<T> {
    /// Convert to an `Option`, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Display> OutcomeExt<T> for Outcome<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                tracing::error!("operation failed: {}", error);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                tracing::error!("operation failed, using default: {}", error);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_into_option_logged_success() {
        let outcome: Outcome<i32, String> = Outcome::Success(42);
        assert_eq!(outcome.into_option_logged(), Some(42));
    }

    #[test]
    fn test_into_option_logged_failure() {
        let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_owned());
        assert_eq!(outcome.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged_success() {
        let outcome: Outcome<i32, String> = Outcome::Success(42);
        assert_eq!(outcome.or_default_logged(0), 42);
    }

    #[test]
    fn test_or_default_logged_failure() {
        let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_owned());
        assert_eq!(outcome.or_default_logged(99), 99);
    }
}
