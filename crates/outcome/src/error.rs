//! Precondition-violation reporting for the panicking accessors.

use std::convert::Infallible;

use thiserror::Error;

/// The payload carried by a panic from a wrong-variant accessor such as
/// [`expect`](crate::Outcome::expect) or
/// [`unwrap_failure`](crate::Outcome::unwrap_failure).
///
/// A violation signals a caller defect, not a runtime condition to handle:
/// it is never wrapped inside an [`Outcome`](crate::Outcome) and never flows
/// through the failure channel. `Display` is the description supplied at the
/// call site; when an error was present it is attached as the `source()` so
/// diagnostic chains stay intact across the panic boundary.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Violation<C = Infallible> {
    message: String,
    #[source]
    cause: Option<C>,
}

impl Violation {
    /// Builds a causeless violation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

impl<C> Violation<C> {
    /// Builds a violation with the error that was present when the wrong
    /// variant was unwrapped.
    pub fn with_cause(message: impl Into<String>, cause: C) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// The description supplied at the call site.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attached error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&C> {
        self.cause.as_ref()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::error::Error as _;

    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct OpError(String);

    #[test]
    fn test_display_is_the_description() {
        let violation = Violation::new("something was unwrapped wrongly");
        assert_eq!(violation.to_string(), "something was unwrapped wrongly");
        assert!(violation.cause().is_none());
    }

    #[test]
    fn test_cause_is_exposed_as_source() {
        let violation = Violation::with_cause("msg", OpError("boom".to_owned()));
        assert_eq!(violation.message(), "msg");

        let source = violation.source().unwrap();
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn test_causeless_violation_has_no_source() {
        assert!(Violation::new("msg").source().is_none());
    }
}
