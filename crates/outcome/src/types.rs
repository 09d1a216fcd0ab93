//! The [`Outcome`] type and its combinator surface.

use std::panic;

use crate::error::Violation;
use crate::iter::Iter;

/// A value that is either a success carrying a payload or a failure carrying
/// an error.
///
/// `Outcome` makes success/failure part of a function's declared return
/// contract. Exactly one variant is active, the value is immutable after
/// construction, and every "transformation" produces a new `Outcome` (or a
/// plain value), leaving the original untouched. Consumers either branch with
/// an exhaustive `match` or chain the combinator methods.
///
/// Domain errors stay in the failure channel (`map_failure`, `or_else`,
/// `unwrap_or_else`) until explicitly forced out by [`unwrap`](Self::unwrap)
/// or [`expect`](Self::expect); nothing escalates implicitly.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, std::num::ParseIntError> {
///     Outcome::from_result(raw.parse())
/// }
///
/// let port = parse_port("8080").map(|p| p.saturating_add(1)).unwrap_or(80);
/// assert_eq!(port, 8081);
///
/// let fallback = parse_port("not a port").unwrap_or(80);
/// assert_eq!(fallback, 80);
/// ```
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation completed and produced `T`.
    Success(T),
    /// The operation stopped with error `E`.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is a [`Success`](Self::Success).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a [`Failure`](Self::Failure).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a success whose value satisfies `predicate`.
    ///
    /// The predicate is not invoked for a failure.
    #[must_use]
    pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a failure whose error satisfies `predicate`.
    ///
    /// The predicate is not invoked for a success.
    #[must_use]
    pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Converts to an `Option` over the success value, discarding the error.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts to an `Option` over the error, discarding the success value.
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Produces a borrowing view, leaving the original in place.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to the success value, passing a failure through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let length: Outcome<usize, String> =
    ///     Outcome::Success("test").map(str::len);
    /// assert_eq!(length, Outcome::Success(4));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to the success value, or returns `default` for a failure.
    ///
    /// `default` is eagerly evaluated; use
    /// [`map_or_else`](Self::map_or_else) for a lazily computed fallback.
    /// The mapper comes first, matching the rest of this API rather than the
    /// default-first order of `std::result`.
    #[must_use]
    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, default: U) -> U {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `f` to the success value, or `on_failure` to the error.
    ///
    /// The mapper comes first, matching the rest of this API rather than the
    /// default-first order of `std::result`.
    #[must_use]
    pub fn map_or_else<U>(self, f: impl FnOnce(T) -> U, on_failure: impl FnOnce(E) -> U) -> U {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Applies `f` to the error, passing a success through unchanged.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Invokes `action` with a reference to the success value, then returns
    /// the outcome unchanged. No-op for a failure.
    pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(ref value) = self {
            action(value);
        }
        self
    }

    /// Invokes `action` with a reference to the error, then returns the
    /// outcome unchanged. No-op for a success.
    pub fn inspect_failure(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Failure(ref error) = self {
            action(error);
        }
        self
    }

    /// Returns an iterator yielding the success value exactly once, or
    /// nothing for a failure.
    ///
    /// Each call produces a fresh iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().success())
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics for a failure. The panic payload is a [`Violation`] whose
    /// description is `message` and whose `source()` is the contained error,
    /// so a `catch_unwind` boundary can recover the full diagnostic chain.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: std::error::Error + Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic::panic_any(Violation::with_cause(message, error)),
        }
    }

    /// Returns the success value, propagating the error itself on failure.
    ///
    /// # Panics
    ///
    /// Panics for a failure with the contained error as the panic payload
    /// (not a [`Violation`]); a `catch_unwind` boundary can downcast the
    /// payload to `E`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic::panic_any(error),
        }
    }

    /// Returns the success value or `default`. Never panics.
    ///
    /// `default` is eagerly evaluated; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for a lazily computed
    /// fallback.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error. Never
    /// panics.
    #[must_use]
    pub fn unwrap_or_else(self, on_failure: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics for a success. The panic payload is a causeless [`Violation`]
    /// whose description is `message`.
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E {
        match self {
            Self::Success(_) => panic::panic_any(Violation::new(message)),
            Self::Failure(error) => error,
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics for a success with a causeless [`Violation`] carrying a fixed
    /// diagnostic message.
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic::panic_any(Violation::new("no failure value present")),
            Self::Failure(error) => error,
        }
    }

    /// Returns `other` for a success (discarding the success value), or the
    /// failure unchanged.
    ///
    /// `other` is eagerly evaluated; use [`and_then`](Self::and_then) for a
    /// lazily computed alternative.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible computation off the success value.
    ///
    /// For a success, evaluates `f(value)` and returns its outcome directly,
    /// flattening nested outcomes. For a failure, returns the failure
    /// unchanged without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn checked_len(s: &str) -> Outcome<usize, String> {
    ///     if s.is_empty() {
    ///         Outcome::Failure("empty input".to_owned())
    ///     } else {
    ///         Outcome::Success(s.len())
    ///     }
    /// }
    ///
    /// let chained = Outcome::Success("test").and_then(checked_len);
    /// assert_eq!(chained, Outcome::Success(4));
    ///
    /// let short_circuited: Outcome<usize, String> =
    ///     Outcome::Failure("earlier failure".to_owned()).and_then(checked_len);
    /// assert!(short_circuited.is_failure());
    /// ```
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success unchanged, or `other` for a failure (discarding
    /// the error).
    ///
    /// `other` is eagerly evaluated; use [`or_else`](Self::or_else) for a
    /// lazily computed alternative.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns the success unchanged, or evaluates `f(error)` for a failure.
    ///
    /// `f` is not invoked for a success.
    pub fn or_else(self, f: impl FnOnce(E) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Converts a `std::result::Result` into an `Outcome`.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a `std::result::Result`, the host language's standard
    /// error-propagation channel (enables `?`).
    ///
    /// # Errors
    ///
    /// Returns `Err` with the contained error for a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Lifts an optional success payload out of the outcome: an absent
    /// payload becomes `None` rather than a present-but-empty success.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let absent: Outcome<Option<u8>, String> = Outcome::Success(None);
    /// assert_eq!(absent.transpose(), None);
    ///
    /// let present: Outcome<Option<u8>, String> = Outcome::Success(Some(7));
    /// assert_eq!(present.transpose(), Some(Outcome::Success(7)));
    /// ```
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Self::Success(Some(value)) => Some(Outcome::Success(value)),
            Self::Success(None) => None,
            Self::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
