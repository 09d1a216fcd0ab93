//! Length-0-or-1 iterator views over the success value.

use std::iter::FusedIterator;

use crate::types::Outcome;

/// Borrowing iterator over an [`Outcome`]: the success value once, or
/// nothing for a failure.
///
/// Created by [`Outcome::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator over an [`Outcome`]: the success value once, or
/// nothing for a failure.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.success(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_iter_yields_success_value_once() {
        let outcome: Outcome<&str, String> = Outcome::Success("test");
        let collected: Vec<&&str> = outcome.iter().collect();
        assert_eq!(collected, vec![&"test"]);
    }

    #[test]
    fn test_iter_is_empty_for_failure() {
        let outcome: Outcome<&str, String> = Outcome::Failure("boom".to_owned());
        assert_eq!(outcome.iter().count(), 0);
    }

    #[test]
    fn test_iter_is_restartable() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        assert_eq!(outcome.iter().count(), 1);
        assert_eq!(outcome.iter().count(), 1);
    }

    #[test]
    fn test_iter_reports_exact_size() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        assert_eq!(outcome.iter().len(), 1);

        let failed: Outcome<i32, String> = Outcome::Failure("boom".to_owned());
        assert_eq!(failed.iter().len(), 0);
    }

    #[test]
    fn test_iter_is_fused_after_the_single_element() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        let mut iter = outcome.iter();
        assert_eq!(iter.next(), Some(&7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_consumes_the_success_value() {
        let outcome: Outcome<String, String> = Outcome::Success("test".to_owned());
        let collected: Vec<String> = outcome.into_iter().collect();
        assert_eq!(collected, vec!["test".to_owned()]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        let mut seen = Vec::new();
        for value in &outcome {
            seen.push(*value);
        }
        assert_eq!(seen, vec![7]);
    }

    #[test]
    fn test_double_ended_yields_the_same_single_element() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        assert_eq!(outcome.iter().next_back(), Some(&7));
    }
}
