//! # Outcome
//!
//! An explicit, immutable success-or-failure value with a full combinator
//! surface. [`Outcome<T, E>`] carries either a success payload or an error
//! as part of a function's declared return contract, so failure is an
//! inspectable value rather than an implicit side channel.
//!
//! ## Channels
//!
//! Two error channels exist and are never conflated:
//!
//! - The **failure channel** carries the domain error. It flows through
//!   [`Outcome::map_failure`], [`Outcome::or_else`],
//!   [`Outcome::unwrap_or_else`] and friends, and only escalates to a panic
//!   through the explicit [`Outcome::unwrap`] / [`Outcome::expect`]
//!   accessors.
//! - **Precondition violations** (unwrapping the wrong variant) panic
//!   immediately with a typed [`Violation`] payload. They signal a caller
//!   defect and are never representable as an `Outcome`.
//!
//! ## Example
//!
//! ```
//! use outcome::Outcome;
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "answer" => Outcome::Success(42),
//!         other => Outcome::Failure(format!("unknown key: {other}")),
//!     }
//! }
//!
//! let doubled = lookup("answer")
//!     .map(|n| n.saturating_mul(2))
//!     .and_then(|n| {
//!         if n > 100 {
//!             Outcome::Failure("out of range".to_owned())
//!         } else {
//!             Outcome::Success(n)
//!         }
//!     });
//! assert_eq!(doubled, Outcome::Success(84));
//!
//! let recovered = lookup("missing").or_else(|_| lookup("answer"));
//! assert_eq!(recovered.unwrap_or(0), 42);
//! ```

mod error;
mod ext;
mod iter;
mod types;

pub use error::Violation;
pub use ext::OutcomeExt;
pub use iter::{IntoIter, Iter};
pub use types::Outcome;
