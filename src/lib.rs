//! # typecat
//!
//! A minimal functional programming toolkit providing identity,
//! function composition, and memoization.
//!
//! ## Overview
//!
//! This library provides three independent building blocks:
//!
//! - **Identity**: the [`identity`](compose::identity) function - returns its
//!   argument unchanged
//! - **Composition**: the [`compose`](compose::compose) combinator - chains two
//!   unary functions into one
//! - **Memoization**: [`Memoize`](memo::Memoize) and
//!   [`TryMemoize`](memo::TryMemoize) - wrap a unary function so repeated
//!   inputs return a cached result instead of recomputing
//!
//! None of the three depends on the others; each can be used on its own.
//!
//! ## Feature Flags
//!
//! - `compose`: Identity and composition combinators (default)
//! - `memo`: Memoization wrappers (default)
//! - `sync`: Thread-safe memoizer ([`SyncMemoize`](memo::SyncMemoize))
//! - `fxhash`: Faster non-cryptographic hashing for the memoizer cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use typecat::prelude::*;
//!
//! fn parse(text: &str) -> i32 {
//!     text.parse().unwrap_or(0)
//! }
//! fn double(number: i32) -> i32 {
//!     number * 2
//! }
//!
//! // "double after parse": parse is applied first
//! let parse_then_double = compose(parse, double);
//! assert_eq!(parse_then_double("42"), 84);
//!
//! // Memoize an expensive function: repeated inputs hit the cache
//! let mut memoized = Memoize::new(|n: &u64| (0..*n).sum::<u64>());
//! assert_eq!(memoized.apply(10), 45);
//! assert_eq!(memoized.apply(10), 45); // cached, not recomputed
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use typecat::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "memo")]
pub mod memo;
