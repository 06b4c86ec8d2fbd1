//! Function composition utilities.
//!
//! This module provides the fundamental combinators for building functions
//! out of other functions:
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`compose`]: Composes two unary functions into one
//!
//! # Composition Order
//!
//! [`compose`] reads "g after f": given `f: A -> B` and `g: B -> C`,
//! `compose(f, g)` produces `A -> C` that applies `f` **first**:
//!
//! ```text
//! compose(f, g)(x) = g(f(x))
//! ```
//!
//! # Examples
//!
//! ```
//! use typecat::compose::{compose, identity};
//!
//! fn parse(text: &str) -> i32 { text.parse().unwrap_or(0) }
//! fn double(number: i32) -> i32 { number * 2 }
//!
//! let parse_then_double = compose(parse, double);
//! assert_eq!(parse_then_double("42"), 84);
//!
//! // identity is the unit of composition
//! let unchanged = compose(identity, double);
//! assert_eq!(unchanged(21), double(21));
//! ```
//!
//! # Laws
//!
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`

mod combinators;

pub use combinators::{compose, identity};
