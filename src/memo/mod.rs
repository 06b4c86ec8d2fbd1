//! Memoization for unary functions.
//!
//! This module provides [`Memoize`], a wrapper that caches the outputs of a
//! unary function keyed by input value, and [`TryMemoize`], its counterpart
//! for fallible functions. Once an input has been computed, repeat calls
//! return the cached output instead of invoking the function again - the
//! central guarantee is **at-most-once evaluation per distinct input** over
//! the lifetime of the wrapper.
//!
//! # Examples
//!
//! ```rust
//! use typecat::memo::Memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let mut memoized = Memoize::new(|n: &u32| {
//!     calls.set(calls.get() + 1);
//!     n * n
//! });
//!
//! assert_eq!(memoized.apply(7), 49);
//! assert_eq!(memoized.apply(7), 49);
//! assert_eq!(memoized.apply(7), 49);
//! assert_eq!(calls.get(), 1); // computed once, served from cache twice
//! ```
//!
//! # Cache Growth
//!
//! The default [`UnboundedCache`] keeps one entry per distinct input ever
//! seen, forever. Eviction is deliberately out of scope here; a bounded
//! store can be substituted through [`Memoize::with_cache`] without changing
//! the lookup algorithm (see [`Cache`]).
//!
//! # Thread Safety
//!
//! `Memoize` takes `&mut self` and performs no internal synchronization.
//! For sharing across threads, use [`SyncMemoize`] (feature `sync`), which
//! wraps a `Memoize` in a mutex.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

mod cache;
#[cfg(feature = "sync")]
mod sync;

pub use cache::{Cache, UnboundedCache};
#[cfg(feature = "sync")]
pub use sync::SyncMemoize;

/// A unary function paired with a cache of its past results.
///
/// `Memoize` owns two pieces of state: the wrapped function, fixed at
/// construction and never reassigned, and a cache mapping previously seen
/// inputs to their computed outputs. [`apply`](Self::apply) consults the
/// cache before invoking the function, so each distinct input is computed
/// at most once (with the default retaining cache).
///
/// Equality of inputs is the key type's native `Eq`: exact-match lookup
/// only. Cached entries are never updated - if the function is
/// non-deterministic, a once-cached input always returns its first computed
/// result.
///
/// # Type Parameters
///
/// * `In` - The input type of the wrapped function
/// * `Out` - The output type of the wrapped function
/// * `F` - The type of the wrapped function (defaults to `fn(&In) -> Out`)
/// * `C` - The cache backend (defaults to [`UnboundedCache`])
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use typecat::memo::Memoize;
///
/// let mut memoized = Memoize::new(|n: &u64| (1..=*n).product::<u64>());
///
/// assert_eq!(memoized.apply(5), 120);  // computed
/// assert_eq!(memoized.apply(5), 120);  // cached
/// assert_eq!(memoized.cached_len(), 1);
/// ```
///
/// ## Absent outputs are cached like any other value
///
/// When `Out` is an `Option`, a computed `None` is stored as a regular
/// entry. [`peek`](Self::peek) therefore distinguishes "cached `None`"
/// (`Some(&None)`) from "never computed" (`None`) - there is no ambiguity
/// between a miss and a legitimately absent result.
///
/// ```rust
/// use typecat::memo::Memoize;
///
/// let mut memoized = Memoize::new(|s: &String| s.parse::<i32>().ok());
///
/// assert_eq!(memoized.apply("oops".to_string()), None);
/// assert_eq!(memoized.peek(&"oops".to_string()), Some(&None)); // hit, absent value
/// assert_eq!(memoized.peek(&"42".to_string()), None);          // never computed
/// ```
pub struct Memoize<In, Out, F = fn(&In) -> Out, C = UnboundedCache<In, Out>> {
    function: F,
    cache: C,
    signature: PhantomData<fn(&In) -> Out>,
}

impl<In, Out, F> Memoize<In, Out, F>
where
    In: Eq + Hash,
    Out: Clone,
    F: FnMut(&In) -> Out,
{
    /// Wraps `function` with an empty [`UnboundedCache`].
    ///
    /// The function is not invoked until the first call to
    /// [`apply`](Self::apply).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typecat::memo::Memoize;
    ///
    /// let mut memoized = Memoize::new(|n: &u32| n.to_string());
    /// assert_eq!(memoized.apply(3), "3");
    /// ```
    #[inline]
    pub fn new(function: F) -> Self {
        Self::with_cache(function, UnboundedCache::new())
    }
}

impl<In, Out, F, C> Memoize<In, Out, F, C>
where
    Out: Clone,
    F: FnMut(&In) -> Out,
    C: Cache<In, Out>,
{
    /// Wraps `function` with a caller-supplied cache backend.
    ///
    /// The cache should be empty; pre-populated entries are served as hits
    /// without the function ever observing those inputs.
    #[inline]
    pub fn with_cache(function: F, cache: C) -> Self {
        Self {
            function,
            cache,
            signature: PhantomData,
        }
    }

    /// Returns the output for `input`, computing it only on first sight.
    ///
    /// On a cache hit the stored output is cloned and returned without
    /// invoking the wrapped function, and the cache is not mutated. On a
    /// miss the function is invoked once, the `(input, output)` pair is
    /// stored, and the output is returned.
    ///
    /// # Panics
    ///
    /// Does not panic itself; a panic raised by the wrapped function
    /// propagates to the caller, and nothing is written to the cache for
    /// that input - a later call with the same input invokes the function
    /// again rather than replaying the failure.
    pub fn apply(&mut self, input: In) -> Out {
        if let Some(cached) = self.cache.get(&input) {
            return cached.clone();
        }
        let computed = (self.function)(&input);
        self.cache.insert(input, computed.clone());
        computed
    }
}

impl<In, Out, F, C> Memoize<In, Out, F, C>
where
    C: Cache<In, Out>,
{
    /// Looks up the cached output for `input` without computing anything.
    ///
    /// Returns `None` only when `input` has never been (successfully)
    /// computed. When `Out` can itself represent absence, the two cases
    /// stay distinct: a cached `None::<V>` comes back as `Some(&None)`.
    #[inline]
    pub fn peek(&self, input: &In) -> Option<&Out> {
        self.cache.get(input)
    }

    /// Returns `true` if an output is cached for `input`.
    #[inline]
    pub fn is_cached(&self, input: &In) -> bool {
        self.cache.contains(input)
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

// The wrapped function is opaque; report only the cache population.
impl<In, Out, F, C> fmt::Debug for Memoize<In, Out, F, C>
where
    C: Cache<In, Out>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached_entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

/// A fallible unary function paired with a cache of its past successes.
///
/// `TryMemoize` is [`Memoize`] for functions returning `Result`. Successful
/// outputs are cached exactly as in `Memoize`; a failed evaluation
/// propagates the error to the caller of [`apply`](Self::apply) and writes
/// **nothing** to the cache, so a later call with the same input retries
/// the function instead of replaying the failure. Failed computations never
/// poison the cache.
///
/// # Type Parameters
///
/// * `In` - The input type of the wrapped function
/// * `Out` - The success output type
/// * `Error` - The error type the wrapped function can return
/// * `F` - The type of the wrapped function
/// * `C` - The cache backend (defaults to [`UnboundedCache`])
///
/// # Examples
///
/// ```rust
/// use typecat::memo::TryMemoize;
///
/// let mut memoized = TryMemoize::new(|n: &i32| {
///     if *n == 0 {
///         Err("division by zero")
///     } else {
///         Ok(100 / n)
///     }
/// });
///
/// assert_eq!(memoized.apply(4), Ok(25));
/// assert_eq!(memoized.apply(0), Err("division by zero"));
/// // The failure was not cached; the input is retried, not replayed.
/// assert!(!memoized.is_cached(&0));
/// assert_eq!(memoized.apply(0), Err("division by zero"));
/// ```
pub struct TryMemoize<In, Out, Error, F = fn(&In) -> Result<Out, Error>, C = UnboundedCache<In, Out>>
{
    function: F,
    cache: C,
    signature: PhantomData<fn(&In) -> Result<Out, Error>>,
}

impl<In, Out, Error, F> TryMemoize<In, Out, Error, F>
where
    In: Eq + Hash,
    Out: Clone,
    F: FnMut(&In) -> Result<Out, Error>,
{
    /// Wraps `function` with an empty [`UnboundedCache`].
    #[inline]
    pub fn new(function: F) -> Self {
        Self::with_cache(function, UnboundedCache::new())
    }
}

impl<In, Out, Error, F, C> TryMemoize<In, Out, Error, F, C>
where
    Out: Clone,
    F: FnMut(&In) -> Result<Out, Error>,
    C: Cache<In, Out>,
{
    /// Wraps `function` with a caller-supplied cache backend.
    #[inline]
    pub fn with_cache(function: F, cache: C) -> Self {
        Self {
            function,
            cache,
            signature: PhantomData,
        }
    }

    /// Returns the output for `input`, computing it only on first sight.
    ///
    /// On a hit the stored output is cloned and returned without invoking
    /// the wrapped function. On a miss the function is invoked once; on
    /// `Ok` the pair is stored and returned, on `Err` the error is returned
    /// before any cache write.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped function's error unchanged. The failed input
    /// is not cached, so the next call with it invokes the function again.
    pub fn apply(&mut self, input: In) -> Result<Out, Error> {
        if let Some(cached) = self.cache.get(&input) {
            return Ok(cached.clone());
        }
        let computed = (self.function)(&input)?;
        self.cache.insert(input, computed.clone());
        Ok(computed)
    }
}

impl<In, Out, Error, F, C> TryMemoize<In, Out, Error, F, C>
where
    C: Cache<In, Out>,
{
    /// Looks up the cached output for `input` without computing anything.
    #[inline]
    pub fn peek(&self, input: &In) -> Option<&Out> {
        self.cache.get(input)
    }

    /// Returns `true` if a successful output is cached for `input`.
    #[inline]
    pub fn is_cached(&self, input: &In) -> bool {
        self.cache.contains(input)
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<In, Out, Error, F, C> fmt::Debug for TryMemoize<In, Out, Error, F, C>
where
    C: Cache<In, Out>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoize")
            .field("cached_entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

// A memoizer over plain function pointers crosses thread boundaries freely.
static_assertions::assert_impl_all!(Memoize<i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(TryMemoize<i32, i32, String>: Send, Sync);
