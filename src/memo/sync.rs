//! Thread-safe memoization.
//!
//! [`Memoize`](super::Memoize) is deliberately unsynchronized; this module
//! provides [`SyncMemoize`], the external synchronization wrapper for
//! sharing a memoizer across threads. The whole lookup-or-compute runs
//! under one mutex, so concurrent calls with the same not-yet-cached input
//! cannot both invoke the wrapped function: one computes, the rest observe
//! the hit. At-most-once evaluation per distinct input and non-caching of
//! failures hold unchanged under the lock.

use std::hash::Hash;

use parking_lot::Mutex;

use super::Memoize;
use super::cache::{Cache, UnboundedCache};

/// A memoizer that can be shared between threads.
///
/// Wraps a [`Memoize`](super::Memoize) in a [`parking_lot::Mutex`] and
/// exposes the same operations through `&self`. The mutex is held for the
/// full duration of a miss, including the wrapped function's execution -
/// threads racing on the same uncached input serialize, and exactly one of
/// them computes.
///
/// # Re-entry Warning
///
/// The wrapped function must not call back into the same `SyncMemoize`
/// instance; doing so deadlocks on the held lock.
///
/// # Thread Safety
///
/// `SyncMemoize` is `Send` and `Sync` when `In`, `Out`, `F`, and `C` are
/// `Send`. Plain function pointers and the default cache always qualify.
///
/// # Examples
///
/// ```rust
/// use typecat::memo::SyncMemoize;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// static CALLS: AtomicUsize = AtomicUsize::new(0);
///
/// fn expensive(n: &u64) -> u64 {
///     CALLS.fetch_add(1, Ordering::SeqCst);
///     (0..*n).sum()
/// }
///
/// let memoized = Arc::new(SyncMemoize::new(expensive as fn(&u64) -> u64));
///
/// let handles: Vec<_> = (0..8)
///     .map(|_| {
///         let memoized = Arc::clone(&memoized);
///         thread::spawn(move || memoized.apply(1000))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 499_500);
/// }
/// // All eight threads raced on one input; it was computed once.
/// assert_eq!(CALLS.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncMemoize<In, Out, F = fn(&In) -> Out, C = UnboundedCache<In, Out>> {
    inner: Mutex<Memoize<In, Out, F, C>>,
}

impl<In, Out, F> SyncMemoize<In, Out, F>
where
    In: Eq + Hash,
    Out: Clone,
    F: FnMut(&In) -> Out,
{
    /// Wraps `function` with an empty [`UnboundedCache`].
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            inner: Mutex::new(Memoize::new(function)),
        }
    }
}

impl<In, Out, F, C> SyncMemoize<In, Out, F, C>
where
    Out: Clone,
    F: FnMut(&In) -> Out,
    C: Cache<In, Out>,
{
    /// Wraps `function` with a caller-supplied cache backend.
    #[inline]
    pub fn with_cache(function: F, cache: C) -> Self {
        Self {
            inner: Mutex::new(Memoize::with_cache(function, cache)),
        }
    }

    /// Returns the output for `input`, computing it only on first sight.
    ///
    /// Identical semantics to [`Memoize::apply`](super::Memoize::apply),
    /// but callable through a shared reference. Blocks while another
    /// thread holds the lock, including during that thread's compute.
    pub fn apply(&self, input: In) -> Out {
        self.inner.lock().apply(input)
    }
}

impl<In, Out, F, C> SyncMemoize<In, Out, F, C>
where
    C: Cache<In, Out>,
{
    /// Returns `true` if an output is cached for `input`.
    ///
    /// Advisory under concurrency: another thread may insert the entry
    /// between this call and a subsequent `apply`.
    pub fn is_cached(&self, input: &In) -> bool {
        self.inner.lock().is_cached(input)
    }

    /// Returns the number of cached entries.
    pub fn cached_len(&self) -> usize {
        self.inner.lock().cached_len()
    }
}

static_assertions::assert_impl_all!(SyncMemoize<i32, String>: Send, Sync);
