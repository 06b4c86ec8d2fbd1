//! Cache storage for memoized functions.
//!
//! The memoizer's lookup algorithm is written against the small [`Cache`]
//! trait rather than a concrete map, so that a bounded or evicting store
//! (LRU, TTL) can be substituted without touching
//! [`Memoize::apply`](super::Memoize::apply). The default store is
//! [`UnboundedCache`], which grows monotonically and never evicts.

use std::hash::Hash;

#[cfg(feature = "fxhash")]
type CacheMap<In, Out> = rustc_hash::FxHashMap<In, Out>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<In, Out> = std::collections::HashMap<In, Out>;

/// Storage backend for a memoized function.
///
/// Lookup uses the key type's native equality: exact-match semantics, no
/// approximate matching. Implementations are free to decline to retain an
/// inserted entry (bounded caches); the memoizer stays correct either way,
/// but only a store that retains everything gives at-most-once evaluation
/// per distinct input.
///
/// # Examples
///
/// A capacity-capped store that simply stops accepting entries when full:
///
/// ```
/// use typecat::memo::{Cache, Memoize};
/// use std::collections::HashMap;
///
/// struct CappedCache {
///     entries: HashMap<u32, u32>,
///     capacity: usize,
/// }
///
/// impl Cache<u32, u32> for CappedCache {
///     fn get(&self, key: &u32) -> Option<&u32> {
///         self.entries.get(key)
///     }
///     fn insert(&mut self, key: u32, value: u32) {
///         if self.entries.len() < self.capacity {
///             self.entries.insert(key, value);
///         }
///     }
///     fn len(&self) -> usize {
///         self.entries.len()
///     }
/// }
///
/// let capped = CappedCache { entries: HashMap::new(), capacity: 1 };
/// let mut memoized = Memoize::with_cache(|x: &u32| x * 2, capped);
/// assert_eq!(memoized.apply(1), 2);
/// assert_eq!(memoized.apply(2), 4); // not retained, but still correct
/// ```
pub trait Cache<In, Out> {
    /// Looks up the stored output for `key`, if any.
    fn get(&self, key: &In) -> Option<&Out>;

    /// Stores `value` under `key`.
    ///
    /// The memoizer only calls this after a miss, so implementations may
    /// assume `key` is not already present.
    fn insert(&mut self, key: In, value: Out);

    /// Returns `true` if an output is stored for `key`.
    fn contains(&self, key: &In) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The default cache: an unbounded hash map.
///
/// Entries are added on first sight of an input and never removed or
/// updated - even if the memoized function is non-deterministic, a
/// once-cached input always returns its first computed result. There is no
/// eviction policy, no TTL, and no maximum size; the trade is unbounded
/// memory growth (one entry per distinct input ever seen) for avoided
/// recomputation. Callers needing a bound substitute their own [`Cache`]
/// via [`Memoize::with_cache`](super::Memoize::with_cache).
///
/// With the `fxhash` feature enabled, the backing map uses
/// `rustc_hash::FxHashMap` instead of the standard library's SipHash map.
/// Key equality is unaffected; only hashing speed changes.
#[derive(Clone, Debug, Default)]
pub struct UnboundedCache<In, Out> {
    entries: CacheMap<In, Out>,
}

impl<In, Out> UnboundedCache<In, Out> {
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: CacheMap::default(),
        }
    }
}

impl<In, Out> Cache<In, Out> for UnboundedCache<In, Out>
where
    In: Eq + Hash,
{
    #[inline]
    fn get(&self, key: &In) -> Option<&Out> {
        self.entries.get(key)
    }

    #[inline]
    fn insert(&mut self, key: In, value: Out) {
        self.entries.insert(key, value);
    }

    #[inline]
    fn contains(&self, key: &In) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
