use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Bucket, Entry, IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut, spread};
use crate::collections::contiguous::Array;
use crate::collections::linked::LinkedList;
#[doc(inline)]
pub use crate::util::error::InvalidArgument;
use crate::util::fmt::{DebugIter, DebugRaw};

/// The smallest number of buckets a HashMap is created with.
pub const DEFAULT_CAP: usize = 3;

pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved by separate chaining: each bucket is either empty or a
/// [`LinkedList`] of the entries whose hash maps to it. Once the number of entries exceeds the
/// threshold (the capacity multiplied by the load factor, rounded down) the number of buckets
/// doubles and every entry is moved across, reusing the hash it was stored with.
///
/// Inserting a key that is already present replaces its value and returns the old one.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `c`: The capacity of the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n + c)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `clear` | `O(n + c)` |
///
/// \* Each of these walks the chain of a single bucket, which the load factor keeps short unless
/// many keys share a hash. When an insertion pushes the map over its threshold, it also pays for a
/// resize.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) threshold: usize,
    pub(crate) load_factor: f64,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with the default capacity and load factor, using the default value
    /// for `B`.
    ///
    /// ```
    /// # use classic_collections::collections::hash::HashMap;
    /// let map: HashMap<u8, u8> = HashMap::new();
    /// assert_eq!(map.cap(), 3);
    /// assert_eq!(map.threshold(), 2);
    /// ```
    pub fn new() -> HashMap<K, V, B> {
        Self::with_cap_and_hasher(DEFAULT_CAP, B::default())
    }

    /// Creates a new HashMap with the provided `cap`acity, or [`DEFAULT_CAP`] if that is larger.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        Self::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new HashMap with the provided `cap`acity and `load_factor`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `load_factor` isn't a finite, positive number.
    pub fn with_cap_and_load_factor(
        cap: usize,
        load_factor: f64,
    ) -> Result<HashMap<K, V, B>, InvalidArgument> {
        Self::with_config(cap, load_factor, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with the default capacity and load factor, and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        Self::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        let cap = cap.max(DEFAULT_CAP);
        HashMap {
            arr: Array::repeat_with(|| None, cap),
            len: 0,
            threshold: threshold(cap, DEFAULT_LOAD_FACTOR),
            load_factor: DEFAULT_LOAD_FACTOR,
            hasher,
        }
    }

    /// Creates a new HashMap with every parameter provided.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `load_factor` isn't a finite, positive number.
    pub fn with_config(
        cap: usize,
        load_factor: f64,
        hasher: B,
    ) -> Result<HashMap<K, V, B>, InvalidArgument> {
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(InvalidArgument {
                reason: "load factor must be a finite, positive number",
            });
        }

        let mut map = Self::with_cap_and_hasher(cap, hasher);
        map.load_factor = load_factor;
        map.threshold = threshold(map.cap(), load_factor);
        Ok(map)
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets in the HashMap.
    pub fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the number of entries the HashMap can hold before the next insertion resizes it.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// ```
    /// # use classic_collections::collections::hash::HashMap;
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        let index = self.index_for(hash);
        let bucket = self.arr[index].get_or_insert_with(LinkedList::new);

        if let Some(existing) = bucket.find_mut_by(|e| e.matches(hash, &key)) {
            return Some(mem::replace(&mut existing.value, value));
        }

        bucket.push_back(Entry { hash, key, value });
        self.len += 1;
        if self.len > self.threshold {
            self.resize();
        }
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.arr[self.index_for(hash)]
            .as_ref()?
            .find_by(|e| e.matches(hash, key))
            .map(|e| (&e.key, &e.value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        let index = self.index_for(hash);
        self.arr[index]
            .as_mut()?
            .find_mut_by(|e| e.matches(hash, key))
            .map(|e| &mut e.value)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        let index = self.index_for(hash);
        let bucket = self.arr[index].as_mut()?;
        let removed = bucket.remove_first_by(|e| e.matches(hash, key))?;

        if bucket.is_empty() {
            self.arr[index] = None;
        }
        self.len -= 1;
        Some(removed.into_tuple())
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Drops every entry while keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in self.arr.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            len: self.len,
            inner: self.arr.iter_mut().flatten().flatten(),
        }
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Hashes `hashable` with the map's hasher and spreads the result.
    pub(crate) fn hash_of<H: Hash + ?Sized>(&self, hashable: &H) -> u64 {
        spread(self.hasher.hash_one(hashable))
    }

    /// Finds the bucket for an already spread `hash`. The capacity is never 0.
    pub(crate) fn index_for(&self, hash: u64) -> usize {
        (hash % self.cap() as u64) as usize
    }

    /// Doubles the number of buckets and moves every entry into the new table.
    pub(crate) fn resize(&mut self) {
        let new_cap = self.cap() * GROWTH_FACTOR;

        // Replace the Array first so that we can consume the old Array.
        let old_arr = mem::replace(&mut self.arr, Array::repeat_with(|| None, new_cap));
        self.threshold = threshold(new_cap, self.load_factor);

        for entry in old_arr.into_iter().flatten().flatten() {
            let index = self.index_for(entry.hash);
            self.arr[index].get_or_insert_with(LinkedList::new).push_back(entry);
        }
    }
}

/// The largest number of entries that `cap` buckets hold at `load_factor`.
fn threshold(cap: usize, load_factor: f64) -> usize {
    (cap as f64 * load_factor).floor() as usize
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            threshold: self.threshold,
            load_factor: self.load_factor,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    /// Maps are equal when they hold the same mappings, regardless of capacity or hasher.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.arr.iter().map(|bucket| match bucket {
            Some(chain) => DebugRaw(
                chain.iter()
                    .map(|e| format!("({:?}: {:?})", e.key, e.value))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            ),
            None => DebugRaw("-".into()),
        });

        f.debug_struct("HashMap")
            .field("buckets", &DebugIter(buckets))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("threshold", &self.threshold)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
