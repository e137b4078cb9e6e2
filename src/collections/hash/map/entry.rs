use std::borrow::Borrow;

use crate::collections::linked::LinkedList;

/// A bucket is either empty or the chain of every entry whose hash maps to it.
pub(crate) type Bucket<K, V> = Option<LinkedList<Entry<K, V>>>;

/// A single mapping stored in a bucket's chain, along with the spread hash of its key.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// Calculated once when the entry is created, then reused whenever the table is resized.
    pub hash: u64,
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Checks the cheap hash comparison first, only comparing keys when the hashes are identical.
    pub fn matches<Q>(&self, hash: u64, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hash == hash && self.key.borrow() == key
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Two entries are equal when their hashes are identical and their keys are equal, regardless of
/// their values.
impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.key == other.key
    }
}

/// Folds the high half of a hash into the low half, so that the bits above the capacity still
/// influence which bucket a key lands in.
pub(crate) const fn spread(hash: u64) -> u64 {
    hash ^ (hash >> 32)
}
