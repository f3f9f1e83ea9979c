//! [Hash Table] with separate chaining and a pluggable string hash.
//!
//! Each bucket holds the head of a singly-linked chain of entries. New keys are
//! appended to the end of their chain, so iteration within a bucket follows
//! insertion order. The table doubles its bucket count whenever the load
//! factor exceeds `0.75` before an insert.
//!
//! [Hash Table]: https://en.wikipedia.org/wiki/Hash_table

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use core::iter;
use core::mem;
use core::ops::Index;

use crate::collections::hash_functions::{HashFunction, Sdbm};
use crate::error::{CollectionError, Result};

/// Number of buckets allocated by [`ChainedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Numerator of the load factor threshold.
pub const LOAD_FACTOR_NUMERATOR: usize = 3;

/// Denominator of the load factor threshold.
pub const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// Ratio of entries to buckets above which the table doubles before the next
/// insert.
pub const LOAD_FACTOR_THRESHOLD: f64 =
    LOAD_FACTOR_NUMERATOR as f64 / LOAD_FACTOR_DENOMINATOR as f64;

/// A value that may be used as a key in a [`ChainedHashMap`].
///
/// Only strings are valid keys. The string types are always accepted; a type
/// erased [`Any`] is accepted when it holds a [`String`], `&'static str` or
/// `Box<str>` and rejected with [`CollectionError::InvalidKey`] otherwise.
///
/// # Examples
///
/// ```
/// use std::any::Any;
///
/// use dsa_kit::prelude::*;
///
/// let mut map = ChainedHashMap::new();
///
/// let number: &dyn Any = &42;
/// assert_eq!(map.put(number, 1), Err(CollectionError::InvalidKey));
///
/// let text: &dyn Any = &String::from("answer");
/// assert_eq!(map.put(text, 42), Ok(&42));
/// ```
pub trait MapKey {
    /// Returns the key as a string, or [`None`] if it is not a string.
    fn as_key(&self) -> Option<&str>;
}

impl MapKey for str {
    #[inline]
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl MapKey for String {
    #[inline]
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl MapKey for Box<str> {
    #[inline]
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl MapKey for Cow<'_, str> {
    #[inline]
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl<K: MapKey + ?Sized> MapKey for &K {
    #[inline]
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl MapKey for dyn Any {
    fn as_key(&self) -> Option<&str> {
        any_as_key(self)
    }
}

impl MapKey for dyn Any + Send {
    fn as_key(&self) -> Option<&str> {
        any_as_key(self)
    }
}

impl MapKey for dyn Any + Send + Sync {
    fn as_key(&self) -> Option<&str> {
        any_as_key(self)
    }
}

fn any_as_key(any: &dyn Any) -> Option<&str> {
    if let Some(key) = any.downcast_ref::<String>() {
        return Some(key);
    }
    if let Some(key) = any.downcast_ref::<&'static str>() {
        return Some(key);
    }
    any.downcast_ref::<Box<str>>().map(|key| &**key)
}

type Link<V> = Option<Box<ChainNode<V>>>;

/// An entry in a bucket chain. Each node is owned by its predecessor, or by
/// the bucket slot for the chain head.
#[derive(Debug)]
struct ChainNode<V> {
    key: String,
    value: V,
    next: Link<V>,
}

/// A hash map from string keys to `V`, resolving collisions by chaining.
///
/// The hash strategy `H` is fixed at construction and defaults to [`Sdbm`].
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let mut map = ChainedHashMap::new();
///
/// map.put("cat", "meow")?;
/// assert_eq!(map.get("cat")?, Some(&"meow"));
///
/// map.put("cat", "purr")?;
/// assert_eq!(map.get("cat")?, Some(&"purr"));
/// assert_eq!(map.len(), 1);
/// # Ok::<(), CollectionError>(())
/// ```
pub struct ChainedHashMap<V, H = Sdbm> {
    /// Chain heads, one per bucket. Never empty.
    buckets: Vec<Link<V>>,
    /// Number of entries across all chains.
    len: usize,
    hasher: H,
}

/// An iterator over the entries of a `ChainedHashMap`, in bucket order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    chain: Option<&'a ChainNode<V>>,
    remaining: usize,
}

impl<V> ChainedHashMap<V, Sdbm> {
    /// Creates an empty `ChainedHashMap` with [`DEFAULT_CAPACITY`] buckets,
    /// hashing with [`Sdbm`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let map: ChainedHashMap<i32> = ChainedHashMap::new();
    /// assert_eq!(map.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(Sdbm)
    }

    /// Creates an empty `ChainedHashMap` with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] if `capacity` is zero.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, Sdbm)
    }
}

impl<V, H: HashFunction> ChainedHashMap<V, H> {
    /// Creates an empty `ChainedHashMap` with [`DEFAULT_CAPACITY`] buckets and
    /// the given hash strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut map = ChainedHashMap::with_hasher(Djb2);
    /// map.put("a", 1)?;
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            hasher,
        }
    }

    /// Creates an empty `ChainedHashMap` with `capacity` buckets and the given
    /// hash strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let by_len = |key: &str, capacity: usize| key.len() % capacity;
    /// let map: ChainedHashMap<u8, _> = ChainedHashMap::with_capacity_and_hasher(4, by_len)?;
    /// assert_eq!(map.capacity(), 4);
    ///
    /// assert!(ChainedHashMap::<u8, _>::with_capacity_and_hasher(0, LoseLose).is_err());
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity);
        }

        Ok(Self {
            buckets: empty_buckets(capacity),
            len: 0,
            hasher,
        })
    }

    /// Inserts a key-value pair, returning a reference to the stored value.
    ///
    /// If the key is already present its value is overwritten in place and the
    /// length is unchanged. Otherwise the entry is appended to the end of its
    /// bucket chain. When the load factor exceeds [`LOAD_FACTOR_THRESHOLD`]
    /// before the insert, the bucket count doubles first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidKey`] if `key` is not a string. The
    /// map is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the hash strategy returns an index outside `[0, capacity)`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time on average, *O*(*n*) when a resize is triggered or
    /// every key collides.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut map = ChainedHashMap::new();
    ///
    /// for i in 0..8 {
    ///     map.put(&format!("key{i}"), i)?;
    /// }
    /// assert_eq!(map.capacity(), 10);
    ///
    /// map.put("key8", 8)?;
    /// assert_eq!(map.capacity(), 20);
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn put<Q: MapKey + ?Sized>(&mut self, key: &Q, value: V) -> Result<&V> {
        let key = key.as_key().ok_or(CollectionError::InvalidKey)?;
        Ok(self.place(key, value))
    }

    /// Returns a reference to the value stored for `key`, or [`None`] if the
    /// key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidKey`] if `key` is not a string.
    pub fn get<Q: MapKey + ?Sized>(&self, key: &Q) -> Result<Option<&V>> {
        let key = key.as_key().ok_or(CollectionError::InvalidKey)?;

        Ok(self
            .chain(self.bucket_of(key))
            .find(|node| node.key == key)
            .map(|node| &node.value))
    }

    /// Returns a mutable reference to the value stored for `key`, or [`None`]
    /// if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidKey`] if `key` is not a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put("hits", 1)?;
    ///
    /// if let Some(hits) = map.get_mut("hits")? {
    ///     *hits += 1;
    /// }
    /// assert_eq!(map["hits"], 2);
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn get_mut<Q: MapKey + ?Sized>(&mut self, key: &Q) -> Result<Option<&mut V>> {
        let key = key.as_key().ok_or(CollectionError::InvalidKey)?;
        let index = self.bucket_of(key);

        let mut link = self.buckets[index].as_deref_mut();
        while let Some(node) = link {
            if node.key == key {
                return Ok(Some(&mut node.value));
            }
            link = node.next.as_deref_mut();
        }

        Ok(None)
    }

    /// Returns `true` if the map holds a value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidKey`] if `key` is not a string.
    #[inline]
    pub fn contains_key<Q: MapKey + ?Sized>(&self, key: &Q) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidKey`] if `key` is not a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put("dog", "bark")?;
    ///
    /// assert_eq!(map.remove("dog")?, Some("bark"));
    /// assert_eq!(map.remove("dog")?, None);
    /// assert!(map.is_empty());
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn remove<Q: MapKey + ?Sized>(&mut self, key: &Q) -> Result<Option<V>> {
        let key = key.as_key().ok_or(CollectionError::InvalidKey)?;
        let index = self.bucket_of(key);

        let link = find_link(&mut self.buckets[index], key);
        let Some(node) = link.take() else {
            return Ok(None);
        };

        let ChainNode { value, next, .. } = *node;
        *link = next;
        self.len -= 1;

        Ok(Some(value))
    }

    /// Rebuilds the table with `new_capacity` buckets.
    ///
    /// Every entry is re-inserted in bucket order, walking each chain from
    /// head to tail. Re-insertion follows the same growth rule as
    /// [`put`](Self::put), so shrinking below the current length grows the
    /// table again as needed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] if `new_capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put("a", 1)?;
    ///
    /// map.resize(64)?;
    /// assert_eq!(map.capacity(), 64);
    /// assert_eq!(map.get("a")?, Some(&1));
    ///
    /// assert_eq!(map.resize(0), Err(CollectionError::InvalidCapacity));
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(CollectionError::InvalidCapacity);
        }

        self.rehash(new_capacity);
        Ok(())
    }

    /// Inserts or overwrites an already validated key.
    fn place<K>(&mut self, key: K, value: V) -> &V
    where
        K: AsRef<str> + Into<String>,
    {
        // `len / capacity > LOAD_FACTOR_THRESHOLD` without floating point.
        if self.len.saturating_mul(LOAD_FACTOR_DENOMINATOR)
            > self.capacity().saturating_mul(LOAD_FACTOR_NUMERATOR)
        {
            self.rehash(self.capacity() * 2);
        }

        let index = self.bucket_of(key.as_ref());
        let link = find_link(&mut self.buckets[index], key.as_ref());

        match link {
            Some(node) => {
                node.value = value;
                &node.value
            }
            None => {
                self.len += 1;
                let node = link.insert(Box::new(ChainNode {
                    key: key.into(),
                    value,
                    next: None,
                }));
                &node.value
            }
        }
    }

    fn rehash(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.buckets, empty_buckets(capacity));
        self.len = 0;

        for mut link in old {
            while let Some(node) = link {
                let ChainNode { key, value, next } = *node;
                self.place(key, value);
                link = next;
            }
        }
    }

    fn bucket_of(&self, key: &str) -> usize {
        let capacity = self.capacity();
        let index = self.hasher.bucket_index(key, capacity);
        assert!(
            index < capacity,
            "hash function returned bucket {index} for a capacity of {capacity}"
        );
        index
    }

    fn chain(&self, index: usize) -> impl Iterator<Item = &ChainNode<V>> {
        iter::successors(self.buckets[index].as_deref(), |node| node.next.as_deref())
    }
}

impl<V, H> ChainedHashMap<V, H> {
    /// Returns an iterator over `(key, value)` pairs in bucket order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the keys, in bucket order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values, in bucket order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            drop_chain(bucket.take());
        }
        self.len = 0;
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the ratio of entries to buckets.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the hash strategy.
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Link<V>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Returns the link holding `key`, or the empty link at the end of the chain.
fn find_link<'a, V>(mut link: &'a mut Link<V>, key: &str) -> &'a mut Link<V> {
    while link.as_deref().is_some_and(|node| node.key != key) {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Drops a chain one node at a time so long chains cannot overflow the stack.
fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

fn clone_chain<V: Clone>(link: &Link<V>) -> Link<V> {
    let nodes: Vec<&ChainNode<V>> =
        iter::successors(link.as_deref(), |node| node.next.as_deref()).collect();

    nodes.into_iter().rev().fold(None, |next, node| {
        Some(Box::new(ChainNode {
            key: node.key.clone(),
            value: node.value.clone(),
            next,
        }))
    })
}

impl<V, H> Drop for ChainedHashMap<V, H> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V> Default for ChainedHashMap<V, Sdbm> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, H: Clone> Clone for ChainedHashMap<V, H> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.iter().map(clone_chain).collect(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<V, H: HashFunction> Extend<(String, V)> for ChainedHashMap<V, H> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.place(key, value);
        }
    }
}

impl<V, H: HashFunction + Default> FromIterator<(String, V)> for ChainedHashMap<V, H> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(H::default());
        map.extend(iter);
        map
    }
}

impl<V: fmt::Debug, H> fmt::Debug for ChainedHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .buckets
            .iter()
            .flat_map(|link| iter::successors(link.as_deref(), |node| node.next.as_deref()))
            .map(|node| (&node.key, &node.value));

        f.debug_map().entries(entries).finish()
    }
}

/// Renders one line per bucket, `[i]: k: v -> ... -> null`, followed by
/// `Size: n`.
impl<V: fmt::Display, H> fmt::Display for ChainedHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.buckets.iter().enumerate() {
            write!(f, "[{i}]: ")?;
            for node in iter::successors(link.as_deref(), |node| node.next.as_deref()) {
                write!(f, "{}: {} -> ", node.key, node.value)?;
            }
            writeln!(f, "null")?;
        }
        write!(f, "Size: {}", self.len)
    }
}

impl<'a, V, H> IntoIterator for &'a ChainedHashMap<V, H> {
    type IntoIter = Iter<'a, V>;
    type Item = (&'a str, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain {
                self.chain = node.next.as_deref();
                self.remaining -= 1;
                return Some((node.key.as_str(), &node.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V, H: HashFunction> Index<&str> for ChainedHashMap<V, H> {
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `ChainedHashMap`.
    #[inline]
    fn index(&self, key: &str) -> &V {
        self.get(key)
            .ok()
            .flatten()
            .expect("no entry found for key")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::collections::hash_functions::LoseLose;

    #[test]
    fn test_new() {
        let m: ChainedHashMap<i32> = ChainedHashMap::new();
        assert_eq!(m.capacity(), DEFAULT_CAPACITY);
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        assert_eq!(m.load_factor(), 0.0);

        let m: ChainedHashMap<i32> = ChainedHashMap::default();
        assert_eq!(m.capacity(), DEFAULT_CAPACITY);

        assert_eq!(
            ChainedHashMap::<i32>::with_capacity(0).err(),
            Some(CollectionError::InvalidCapacity)
        );
    }

    #[test]
    fn test_put_and_overwrite() {
        let mut m = ChainedHashMap::new();

        assert_eq!(m.put("cat", "meow"), Ok(&"meow"));
        assert_eq!(m.get("cat"), Ok(Some(&"meow")));

        assert_eq!(m.put("cat", "purr"), Ok(&"purr"));
        assert_eq!(m.get("cat"), Ok(Some(&"purr")));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let mut m = ChainedHashMap::new();
        assert_eq!(m.get("dog"), Ok(None));

        m.put("fruit", "banana").unwrap();
        m.put("vegetable", "carrot").unwrap();
        assert_eq!(m.get("meat"), Ok(None));
        assert_eq!(m.contains_key("fruit"), Ok(true));
        assert_eq!(m.contains_key("meat"), Ok(false));
    }

    #[test]
    fn test_remove() {
        let mut m = ChainedHashMap::new();
        m.put("apple", "red").unwrap();
        m.put("banana", "yellow").unwrap();
        assert_eq!(m.len(), 2);

        assert_eq!(m.remove("apple"), Ok(Some("red")));
        assert_eq!(m.get("apple"), Ok(None));
        assert_eq!(m.len(), 1);

        assert_eq!(m.remove("apple"), Ok(None));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut m = ChainedHashMap::new();
        m.put("fish", "swim").unwrap();
        m.put("bird", "fly").unwrap();

        m.clear();
        assert_eq!(m.len(), 0);
        assert_eq!(m.capacity(), DEFAULT_CAPACITY);
        assert_eq!(m.get("fish"), Ok(None));
        assert_eq!(m.get("bird"), Ok(None));
    }

    #[test]
    fn test_resize_on_load_factor() {
        let mut m = ChainedHashMap::new();

        for i in 0..8 {
            m.put(&format!("key{i}"), format!("value{i}")).unwrap();
        }
        assert_eq!(m.capacity(), 10);

        m.put("key8", "value8".to_string()).unwrap();
        assert_eq!(m.capacity(), 20);
        assert_eq!(m.len(), 9);

        for i in 0..9 {
            assert_eq!(m.get(&format!("key{i}")), Ok(Some(&format!("value{i}"))));
        }
    }

    #[test]
    fn test_overwrite_can_trigger_resize() {
        let mut m = ChainedHashMap::new();
        for i in 0..8 {
            m.put(&format!("key{i}"), i).unwrap();
        }

        m.put("key0", 100).unwrap();
        assert_eq!(m.capacity(), 20);
        assert_eq!(m.len(), 8);
        assert_eq!(m["key0"], 100);
    }

    #[test]
    fn test_growth_follows_load_factor_threshold() {
        assert_eq!(LOAD_FACTOR_THRESHOLD, 0.75);

        let mut m = ChainedHashMap::new();
        for i in 0..200 {
            let before = m.capacity();
            let expect_growth = m.len() as f64 / before as f64 > LOAD_FACTOR_THRESHOLD;

            m.put(&format!("key{i}"), i).unwrap();

            let grew = m.capacity() != before;
            assert_eq!(grew, expect_growth, "insert #{i} at capacity {before}");
            if grew {
                assert_eq!(m.capacity(), before * 2);
            }
        }
    }

    #[test]
    fn test_explicit_resize() {
        let mut m = ChainedHashMap::new();
        for i in 0..5 {
            m.put(&i.to_string(), i).unwrap();
        }

        m.resize(40).unwrap();
        assert_eq!(m.capacity(), 40);
        assert_eq!(m.len(), 5);

        // Shrinking re-grows while re-inserting.
        m.resize(1).unwrap();
        assert_eq!(m.len(), 5);
        assert!(m.capacity() > 1);
        for i in 0..5 {
            assert_eq!(m.get(&i.to_string()), Ok(Some(&i)));
        }

        assert_eq!(m.resize(0), Err(CollectionError::InvalidCapacity));
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn test_collisions_chain() {
        let mut m = ChainedHashMap::with_hasher(LoseLose);

        m.put("name", "Alice").unwrap();
        m.put("eman", "Bob").unwrap();
        m.put("mean", "Carol").unwrap();

        assert_eq!(m.get("name"), Ok(Some(&"Alice")));
        assert_eq!(m.get("eman"), Ok(Some(&"Bob")));
        assert_eq!(m.get("mean"), Ok(Some(&"Carol")));

        // All three share bucket 7, in insertion order.
        assert_eq!(m.keys().collect::<Vec<_>>(), ["name", "eman", "mean"]);

        assert_eq!(m.remove("eman"), Ok(Some("Bob")));
        assert_eq!(m.keys().collect::<Vec<_>>(), ["name", "mean"]);
        assert_eq!(m.remove("name"), Ok(Some("Alice")));
        assert_eq!(m.keys().collect::<Vec<_>>(), ["mean"]);
    }

    #[test]
    fn test_invalid_key() {
        let mut m = ChainedHashMap::new();
        m.put("ok", 1).unwrap();

        let number: &dyn Any = &123;
        assert_eq!(m.put(number, 2), Err(CollectionError::InvalidKey));
        assert_eq!(m.get(number), Err(CollectionError::InvalidKey));
        assert_eq!(m.remove(number), Err(CollectionError::InvalidKey));
        assert_eq!(m.len(), 1);

        let owned: &dyn Any = &String::from("owned");
        let literal: &dyn Any = &"literal";
        m.put(owned, 3).unwrap();
        m.put(literal, 4).unwrap();
        assert_eq!(m["owned"], 3);
        assert_eq!(m["literal"], 4);
    }

    #[test]
    fn test_get_mut() {
        let mut m = ChainedHashMap::with_hasher(LoseLose);
        m.put("ab", 1).unwrap();
        m.put("ba", 2).unwrap();

        *m.get_mut("ba").unwrap().unwrap() += 40;
        assert_eq!(m["ba"], 42);
        assert_eq!(m["ab"], 1);
        assert_eq!(m.get_mut("zz"), Ok(None));
    }

    #[test]
    fn test_iterate() {
        let mut m = ChainedHashMap::new();
        for i in 0..32 {
            m.put(&format!("k{i}"), i * 2).unwrap();
        }

        let it = m.iter();
        assert_eq!(it.len(), 32);

        let mut observed: u64 = 0;
        for (k, v) in &m {
            let i: u64 = k[1..].parse().unwrap();
            assert_eq!(*v as u64, i * 2);
            observed |= 1 << i;
        }
        assert_eq!(observed, 0xFFFF_FFFF);
        assert_eq!(m.values().sum::<i32>(), (0..32).map(|i| i * 2).sum());
    }

    fn collect_sorted<'a, V, H>(m: &'a ChainedHashMap<V, H>) -> Vec<(&'a str, V)>
    where
        V: Copy + Ord + 'a,
    {
        let mut pairs: Vec<_> = m.into_iter().map(|(k, v)| (k, *v)).collect();
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn test_iterate_without_hasher_bound() {
        let mut m = ChainedHashMap::with_hasher(LoseLose);
        m.put("ab", 1).unwrap();
        m.put("ba", 2).unwrap();
        m.put("c", 3).unwrap();

        assert_eq!(collect_sorted(&m), [("ab", 1), ("ba", 2), ("c", 3)]);

        let empty: ChainedHashMap<u8> = ChainedHashMap::new();
        assert!(collect_sorted(&empty).is_empty());
    }

    #[test]
    fn test_clone() {
        let mut m = ChainedHashMap::with_hasher(LoseLose);
        m.put("name", 1).unwrap();
        m.put("eman", 2).unwrap();

        let mut m2 = m.clone();
        assert_eq!(m2.len(), 2);
        assert_eq!(m2.keys().collect::<Vec<_>>(), ["name", "eman"]);

        m2.put("name", 10).unwrap();
        assert_eq!(m["name"], 1);
        assert_eq!(m2["name"], 10);
    }

    #[test]
    fn test_from_iter() {
        let m: ChainedHashMap<i32> = [("a".to_string(), 1), ("b".to_string(), 2)]
            .into_iter()
            .collect();

        assert_eq!(m.len(), 2);
        assert_eq!(m["a"], 1);
        assert_eq!(m["b"], 2);
    }

    #[test]
    fn test_display() {
        let by_len = |key: &str, capacity: usize| key.len() % capacity;
        let mut m = ChainedHashMap::with_capacity_and_hasher(3, by_len).unwrap();
        m.put("a", 1).unwrap();
        m.put("bb", 2).unwrap();
        m.put("cc", 3).unwrap();

        assert_eq!(
            m.to_string(),
            "[0]: null\n[1]: a: 1 -> null\n[2]: bb: 2 -> cc: 3 -> null\nSize: 3"
        );
    }

    #[test]
    fn test_debug_print() {
        let mut m =
            ChainedHashMap::with_capacity_and_hasher(2, |_: &str, _: usize| 0_usize).unwrap();
        m.put("x", 1).unwrap();
        m.put("y", 2).unwrap();

        assert_eq!(format!("{m:?}"), r#"{"x": 1, "y": 2}"#);
    }

    #[test]
    fn test_long_chain_drop() {
        // Every key lands in bucket 0.
        let mut m = ChainedHashMap::with_hasher(|_: &str, _: usize| 0_usize);
        for i in 0..2_000 {
            m.put(&i.to_string(), i).unwrap();
        }
        assert_eq!(m.len(), 2_000);
        assert_eq!(m.iter().count(), 2_000);
        drop(m);
    }

    #[test]
    fn test_index() {
        let mut m = ChainedHashMap::new();
        m.put("1", 2).unwrap();
        m.put("2", 1).unwrap();

        assert_eq!(m["2"], 1);
    }

    #[test]
    #[should_panic]
    fn test_index_nonexistent() {
        let mut m = ChainedHashMap::new();
        m.put("1", 2).unwrap();

        m["4"];
    }

    #[test]
    #[should_panic]
    fn test_hasher_out_of_range_panics() {
        let mut m = ChainedHashMap::with_hasher(|_: &str, capacity: usize| capacity);
        let _ = m.put("a", 1);
    }
}
