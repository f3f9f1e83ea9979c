//! String hash functions mapping a key to a bucket index.
//!
//! Each strategy walks the UTF-16 code units of the key and reduces the final
//! hash into `[0, capacity)`. The arithmetic follows the classic 32-bit
//! formulations so that indices are stable across implementations.
//!
//! ```
//! use dsa_kit::collections::hash_functions::{self, HashFunction, Sdbm};
//!
//! assert_eq!(hash_functions::sdbm_hashing("cat", 10), 4);
//! assert_eq!(Sdbm.bucket_index("cat", 10), 4);
//! ```

use std::fmt;

/// A strategy mapping a string key onto one of `capacity` buckets.
///
/// Any `Fn(&str, usize) -> usize` closure or function pointer is a valid
/// strategy, so a custom hash can be injected without defining a type.
///
/// Implementations must return a value in `[0, capacity)` and must be pure: the
/// same key and capacity always map to the same index.
pub trait HashFunction {
    /// Returns the bucket index for `key` in a table of `capacity` buckets.
    ///
    /// # Panics
    ///
    /// The provided strategies panic if `capacity` is zero.
    fn bucket_index(&self, key: &str, capacity: usize) -> usize;

    /// Hashes any displayable key by first coercing it to its string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::collections::hash_functions::{HashFunction, LoseLose};
    ///
    /// assert_eq!(LoseLose.bucket_index_of(&42, 10), LoseLose.bucket_index("42", 10));
    /// ```
    fn bucket_index_of<D: fmt::Display + ?Sized>(&self, key: &D, capacity: usize) -> usize
    where
        Self: Sized,
    {
        self.bucket_index(&key.to_string(), capacity)
    }
}

impl<F> HashFunction for F
where
    F: Fn(&str, usize) -> usize,
{
    #[inline]
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        self(key, capacity)
    }
}

/// Dan Bernstein's djb2 (XOR variant).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Djb2;

/// The hash used by the sdbm database library. This is the default strategy.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Sdbm;

/// "lose lose": the sum of all code units. Distributes poorly, every anagram
/// collides.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LoseLose;

impl HashFunction for Djb2 {
    #[inline]
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        djb2_hashing(key, capacity)
    }
}

impl HashFunction for Sdbm {
    #[inline]
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        sdbm_hashing(key, capacity)
    }
}

impl HashFunction for LoseLose {
    #[inline]
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        lose_lose_hashing(key, capacity)
    }
}

/// djb2: seeded with 5381, each step computes `hash * 33 ^ unit` in wrapping
/// 32-bit signed arithmetic.
///
/// # Examples
///
/// ```
/// use dsa_kit::collections::hash_functions::djb2_hashing;
///
/// assert_eq!(djb2_hashing("", 10), 1); // 5381 % 10
/// assert_eq!(djb2_hashing("cat", 10), 5);
/// ```
pub fn djb2_hashing(key: &str, capacity: usize) -> usize {
    let hash = key
        .encode_utf16()
        .fold(5381_i32, |hash, unit| hash.wrapping_mul(33) ^ i32::from(unit));

    reduce(u64::from(hash.unsigned_abs()), capacity)
}

/// sdbm: each step computes `unit + (hash << 6) + (hash << 16) - hash`.
///
/// The shifts see the low 32 bits of the running hash while the sum itself is
/// carried in 64 bits, so the hash may leave the 32-bit range between steps.
///
/// # Examples
///
/// ```
/// use dsa_kit::collections::hash_functions::sdbm_hashing;
///
/// assert_eq!(sdbm_hashing("a", 1_000), 97);
/// assert_eq!(sdbm_hashing("cat", 10), 4);
/// ```
pub fn sdbm_hashing(key: &str, capacity: usize) -> usize {
    let hash = key.encode_utf16().fold(0_i64, |hash, unit| {
        let low = hash as i32;

        i64::from(unit)
            .wrapping_add(i64::from(low.wrapping_shl(6)))
            .wrapping_add(i64::from(low.wrapping_shl(16)))
            .wrapping_sub(hash)
    });

    reduce(hash.unsigned_abs(), capacity)
}

/// lose-lose: the plain sum of the key's code units.
///
/// # Examples
///
/// ```
/// use dsa_kit::collections::hash_functions::lose_lose_hashing;
///
/// // Anagrams always collide.
/// assert_eq!(lose_lose_hashing("listen", 7), lose_lose_hashing("silent", 7));
/// ```
pub fn lose_lose_hashing(key: &str, capacity: usize) -> usize {
    let sum = key
        .encode_utf16()
        .fold(0_u64, |sum, unit| sum.wrapping_add(u64::from(unit)));

    reduce(sum, capacity)
}

/// Reduces a non-negative hash into `[0, capacity)`.
#[inline]
fn reduce(hash: u64, capacity: usize) -> usize {
    // `capacity as u64` never truncates on supported targets, and the
    // remainder is below `capacity`, so converting back is lossless.
    (hash % capacity as u64) as usize
}
