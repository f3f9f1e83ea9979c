//! A FIFO queue with an optional capacity limit.

use core::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::collections::stack::{Numeric, extremum};
use crate::error::{CollectionError, Result};

/// A first-in, first-out queue backed by a [`VecDeque`].
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a")?;
/// queue.enqueue("b")?;
///
/// assert_eq!(queue.front(), Ok(&"a"));
/// assert_eq!(queue.rear(), Ok(&"b"));
/// assert_eq!(queue.dequeue(), Ok("a"));
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    data: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> Queue<T> {
    /// Creates an empty, unbounded queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: VecDeque::new(),
            capacity: None,
        }
    }

    /// Creates an empty queue that holds at most `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Adds `value` to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Overflow`] if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            return Err(CollectionError::Overflow { capacity });
        }

        self.data.push_back(value);
        Ok(())
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.data.pop_front().ok_or(CollectionError::Underflow)
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the queue is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.data.front().ok_or(CollectionError::Underflow)
    }

    /// Returns a reference to the element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the queue is empty.
    #[inline]
    pub fn rear(&self) -> Result<&T> {
        self.data.back().ok_or(CollectionError::Underflow)
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if another enqueue would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.len() >= capacity)
    }

    /// Returns the capacity limit, or [`None`] for an unbounded queue.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns an iterator from the front of the queue to the back.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Numeric> Queue<T> {
    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the queue is empty, and
    /// [`CollectionError::NonNumeric`] if an element is not a number (`NaN`).
    pub fn get_max(&self) -> Result<&T> {
        extremum(&self.data, Ordering::Greater)
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the queue is empty, and
    /// [`CollectionError::NonNumeric`] if an element is not a number (`NaN`).
    pub fn get_min(&self) -> Result<&T> {
        extremum(&self.data, Ordering::Less)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the queue front to back as `Queue: [a, b, c]`.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: [")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
