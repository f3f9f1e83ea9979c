//! A LIFO stack with an optional capacity limit.

use core::cmp::Ordering;
use std::fmt;

use crate::error::{CollectionError, Result};

/// A last-in, first-out stack backed by a [`Vec`].
///
/// A stack built with [`Stack::with_capacity`] rejects pushes once it holds
/// `capacity` elements; one built with [`Stack::new`] is unbounded.
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let mut stack = Stack::with_capacity(2);
/// stack.push(1)?;
/// stack.push(2)?;
///
/// assert_eq!(stack.push(3), Err(CollectionError::Overflow { capacity: 2 }));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.peek(), Ok(&1));
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Stack<T> {
    /// Creates an empty, unbounded stack.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: None,
        }
    }

    /// Creates an empty stack that holds at most `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Pushes `value` on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Overflow`] if the stack is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            return Err(CollectionError::Overflow { capacity });
        }

        self.data.push(value);
        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(CollectionError::Underflow)
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.data.last().ok_or(CollectionError::Underflow)
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if another push would overflow. An unbounded stack is
    /// never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.len() >= capacity)
    }

    /// Returns the capacity limit, or [`None`] for an unbounded stack.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns an iterator from the bottom of the stack to the top.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer and floating point types, the element types whose
/// maximum and minimum [`Stack`] and [`Queue`](crate::collections::queue::Queue)
/// report.
///
/// The trait is sealed; non-numeric elements cannot reach `get_max` or
/// `get_min`:
///
/// ```compile_fail
/// use dsa_kit::prelude::*;
///
/// let mut stack = Stack::new();
/// stack.push("a").unwrap();
/// let _ = stack.get_max();
/// ```
pub trait Numeric: PartialOrd + sealed::Sealed {}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Numeric> Stack<T> {
    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the stack is empty, and
    /// [`CollectionError::NonNumeric`] if an element is not a number (`NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(3.5)?;
    /// stack.push(-1.0)?;
    /// assert_eq!(stack.get_max(), Ok(&3.5));
    ///
    /// stack.push(f64::NAN)?;
    /// assert_eq!(stack.get_max(), Err(CollectionError::NonNumeric));
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn get_max(&self) -> Result<&T> {
        extremum(&self.data, Ordering::Greater)
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the stack is empty, and
    /// [`CollectionError::NonNumeric`] if an element is not a number (`NaN`).
    pub fn get_min(&self) -> Result<&T> {
        extremum(&self.data, Ordering::Less)
    }
}

/// Finds the element that compares `wanted` against every other, keeping the
/// first of equal candidates.
pub(crate) fn extremum<'a, T, I>(items: I, wanted: Ordering) -> Result<&'a T>
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    let mut best = items.next().ok_or(CollectionError::Underflow)?;

    // Unordered against itself, e.g. NaN.
    if best.partial_cmp(best).is_none() {
        return Err(CollectionError::NonNumeric);
    }

    for item in items {
        match item.partial_cmp(best) {
            Some(ordering) if ordering == wanted => best = item,
            Some(_) => {}
            None => return Err(CollectionError::NonNumeric),
        }
    }

    Ok(best)
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack bottom to top as `Stack: [a, b, c]`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack: [")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(CollectionError::Underflow));
        assert_eq!(stack.peek(), Err(CollectionError::Underflow));

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&3));

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_bounded() {
        let mut stack = Stack::with_capacity(2);
        assert_eq!(stack.capacity(), Some(2));

        stack.push('a').unwrap();
        assert!(!stack.is_full());
        stack.push('b').unwrap();
        assert!(stack.is_full());

        assert_eq!(stack.push('c'), Err(CollectionError::Overflow { capacity: 2 }));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Ok(&'b'));

        stack.pop().unwrap();
        stack.push('c').unwrap();
        assert_eq!(stack.peek(), Ok(&'c'));
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        let mut stack = Stack::with_capacity(0);
        assert!(stack.is_full());
        assert_eq!(stack.push(1), Err(CollectionError::Overflow { capacity: 0 }));
    }

    #[test]
    fn test_unbounded_never_full() {
        let mut stack = Stack::new();
        for i in 0..1_000 {
            stack.push(i).unwrap();
        }
        assert!(!stack.is_full());
        assert_eq!(stack.capacity(), None);
    }

    #[test]
    fn test_max_min() {
        let mut stack = Stack::new();
        assert_eq!(stack.get_max(), Err(CollectionError::Underflow));
        assert_eq!(stack.get_min(), Err(CollectionError::Underflow));

        for x in [4, -2, 9, 9, 0] {
            stack.push(x).unwrap();
        }
        assert_eq!(stack.get_max(), Ok(&9));
        assert_eq!(stack.get_min(), Ok(&-2));
    }

    #[test]
    fn test_max_min_non_numeric() {
        let mut stack = Stack::new();
        stack.push(f64::NAN).unwrap();
        assert_eq!(stack.get_max(), Err(CollectionError::NonNumeric));

        let mut stack = Stack::new();
        stack.push(1.0).unwrap();
        stack.push(f64::NAN).unwrap();
        stack.push(2.0).unwrap();
        assert_eq!(stack.get_min(), Err(CollectionError::NonNumeric));
    }

    fn spread<T: Numeric + Copy>(values: &[T]) -> Result<(T, T)> {
        let mut stack = Stack::new();
        for &value in values {
            stack.push(value)?;
        }
        Ok((*stack.get_min()?, *stack.get_max()?))
    }

    #[test]
    fn test_max_min_through_numeric_bound() {
        assert_eq!(spread(&[3_i32, -7, 12]), Ok((-7, 12)));
        assert_eq!(spread(&[200_u8, 0, 255]), Ok((0, 255)));
        assert_eq!(spread(&[0.5_f32, -0.25]), Ok((-0.25, 0.5)));
        assert_eq!(spread::<u64>(&[]), Err(CollectionError::Underflow));
        assert_eq!(spread(&[1.0_f32, f32::NAN]), Err(CollectionError::NonNumeric));
    }

    #[test]
    fn test_display() {
        let mut stack = Stack::new();
        assert_eq!(stack.to_string(), "Stack: []");

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.to_string(), "Stack: [1, 2]");
        assert!(stack.iter().eq(&[1, 2]));
    }
}
