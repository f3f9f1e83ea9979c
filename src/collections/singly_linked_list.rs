//! A [singly-linked list] with arena-backed nodes.
//!
//! Nodes only link forward. The list keeps handles to both ends so that
//! prepending and appending are *O*(1); removing the tail still requires a scan
//! to find its predecessor.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use std::fmt;

use crate::collections::arena::{Arena, NodeId};
use crate::error::{CollectionError, Result};

/// Creates a `SinglyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let mut list = singly![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.delete_head(), Ok(1));
/// assert_eq!(list.delete_head(), Ok(2));
/// assert_eq!(list.delete_head(), Ok(3));
/// ```
#[macro_export]
macro_rules! singly {
    () => {
        $crate::collections::singly_linked_list::SinglyLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut singly = $crate::collections::singly_linked_list::SinglyLinkedList::new();
        $(singly.append($elem);)*
        singly
    }};
}

/// A [singly-linked list] with arena-backed nodes.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    /// Storage for every node in the list.
    nodes: Arena<Node<T>>,
    /// Handle to the first node.
    head: Option<NodeId>,
    /// Handle to the last node.
    tail: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct Node<T> {
    next: Option<NodeId>,
    value: T,
}

/// An iterator that borrows a `SinglyLinkedList<T>` immutably.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    next: Option<NodeId>,
    len: usize,
}

/// An iterator that moves out of a `SinglyLinkedList<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty `SinglyLinkedList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns a reference to the first element, or [`None`] if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    /// Returns a reference to the last element, or [`None`] if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes[tail].value)
    }

    /// Adds an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.prepend(3);
    /// list.prepend(4);
    ///
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn prepend(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            next: self.head,
            value,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
    }

    /// Adds an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list keeps a handle to its `tail`, so no
    /// traversal is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(3);
    /// list.append(4);
    ///
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn append(&mut self, value: T) {
        let node = self.nodes.insert(Node { next: None, value });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = singly![5 => 4];
    ///
    /// assert_eq!(list.delete_head(), Ok(5));
    /// assert_eq!(list.delete_head(), Ok(4));
    /// assert_eq!(list.delete_head(), Err(CollectionError::Underflow));
    /// ```
    pub fn delete_head(&mut self) -> Result<T> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        let node = self.nodes.remove(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        Ok(node.value)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Without back-links the node before the `tail` can
    /// only be found by walking from the `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = singly![5 => 4];
    ///
    /// assert_eq!(list.delete_tail(), Ok(4));
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    pub fn delete_tail(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(CollectionError::Underflow)?;

        if self.head == Some(tail) {
            return self.delete_head();
        }

        let prev = self.ids().find(|&id| self.nodes[id].next == Some(tail));
        let node = self.nodes.remove(tail);

        if let Some(prev) = prev {
            self.nodes[prev].next = None;
        }
        self.tail = prev;

        Ok(node.value)
    }

    /// Removes the element at `position` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty, and
    /// [`CollectionError::OutOfBounds`] if `position >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = singly!['a' => 'b' => 'c'];
    ///
    /// assert_eq!(list.delete_at(1), Ok('b'));
    /// assert!(list.iter().eq(&['a', 'c']));
    ///
    /// assert!(list.delete_at(2).is_err());
    /// ```
    pub fn delete_at(&mut self, position: usize) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::Underflow);
        }
        if position >= self.len() {
            return Err(CollectionError::out_of_bounds(position, self.len()));
        }

        if position == 0 {
            return self.delete_head();
        }
        if position == self.len() - 1 {
            return self.delete_tail();
        }

        // `position` is interior, so both the predecessor and its successor
        // exist.
        let Some(prev) = self.ids().nth(position - 1) else {
            unreachable!("position was checked against the length")
        };
        let Some(target) = self.nodes[prev].next else {
            unreachable!("an interior node always has a successor")
        };

        let node = self.nodes.remove(target);
        self.nodes[prev].next = node.next;

        Ok(node.value)
    }

    /// Returns an iterator over the list, from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            len: self.len(),
        }
    }

    /// Removes every element from the list.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the node handles from `head` to `tail`.
    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.head, |&id| self.nodes[id].next)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the first element equal to `value`, or [`None`] if there is no
    /// such element.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list = singly![1 => 2 => 3];
    ///
    /// assert_eq!(list.find(&2), Some(&2));
    /// assert_eq!(list.find(&7), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|item| *item == value)
    }

    /// Returns the position of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Renders the list as `a => b => NULL`.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            write!(f, "{item} => ")?;
        }
        write!(f, "NULL")
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|id| {
            let node = &self.nodes[id];
            self.next = node.next;
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
