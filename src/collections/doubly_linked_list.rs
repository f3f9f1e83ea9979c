//! A doubly-linked list with arena-backed nodes.
//!
//! Every node links to both neighbours, so removing from either end is
//! *O*(1) and the list can be walked backwards as cheaply as forwards.
//! Positional operations walk from whichever end is closer.

use std::fmt;

use crate::collections::arena::{Arena, NodeId};
use crate::error::{CollectionError, Result};

/// Creates a `DoublyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let list = doubly![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().rev().eq([&3, &2, &1]));
/// ```
#[macro_export]
macro_rules! doubly {
    () => {
        $crate::collections::doubly_linked_list::DoublyLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut list = $crate::collections::doubly_linked_list::DoublyLinkedList::new();
        $(list.insert_at_end($elem);)*
        list
    }};
}

/// A doubly-linked list with arena-backed nodes.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    /// Storage for every node in the list.
    nodes: Arena<Node<T>>,
    /// Handle to the first node.
    head: Option<NodeId>,
    /// Handle to the last node.
    tail: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct Node<T> {
    /// Handle to the next node in sequence.
    next: Option<NodeId>,
    /// Handle to the previous node in sequence.
    prev: Option<NodeId>,
    value: T,
}

/// An iterator that borrows a `DoublyLinkedList<T>` immutably.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    /// Number of elements not yet yielded from either end.
    len: usize,
}

/// An iterator that moves out of a `DoublyLinkedList<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Constructs a new, empty `DoublyLinkedList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
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

    /// Returns a reference to the element at `position`, or [`None`] if it is
    /// past the end.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.node_at(position).map(|id| &self.nodes[id].value)
    }

    /// Returns a mutable reference to the element at `position`, or [`None`]
    /// if it is past the end.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.node_at(position).map(|id| &mut self.nodes[id].value)
    }

    /// Inserts an element at the front of the list.
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
    /// let mut list = DoublyLinkedList::new();
    /// list.insert_at_beginning(3);
    /// list.insert_at_beginning(4);
    ///
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn insert_at_beginning(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            next: self.head,
            prev: None,
            value,
        });

        match self.head {
            // There is at least a valid `head` node.
            Some(head) => self.nodes[head].prev = Some(node),
            None => self.tail = Some(node),
        }

        self.head = Some(node);
    }

    /// Inserts an element at the back of the list.
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
    /// let mut list = DoublyLinkedList::new();
    /// list.insert_at_end(3);
    /// list.insert_at_end(4);
    ///
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn insert_at_end(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            next: None,
            prev: self.tail,
            value,
        });

        match self.tail {
            // There is at least a valid `tail` node.
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
    }

    /// Inserts an element so that it ends up at `position`, shifting every
    /// element after it towards the back.
    ///
    /// Position `0` inserts at the front and position `len` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfBounds`] if `position > len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time to reach the position, the insertion itself is
    /// *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = doubly![1 => 3];
    ///
    /// list.insert_at_position(1, 2)?;
    /// list.insert_at_position(3, 4)?;
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    ///
    /// assert!(list.insert_at_position(9, 0).is_err());
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn insert_at_position(&mut self, position: usize, value: T) -> Result<()> {
        if position > self.len() {
            return Err(CollectionError::out_of_bounds(position, self.len()));
        }

        if position == 0 {
            self.insert_at_beginning(value);
            return Ok(());
        }
        if position == self.len() {
            self.insert_at_end(value);
            return Ok(());
        }

        // Interior position: the node currently there and its predecessor both
        // exist.
        let Some(at) = self.node_at(position) else {
            unreachable!("position was checked against the length")
        };
        let Some(prev) = self.nodes[at].prev else {
            unreachable!("an interior node always has a predecessor")
        };

        let node = self.nodes.insert(Node {
            next: Some(at),
            prev: Some(prev),
            value,
        });
        self.nodes[prev].next = Some(node);
        self.nodes[at].prev = Some(node);

        Ok(())
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
    /// let mut list = doubly![5 => 4];
    ///
    /// assert_eq!(list.delete_from_beginning(), Ok(5));
    /// assert_eq!(list.delete_from_beginning(), Ok(4));
    /// assert_eq!(list.delete_from_beginning(), Err(CollectionError::Underflow));
    /// ```
    pub fn delete_from_beginning(&mut self) -> Result<T> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        Ok(self.unlink(head))
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The `tail` node knows its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = doubly![5 => 4];
    ///
    /// assert_eq!(list.delete_from_end(), Ok(4));
    /// assert_eq!(list.delete_from_end(), Ok(5));
    /// assert_eq!(list.delete_from_end(), Err(CollectionError::Underflow));
    /// ```
    pub fn delete_from_end(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(CollectionError::Underflow)?;
        Ok(self.unlink(tail))
    }

    /// Removes the element at `position` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty, and
    /// [`CollectionError::OutOfBounds`] if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = doubly!['a' => 'b' => 'c'];
    ///
    /// assert_eq!(list.delete_at_position(1), Ok('b'));
    /// assert_eq!(list.delete_at_position(1), Ok('c'));
    /// assert!(list.delete_at_position(1).is_err());
    /// ```
    pub fn delete_at_position(&mut self, position: usize) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::Underflow);
        }

        let node = self
            .node_at(position)
            .ok_or_else(|| CollectionError::out_of_bounds(position, self.len()))?;

        Ok(self.unlink(node))
    }

    /// Replaces the element at `position` with `value`, returning the old
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty, and
    /// [`CollectionError::OutOfBounds`] if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = doubly![1 => 2 => 3];
    ///
    /// assert_eq!(list.update_at_position(1, 20), Ok(2));
    /// assert_eq!(list.get(1), Some(&20));
    /// ```
    pub fn update_at_position(&mut self, position: usize, value: T) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::Underflow);
        }

        let len = self.len();
        let slot = self
            .get_mut(position)
            .ok_or(CollectionError::out_of_bounds(position, len))?;

        Ok(core::mem::replace(slot, value))
    }

    /// Calls `f` on every element from front to back.
    pub fn traverse_forward<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Calls `f` on every element from back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list = doubly![1 => 2 => 3];
    ///
    /// let mut seen = Vec::new();
    /// list.traverse_backward(|x| seen.push(*x));
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub fn traverse_backward<F: FnMut(&T)>(&self, f: F) {
        self.iter().rev().for_each(f);
    }

    /// Returns a double-ended iterator over the list.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.head,
            tail: self.tail,
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

    /// Finds the node at `position`, walking from whichever end is closer.
    fn node_at(&self, position: usize) -> Option<NodeId> {
        if position >= self.len() {
            return None;
        }

        if position <= self.len() / 2 {
            core::iter::successors(self.head, |&id| self.nodes[id].next).nth(position)
        } else {
            core::iter::successors(self.tail, |&id| self.nodes[id].prev)
                .nth(self.len() - 1 - position)
        }
    }

    /// Detaches `id` from its neighbours and frees it.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.nodes.remove(id);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        node.value
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the position of the first element equal to `value`, or [`None`]
    /// if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list = doubly!["x" => "y" => "x"];
    ///
    /// assert_eq!(list.search(&"x"), Some(0));
    /// assert_eq!(list.search(&"y"), Some(1));
    /// assert_eq!(list.search(&"z"), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_at_end(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Renders the list as `null <= a <=> b => null`, or `null` when empty.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();

        let Some(first) = iter.next() else {
            return write!(f, "null");
        };

        write!(f, "null <= {first}")?;
        for item in iter {
            write!(f, " <=> {item}")?;
        }
        write!(f, " => null")
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|head| {
            let node = &self.nodes[head];
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|tail| {
            let node = &self.nodes[tail];
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_from_beginning().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.delete_from_end().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
