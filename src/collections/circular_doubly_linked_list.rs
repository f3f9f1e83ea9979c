//! A circular doubly-linked list.
//!
//! The last node links forward to the first and the first links back to the
//! last, so the list is a ring with no terminal links. Only the `head` handle
//! is stored; the tail is always `head.prev`.
//!
//! Positions are signed and wrap around the ring: `-1` names the last
//! element, `len` names the first again.

use std::fmt;

use crate::collections::arena::{Arena, NodeId};
use crate::error::{CollectionError, Result};

/// Creates a `CircularDoublyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dsa_kit::prelude::*;
///
/// let list = ring!['a' => 'b' => 'c'];
/// assert_eq!(list.to_string(), "a <=> b <=> c");
/// assert_eq!(list.get(-1), Some(&'c'));
/// ```
#[macro_export]
macro_rules! ring {
    () => {
        $crate::collections::circular_doubly_linked_list::CircularDoublyLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut list =
            $crate::collections::circular_doubly_linked_list::CircularDoublyLinkedList::new();
        $(list.insert_at_end($elem);)*
        list
    }};
}

/// A circular doubly-linked list with arena-backed nodes.
#[derive(Clone)]
pub struct CircularDoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    /// Handle to the first node, `None` when the ring is empty.
    head: Option<NodeId>,
}

/// Ring nodes always have both neighbours; a lone node is its own neighbour.
#[derive(Debug, Clone)]
struct Node<T> {
    next: NodeId,
    prev: NodeId,
    value: T,
}

/// A double-ended iterator over one lap of a `CircularDoublyLinkedList<T>`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

/// An iterator that moves out of a `CircularDoublyLinkedList<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: CircularDoublyLinkedList<T>,
}

impl<T> CircularDoublyLinkedList<T> {
    /// Constructs a new, empty `CircularDoublyLinkedList<T>`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
        }
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    /// Returns a reference to the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail().map(|tail| &self.nodes[tail].value)
    }

    /// Returns a reference to the element at `position` after wrapping it
    /// around the ring, or [`None`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list = ring![10 => 20 => 30];
    ///
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(4), Some(&20));
    /// assert_eq!(list.get(-2), Some(&20));
    /// ```
    pub fn get(&self, position: isize) -> Option<&T> {
        let head = self.head?;
        let id = self.node_at(head, self.normalize(position));
        Some(&self.nodes[id].value)
    }

    /// Inserts an element at the front of the ring.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn insert_at_beginning(&mut self, value: T) {
        match self.tail() {
            Some(tail) => {
                let node = self.link_after(tail, value);
                self.head = Some(node);
            }
            None => self.insert_if_empty(value),
        }
    }

    /// Inserts an element at the back of the ring.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn insert_at_end(&mut self, value: T) {
        match self.tail() {
            Some(tail) => {
                self.link_after(tail, value);
            }
            None => self.insert_if_empty(value),
        }
    }

    /// Inserts an element before the element currently at `position`.
    ///
    /// `position` wraps around the ring, so for a list of length `n` the
    /// positions `p` and `p - n` always name the same slot. A position that
    /// wraps to `0` inserts at the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfBounds`] if the list is empty and
    /// `position` is not `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = ring!['A' => 'B' => 'C'];
    ///
    /// list.insert_at_position(-1, 'D')?;
    /// assert_eq!(list.to_string(), "A <=> B <=> D <=> C");
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn insert_at_position(&mut self, position: isize, value: T) -> Result<()> {
        let Some(head) = self.head else {
            if position != 0 {
                return Err(CollectionError::OutOfBounds { position, len: 0 });
            }
            self.insert_if_empty(value);
            return Ok(());
        };

        match self.normalize(position) {
            0 => self.insert_at_beginning(value),
            position => {
                let at = self.node_at(head, position);
                let prev = self.nodes[at].prev;
                self.link_after(prev, value);
            }
        }

        Ok(())
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    pub fn delete_at_beginning(&mut self) -> Result<T> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        Ok(self.unlink(head))
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    pub fn delete_at_end(&mut self) -> Result<T> {
        let tail = self.tail().ok_or(CollectionError::Underflow)?;
        Ok(self.unlink(tail))
    }

    /// Removes the element at `position`, wrapped around the ring, and returns
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let mut list = ring![10 => 20 => 30];
    ///
    /// assert_eq!(list.delete_at_position(-1), Ok(30));
    /// assert_eq!(list.delete_at_position(3), Ok(20));
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn delete_at_position(&mut self, position: isize) -> Result<T> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        let id = self.node_at(head, self.normalize(position));
        Ok(self.unlink(id))
    }

    /// Calls `f` on every element, starting at the head and walking forward
    /// until the head comes around again.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::prelude::*;
    ///
    /// let list = ring![10 => 20 => 30];
    ///
    /// let mut seen = Vec::new();
    /// list.traverse_forward(|x| seen.push(*x));
    /// assert_eq!(seen, [10, 20, 30]);
    /// ```
    pub fn traverse_forward<F: FnMut(&T)>(&self, mut f: F) {
        let Some(head) = self.head else {
            return;
        };

        let mut cursor = head;
        do_while!(do {
            let node = &self.nodes[cursor];
            f(&node.value);
            cursor = node.next;
        } while cursor != head);
    }

    /// Calls `f` on every element, starting at the tail and walking backward
    /// until the tail comes around again.
    pub fn traverse_backward<F: FnMut(&T)>(&self, mut f: F) {
        let Some(tail) = self.tail() else {
            return;
        };

        let mut cursor = tail;
        do_while!(do {
            let node = &self.nodes[cursor];
            f(&node.value);
            cursor = node.prev;
        } while cursor != tail);
    }

    /// Returns an iterator over exactly one lap of the ring.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.head,
            tail: self.tail(),
            len: self.len(),
        }
    }

    /// Removes every element from the list.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
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

    #[inline]
    fn tail(&self) -> Option<NodeId> {
        self.head.map(|head| self.nodes[head].prev)
    }

    /// Wraps `position` into `[0, len)`. The list must not be empty.
    fn normalize(&self, position: isize) -> usize {
        // Arena slots are at least one handle wide, so `len` fits in `isize`.
        let len = self.len() as isize;
        position.rem_euclid(len) as usize
    }

    /// Walks to a normalized position from whichever side of `head` is closer.
    fn node_at(&self, head: NodeId, position: usize) -> NodeId {
        if position <= self.len() / 2 {
            (0..position).fold(head, |id, _| self.nodes[id].next)
        } else {
            (position..self.len()).fold(head, |id, _| self.nodes[id].prev)
        }
    }

    fn insert_if_empty(&mut self, value: T) {
        let node = self.nodes.insert_with(|id| Node {
            next: id,
            prev: id,
            value,
        });
        self.head = Some(node);
    }

    /// Links a new node directly after `at` and returns its handle.
    fn link_after(&mut self, at: NodeId, value: T) -> NodeId {
        let next = self.nodes[at].next;
        let node = self.nodes.insert(Node {
            next,
            prev: at,
            value,
        });

        self.nodes[at].next = node;
        self.nodes[next].prev = node;
        node
    }

    /// Detaches `id` from the ring and frees it. Removing the head advances
    /// the head to its successor.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.nodes.remove(id);

        if node.next == id {
            self.head = None;
        } else {
            self.nodes[node.prev].next = node.next;
            self.nodes[node.next].prev = node.prev;

            if self.head == Some(id) {
                self.head = Some(node.next);
            }
        }

        node.value
    }
}

impl<T> Default for CircularDoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CircularDoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_at_end(item);
        }
    }
}

impl<T> FromIterator<T> for CircularDoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for CircularDoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for CircularDoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Renders one lap as `a <=> b <=> c`; an empty ring renders as nothing.
impl<T: fmt::Display> fmt::Display for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <=> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T> IntoIterator for CircularDoublyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularDoublyLinkedList<T> {
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
            self.head = Some(node.next);
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
            self.tail = Some(node.prev);
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_at_beginning().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.delete_at_end().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
