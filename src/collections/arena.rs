//! Slot storage for linked list nodes.
//!
//! Nodes live in a growable vector and refer to each other through [`NodeId`]
//! handles instead of pointers. Freed slots are threaded onto a free list and
//! reused by later allocations, so a list that churns does not grow its
//! backing storage without bound.

use core::ops::{Index, IndexMut};

/// Handle to a node slot inside an [`Arena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    /// Most recently freed slot, head of the free list.
    free_head: Option<usize>,
    /// Number of occupied slots.
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `node` and returns its handle.
    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        self.insert_with(|_| node)
    }

    /// Stores the node built by `f`, which receives the handle the node will
    /// occupy. Needed for nodes that link to themselves.
    pub(crate) fn insert_with(&mut self, f: impl FnOnce(NodeId) -> N) -> NodeId {
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(f(NodeId(idx)));
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Slot::Occupied(f(NodeId(idx))));
                idx
            }
        };

        self.len += 1;
        NodeId(idx)
    }

    /// Removes the node at `id` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub(crate) fn remove(&mut self, id: NodeId) -> N {
        let slot = &mut self.slots[id.0];
        if let Slot::Vacant { .. } = slot {
            panic!("node handle {} refers to a vacant slot", id.0);
        }

        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        let Slot::Occupied(node) = core::mem::replace(slot, vacant) else {
            unreachable!("slot was checked to be occupied")
        };

        self.free_head = Some(id.0);
        self.len -= 1;
        node
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Drops every node and releases the slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, id: NodeId) -> &N {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("node handle {} refers to a vacant slot", id.0),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("node handle {} refers to a vacant slot", id.0),
        }
    }
}
