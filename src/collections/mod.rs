//! Collection Types.

mod arena;

pub mod chained_hash_map;
pub mod circular_doubly_linked_list;
pub mod doubly_linked_list;
pub mod hash_functions;
pub mod queue;
pub mod singly_linked_list;
pub mod stack;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{doubly, ring, singly};

    #[doc(no_inline)]
    pub use super::chained_hash_map::ChainedHashMap;
    #[doc(no_inline)]
    pub use super::circular_doubly_linked_list::CircularDoublyLinkedList;
    #[doc(no_inline)]
    pub use super::doubly_linked_list::DoublyLinkedList;
    #[doc(no_inline)]
    pub use super::hash_functions::{Djb2, HashFunction, LoseLose, Sdbm};
    #[doc(no_inline)]
    pub use super::queue::Queue;
    #[doc(no_inline)]
    pub use super::singly_linked_list::SinglyLinkedList;
    #[doc(no_inline)]
    pub use super::stack::{Numeric, Stack};
}
