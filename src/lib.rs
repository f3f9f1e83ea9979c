//! Chained hash map and arena-backed linked lists.
//!
//! The centrepiece is [`ChainedHashMap`](collections::chained_hash_map::ChainedHashMap),
//! a string-keyed hash map with separate chaining, load-factor driven growth
//! and a swappable hash strategy. Alongside it live singly, doubly and
//! circular-doubly linked lists whose nodes are stored in an arena and linked
//! by handle, plus a bounded stack and queue.
//!
//! ```
//! use dsa_kit::prelude::*;
//!
//! let mut map = ChainedHashMap::with_hasher(Djb2);
//! map.put("cat", "meow")?;
//!
//! let mut ring = ring![1 => 2 => 3];
//! ring.insert_at_position(-1, 9)?;
//! assert_eq!(ring.to_string(), "1 <=> 2 <=> 9 <=> 3");
//! # Ok::<(), CollectionError>(())
//! ```

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

/// Runs `body` once, then again for as long as `cond` holds.
macro_rules! do_while {
    (do $body:block while $cond:expr) => {
        loop {
            $body
            if !$cond {
                break;
            }
        }
    };
}

pub mod collections;
pub mod error;

pub use error::{CollectionError, Result};

/// Crate Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{doubly, ring, singly};

    #[doc(no_inline)]
    pub use super::collections::chained_hash_map::{ChainedHashMap, MapKey};
    #[doc(no_inline)]
    pub use super::collections::circular_doubly_linked_list::CircularDoublyLinkedList;
    #[doc(no_inline)]
    pub use super::collections::doubly_linked_list::DoublyLinkedList;
    #[doc(no_inline)]
    pub use super::collections::hash_functions::{Djb2, HashFunction, LoseLose, Sdbm};
    #[doc(no_inline)]
    pub use super::collections::queue::Queue;
    #[doc(no_inline)]
    pub use super::collections::singly_linked_list::SinglyLinkedList;
    #[doc(no_inline)]
    pub use super::collections::stack::{Numeric, Stack};

    #[doc(no_inline)]
    pub use super::error::CollectionError;
}
