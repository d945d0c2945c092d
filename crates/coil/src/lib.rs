//! Circular doubly-linked lists over a shared slot pool.
//!
//! Every [`CircularList`] created from a [`ListPool`] draws its nodes from
//! the same backing store: one element array plus forward- and
//! backward-link arrays, threaded by slot index instead of by pointer.
//! Unoccupied slots form a singly-linked free chain through the
//! forward-link array, so allocation and release are O(1).
//!
//! # Architecture
//!
//! ```text
//! ListPool<T> (cloneable handle, Rc<RefCell<…>>)
//! └── PoolCore<T>
//!     ├── slots: Vec<Option<T>>     element storage
//!     ├── next:  Vec<SlotIndex>     ring links / free chain
//!     ├── prev:  Vec<SlotIndex>     ring links
//!     └── free_head: SlotIndex
//! CircularList<T> × N — each holds (head, len, cursor), all slot indices
//! into the one pool
//! ```
//!
//! When the free chain runs out, the pool grows by extending the three
//! arrays in place: `new_capacity = floor(capacity × multiplier) + additive`.
//! Existing slots are never moved or renumbered, so every list's links stay
//! valid across growth. A growth step that would not strictly increase
//! capacity fails with [`ListError::PoolExhausted`] before touching any
//! state.
//!
//! # Sharing and borrows
//!
//! The pool is single-threaded: `Rc` + `RefCell`, no `Send` or `Sync`.
//! Accessors that hand out an element guard ([`CircularList::get`],
//! [`CircularList::cur`], …) keep the pool borrowed until the guard is
//! dropped; performing another pool-touching operation while holding one
//! panics with the usual `RefCell` borrow error.
//!
//! # Quick start
//!
//! ```rust
//! use coil::{ListPool, PoolConfig};
//!
//! let pool = ListPool::with_config(PoolConfig::new(8));
//! let mut evens = pool.list();
//! let mut odds = pool.list();
//!
//! for n in 0u32..10 {
//!     let target = if n % 2 == 0 { &mut evens } else { &mut odds };
//!     target.insert(target.len(), n).unwrap();
//! }
//!
//! assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(odds.search(&7).unwrap(), 3);
//!
//! // Walk the ring with the cursor: wraps past the last element.
//! *evens.first().unwrap() += 100;
//! assert_eq!(*evens.get(0).unwrap(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod list;
pub mod pool;

pub use coil_core::{ListError, SlotIndex};
pub use config::PoolConfig;
pub use list::CircularList;
pub use pool::ListPool;
