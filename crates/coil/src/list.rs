//! Circular doubly-linked lists with a traversal cursor.
//!
//! A [`CircularList`] owns a ring of slots inside its pool: the node at
//! logical position 0 is `head`, `next` links run front-to-back and wrap,
//! `prev` links run the other way. The list itself stores only `head`,
//! `len`, and `cursor` — all node data and linkage live in the shared
//! pool, so any number of sibling lists can coexist in one backing store.

use std::cell::RefMut;
use std::fmt;

use coil_core::{ListError, SlotIndex};

use crate::pool::ListPool;

/// A circular doubly-linked list drawing its nodes from a shared pool.
///
/// Created via [`ListPool::list`]. Dropping the list returns its slots to
/// the pool's free chain for reuse by sibling lists.
///
/// Positional operations (`insert`, `remove`, `get`) are O(n) in the
/// distance walked from the head; allocation and release of a node are
/// O(1) against the free chain. The cursor supports stepwise traversal
/// that wraps at both ends of the ring.
pub struct CircularList<T> {
    pool: ListPool<T>,
    /// Slot of the logical first element, or `NONE` when empty.
    head: SlotIndex,
    /// Current traversal position, or `NONE` when unset.
    cursor: SlotIndex,
    /// Number of elements owned by this list.
    len: u32,
}

impl<T> CircularList<T> {
    pub(crate) fn new_in(pool: ListPool<T>) -> Self {
        pool.core.borrow_mut().register_list();
        Self {
            pool,
            head: SlotIndex::NONE,
            cursor: SlotIndex::NONE,
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every element, returning all slots to the pool in O(1).
    ///
    /// The whole ring is spliced onto the front of the free chain using the
    /// tail (`prev[head]`); element values are dropped lazily when their
    /// slot is reused or the pool is torn down. Resets the cursor. No-op on
    /// an empty list.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }
        let mut core = self.pool.core.borrow_mut();
        let last = core.prev[self.head.position()];
        core.free_ring(self.head, last);
        drop(core);
        self.head = SlotIndex::NONE;
        self.cursor = SlotIndex::NONE;
        self.len = 0;
    }

    /// Position of the first element equal to `key`.
    ///
    /// Linear scan from the head. Fails with [`ListError::KeyNotFound`]
    /// after a full fruitless pass.
    pub fn search(&self, key: &T) -> Result<u32, ListError>
    where
        T: PartialEq,
    {
        let core = self.pool.core.borrow();
        let mut pos = self.head;
        for i in 0..self.len {
            if core.element(pos) == key {
                return Ok(i);
            }
            pos = core.next[pos.position()];
        }
        Err(ListError::KeyNotFound)
    }

    /// Bidirectional indexing: a guard onto the element at `index`.
    ///
    /// Valid range is `[-len, len - 1]`; negative indices count from the
    /// end (`-1` is the last element). Resolution walks forward links for
    /// non-negative indices and backward links for negative ones, so the
    /// cost is O(|index|).
    ///
    /// The guard permits in-place modification and keeps the pool borrowed;
    /// drop it before the next pool-touching call on any list sharing the
    /// pool.
    pub fn get(&self, index: i64) -> Result<RefMut<'_, T>, ListError> {
        let len = i64::from(self.len);
        if index < -len || index >= len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let core = self.pool.core.borrow_mut();
        let mut pos = self.head;
        if index < 0 {
            for _ in 0..-index {
                pos = core.prev[pos.position()];
            }
        } else {
            for _ in 0..index {
                pos = core.next[pos.position()];
            }
        }
        Ok(RefMut::map(core, |c| c.element_mut(pos)))
    }

    /// Apply `f` to every element by mutable reference, front to back.
    ///
    /// The pool stays borrowed for the duration; `f` must not touch any
    /// list sharing it.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut core = self.pool.core.borrow_mut();
        let mut pos = self.head;
        for _ in 0..self.len {
            f(core.element_mut(pos));
            pos = core.next[pos.position()];
        }
    }

    /// Front-to-back copy of the contents.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let core = self.pool.core.borrow();
        let mut out = Vec::with_capacity(self.len as usize);
        let mut pos = self.head;
        for _ in 0..self.len {
            out.push(core.element(pos).clone());
            pos = core.next[pos.position()];
        }
        out
    }

    /// Insert `value` at logical position `pos` (`pos == len` appends).
    ///
    /// Grows the pool first when the free chain is empty; a growth failure
    /// surfaces as [`ListError::PoolExhausted`] with nothing changed.
    /// Positions past the end fail with [`ListError::IndexOutOfBounds`].
    ///
    /// The head only changes when the list was empty. Consequently
    /// `insert(0, …)` on a non-empty list splices at the ring seam —
    /// between the tail and the unchanged head — which places the value
    /// at the logical back, exactly like `insert(len, …)`.
    pub fn insert(&mut self, pos: u32, value: T) -> Result<(), ListError> {
        if pos > self.len {
            return Err(ListError::IndexOutOfBounds {
                index: i64::from(pos),
                len: self.len,
            });
        }
        let mut core = self.pool.core.borrow_mut();
        let slot = core.allocate()?;
        core.put(slot, value);

        if self.len == 0 {
            // Sole node: points to itself both ways and becomes the head.
            core.next[slot.position()] = slot;
            core.prev[slot.position()] = slot;
            self.head = slot;
        } else {
            // Walk to the predecessor of the insertion point. Starting at
            // the tail makes pos == 0 insert before the head without
            // moving it, and pos == len append after the tail.
            let mut pred = core.prev[self.head.position()];
            for _ in 0..pos {
                pred = core.next[pred.position()];
            }
            let succ = core.next[pred.position()];
            core.next[slot.position()] = succ;
            core.prev[slot.position()] = pred;
            core.next[pred.position()] = slot;
            core.prev[succ.position()] = slot;
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at logical position `pos`.
    ///
    /// Splices the slot out of the ring and pushes it onto the free chain.
    /// Clears the cursor if it pointed at the removed slot; advances the
    /// head to its former successor if the head was removed.
    pub fn remove(&mut self, pos: u32) -> Result<T, ListError> {
        if pos >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index: i64::from(pos),
                len: self.len,
            });
        }
        let mut core = self.pool.core.borrow_mut();
        let doomed;
        if self.len == 1 {
            doomed = self.head;
            self.head = SlotIndex::NONE;
            self.cursor = SlotIndex::NONE;
        } else {
            let mut pred = core.prev[self.head.position()];
            for _ in 0..pos {
                pred = core.next[pred.position()];
            }
            doomed = core.next[pred.position()];
            if doomed == self.cursor {
                self.cursor = SlotIndex::NONE;
            }
            if doomed == self.head {
                self.head = core.next[self.head.position()];
            }
            let succ = core.next[doomed.position()];
            core.next[pred.position()] = succ;
            core.prev[succ.position()] = pred;
        }
        let value = core.take(doomed);
        core.free(doomed);
        self.len -= 1;
        Ok(value)
    }

    /// Guard onto the element under the cursor.
    ///
    /// Fails with [`ListError::NoCursor`] when no cursor is set.
    pub fn cur(&self) -> Result<RefMut<'_, T>, ListError> {
        if self.cursor.is_none() {
            return Err(ListError::NoCursor);
        }
        let cursor = self.cursor;
        let core = self.pool.core.borrow_mut();
        Ok(RefMut::map(core, |c| c.element_mut(cursor)))
    }

    /// Step the cursor one position forward and return the element there.
    ///
    /// Wraps circularly: advancing past the last element lands on the
    /// first. Fails with [`ListError::NoCursor`] when no cursor is set.
    pub fn advance(&mut self) -> Result<RefMut<'_, T>, ListError> {
        if self.cursor.is_none() {
            return Err(ListError::NoCursor);
        }
        let core = self.pool.core.borrow_mut();
        self.cursor = core.next[self.cursor.position()];
        let cursor = self.cursor;
        Ok(RefMut::map(core, |c| c.element_mut(cursor)))
    }

    /// Step the cursor one position backward and return the element there.
    ///
    /// Wraps circularly: retreating past the first element lands on the
    /// last. Fails with [`ListError::NoCursor`] when no cursor is set.
    pub fn retreat(&mut self) -> Result<RefMut<'_, T>, ListError> {
        if self.cursor.is_none() {
            return Err(ListError::NoCursor);
        }
        let core = self.pool.core.borrow_mut();
        self.cursor = core.prev[self.cursor.position()];
        let cursor = self.cursor;
        Ok(RefMut::map(core, |c| c.element_mut(cursor)))
    }

    /// Position the cursor at the first element and return it.
    ///
    /// Fails with [`ListError::EmptyList`] on an empty list.
    pub fn first(&mut self) -> Result<RefMut<'_, T>, ListError> {
        if self.head.is_none() {
            return Err(ListError::EmptyList);
        }
        self.cursor = self.head;
        let cursor = self.cursor;
        let core = self.pool.core.borrow_mut();
        Ok(RefMut::map(core, |c| c.element_mut(cursor)))
    }

    /// Position the cursor at the last element and return it.
    ///
    /// Fails with [`ListError::EmptyList`] on an empty list.
    pub fn last(&mut self) -> Result<RefMut<'_, T>, ListError> {
        if self.head.is_none() {
            return Err(ListError::EmptyList);
        }
        let core = self.pool.core.borrow_mut();
        self.cursor = core.prev[self.head.position()];
        let cursor = self.cursor;
        Ok(RefMut::map(core, |c| c.element_mut(cursor)))
    }

    /// Whether the cursor sits on the first element.
    ///
    /// `false` on an empty list or when no cursor is set; never fails.
    pub fn is_first(&self) -> bool {
        self.head.is_some() && self.cursor == self.head
    }

    /// Whether the cursor sits on the last element.
    ///
    /// `false` on an empty list or when no cursor is set; never fails.
    pub fn is_last(&self) -> bool {
        if self.head.is_none() || self.cursor.is_none() {
            return false;
        }
        let core = self.pool.core.borrow();
        self.cursor == core.prev[self.head.position()]
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
        self.pool.core.borrow_mut().deregister_list();
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.pool.core.borrow();
        let mut list = f.debug_list();
        let mut pos = self.head;
        for _ in 0..self.len {
            list.entry(core.element(pos));
            pos = core.next[pos.position()];
        }
        list.finish()
    }
}
