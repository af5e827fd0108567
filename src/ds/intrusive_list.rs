//! Intrusive doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a generation-checked `SlotArena` and link to each other by
//! `SlotId`, so handles stay valid across unrelated insertions and removals
//! and every relink is O(1) without raw pointers.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! ## Performance
//! - `push_front` / `pop_back`: O(1)
//! - `move_to_front`: O(1)
//! - `iter` / `validate`: O(n)

use std::collections::TryReserveError;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
/// Intrusive list that stores nodes in a `SlotArena` and links them via `SlotId`.
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Reserves node storage for `additional` more values.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.arena.try_reserve(additional)
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the SlotId at the front of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the SlotId at the back of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = old_head;

        if let Some(old_head) = old_head {
            if let Some(head_node) = self.arena.get_mut(old_head) {
                head_node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Some(())
    }

    /// Walks the list from head to tail and checks link symmetry, the tail
    /// pointer and that every live node is reachable exactly once.
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || !self.is_empty() {
                return Err(InvariantError::new(format!(
                    "list ends disagree: head={:?} tail={:?} len={}",
                    self.head,
                    self.tail,
                    self.len()
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale SlotId {:?} in list", id)))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {:?} has prev {:?}, expected {:?}",
                    id, node.prev, prev
                )));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(InvariantError::new(format!(
                    "last reachable node {:?} is not the tail {:?}",
                    id, self.tail
                )));
            }

            count += 1;
            if count > self.len() {
                return Err(InvariantError::new("cycle detected in list"));
            }
            prev = Some(id);
            current = node.next;
        }

        if count != self.len() {
            return Err(InvariantError::new(format!(
                "reached {} nodes from head but arena holds {}",
                count,
                self.len()
            )));
        }
        Ok(())
    }
}

/// Iterator over values from front to back.
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntrusiveListIter<'_, T> {}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn intrusive_list_basic_ops() {
        let mut list = IntrusiveList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"a"));
        assert_eq!(list.len(), 3);

        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec!["a", "c", "b"]);

        assert_eq!(list.pop_back(), Some("b"));
        assert!(!list.contains(b));
        assert_eq!(list.pop_back(), Some("c"));
        assert!(!list.contains(c));
        assert_eq!(list.pop_back(), Some("a"));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        list.validate().unwrap();
    }

    #[test]
    fn move_to_front_edges() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        let b = list.push_front(2);
        let c = list.push_front(3);

        // Already at head.
        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec![3, 2, 1]);

        // Middle.
        assert!(list.move_to_front(b));
        assert_eq!(values(&list), vec![2, 3, 1]);

        // Tail.
        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.back_id(), Some(c));
        list.validate().unwrap();
    }

    #[test]
    fn move_to_front_rejects_stale_id() {
        let mut list = IntrusiveList::new();
        list.push_front("a");
        let b = list.push_front("b");
        list.move_to_front(b);
        let stale = list.back_id().unwrap();
        assert_eq!(list.pop_back(), Some("a"));

        let reused = list.push_front("c");
        assert_eq!(stale.index(), reused.index());
        assert!(!list.move_to_front(stale));
        assert_eq!(list.get(stale), None);
        assert_eq!(values(&list), vec!["c", "b"]);
    }

    #[test]
    fn single_node_is_head_and_tail() {
        let mut list = IntrusiveList::new();
        let only = list.push_front(42);
        assert_eq!(list.front_id(), Some(only));
        assert_eq!(list.back_id(), Some(only));
        assert!(list.move_to_front(only));
        list.validate().unwrap();
        assert_eq!(list.pop_back(), Some(42));
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        list.validate().unwrap();
    }

    #[test]
    fn get_mut_updates_value_in_place() {
        let mut list = IntrusiveList::new();
        let id = list.push_front(10);
        list.push_front(11);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
        assert_eq!(list.back(), Some(&20));
    }

    #[test]
    fn iter_ids_and_size_hint() {
        let mut list = IntrusiveList::new();
        let a = list.push_front('a');
        let b = list.push_front('b');
        let c = list.push_front('c');

        let ids: Vec<_> = list.iter_ids().collect();
        assert_eq!(ids, vec![c, b, a]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn churn_keeps_links_consistent() {
        let mut list = IntrusiveList::with_capacity(8);
        let mut ids = Vec::new();
        for i in 0..64u32 {
            ids.push(list.push_front(i));
            if list.len() > 8 {
                list.pop_back();
            }
            let pick = ids[(i as usize * 7) % ids.len()];
            list.move_to_front(pick);
            list.validate().unwrap();
        }
        assert_eq!(list.len(), 8);
    }
}
