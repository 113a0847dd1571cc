//! The ring of nodes anchored at a sentinel.
//!
//! Nodes live in a slab and name their neighbours by slab key. The sentinel is
//! never a slab entry: its links are kept inline under the reserved key
//! [`SENTINEL`], so an empty ring owns no allocation at all.
//!
//! ```text
//!      ┌────────────────────────────────────────┐
//!      │                                        │
//! ┌────▼───┬──►┌──────┬──►┌──────┬──►┌──────┬──┘
//! │sentinel│   │front │   │ ...  │   │back  │
//! └────────┘◄──┴──────┘◄──┴──────┘◄──┴──────┘
//! ```

use core::iter;

use slab::Slab;

use crate::node::{Links, Node};

/// Key of the sentinel. It never names a slab entry.
pub const SENTINEL: usize = usize::MAX;

/// Capacity of a node grown next to the sentinel.
pub const INITIAL_CAPACITY: usize = 10;

pub struct Chain<T> {
    nodes: Slab<Node<T>>,
    sentinel: Links,
}

impl<T> Chain<T> {
    pub fn new() -> Chain<T> {
        Chain {
            nodes: Slab::new(),
            sentinel: Links {
                next: SENTINEL,
                prev: SENTINEL,
            },
        }
    }

    /// Key of the front node, or `SENTINEL` if the ring is empty.
    #[inline]
    pub fn first(&self) -> usize {
        self.sentinel.next
    }

    /// Key of the back node, or `SENTINEL` if the ring is empty.
    #[inline]
    pub fn last(&self) -> usize {
        self.sentinel.prev
    }

    /// Number of data nodes. The sentinel is not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.walk().map(Node::length).sum()
    }

    #[inline]
    pub fn node(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn node_mut(&mut self, key: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(key)
    }

    #[inline]
    fn links_mut(&mut self, key: usize) -> &mut Links {
        if key == SENTINEL {
            &mut self.sentinel
        } else {
            &mut self.nodes[key].links
        }
    }

    /// Capacity of a node about to be linked next to `neighbour`.
    fn grown_length(&self, neighbour: usize) -> usize {
        match self.node(neighbour).map_or(0, Node::length) {
            0 => INITIAL_CAPACITY,
            length => length * 2,
        }
    }

    /// Front node with a free slot, linking a new one if the front node is
    /// absent or full.
    pub fn front_with_room(&mut self) -> &mut Node<T> {
        let mut key = self.first();
        if self.node(key).map_or(true, Node::is_full) {
            key = self.link_front();
        }
        &mut self.nodes[key]
    }

    /// Back node with a free slot, linking a new one if the back node is
    /// absent or full.
    pub fn back_with_room(&mut self) -> &mut Node<T> {
        let mut key = self.last();
        if self.node(key).map_or(true, Node::is_full) {
            key = self.link_back();
        }
        &mut self.nodes[key]
    }

    fn link_front(&mut self) -> usize {
        let next = self.first();
        let length = self.grown_length(next);
        let key = self.nodes.insert(Node::with_capacity(
            length,
            Links {
                next,
                prev: SENTINEL,
            },
        ));
        self.links_mut(next).prev = key;
        self.sentinel.next = key;
        trace!("linked front node {} with capacity {}", key, length);
        key
    }

    fn link_back(&mut self) -> usize {
        let prev = self.last();
        let length = self.grown_length(prev);
        let key = self.nodes.insert(Node::with_capacity(
            length,
            Links {
                next: SENTINEL,
                prev,
            },
        ));
        self.links_mut(prev).next = key;
        self.sentinel.prev = key;
        trace!("linked back node {} with capacity {}", key, length);
        key
    }

    /// Unlinks the node `key` from the ring and frees its slot.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not name a linked node.
    pub fn release(&mut self, key: usize) -> Node<T> {
        let node = self.nodes.remove(key);
        let Links { next, prev } = node.links;
        self.links_mut(prev).next = next;
        self.links_mut(next).prev = prev;
        trace!("released node {} with capacity {}", key, node.length());
        node
    }

    /// Releases every node, front to back.
    pub fn clear(&mut self) {
        let mut key = self.first();
        while key != SENTINEL {
            key = self.release(key).links.next;
        }
        debug_assert_eq!(self.sentinel.prev, SENTINEL);
        // drop the free list too, so keys start over like a fresh ring
        self.nodes.clear();
    }

    /// Finds the node holding logical `index` of a ring holding `count`
    /// elements. Returns the node's key and the index within that node.
    ///
    /// Whole nodes are skipped, starting from whichever end is nearer.
    pub fn locate(&self, index: usize, count: usize) -> (usize, usize) {
        debug_assert!(index < count);
        if index < count / 2 {
            let mut key = self.first();
            let mut index = index;
            loop {
                let node = &self.nodes[key];
                if index < node.size() {
                    return (key, index);
                }
                index -= node.size();
                key = node.links.next;
            }
        } else {
            let mut key = self.last();
            // distance from the back element
            let mut back = count - 1 - index;
            loop {
                let node = &self.nodes[key];
                if back < node.size() {
                    return (key, node.size() - 1 - back);
                }
                back -= node.size();
                key = node.links.prev;
            }
        }
    }

    /// Nodes from front to back.
    pub fn walk(&self) -> impl Iterator<Item = &Node<T>> {
        let mut key = self.first();
        iter::from_fn(move || {
            let node = self.node(key)?;
            key = node.links.next;
            Some(node)
        })
    }
}
