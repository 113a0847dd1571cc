//! A single link of the chain: a fixed-capacity ring buffer.
//!
//! The ring is a `VecDeque` allocated up front for `length` elements and never
//! allowed past it, so pushing at either end never shifts or reallocates.
//! Creating a node allocates its storage without touching any slot.

use alloc::collections::VecDeque;

/// Ring neighbours of a node, as chain keys.
#[derive(Clone, Copy)]
pub struct Links {
    pub next: usize,
    pub prev: usize,
}

pub struct Node<T> {
    buf: VecDeque<T>,
    length: usize,
    pub links: Links,
}

impl<T> Node<T> {
    /// Creates an empty node able to hold `length` elements.
    pub fn with_capacity(length: usize, links: Links) -> Node<T> {
        debug_assert!(length > 0, "a data node must have room for an element");
        Node {
            buf: VecDeque::with_capacity(length),
            length,
            links,
        }
    }

    /// The capacity the node was created with, regardless of how much the
    /// allocator handed out.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.length
    }

    pub fn push_front(&mut self, element: T) {
        debug_assert!(!self.is_full());
        self.buf.push_front(element);
    }

    pub fn push_back(&mut self, element: T) {
        debug_assert!(!self.is_full());
        self.buf.push_back(element);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop_back()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Live elements, front to back.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}
