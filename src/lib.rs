//! A double-ended queue built from a chain of ring buffers.
//!
//! Elements live in nodes, each a fixed-capacity circular buffer, linked into
//! a ring around a sentinel. Pushing onto a full end links a new node twice
//! the size of its neighbour; a node that runs empty is unlinked and freed on
//! the spot.
//!
//! This queue has `O(1)` amortized inserts and removals from both ends of the
//! container. Indexing walks the chain one node at a time from the nearer end,
//! so it costs one step per node skipped rather than one per element. Nodes
//! are addressed by slab key, not by pointer, and the crate contains no
//! `unsafe` code.
//!
//! # Feature Flags
//! The **unrolled-deque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs only `alloc`
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! unrolled-deque = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! unrolled-deque = { version = "0.1", default-features = false }
//! ```
//!
//! # Logging
//!
//! Node allocation and release are reported through the [`log`] facade at
//! `trace` level. Nothing is printed unless the application installs a logger.
//!
//! [`log`]: https://docs.rs/log
//!
//! # Examples
//! ```
//! use unrolled_deque::UnrolledDeque;
//!
//! let mut deque = UnrolledDeque::new();
//! assert_eq!(deque.len(), 0);
//!
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque[0], 0);
//! assert_eq!(deque[2], 2);
//!
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.pop_back(), Some(2));
//! assert_eq!(deque.pop_back(), Some(1));
//! assert_eq!(deque.pop_back(), None);
//! ```
//!
//! # Growth
//! ```
//! use unrolled_deque::UnrolledDeque;
//!
//! let mut deque = UnrolledDeque::new();
//! deque.extend(0..10);
//! assert_eq!((deque.node_count(), deque.capacity()), (1, 10));
//!
//! deque.push_back(10);
//! assert_eq!((deque.node_count(), deque.capacity()), (2, 30));
//!
//! deque.pop_back();
//! assert_eq!((deque.node_count(), deque.capacity()), (1, 10));
//! ```
//!
//! # Replacing Elements
//! ```
//! use unrolled_deque::UnrolledDeque;
//!
//! let mut deque: UnrolledDeque<_> = vec!["a", "b", "c"].into_iter().collect();
//!
//! assert_eq!(deque.set(1, "B"), Ok("b"));
//! assert_eq!(format!("{:?}", deque), r#"["a", "B", "c"]"#);
//!
//! let err = deque.set(5, "f").unwrap_err();
//! assert_eq!(err.to_string(), "index out of bounds: the len is 3 but the index is 5");
//! assert_eq!(err.element, "f");
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;
#[macro_use]
extern crate log;

mod chain;
pub mod error;
mod node;
mod unrolleddeque;

pub use error::IndexError;
pub use unrolleddeque::UnrolledDeque;
