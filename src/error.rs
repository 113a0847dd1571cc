//! Error types.

use core::fmt;

use thiserror::Error;

/// Error value indicating an index past the end of the deque.
///
/// Returned by [`UnrolledDeque::set`](crate::UnrolledDeque::set), which hands
/// the rejected element back instead of dropping it.
#[derive(Clone, Copy, Eq, PartialEq, Error)]
#[error("index out of bounds: the len is {len} but the index is {index}")]
pub struct IndexError<T = ()> {
    /// The index that was asked for.
    pub index: usize,
    /// The length of the deque at the time.
    pub len: usize,
    /// The element that could not be stored.
    pub element: T,
}

impl<T> IndexError<T> {
    /// Drops the element, keeping only the position information.
    pub fn simplify(self) -> IndexError {
        IndexError {
            index: self.index,
            len: self.len,
            element: (),
        }
    }
}

impl<T> fmt::Debug for IndexError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexError: {}", self)
    }
}
