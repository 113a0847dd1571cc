use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::UnrolledDeque;

impl<T> UnrolledDeque<T> {
    /// Elements front to back, one node at a time.
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.chain.walk().flat_map(|node| node.elements())
    }
}

impl<T: Clone> Clone for UnrolledDeque<T> {
    fn clone(&self) -> UnrolledDeque<T> {
        self.elements().cloned().collect()
    }
}

impl<T> Drop for UnrolledDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for UnrolledDeque<T> {
    #[inline]
    fn default() -> UnrolledDeque<T> {
        UnrolledDeque::new()
    }
}

impl<T: PartialEq> PartialEq for UnrolledDeque<T> {
    fn eq(&self, other: &UnrolledDeque<T>) -> bool {
        // node boundaries may differ, so compare element by element
        self.len() == other.len() && self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for UnrolledDeque<T> {}

impl<T: PartialOrd> PartialOrd for UnrolledDeque<T> {
    fn partial_cmp(&self, other: &UnrolledDeque<T>) -> Option<Ordering> {
        self.elements().partial_cmp(other.elements())
    }
}

impl<T: Ord> Ord for UnrolledDeque<T> {
    #[inline]
    fn cmp(&self, other: &UnrolledDeque<T>) -> Ordering {
        self.elements().cmp(other.elements())
    }
}

impl<T: Hash> Hash for UnrolledDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.elements() {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for UnrolledDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T> IndexMut<usize> for UnrolledDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T> iter::FromIterator<T> for UnrolledDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> UnrolledDeque<T> {
        let mut deque = UnrolledDeque::new();
        deque.extend(iter);
        deque
    }
}

/// Extend the `UnrolledDeque` with an iterator, pushing onto the back.
impl<T> Extend<T> for UnrolledDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnrolledDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}
