use core::mem;

use crate::chain::Chain;
use crate::error::IndexError;

mod trait_impls;

/// `UnrolledDeque` is a growable double-ended queue made of a chain of ring
/// buffers.
///
/// Pushing to a full end links a fresh node whose capacity is twice that of
/// the node it sits next to (10 for the first one). Popping the last element
/// of a node unlinks and frees it straight away, so an emptied deque holds no
/// buffers at all.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner.
///
/// # Indexing
///
/// Element at index 0 is the front of the queue. Indexed access skips whole
/// nodes from whichever end is nearer, so it costs one step per node passed
/// rather than one per element.
pub struct UnrolledDeque<T> {
    chain: Chain<T>,
    len: usize,
}

impl<T> UnrolledDeque<T> {
    /// Creates an empty `UnrolledDeque`. No memory is allocated until the
    /// first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let deque: UnrolledDeque<usize> = UnrolledDeque::new();
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> UnrolledDeque<T> {
        UnrolledDeque {
            chain: Chain::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the `UnrolledDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut v = UnrolledDeque::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deque contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut v = UnrolledDeque::new();
    /// assert!(v.is_empty());
    /// v.push_front(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots across all nodes currently linked.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.extend(0..11);
    /// assert_eq!(deque.capacity(), 10 + 20);
    /// ```
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Returns the number of nodes currently linked.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.chain.len()
    }

    /// Adds an element to the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.chain.front_with_room().push_front(element);
        self.len += 1;
    }

    /// Adds an element to the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: T) {
        self.chain.back_with_room().push_back(element);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.chain.first();
        let node = self.chain.node_mut(key)?;
        let element = node.pop_front();
        if node.is_empty() {
            self.chain.release(key);
        }
        self.len -= 1;
        debug_assert!(element.is_some(), "linked node held no elements");
        element
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// assert_eq!(deque.pop_back(), None);
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.chain.last();
        let node = self.chain.node_mut(key)?;
        let element = node.pop_back();
        if node.is_empty() {
            self.chain.release(key);
        }
        self.len -= 1;
        debug_assert!(element.is_some(), "linked node held no elements");
        element
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.chain.node(self.chain.first())?.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let key = self.chain.first();
        self.chain.node_mut(key)?.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        let node = self.chain.node(self.chain.last())?;
        node.get(node.size() - 1)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let key = self.chain.last();
        let node = self.chain.node_mut(key)?;
        let last = node.size() - 1;
        node.get_mut(last)
    }

    /// Retrieves an element in the `UnrolledDeque` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.push_back(3);
    /// deque.push_back(4);
    /// deque.push_back(5);
    /// assert_eq!(deque.get(1), Some(&4));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (key, offset) = self.chain.locate(index, self.len);
        self.chain.node(key)?.get(offset)
    }

    /// Retrieves an element in the `UnrolledDeque` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// deque.push_back(3);
    /// deque.push_back(4);
    /// deque.push_back(5);
    /// if let Some(elem) = deque.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(deque[1], 7);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (key, offset) = self.chain.locate(index, self.len);
        self.chain.node_mut(key)?.get_mut(offset)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// Element at index 0 is the front of the queue. If `index` is out of
    /// bounds the deque is left untouched and the element comes back inside
    /// the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque: UnrolledDeque<_> = (0..3).collect();
    /// assert_eq!(deque.set(1, 10), Ok(1));
    /// assert_eq!(deque.get(1), Some(&10));
    ///
    /// let err = deque.set(3, 11).unwrap_err();
    /// assert_eq!(err.element, 11);
    /// assert_eq!(deque.len(), 3);
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexError<T>> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, element)),
            None => Err(IndexError {
                index,
                len,
                element,
            }),
        }
    }

    /// Removes every element and frees every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque: UnrolledDeque<_> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.chain.clear();
        self.len = 0;
    }

    #[cfg(test)]
    fn node_lengths(&self) -> alloc::vec::Vec<usize> {
        self.chain.walk().map(|node| node.length()).collect()
    }

    #[cfg(test)]
    fn node_sizes(&self) -> alloc::vec::Vec<usize> {
        self.chain.walk().map(|node| node.size()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn contents<T: Clone>(deque: &UnrolledDeque<T>) -> Vec<T> {
        (0..deque.len()).map(|i| deque[i].clone()).collect()
    }

    #[test]
    fn simple() {
        let mut tester = UnrolledDeque::new();
        assert_eq!(tester.len(), 0);

        tester.push_back(1);
        tester.push_back(2);
        tester.push_back(3);
        tester.push_back(4);
        assert_eq!(tester.len(), 4);

        assert_eq!(tester.pop_front(), Some(1));
        assert_eq!(tester.pop_front(), Some(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.pop_front(), Some(3));
        assert_eq!(tester.pop_front(), Some(4));
        assert_eq!(tester.pop_front(), None);
    }

    #[test]
    fn simple_reversely() {
        let mut tester = UnrolledDeque::new();
        tester.push_front(1);
        tester.push_front(2);
        tester.push_front(3);
        tester.push_front(4);
        assert_eq!(tester.len(), 4);
        assert_eq!(tester.pop_back(), Some(1));
        assert_eq!(tester.pop_back(), Some(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.pop_back(), Some(3));
        assert_eq!(tester.pop_back(), Some(4));
        assert_eq!(tester.pop_back(), None);
    }

    #[test]
    fn mixed_ends_scenario() {
        let mut tester = UnrolledDeque::new();
        tester.push_back(1);
        tester.push_back(2);
        tester.push_front(0);
        assert_eq!(tester.get(0), Some(&0));
        assert_eq!(tester.get(1), Some(&1));
        assert_eq!(tester.get(2), Some(&2));
        assert_eq!(tester.len(), 3);

        assert_eq!(tester.pop_front(), Some(0));
        assert_eq!(tester.pop_back(), Some(2));
        assert_eq!(tester.len(), 1);
        assert_eq!(tester.get(0), Some(&1));
    }

    #[test]
    fn queue_order_across_many_nodes() {
        let mut tester = UnrolledDeque::new();
        for i in 0..1000 {
            tester.push_back(i);
        }
        assert!(tester.node_count() > 1);
        for i in 0..1000 {
            assert_eq!(tester.pop_front(), Some(i));
        }
        assert_eq!(tester.pop_front(), None);
    }

    #[test]
    fn stack_order_across_many_nodes() {
        let mut tester = UnrolledDeque::new();
        for i in 0..1000 {
            tester.push_front(i);
        }
        for i in 0..1000 {
            assert_eq!(tester.pop_back(), Some(i));
        }
        assert_eq!(tester.pop_back(), None);
    }

    #[test]
    fn pop_empty_leaves_deque_untouched() {
        let mut tester: UnrolledDeque<i32> = UnrolledDeque::new();
        assert_eq!(tester.pop_front(), None);
        assert_eq!(tester.pop_back(), None);
        assert_eq!(tester.front(), None);
        assert_eq!(tester.back(), None);
        assert_eq!(tester.front_mut(), None);
        assert_eq!(tester.back_mut(), None);
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.node_count(), 0);
    }

    #[test]
    fn growth_doubles_from_ten() {
        let mut tester = UnrolledDeque::new();
        tester.push_back(0);
        assert_eq!(tester.node_lengths(), vec![10]);
        tester.extend(1..10);
        assert_eq!(tester.node_lengths(), vec![10]);
        tester.push_back(10);
        assert_eq!(tester.node_lengths(), vec![10, 20]);
        tester.extend(11..31);
        assert_eq!(tester.node_lengths(), vec![10, 20, 40]);

        tester.push_front(-1);
        assert_eq!(tester.node_lengths(), vec![20, 10, 20, 40]);
        assert_eq!(tester.capacity(), 90);
    }

    #[test]
    fn count_matches_node_sizes() {
        let mut tester = UnrolledDeque::new();
        for i in 0..75 {
            if i % 3 == 0 {
                tester.push_front(i);
            } else {
                tester.push_back(i);
            }
        }
        for _ in 0..20 {
            tester.pop_front();
        }
        for _ in 0..7 {
            tester.pop_back();
        }
        assert_eq!(tester.len(), 75 - 27);
        assert_eq!(tester.node_sizes().iter().sum::<usize>(), tester.len());
        assert!(tester.node_sizes().iter().all(|&size| size > 0));
    }

    #[test]
    fn emptied_node_is_released() {
        let mut tester: UnrolledDeque<_> = (0..11).collect();
        assert_eq!(tester.node_sizes(), vec![10, 1]);
        assert_eq!(tester.pop_back(), Some(10));
        assert_eq!(tester.node_sizes(), vec![10]);
        assert_eq!(tester.capacity(), 10);

        tester.push_front(-1);
        assert_eq!(tester.node_sizes(), vec![1, 10]);
        assert_eq!(tester.pop_front(), Some(-1));
        assert_eq!(tester.node_sizes(), vec![10]);
    }

    #[test]
    fn push_pop_at_full_node_boundary_is_stable() {
        // 14 back-grown nodes, the last one (81920) exactly full
        let count = 10 * ((1 << 14) - 1);
        let mut tester: UnrolledDeque<u64> = (0..count as u64).collect();
        assert_eq!(tester.node_count(), 14);
        assert_eq!(tester.capacity(), count);
        assert_eq!(tester.node_lengths().last(), Some(&81920));

        for i in 0..2000 {
            tester.push_back(i);
            assert_eq!(tester.node_count(), 15);
            assert_eq!(tester.capacity(), count + 163840);
            assert_eq!(tester.pop_back(), Some(i));
            assert_eq!(tester.node_count(), 14);
            assert_eq!(tester.capacity(), count);
        }
        assert_eq!(tester.len(), count);
        assert_eq!(tester.back(), Some(&(count as u64 - 1)));

        // the front node (10) is full too
        for i in 0..2000 {
            tester.push_front(i);
            assert_eq!(tester.node_count(), 15);
            assert_eq!(tester.pop_front(), Some(i));
            assert_eq!(tester.node_count(), 14);
        }
        assert_eq!(tester.len(), count);
        assert_eq!(tester.front(), Some(&0));
    }

    #[test]
    fn drained_deque_behaves_like_new() {
        let mut tester = UnrolledDeque::new();
        for i in 0..100 {
            tester.push_back(i);
            tester.push_front(i);
        }
        while tester.pop_back().is_some() {}
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.node_count(), 0);
        assert_eq!(tester.capacity(), 0);

        tester.push_front(5);
        assert_eq!(tester.node_lengths(), vec![10]);
        assert_eq!(tester.front(), Some(&5));
        assert_eq!(tester.back(), Some(&5));
    }

    #[test]
    fn front_and_back_mut() {
        let mut tester: UnrolledDeque<_> = (0..25).collect();
        *tester.front_mut().unwrap() = 100;
        *tester.back_mut().unwrap() = 200;
        assert_eq!(tester.front(), Some(&100));
        assert_eq!(tester.back(), Some(&200));
        assert_eq!(tester[0], 100);
        assert_eq!(tester[24], 200);
    }

    #[test]
    fn index_across_wrapped_nodes() {
        let mut tester = UnrolledDeque::new();
        let mut model = VecDeque::new();
        for i in 0..45 {
            tester.push_front(i);
            model.push_front(i);
            tester.push_back(-i);
            model.push_back(-i);
        }
        for i in 0..model.len() {
            assert_eq!(tester.get(i), model.get(i));
        }
        assert_eq!(tester.get(model.len()), None);
    }

    #[test]
    fn set_round_trip() {
        let mut tester = UnrolledDeque::new();
        for i in 0..60 {
            tester.push_front(i);
        }
        let before = contents(&tester);
        for i in 0..60 {
            let old = tester.set(i, 1000 + i).unwrap();
            assert_eq!(old, before[i]);
            assert_eq!(tester.get(i), Some(&(1000 + i)));
            assert_eq!(tester.len(), 60);
        }
        for i in 0..60 {
            assert_eq!(tester[i], 1000 + i);
        }
    }

    #[test]
    fn set_out_of_bounds_gives_element_back() {
        let mut tester: UnrolledDeque<_> = (0..3).collect();
        let err = tester.set(3, 9).unwrap_err();
        assert_eq!(
            err,
            IndexError {
                index: 3,
                len: 3,
                element: 9,
            }
        );
        assert_eq!(contents(&tester), vec![0, 1, 2]);

        let mut empty: UnrolledDeque<i32> = UnrolledDeque::new();
        assert_eq!(empty.set(0, 1).unwrap_err().simplify().len, 0);
        assert_eq!(empty.node_count(), 0);
    }

    #[test]
    fn clear_then_reuse() {
        let mut tester: UnrolledDeque<_> = (0..500).collect();
        tester.clear();
        assert!(tester.is_empty());
        assert_eq!(tester.node_count(), 0);
        assert_eq!(tester.pop_front(), None);
        tester.push_back(1);
        assert_eq!(contents(&tester), vec![1]);
        assert_eq!(tester.node_lengths(), vec![10]);
    }

    #[test]
    fn randomized_against_vecdeque() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut tester = UnrolledDeque::new();
        let mut model = VecDeque::new();

        for step in 0..20_000u32 {
            match rng.gen_range(0..6) {
                0 | 1 => {
                    tester.push_back(step);
                    model.push_back(step);
                }
                2 => {
                    tester.push_front(step);
                    model.push_front(step);
                }
                3 => assert_eq!(tester.pop_front(), model.pop_front()),
                4 => assert_eq!(tester.pop_back(), model.pop_back()),
                _ => {
                    if !model.is_empty() {
                        let index = rng.gen_range(0..model.len());
                        let old = model[index];
                        model[index] = step;
                        assert_eq!(tester.set(index, step), Ok(old));
                    }
                }
            }
            assert_eq!(tester.len(), model.len());
            assert_eq!(tester.front(), model.front());
            assert_eq!(tester.back(), model.back());
        }

        assert_eq!(tester.node_sizes().iter().sum::<usize>(), model.len());
        for (i, value) in model.iter().enumerate() {
            assert_eq!(tester.get(i), Some(value));
        }
    }
}
