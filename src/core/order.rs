//! Word order representation
//!
//! An `Order` maps display slots to item indices: `order[slot]` is the index
//! (into the puzzle's word list) of the word shown in that slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// A permutation of item indices, one per display slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Vec<usize>);

/// Error type for orders that are not a permutation of the item set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order has {actual} entries, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("item index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("item index {index} appears more than once")]
    Duplicate { index: usize },
}

impl Order {
    /// The order that shows every word in catalog position: `[0, 1, .., len-1]`
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Create a validated order over `len` items
    ///
    /// # Errors
    /// Returns `OrderError` if `slots` does not hold every index in `0..len`
    /// exactly once.
    ///
    /// # Examples
    /// ```
    /// use draggin::core::Order;
    ///
    /// assert!(Order::new(vec![2, 0, 1], 3).is_ok());
    /// assert!(Order::new(vec![0, 0, 1], 3).is_err());
    /// assert!(Order::new(vec![0, 1], 3).is_err());
    /// ```
    pub fn new(slots: Vec<usize>, len: usize) -> Result<Self, OrderError> {
        let order = Self(slots);
        order.check(len)?;
        Ok(order)
    }

    /// Check that this order is a permutation of `0..len`
    ///
    /// Orders built through deserialization skip validation, so anything read
    /// back from storage goes through here before use.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn check(&self, len: usize) -> Result<(), OrderError> {
        if self.0.len() != len {
            return Err(OrderError::WrongLength {
                expected: len,
                actual: self.0.len(),
            });
        }

        let mut seen = vec![false; len];
        for &index in &self.0 {
            if index >= len {
                return Err(OrderError::OutOfRange { index, len });
            }
            if seen[index] {
                return Err(OrderError::Duplicate { index });
            }
            seen[index] = true;
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slot currently holding `item`, if any
    #[must_use]
    pub fn slot_of(&self, item: usize) -> Option<usize> {
        self.0.iter().position(|&i| i == item)
    }

    /// Return a copy with the entry at `from` removed and reinserted at `to`
    ///
    /// Entries between the two slots shift by one to close the gap. Slots
    /// past the end are clamped to the last slot.
    ///
    /// # Examples
    /// ```
    /// use draggin::core::Order;
    ///
    /// let order = Order::identity(4);
    /// assert_eq!(order.moved(0, 2).as_slice(), &[1, 2, 0, 3]);
    /// assert_eq!(order.moved(3, 0).as_slice(), &[3, 0, 1, 2]);
    /// ```
    #[must_use]
    pub fn moved(&self, from: usize, to: usize) -> Self {
        let mut slots = self.0.clone();
        if slots.is_empty() || from >= slots.len() {
            return Self(slots);
        }
        let to = to.min(slots.len() - 1);
        let item = slots.remove(from);
        slots.insert(to, item);
        Self(slots)
    }

    /// Words in display order
    ///
    /// Indices outside `words` are skipped.
    #[must_use]
    pub fn arrange<'w>(&self, words: &'w [String]) -> Vec<&'w str> {
        self.0
            .iter()
            .filter_map(|&i| words.get(i).map(String::as_str))
            .collect()
    }

    /// Positional comparison by word identity
    ///
    /// Two orders match iff every slot shows the same word. Orders of different
    /// lengths never match.
    #[must_use]
    pub fn same_words(&self, other: &Self, words: &[String]) -> bool {
        self.0.len() == other.0.len() && self.wrong_positions(other, words).is_empty()
    }

    /// Slots whose word differs from the word `target` shows in that slot
    #[must_use]
    pub fn wrong_positions(&self, target: &Self, words: &[String]) -> BTreeSet<usize> {
        (0..self.0.len().max(target.0.len()))
            .filter(|&slot| {
                let ours = self.0.get(slot).and_then(|&i| words.get(i));
                let theirs = target.0.get(slot).and_then(|&i| words.get(i));
                ours.is_none() || ours != theirs
            })
            .collect()
    }
}

impl From<Order> for Vec<usize> {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn identity_covers_every_slot() {
        assert_eq!(Order::identity(3).as_slice(), &[0, 1, 2]);
        assert!(Order::identity(0).is_empty());
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert_eq!(
            Order::new(vec![0, 1], 3),
            Err(OrderError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            Order::new(vec![0, 1, 3], 3),
            Err(OrderError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn new_rejects_duplicates() {
        assert_eq!(
            Order::new(vec![1, 1, 0], 3),
            Err(OrderError::Duplicate { index: 1 })
        );
    }

    #[test]
    fn moved_shifts_neighbours() {
        let order = Order::new(vec![2, 0, 1, 3], 4).unwrap();
        assert_eq!(order.moved(1, 3).as_slice(), &[2, 1, 3, 0]);
        assert_eq!(order.moved(2, 2), order);
    }

    #[test]
    fn moved_clamps_target() {
        let order = Order::identity(3);
        assert_eq!(order.moved(0, 10).as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn wrong_positions_skip_matching_slots() {
        let w = words(&["red", "orange", "yellow"]);
        let current = Order::identity(3);
        let target = Order::new(vec![2, 1, 0], 3).unwrap();

        // "orange" sits in the middle in both orders
        assert_eq!(
            current.wrong_positions(&target, &w),
            BTreeSet::from([0, 2])
        );
    }

    #[test]
    fn same_words_treats_duplicate_words_as_equal() {
        let w = words(&["la", "di", "la"]);
        let a = Order::new(vec![0, 1, 2], 3).unwrap();
        let b = Order::new(vec![2, 1, 0], 3).unwrap();
        assert!(a.same_words(&b, &w));
    }

    #[test]
    fn arrange_follows_slots() {
        let w = words(&["a", "b", "c"]);
        let order = Order::new(vec![1, 2, 0], 3).unwrap();
        assert_eq!(order.arrange(&w), vec!["b", "c", "a"]);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Order::identity(3).to_string(), "[0,1,2]");
    }

    fn permutation(len: usize) -> impl Strategy<Value = Vec<usize>> {
        Just((0..len).collect::<Vec<_>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn moved_preserves_permutation(
            slots in (1usize..8).prop_flat_map(permutation),
            from in 0usize..8,
            to in 0usize..8,
        ) {
            let len = slots.len();
            let order = Order::new(slots, len).unwrap();
            prop_assert!(order.moved(from, to).check(len).is_ok());
        }

        #[test]
        fn transposition_of_distinct_words_never_matches(
            slots in (2usize..8).prop_flat_map(permutation),
            a in 0usize..8,
            b in 0usize..8,
        ) {
            let len = slots.len();
            let (a, b) = (a % len, b % len);
            prop_assume!(a != b);

            let w: Vec<String> = (0..len).map(|i| format!("w{i}")).collect();
            let target = Order::new(slots.clone(), len).unwrap();
            let mut swapped = slots;
            swapped.swap(a, b);
            let swapped = Order::new(swapped, len).unwrap();

            prop_assert!(target.same_words(&target, &w));
            prop_assert!(!swapped.same_words(&target, &w));
            prop_assert_eq!(swapped.wrong_positions(&target, &w), BTreeSet::from([a, b]));
        }
    }
}
