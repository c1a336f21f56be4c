// crates/reactor-core/src/ring.rs
//
// SelectionRing: the ordered, cyclable list of selected files for one role
// (face or target). The head is always the element on screen, so navigation
// is a rotation and the display code only ever renders element 0.

use std::collections::VecDeque;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Navigation direction. Left click on a preview steps forward, right click back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRing<T = PathBuf> {
    items: VecDeque<T>,
}

impl<T> Default for SelectionRing<T> {
    fn default() -> Self {
        Self { items: VecDeque::new() }
    }
}

impl<T: PartialEq> SelectionRing<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ring with `items`, keeping their order.
    ///
    /// Duplicates are dropped (first occurrence wins). An empty input is a
    /// cancelled dialog: returns `EmptySelection` and leaves the ring as it was.
    ///
    /// ```
    /// use reactor_core::ring::SelectionRing;
    /// let mut ring = SelectionRing::new();
    /// ring.set_all(["a", "b", "a"]).unwrap();
    /// assert_eq!(ring.to_vec(), vec!["a", "b"]);
    /// assert!(ring.set_all(Vec::<&str>::new()).is_err());
    /// assert_eq!(ring.current(), Some(&"a"));
    /// ```
    pub fn set_all<I>(&mut self, items: I) -> Result<(), ControllerError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut next: VecDeque<T> = VecDeque::new();
        for item in items {
            if !next.contains(&item) {
                next.push_back(item);
            }
        }
        if next.is_empty() {
            return Err(ControllerError::EmptySelection);
        }
        self.items = next;
        Ok(())
    }
}

impl<T> SelectionRing<T> {
    /// Rotate left by one: the second element becomes current.
    pub fn advance(&mut self) {
        if self.items.len() > 1 {
            self.items.rotate_left(1);
        }
    }

    /// Rotate right by one: the last element becomes current.
    pub fn retreat(&mut self) {
        if self.items.len() > 1 {
            self.items.rotate_right(1);
        }
    }

    pub fn rotate(&mut self, direction: Direction) {
        match direction {
            Direction::Forward  => self.advance(),
            Direction::Backward => self.retreat(),
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in display order, current first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> SelectionRing<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
