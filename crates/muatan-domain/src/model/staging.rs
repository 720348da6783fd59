//! Append-only staging area for parsed input

use std::ops::AddAssign;

/// Ordered, growable sequence of one element type. Items are only ever
/// appended; iteration yields them in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Staging<T> {
    items: Vec<T>,
}

impl<T> Staging<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Staging<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AddAssign<T> for Staging<T> {
    fn add_assign(&mut self, item: T) {
        self.add(item);
    }
}

impl<T> FromIterator<T> for Staging<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Staging<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
