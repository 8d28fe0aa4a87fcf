//! Index bookkeeping shared by the hero slider and the gallery lightbox.
//!
//! A `Carousel` owns a fixed, non-empty list of items and the index of the
//! active one. Every navigation wraps around both ends, so the index can never
//! leave `[0, len)` regardless of the delta.

/// Wrap an arbitrary (possibly negative) index into `[0, len)`.
///
/// `len` must be non-zero; callers only hold a `Carousel` when it is.
pub fn wrap_index(index: i64, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index called with an empty collection");
    index.rem_euclid(len as i64) as usize
}

/// A navigation result: which item went inactive and which became active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Carousel<T> {
    /// Build a carousel positioned on the first item.
    ///
    /// Returns `None` for an empty list: there is nothing to navigate, so no
    /// controller should exist at all.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, current: 0 })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Jump to `index`, wrapping it into range first.
    pub fn go_to(&mut self, index: i64) -> IndexChange {
        let previous = self.current;
        self.current = wrap_index(index, self.items.len());
        IndexChange {
            previous,
            current: self.current,
        }
    }

    /// Move by a signed number of steps.
    pub fn step(&mut self, delta: i64) -> IndexChange {
        self.go_to(self.current as i64 + delta)
    }

    pub fn next(&mut self) -> IndexChange {
        self.step(1)
    }

    pub fn prev(&mut self) -> IndexChange {
        self.step(-1)
    }
}
