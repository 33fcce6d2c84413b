#![forbid(unsafe_code)]

//! The container side of the engine.
//!
//! The engine never lays out or renders anything itself. It asks its
//! [`StackHost`] for the container size and tells it where to draw the front
//! item and when to remove (and possibly re-append) it.

use crate::geometry::{Offset, Size};

/// Primitives the engine needs from the hosting container.
pub trait StackHost {
    /// The items held by the stack.
    type Item;

    /// Current container dimensions.
    fn size(&self) -> Size;

    /// Number of items in the stack.
    fn item_count(&self) -> usize;

    /// Draw the front item displaced by `displacement` from rest.
    ///
    /// Called on every layout pass while the stack is non-empty.
    fn reposition_front_item(&mut self, displacement: Offset);

    /// Take the front item out of the stack.
    fn remove_front_item(&mut self) -> Option<Self::Item>;

    /// Insert `item` behind every other item.
    fn append_item_to_back(&mut self, item: Self::Item);

    /// Whether the stack holds no items.
    fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// A stack of items kept in a `Vec`.
///
/// Index 0 is the back of the stack and the last element is the front, so
/// recycling an item moves it from the end of the vector to index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct VecStack<T> {
    items: Vec<T>,
    size: Size,
    front_displacement: Offset,
}

impl<T> VecStack<T> {
    /// Create a stack of `items` (back to front) in a container of `size`.
    #[must_use]
    pub fn new(size: Size, items: Vec<T>) -> Self {
        Self {
            items,
            size,
            front_displacement: Offset::ZERO,
        }
    }

    /// Items ordered back to front.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The front item, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.last()
    }

    /// Last displacement the engine assigned to the front item.
    #[inline]
    #[must_use]
    pub fn front_displacement(&self) -> Offset {
        self.front_displacement
    }

    /// Resize the container. Takes effect on the engine's next layout pass.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Push a new item onto the front of the stack.
    pub fn push_front(&mut self, item: T) {
        self.items.push(item);
        self.front_displacement = Offset::ZERO;
    }

    /// Consume the stack, returning its items back to front.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> StackHost for VecStack<T> {
    type Item = T;

    fn size(&self) -> Size {
        self.size
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn reposition_front_item(&mut self, displacement: Offset) {
        self.front_displacement = displacement;
    }

    fn remove_front_item(&mut self) -> Option<T> {
        self.front_displacement = Offset::ZERO;
        self.items.pop()
    }

    fn append_item_to_back(&mut self, item: T) {
        self.items.insert(0, item);
    }
}
