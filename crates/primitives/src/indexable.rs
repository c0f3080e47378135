//! Traits for indexable types.
//
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

/// Anything that has length.
pub trait Length {
  /// Returns the number of elements.
  fn len(&self) -> usize;
}
impl<T> Length for [T] {
  fn len(&self) -> usize {
    <[T]>::len(self)
  }
}
impl<T> Length for Vec<T> {
  fn len(&self) -> usize {
    Self::len(self)
  }
}
impl<T> Length for VecDeque<T> {
  fn len(&self) -> usize {
    Self::len(self)
  }
}

/// A random-access container the conditional swaps can run on.
/// `IndexMut` should modify in place, and `len` should be consistent with the valid indices.
pub trait Indexable<T>: Index<usize, Output = T> + IndexMut<usize, Output = T> + Length {}

impl<T, C> Indexable<T> for C where
  C: Index<usize, Output = T> + IndexMut<usize, Output = T> + Length + ?Sized
{
}
