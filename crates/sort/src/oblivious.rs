//! Constant-time compare-exchange for slices of branch-free comparable values.
use batcher_primitives::indexable::Length;
use batcher_primitives::traits::{Cmov, CswapIndex, CtLess};

use crate::adapters::Minmax;

/// Wraps a slice so that every compare-exchange is a branch-free compare followed by a
/// conditional swap. Driven by the network, the whole sort then has a data-independent memory
/// access pattern.
/// # Oblivious
/// * Leaks: `len()`, provided the element's `CtLess` and `Cmov` are themselves branch-free.
#[derive(Debug)]
pub struct Oblivious<'a, T> {
  inner: &'a mut [T],
}

impl<'a, T> Oblivious<'a, T> {
  /// Wraps `inner`.
  pub fn new(inner: &'a mut [T]) -> Self {
    Self { inner }
  }
}

impl<T> Length for Oblivious<'_, T> {
  fn len(&self) -> usize {
    self.inner.len()
  }
}

impl<T: CtLess + Cmov + Copy> Minmax for Oblivious<'_, T> {
  #[inline]
  fn minmax(&mut self, i: usize, j: usize) {
    let choice = self.inner[j].ct_lt(&self.inner[i]);
    self.inner.cswap(i, j, choice);
  }
}
