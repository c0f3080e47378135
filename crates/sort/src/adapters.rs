//! Capability adapters that let the network generator drive caller-supplied storage.
//!
//! Each adapter turns one kind of storage capability into the single `compare_exchange(i, j)`
//! operation the network needs:
//! * [`MinmaxAdapter`]: storage that can place the min of two positions at the lower one.
//! * [`LessSwapAdapter`]: storage with a strict ordering test and a swap.
//! * [`GenericAdapter`]: any random-access container, with the compare-exchange supplied as a closure.
//!
//! None of them allocate or reorder beyond what the network dictates.
use std::collections::VecDeque;

use batcher_primitives::indexable::Length;
use tracing::trace;

use crate::error::{Result, SortError};
use crate::network::generate;

/// Storage that can compare-exchange two positions directly.
pub trait Minmax: Length {
  /// Afterwards the element at `i` is the minimum and the element at `j` the maximum of the two.
  /// Equal elements must be left in place.
  fn minmax(&mut self, i: usize, j: usize);
}

/// Storage with a strict ordering test and a swap, like the interface of a classic in-place sort.
pub trait LessSwap: Length {
  /// Returns whether the element at `i` must sort before the element at `j`.
  fn less(&self, i: usize, j: usize) -> bool;
  /// Swaps the elements at `i` and `j`.
  fn swap(&mut self, i: usize, j: usize);
}

/// A random-access, swappable sequence.
pub trait RandomAccess: Length {
  /// Swaps the elements at `i` and `j`.
  fn swap(&mut self, i: usize, j: usize);

  /// Checks that the container behaves as one random-access sequence of `len()` elements.
  ///
  /// # Errors
  /// Returns [`SortError::ShapeMismatch`] if it does not.
  fn check_shape(&self) -> Result<()> {
    Ok(())
  }
}

/// The operation the network generator drives.
pub trait CompareExchange {
  /// Number of elements in the underlying storage.
  fn len(&self) -> usize;
  /// Afterwards the element at `i` must not be greater than the element at `j`.
  fn compare_exchange(&mut self, i: usize, j: usize);
}

/// Forwards every compare-exchange to [`Minmax::minmax`].
#[derive(Debug)]
pub struct MinmaxAdapter<'a, C: ?Sized> {
  inner: &'a mut C,
}

impl<'a, C: Minmax + ?Sized> MinmaxAdapter<'a, C> {
  /// Wraps `inner`.
  pub fn new(inner: &'a mut C) -> Self {
    Self { inner }
  }
}

impl<C: Minmax + ?Sized> CompareExchange for MinmaxAdapter<'_, C> {
  #[inline]
  fn len(&self) -> usize {
    self.inner.len()
  }

  #[inline]
  fn compare_exchange(&mut self, i: usize, j: usize) {
    self.inner.minmax(i, j);
  }
}

/// Builds the compare-exchange from [`LessSwap::less`] and [`LessSwap::swap`].
#[derive(Debug)]
pub struct LessSwapAdapter<'a, C: ?Sized> {
  inner: &'a mut C,
}

impl<'a, C: LessSwap + ?Sized> LessSwapAdapter<'a, C> {
  /// Wraps `inner`.
  pub fn new(inner: &'a mut C) -> Self {
    Self { inner }
  }
}

impl<C: LessSwap + ?Sized> CompareExchange for LessSwapAdapter<'_, C> {
  #[inline]
  fn len(&self) -> usize {
    self.inner.len()
  }

  #[inline]
  fn compare_exchange(&mut self, i: usize, j: usize) {
    // Only "j strictly before i" swaps, so equal elements stay put.
    if self.inner.less(j, i) {
      self.inner.swap(j, i);
    }
  }
}

/// Hands every index pair, together with the container, to a caller closure.
pub struct GenericAdapter<'a, C: ?Sized, F> {
  container: &'a mut C,
  compare_exchange: F,
}

impl<'a, C, F> GenericAdapter<'a, C, F>
where
  C: RandomAccess + ?Sized,
  F: FnMut(&mut C, usize, usize),
{
  /// Wraps `container`, checking its shape first.
  ///
  /// # Errors
  /// Propagates the [`RandomAccess::check_shape`] failure; `container` is not touched then.
  pub fn new(container: &'a mut C, compare_exchange: F) -> Result<Self> {
    container.check_shape()?;
    Ok(Self { container, compare_exchange })
  }
}

impl<C: ?Sized, F> std::fmt::Debug for GenericAdapter<'_, C, F> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GenericAdapter").finish_non_exhaustive()
  }
}

impl<C, F> CompareExchange for GenericAdapter<'_, C, F>
where
  C: RandomAccess + ?Sized,
  F: FnMut(&mut C, usize, usize),
{
  #[inline]
  fn len(&self) -> usize {
    self.container.len()
  }

  #[inline]
  fn compare_exchange(&mut self, i: usize, j: usize) {
    (self.compare_exchange)(&mut *self.container, i, j);
  }
}

/// Runs the network for `adapter.len()` elements over `adapter`.
/// # Oblivious
/// * The sequence of `compare_exchange` calls depends only on `adapter.len()`.
pub fn drive<A: CompareExchange>(mut adapter: A) {
  let n = adapter.len();
  trace!(n, "running odd-even merge network");
  generate(n, |i, j| adapter.compare_exchange(i, j));
}

impl<T: Ord> Minmax for [T] {
  #[inline]
  fn minmax(&mut self, i: usize, j: usize) {
    if self[j] < self[i] {
      <[T]>::swap(self, i, j);
    }
  }
}

impl<T: Ord> Minmax for Vec<T> {
  #[inline]
  fn minmax(&mut self, i: usize, j: usize) {
    self.as_mut_slice().minmax(i, j);
  }
}

impl<T: Ord> LessSwap for [T] {
  #[inline]
  fn less(&self, i: usize, j: usize) -> bool {
    self[i] < self[j]
  }

  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    <[T]>::swap(self, i, j);
  }
}

impl<T: Ord> LessSwap for Vec<T> {
  #[inline]
  fn less(&self, i: usize, j: usize) -> bool {
    self[i] < self[j]
  }

  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    <[T]>::swap(self, i, j);
  }
}

impl<T> RandomAccess for [T] {
  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    <[T]>::swap(self, i, j);
  }
}

impl<T> RandomAccess for Vec<T> {
  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    <[T]>::swap(self, i, j);
  }
}

impl<T> RandomAccess for VecDeque<T> {
  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    Self::swap(self, i, j);
  }
}

/// A key column and a value column sorted together as rows.
#[derive(Debug)]
pub struct Columns<'a, K, V> {
  /// Keys, compared by the caller's closure.
  pub keys: &'a mut [K],
  /// Values, moved along with their keys.
  pub values: &'a mut [V],
}

impl<'a, K, V> Columns<'a, K, V> {
  /// Pairs up `keys` and `values`. The lengths are checked when a sort starts.
  pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Self {
    Self { keys, values }
  }
}

impl<K, V> Length for Columns<'_, K, V> {
  fn len(&self) -> usize {
    self.keys.len()
  }
}

impl<K, V> RandomAccess for Columns<'_, K, V> {
  #[inline]
  fn swap(&mut self, i: usize, j: usize) {
    <[K]>::swap(self.keys, i, j);
    <[V]>::swap(self.values, i, j);
  }

  fn check_shape(&self) -> Result<()> {
    if self.keys.len() == self.values.len() {
      return Ok(());
    }
    Err(SortError::ShapeMismatch { keys: self.keys.len(), values: self.values.len() })
  }
}
