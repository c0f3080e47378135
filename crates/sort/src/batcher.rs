//! Batcher Odd Even Merge Sorter
//!
//! Each façade only wires the network generator to one capability adapter.
use batcher_primitives::traits::{Cmov, CtLess};
use tracing::warn;

use crate::adapters::{
  drive, Columns, GenericAdapter, LessSwap, LessSwapAdapter, Minmax, MinmaxAdapter, RandomAccess,
};
use crate::error::Result;
use crate::oblivious::Oblivious;

/// Sorts the given container using the batcher odd even merge network.
/// # Arguments
/// * `arr` - A mutable reference to a container that implements the `Minmax` trait.
/// # Oblivious
/// * Data-independent sequence of `minmax` calls
/// * Leaks: `arr.len()`, plus whatever `minmax` itself leaks
/// # Type Parameters
/// * `C` - The type of the container. Must implement `Minmax`.
pub fn sort<C>(arr: &mut C)
where
  C: Minmax + ?Sized,
{
  drive(MinmaxAdapter::new(arr));
}

/// Sorts the given container using the batcher odd even merge network and the container's
/// `less` and `swap`.
/// # Arguments
/// * `arr` - A mutable reference to a container that implements the `LessSwap` trait.
/// # Oblivious
/// * Data-independent sequence of `less` calls. Whether `swap` runs depends on the data.
/// # Type Parameters
/// * `C` - The type of the container. Must implement `LessSwap`.
pub fn sort_ordered<C>(arr: &mut C)
where
  C: LessSwap + ?Sized,
{
  drive(LessSwapAdapter::new(arr));
}

/// Sorts a random-access container, delegating every compare-exchange to `minmax`.
/// # Arguments
/// * `container` - The container to sort.
/// * `minmax` - Called as `minmax(container, i, j)` with `i < j`; must leave the lesser element at `i`.
/// # Errors
/// Returns [`crate::SortError::ShapeMismatch`] if `container` fails its shape check. The container
/// is untouched then.
/// # Oblivious
/// * Data-independent sequence of `minmax` calls
/// * Leaks: `container.len()`
pub fn sort_generic<C, F>(container: &mut C, minmax: F) -> Result<()>
where
  C: RandomAccess + ?Sized,
  F: FnMut(&mut C, usize, usize),
{
  let adapter =
    GenericAdapter::new(container, minmax).inspect_err(|err| warn!(%err, "rejecting container"))?;
  drive(adapter);
  Ok(())
}

/// Sorts a random-access container with a caller ordering test, swapping through the container.
/// # Arguments
/// * `container` - The container to sort.
/// * `less` - Called as `less(container, i, j)`; returns whether the element at `i` sorts before
///   the element at `j`.
/// # Errors
/// Same as [`sort_generic`].
pub fn sort_by_less<C, F>(container: &mut C, mut less: F) -> Result<()>
where
  C: RandomAccess + ?Sized,
  F: FnMut(&C, usize, usize) -> bool,
{
  sort_generic(container, |c, i, j| {
    if less(&*c, j, i) {
      c.swap(j, i);
    }
  })
}

/// Sorts `keys` ascending and moves `payload` rows along with them.
/// # Requires
/// * `keys.len() == payload.len()`
/// # Errors
/// Returns [`crate::SortError::ShapeMismatch`] if the lengths differ; neither slice is touched then.
pub fn sort_with_payload<K, P>(keys: &mut [K], payload: &mut [P]) -> Result<()>
where
  K: Ord,
{
  sort_by_less(&mut Columns::new(keys, payload), |c, i, j| c.keys[i] < c.keys[j])
}

/// Sorts the given slice in constant time.
/// # Oblivious
/// * Data-independent memory access pattern
/// * Leaks: `arr.len()`
/// # Type Parameters
/// * `T` - The type of the elements. Must implement `CtLess`, `Cmov`, and `Copy`.
pub fn sort_oblivious<T>(arr: &mut [T])
where
  T: CtLess + Cmov + Copy,
{
  sort(&mut Oblivious::new(arr));
}
