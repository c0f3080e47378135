//! Batcher odd-even merge network generator.
//!
//! The network for `n` elements is a fixed list of index pairs `(i, j)` with `i < j`. Running a
//! compare-exchange ("min to `i`, max to `j`") on every pair, in order, sorts any input of length
//! `n`. The list depends only on `n`: no element is ever read while it is produced.
//!
//! Adapted from slide 41 of <https://cr.yp.to/talks/2018.07.11/slides-djb-20180711-sorting-a4.pdf>.
use std::iter::FusedIterator;

use tracing::warn;

use crate::error::{Result, SortError};

/// Returns the width `t` of the first merge stage: the smallest power of two with `t >= n - t`.
/// Returns 0 when `n < 2`, since such inputs have an empty network.
#[inline]
pub const fn network_top(n: usize) -> usize {
  if n < 2 {
    return 0;
  }
  let mut t = 1;
  while t < n - t {
    t += t;
  }
  t
}

/// Number of `i` in `[0, n - span)` with `i & p == 0`, for `p` a power of two.
///
/// Never overflows: the result is at most `n - span`.
#[inline]
const fn stage_len(n: usize, span: usize, p: usize) -> usize {
  let m = n - span;
  // `m / (2 * p)` without forming `2 * p`, which overflows once `p` reaches the top bit.
  let blocks = (m / p) >> 1;
  let rem = m - blocks * p * 2;
  blocks * p + if rem < p { rem } else { p }
}

/// Returns the number of compare-exchanges in the network for `n` elements without enumerating
/// it, or `None` if that number does not fit in a `usize`.
///
/// For `n` a power of two this is `n * log2(n) * (log2(n) - 1) / 4 + n - 1`.
pub const fn checked_comparator_count(n: usize) -> Option<usize> {
  let t = network_top(n);
  let mut total: usize = 0;
  let mut p = t;
  while p > 0 {
    total = match total.checked_add(stage_len(n, p, p)) {
      Some(total) => total,
      None => return None,
    };
    let mut q = t;
    while q > p {
      total = match total.checked_add(stage_len(n, q, p)) {
        Some(total) => total,
        None => return None,
      };
      q >>= 1;
    }
    p >>= 1;
  }
  Some(total)
}

/// Same as [`checked_comparator_count`], saturating at `usize::MAX`.
pub const fn comparator_count(n: usize) -> usize {
  match checked_comparator_count(n) {
    Some(count) => count,
    None => usize::MAX,
  }
}

/// Iterator over the index pairs of the network for a fixed `n`.
///
/// Created by [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs {
  n: usize,
  t: usize,
  p: usize,
  // 0 while emitting the `(i, i + p)` pass of stage `p`, otherwise the `(i + p, i + q)` pass.
  q: usize,
  i: usize,
  // `None` when the total count overflows `usize`.
  remaining: Option<usize>,
}

impl Pairs {
  fn new(n: usize) -> Self {
    let t = network_top(n);
    Self { n, t, p: t, q: 0, i: 0, remaining: checked_comparator_count(n) }
  }

  /// The length of the sequence this network sorts.
  pub const fn len_sorted(&self) -> usize {
    self.n
  }

  /// Number of pairs left, or `None` if it does not fit in a `usize`.
  pub const fn remaining(&self) -> Option<usize> {
    self.remaining
  }

  fn next_pass(&mut self) {
    self.i = 0;
    self.q = if self.q == 0 { self.t } else { self.q >> 1 };
    if self.q <= self.p {
      self.p >>= 1;
      self.q = 0;
    }
  }
}

impl Iterator for Pairs {
  type Item = (usize, usize);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    while self.p > 0 {
      let span = if self.q == 0 { self.p } else { self.q };
      while self.i + span < self.n {
        let i = self.i;
        self.i += 1;
        if i & self.p == 0 {
          if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
          }
          return Some(if self.q == 0 { (i, i + self.p) } else { (i + self.p, i + self.q) });
        }
      }
      self.next_pass();
    }
    None
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.remaining {
      Some(remaining) => (remaining, Some(remaining)),
      None => (usize::MAX, None),
    }
  }
}

impl FusedIterator for Pairs {}

/// Returns the network for `n` elements as a lazy iterator of `(i, j)` pairs, `i < j < n`.
/// # Oblivious
/// * The sequence is a pure function of `n`.
pub fn pairs(n: usize) -> Pairs {
  Pairs::new(n)
}

/// Invokes `compare_exchange(i, j)` once for every pair of the network for `n` elements, in order.
///
/// If every call leaves the element at `i` less than or equal to the element at `j`, the sequence is
/// sorted ascending afterwards. `n < 2` performs no calls.
/// # Oblivious
/// * The number, order and arguments of the calls depend only on `n`.
pub fn generate<F>(n: usize, mut compare_exchange: F)
where
  F: FnMut(usize, usize),
{
  for (i, j) in pairs(n) {
    compare_exchange(i, j);
  }
}

/// Same as [`generate`], for callers that hold a signed length.
///
/// # Errors
/// Returns [`SortError::NegativeLength`] if `n` is negative; `compare_exchange` is never called then.
pub fn generate_checked<F>(n: isize, compare_exchange: F) -> Result<()>
where
  F: FnMut(usize, usize),
{
  let Ok(len) = usize::try_from(n) else {
    warn!(len = n, "rejecting negative network length");
    return Err(SortError::NegativeLength { len: n });
  };
  generate(len, compare_exchange);
  Ok(())
}

/// A fully materialized network for a fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
  len: usize,
  pairs: Box<[(usize, usize)]>,
}

impl Network {
  /// Builds the network for `len` elements.
  pub fn new(len: usize) -> Self {
    Self { len, pairs: pairs(len).collect() }
  }

  /// The length of the sequence this network sorts.
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Number of compare-exchanges in the network.
  pub fn comparators(&self) -> usize {
    self.pairs.len()
  }

  /// Heap memory held by the pair list, in bytes.
  pub fn heap_bytes(&self) -> usize {
    std::mem::size_of_val(&*self.pairs)
  }

  /// The compare-exchange pairs, in execution order.
  pub fn pairs(&self) -> &[(usize, usize)] {
    &self.pairs
  }

  /// Invokes `compare_exchange` on every pair, in order.
  pub fn apply<F>(&self, mut compare_exchange: F)
  where
    F: FnMut(usize, usize),
  {
    for &(i, j) in self.pairs.iter() {
      compare_exchange(i, j);
    }
  }
}
