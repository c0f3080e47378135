//! `Cmov` and `CtLess` implementations backed by the [`subtle`] crate.
//!
use crate::traits::{Cmov, CtLess};
use bytemuck::Pod;
use subtle::{Choice, ConditionallySelectable, ConstantTimeLess};

#[inline]
fn choice_of(choice: bool) -> Choice {
  Choice::from(u8::from(choice))
}

macro_rules! impl_cmov_for_int {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Cmov for $ty {
        #[inline]
        fn cmov(&mut self, other: &Self, choice: bool) {
          self.conditional_assign(other, choice_of(choice));
        }
      }
    )*
  };
}

impl_cmov_for_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Cmov for usize {
  #[inline]
  fn cmov(&mut self, other: &Self, choice: bool) {
    let mut wide = *self as u64;
    wide.cmov(&(*other as u64), choice);
    *self = wide as Self;
  }
}

impl Cmov for bool {
  #[inline]
  fn cmov(&mut self, other: &Self, choice: bool) {
    let mut byte = u8::from(*self);
    byte.cmov(&u8::from(*other), choice);
    *self = byte != 0;
  }
}

/// Conditionally copies the bytes of `src` over `dst`.
/// Works on 8 byte words first and finishes the tail byte by byte.
/// @Oblivious
pub fn cmov_pod<T: Pod>(dst: &mut T, src: &T, choice: bool) {
  let choice = choice_of(choice);
  let dst_bytes = bytemuck::bytes_of_mut(dst);
  let src_bytes = bytemuck::bytes_of(src);

  let mut dst_words = dst_bytes.chunks_exact_mut(8);
  let mut src_words = src_bytes.chunks_exact(8);
  for (d, s) in (&mut dst_words).zip(&mut src_words) {
    let mut word: u64 = bytemuck::pod_read_unaligned(d);
    word.conditional_assign(&bytemuck::pod_read_unaligned(s), choice);
    d.copy_from_slice(&word.to_ne_bytes());
  }

  for (d, s) in dst_words.into_remainder().iter_mut().zip(src_words.remainder()) {
    d.conditional_assign(s, choice);
  }
}

/// Implements `Cmov` for a concrete `bytemuck::Pod` type through [`cmov_pod`].
/// usage:
/// ```ignore
/// #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
/// #[repr(C)]
/// struct Record { key: u64, value: u64 }
/// batcher_primitives::impl_cmov_for_pod!(Record);
/// ```
///
#[macro_export]
macro_rules! impl_cmov_for_pod {
  ($ty:ty) => {
    impl $crate::traits::Cmov for $ty {
      #[inline]
      fn cmov(&mut self, other: &Self, choice: bool) {
        $crate::cmov::cmov_pod(self, other, choice);
      }
    }
  };
}

macro_rules! impl_ct_less_unsigned {
  ($($ty:ty),* $(,)?) => {
    $(
      impl CtLess for $ty {
        #[inline]
        fn ct_lt(&self, other: &Self) -> bool {
          bool::from(ConstantTimeLess::ct_lt(self, other))
        }
      }
    )*
  };
}

impl_ct_less_unsigned!(u8, u16, u32, u64);

// Flipping the sign bit maps the signed order onto the unsigned order.
macro_rules! impl_ct_less_signed {
  ($($ty:ty => $unsigned:ty),* $(,)?) => {
    $(
      impl CtLess for $ty {
        #[inline]
        fn ct_lt(&self, other: &Self) -> bool {
          const SIGN: $unsigned = 1 << (<$unsigned>::BITS - 1);
          let lhs = (*self as $unsigned) ^ SIGN;
          let rhs = (*other as $unsigned) ^ SIGN;
          CtLess::ct_lt(&lhs, &rhs)
        }
      }
    )*
  };
}

impl_ct_less_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

impl CtLess for usize {
  #[inline]
  fn ct_lt(&self, other: &Self) -> bool {
    CtLess::ct_lt(&(*self as u64), &(*other as u64))
  }
}

impl CtLess for bool {
  #[inline]
  fn ct_lt(&self, other: &Self) -> bool {
    CtLess::ct_lt(&u8::from(*self), &u8::from(*other))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bytemuck::Zeroable;

  #[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
  #[repr(C)]
  struct Record {
    key: u64,
    tag: [u8; 5],
    pad: [u8; 3],
  }
  impl_cmov_for_pod!(Record);

  #[test]
  fn test_cmov() {
    for choice in &[false, true] {
      let mut a = 0u64;
      let b = 0x12345678u64;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { 0 });

      let mut a = 0u32;
      let b = 0x12345678u32;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { 0 });

      let mut a = 0u16;
      let b = 0x1234u16;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { 0 });

      let mut a = 0u8;
      let b = 0x12u8;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { 0 });

      let mut a = -1i64;
      let b = i64::MIN;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { -1 });

      let mut a = 7usize;
      let b = usize::MAX;
      a.cmov(&b, *choice);
      assert_eq!(a, if *choice { b } else { 7 });

      let mut a = false;
      a.cmov(&true, *choice);
      assert_eq!(a, *choice);
    }
  }

  #[test]
  fn test_cmov_pod() {
    let original = Record { key: 1, tag: [1, 2, 3, 4, 5], pad: [0; 3] };
    let other = Record { key: u64::MAX, tag: [9; 5], pad: [0; 3] };

    let mut record = original;
    record.cmov(&other, false);
    assert_eq!(record, original);
    record.cmov(&other, true);
    assert_eq!(record, other);
  }

  #[test]
  fn test_ct_lt_unsigned() {
    assert!(CtLess::ct_lt(&1u8, &2u8));
    assert!(!CtLess::ct_lt(&2u8, &2u8));
    assert!(!CtLess::ct_lt(&3u16, &2u16));
    assert!(CtLess::ct_lt(&0u64, &u64::MAX));
    assert!(!CtLess::ct_lt(&u64::MAX, &0u64));
    assert!(CtLess::ct_lt(&(u32::MAX - 1), &u32::MAX));
    assert!(CtLess::ct_lt(&5usize, &6usize));
  }

  #[test]
  fn test_ct_lt_signed() {
    let values = [i32::MIN, -100, -1, 0, 1, 100, i32::MAX];
    for a in values {
      for b in values {
        assert_eq!(CtLess::ct_lt(&a, &b), a < b, "{a} < {b}");
      }
    }
    assert!(CtLess::ct_lt(&i8::MIN, &i8::MAX));
    assert!(CtLess::ct_lt(&-1i64, &0i64));
    assert!(!CtLess::ct_lt(&0i16, &-1i16));
  }

  #[test]
  fn test_ct_lt_bool() {
    assert!(CtLess::ct_lt(&false, &true));
    assert!(!CtLess::ct_lt(&true, &false));
    assert!(!CtLess::ct_lt(&true, &true));
  }
}
