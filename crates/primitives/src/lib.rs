//! Constant-time building blocks for the sorting networks in `batcher-sort`.
//!
//! The branch-free compare and select operations are delegated to the [`subtle`] crate; this
//! crate adapts them to the `Cmov` / `CtLess` traits that the network adapters are written against.

pub mod cmov;

pub mod traits;

pub mod indexable;
