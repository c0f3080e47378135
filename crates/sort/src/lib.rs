//! Batcher odd-even merge sorting networks.
//!
//! The network for `n` elements is a fixed sequence of compare-exchange operations that depends
//! only on `n`. Driving it with a branch-free compare-exchange (see [`batcher::sort_oblivious`])
//! gives a sort whose memory access pattern leaks nothing but the length; driving it with an
//! ordinary comparison gives a plain in-place sort.

pub mod network;

pub mod adapters;

pub mod batcher;

pub mod oblivious;

pub mod cache;

pub mod error;

pub use batcher::{sort, sort_by_less, sort_generic, sort_oblivious, sort_ordered, sort_with_payload};
pub use error::{ErrorKind, Result, SortError};
pub use network::{generate, generate_checked, Network};
