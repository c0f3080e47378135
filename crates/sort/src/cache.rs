//! A caller-owned cache of materialized networks, keyed by length.
//!
//! Useful when many small sequences of the same few lengths are sorted: the index pairs are built
//! once per length instead of on every call. Results are identical to the uncached façades.
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::debug;

use crate::adapters::{CompareExchange, LessSwap, LessSwapAdapter, Minmax, MinmaxAdapter};
use crate::network::Network;

/// LRU cache of [`Network`]s.
///
/// # Memory
/// A cached network stores every pair, two `usize` each (16 bytes on 64-bit targets), and keeps
/// it until evicted. The pair count grows as `n * log2(n)^2 / 4`: about 376 KB for `n = 1_000`,
/// 6.8 MB for `n = 10_000` and 107 MB for `n = 100_000`. A full default cache of large lengths
/// can therefore hold gigabytes. Size the capacity for the lengths you sort, and watch
/// [`NetworkCache::heap_bytes`]; the uncached façades allocate nothing.
#[derive(Debug)]
pub struct NetworkCache {
  networks: LruCache<usize, Arc<Network>>,
}

impl NetworkCache {
  /// Capacity used by [`NetworkCache::default`].
  pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(63);

  /// Creates a cache holding at most `capacity` networks.
  pub fn new(capacity: NonZeroUsize) -> Self {
    Self { networks: LruCache::new(capacity) }
  }

  /// Maximum number of networks kept.
  pub fn capacity(&self) -> NonZeroUsize {
    self.networks.cap()
  }

  /// Number of networks currently cached.
  pub fn len(&self) -> usize {
    self.networks.len()
  }

  /// Whether no network is cached.
  pub fn is_empty(&self) -> bool {
    self.networks.is_empty()
  }

  /// Heap memory held by the cached pair lists, in bytes.
  pub fn heap_bytes(&self) -> usize {
    self.networks.iter().map(|(_, network)| network.heap_bytes()).sum()
  }

  /// Drops every cached network.
  pub fn clear(&mut self) {
    self.networks.clear();
  }

  /// Returns the network for `n` elements, building and caching it on a miss.
  pub fn network(&mut self, n: usize) -> Arc<Network> {
    if let Some(network) = self.networks.get(&n) {
      debug!(n, "network cache hit");
      return Arc::clone(network);
    }

    debug!(n, "network cache miss");
    let network = Arc::new(Network::new(n));
    if let Some((evicted, _)) = self.networks.push(n, Arc::clone(&network)) {
      debug!(evicted, "evicted cached network");
    }
    network
  }

  /// Runs the cached network for `adapter.len()` elements over `adapter`.
  pub fn drive<A: CompareExchange>(&mut self, mut adapter: A) {
    let network = self.network(adapter.len());
    network.apply(|i, j| adapter.compare_exchange(i, j));
  }

  /// Cached counterpart of [`crate::batcher::sort`].
  pub fn sort<C: Minmax + ?Sized>(&mut self, arr: &mut C) {
    self.drive(MinmaxAdapter::new(arr));
  }

  /// Cached counterpart of [`crate::batcher::sort_ordered`].
  pub fn sort_ordered<C: LessSwap + ?Sized>(&mut self, arr: &mut C) {
    self.drive(LessSwapAdapter::new(arr));
  }
}

impl Default for NetworkCache {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY)
  }
}
