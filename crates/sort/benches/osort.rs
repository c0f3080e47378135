#![allow(missing_docs)]
use batcher_sort::cache::NetworkCache;
use batcher_sort::{sort, sort_oblivious, sort_ordered};
use criterion::{
  criterion_group, criterion_main, measurement::Measurement, AxisScale, BenchmarkId, Criterion,
  PlotConfiguration,
};
use rand::seq::SliceRandom;
use std::hint::black_box;

pub fn benchmark_sort<T: Measurement + 'static>(c: &mut Criterion<T>) {
  let mut group = c.benchmark_group(format!(
    "Sorting/{}",
    std::any::type_name::<T>().split(':').next_back().unwrap()
  ));
  let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
  group.plot_config(plot_config);

  for &size in &[10, 100, 1_000, 10_000, 100_000] {
    let mut data: Vec<u64> = (0u64..size as u64).collect();
    data.shuffle(&mut rand::rng());
    let data = data;

    group.bench_with_input(BenchmarkId::new("Batcher_ascending", size), &size, |b, &size| {
      let ascending: Vec<u64> = (0u64..size as u64).collect();
      b.iter(|| {
        let mut data_clone = black_box(ascending.clone());
        sort(&mut data_clone);
      });
    });

    group.bench_with_input(BenchmarkId::new("Batcher", size), &size, |b, _| {
      b.iter(|| {
        let mut data_clone = black_box(data.clone());
        sort(&mut data_clone);
      });
    });

    group.bench_with_input(BenchmarkId::new("Batcher_less_swap", size), &size, |b, _| {
      b.iter(|| {
        let mut data_clone = black_box(data.clone());
        sort_ordered(&mut data_clone);
      });
    });

    group.bench_with_input(BenchmarkId::new("Batcher_oblivious", size), &size, |b, _| {
      let data: Vec<i32> = data.iter().map(|&v| v as i32).collect();
      b.iter(|| {
        let mut data_clone = black_box(data.clone());
        sort_oblivious(&mut data_clone);
      });
    });

    group.bench_with_input(BenchmarkId::new("Batcher_cached", size), &size, |b, _| {
      let mut cache = NetworkCache::default();
      b.iter(|| {
        let mut data_clone = black_box(data.clone());
        cache.sort(&mut data_clone);
      });
    });

    group.bench_with_input(BenchmarkId::new("std::sort", size), &size, |b, _| {
      b.iter(|| {
        let mut data_clone = black_box(data.clone());
        data_clone.sort();
      });
    });
  }

  group.finish();
}

criterion_group!(name = benches_time;
  config = Criterion::default().warm_up_time(std::time::Duration::from_millis(3000)).measurement_time(std::time::Duration::from_secs(5));
  targets = benchmark_sort);
criterion_main!(benches_time);
