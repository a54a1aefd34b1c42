// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_choice::ExclusiveSelection;

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("choice/register");

    // Registration scans the key list, so building a group is O(n^2).
    for len in [8u32, 64, 512] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                ExclusiveSelection::<u32>::new,
                |mut sel| {
                    for key in 0..len {
                        black_box(sel.register(key, key == len / 2));
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_checked_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("choice/handle_checked_change");

    for len in [8u32, 64, 512] {
        let mut sel = ExclusiveSelection::new();
        for key in 0..len {
            sel.register(key, false);
        }
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut key = 0;
            b.iter(|| {
                key = (key + 7) % len;
                black_box(sel.handle_checked_change(key, true));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_register, bench_checked_change);
criterion_main!(benches);
