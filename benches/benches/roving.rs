// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_roving::{Navigation, RovingEntry, RovingFocus, RovingSpace};

fn entries(len: u32, disabled_every: u32) -> Vec<RovingEntry<u32>> {
    (0..len)
        .map(|id| RovingEntry {
            id,
            enabled: id % disabled_every != 0,
        })
        .collect()
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/navigate");

    for len in [16u32, 256, 4_096] {
        let entries = entries(len, 3);
        let space = RovingSpace { members: &entries };
        group.bench_with_input(BenchmarkId::new("next", len), &space, |b, space| {
            let mut roving = RovingFocus::new();
            let mut from = 1;
            b.iter(|| {
                if let Some(target) = roving.navigate(Navigation::Next, from, space) {
                    from = target;
                }
                black_box(from);
            });
        });
        group.bench_with_input(BenchmarkId::new("last", len), &space, |b, space| {
            let mut roving = RovingFocus::new();
            b.iter(|| black_box(roving.navigate(Navigation::Last, 1, space)));
        });
    }

    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/reconcile");

    // Worst case: everything before the last member is disabled.
    for len in [16u32, 256, 4_096] {
        let mut entries = entries(len, 1);
        if let Some(last) = entries.last_mut() {
            last.enabled = true;
        }
        let space = RovingSpace { members: &entries };
        group.bench_with_input(BenchmarkId::from_parameter(len), &space, |b, space| {
            b.iter(|| {
                let mut roving = RovingFocus::<u32>::new();
                black_box(roving.reconcile(space));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_reconcile);
criterion_main!(benches);
