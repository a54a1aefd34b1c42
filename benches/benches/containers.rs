// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use overstory_choice::{Radio, RadioSet, Tab, Tabs, TabsOptions};
use ui_events::keyboard::{Key, NamedKey};

fn bench_radio_activate(c: &mut Criterion) {
    let mut group = c.benchmark_group("radio/activate");

    for (groups, per_group) in [(1usize, 8usize), (16, 8), (64, 32)] {
        let mut set = RadioSet::new();
        let ids: Vec<_> = (0..groups * per_group)
            .map(|i| {
                let radio = Radio::new(format!("v{i}")).named(format!("g{}", i / per_group));
                set.insert(radio).0
            })
            .collect();
        let label = format!("{groups}x{per_group}");
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 5) % ids.len();
                black_box(set.activate(ids[i]));
            });
        });
    }

    group.finish();
}

fn bench_tabs_arrows(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabs/arrow_right");
    let right = Key::Named(NamedKey::ArrowRight);

    for len in [4usize, 32, 256] {
        for auto_activate in [false, true] {
            let mut tabs = Tabs::new(TabsOptions {
                auto_activate,
                ..TabsOptions::default()
            });
            let ids: Vec<_> = (0..len)
                .map(|i| tabs.push(Tab::new(format!("t{i}")).selected(i == 0)).0)
                .collect();
            tabs.focus_in(ids[0]);
            let mode = if auto_activate { "auto" } else { "manual" };
            group.bench_function(BenchmarkId::new(mode, len), |b| {
                b.iter(|| black_box(tabs.key_down(&right)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_radio_activate, bench_tabs_arrows);
criterion_main!(benches);
