// SPDX-License-Identifier: MPL-2.0
use corner_toasts::host::CardPanel;
use corner_toasts::notifications::{NotificationType, WindowNotificationManager};
use corner_toasts::scheduler::TickScheduler;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn show_and_evict_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("show_100_with_cap_5", |b| {
        b.iter(|| {
            let clock = TickScheduler::new();
            let manager = WindowNotificationManager::new(clock.clone());
            manager.apply_template(CardPanel::shared());
            for i in 0..100 {
                manager.show_content(
                    format!("n{i}"),
                    NotificationType::Information,
                    None,
                    None,
                    None,
                    &[],
                );
            }
            black_box(manager.open_count());
        });
    });

    group.bench_function("expire_100", |b| {
        b.iter(|| {
            let clock = TickScheduler::new();
            let manager = WindowNotificationManager::new(clock.clone());
            manager.set_max_items(100);
            manager.apply_template(CardPanel::shared());
            for i in 0..100 {
                manager.show_content(
                    "x",
                    NotificationType::Success,
                    Some(Duration::from_millis(i + 1)),
                    None,
                    None,
                    &[],
                );
            }
            black_box(clock.advance(Duration::from_secs(1)));
        });
    });

    group.finish();
}

criterion_group!(benches, show_and_evict_benchmark);
criterion_main!(benches);
