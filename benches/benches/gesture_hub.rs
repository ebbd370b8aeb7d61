// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_gesture::pointer::RawPointer;
use understory_gesture::{Capabilities, GestureHub, GestureSet, Viewport};

type Hub = GestureHub<u32, RawPointer<u32>>;

fn bound_hub(elements: u32) -> Hub {
    let mut hub = GestureHub::new(Capabilities::MOUSE, &Viewport::new(1280.0, 800.0));
    for el in 0..elements {
        hub.bind(el, GestureSet::ELEMENT);
    }
    hub
}

fn bench_tap_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_hub/tap_cycle");

    for elements in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(elements)));
        group.bench_with_input(
            BenchmarkId::from_parameter(elements),
            &elements,
            |b, &elements| {
                b.iter_batched(
                    || bound_hub(elements),
                    |mut hub| {
                        let mut emitted = 0;
                        for el in 0..elements {
                            let at = RawPointer::from_mouse(el, Point::new(10.0, 10.0));
                            let t = u64::from(el) * 1_000;
                            emitted += hub.pointer_down(el, &at, t).len();
                            emitted += hub.pointer_move(el, &at, t + 20).len();
                            emitted += hub.pointer_up(el, &at, t + 80).len();
                        }
                        black_box(emitted);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_hold_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_hub/hold_fanout");

    // Every element presses within the same 750ms window, so `advance` drains
    // one timer per element in deadline order.
    for elements in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(elements)));
        group.bench_with_input(
            BenchmarkId::from_parameter(elements),
            &elements,
            |b, &elements| {
                b.iter_batched(
                    || {
                        let mut hub = bound_hub(elements);
                        for el in 0..elements {
                            let at = RawPointer::from_mouse(el, Point::ORIGIN);
                            hub.pointer_down(el, &at, u64::from(el % 500));
                        }
                        hub
                    },
                    |mut hub| black_box(hub.advance(10_000).len()),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_hub/scroll_burst");

    for events in [64_u64, 1_024] {
        group.throughput(Throughput::Elements(events));
        group.bench_with_input(BenchmarkId::from_parameter(events), &events, |b, &events| {
            let ev = RawPointer::from_mouse(0, Point::ORIGIN);
            b.iter_batched(
                || bound_hub(1),
                |mut hub| {
                    let mut emitted = 0;
                    for i in 0..events {
                        emitted += hub.scroll(0, &ev, i * 16).len();
                    }
                    emitted += hub.advance(u64::MAX).len();
                    black_box(emitted);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize_drag(c: &mut Criterion) {
    c.bench_function("gesture_hub/resize_drag", |b| {
        b.iter_batched(
            || bound_hub(0),
            |mut hub| {
                let mut emitted = 0;
                for i in 0..256_u32 {
                    let width = 400.0 + f64::from(i) * 4.0;
                    emitted += hub
                        .resize(Viewport::new(width, 800.0), u64::from(i) * 8)
                        .len();
                }
                emitted += hub.advance(u64::MAX).len();
                black_box(emitted);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tap_cycle,
    bench_hold_fanout,
    bench_scroll_burst,
    bench_resize_drag
);
criterion_main!(benches);
