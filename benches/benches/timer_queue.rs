// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_timing::{TimerId, TimerQueue};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 16
    }
}

fn deadlines(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg(seed);
    (0..n).map(|_| rng.next_u64() % 10_000).collect()
}

fn bench_schedule_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue/schedule_drain");

    for n in [64_usize, 1_024, 8_192] {
        let input = deadlines(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter_batched(
                TimerQueue::<u32>::new,
                |mut timers| {
                    for (i, &deadline) in input.iter().enumerate() {
                        timers.schedule(deadline, i as u32);
                    }
                    let mut drained = 0_u32;
                    while let Some(expired) = timers.pop_due(u64::MAX) {
                        drained = drained.wrapping_add(expired.payload);
                    }
                    black_box(drained);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rearm(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue/rearm");

    // Debounce-style usage: one live timer per session, cancelled and
    // rescheduled on every event.
    for sessions in [1_usize, 64, 1_024] {
        group.throughput(Throughput::Elements(sessions as u64 * 32));
        group.bench_with_input(
            BenchmarkId::from_parameter(sessions),
            &sessions,
            |b, &sessions| {
                b.iter_batched(
                    || vec![None::<TimerId>; sessions],
                    |mut slots| {
                        let mut timers = TimerQueue::new();
                        for round in 0..32_u64 {
                            for (s, slot) in slots.iter_mut().enumerate() {
                                if let Some(id) = slot.take() {
                                    timers.cancel(id);
                                }
                                *slot = Some(timers.schedule(round * 16 + 50, s));
                            }
                        }
                        black_box(timers.len());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_schedule_drain, bench_rearm);
criterion_main!(benches);
