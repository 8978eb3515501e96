use asset_pipeline::Channel;
use criterion::{Criterion, criterion_group, criterion_main};
use std::sync::mpsc;
use std::thread;

const ITEMS: u64 = 10_000;

fn bench_custom_channel(c: &mut Criterion) {
    c.bench_function("custom_channel", |b| {
        b.iter(|| {
            let ch = Channel::new();
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..ITEMS {
                        ch.push(i);
                    }
                });
                let mut sum = 0;
                for _ in 0..ITEMS {
                    sum += ch.pop();
                }
                std::hint::black_box(sum)
            })
        });
    });
}

fn bench_std_mpsc(c: &mut Criterion) {
    c.bench_function("std_mpsc", |b| {
        b.iter(|| {
            let (tx, rx) = mpsc::channel();
            thread::scope(|s| {
                s.spawn(move || {
                    for i in 0..ITEMS {
                        tx.send(i).unwrap();
                    }
                });
                let mut sum = 0;
                for _ in 0..ITEMS {
                    sum += rx.recv().unwrap();
                }
                std::hint::black_box(sum)
            })
        });
    });
}

criterion_group!(benches, bench_std_mpsc, bench_custom_channel);
criterion_main!(benches);
