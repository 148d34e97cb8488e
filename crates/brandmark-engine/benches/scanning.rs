use std::{hint::black_box, time::Instant};

use brandmark_engine::{
    parsing::{parse_str, scan},
    progressive::{RenderFrame, RenderSession, ScheduleConfig},
};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    group.sample_size(20);

    for sections in [10, 100] {
        let content = common::generate_report(sections);
        group.bench_function(format!("scan_{sections}_sections"), |b| {
            b.iter(|| {
                let blocks = scan(black_box(&content));
                black_box(blocks);
            });
        });
    }

    let content = common::generate_report(100);
    group.bench_function("parse_str_with_spans", |b| {
        b.iter(|| {
            let doc = parse_str(black_box(&content));
            black_box(doc);
        });
    });

    group.finish();
}

/// Cost of replaying a whole stream with a render on every tick, the worst
/// case for from-scratch re-scanning.
fn bench_progressive_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("progressive");
    group.sample_size(10);

    let tokens = common::tokenize(&common::generate_report(20), 4);
    group.bench_function("replay_zero_interval", |b| {
        b.iter(|| {
            let mut session =
                RenderSession::new(Vec::<RenderFrame>::new(), ScheduleConfig::from_millis(0));
            for token in &tokens {
                session.push(token).unwrap();
                session.tick(Instant::now()).unwrap();
            }
            let blocks = session.finish().unwrap();
            black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_scan, bench_progressive_replay);
criterion_main!(benches);
