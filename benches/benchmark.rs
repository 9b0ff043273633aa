use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ringback::{evaluate_reply, parse_snooze, parse_time};

fn bench_parsers(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 15, 0, 0).unwrap();

    c.bench_function("parse_time weekday", |b| {
        b.iter(|| parse_time(black_box("TUE 2PM"), &now))
    });
    c.bench_function("parse_time unrecognized", |b| {
        b.iter(|| parse_time(black_box("xyz123"), &now))
    });
    c.bench_function("parse_snooze hours", |b| b.iter(|| parse_snooze(black_box("3H"), &now)));
    c.bench_function("evaluate_reply booking", |b| {
        b.iter(|| evaluate_reply(black_box("John Smith"), black_box("TOMORROW 2PM"), &now))
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
