//! Criterion benchmark for a full impact computation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webenergy_rust::{calculate_impact, Connectivity, ContentType, DeviceType, UsageSession};

fn bench_calculate_impact(c: &mut Criterion) {
    let text_session = UsageSession::new(
        DeviceType::Phone,
        ContentType::Text,
        Connectivity::ThreeG,
        120.0,
    );
    let video_session = UsageSession::new(
        DeviceType::Pc,
        ContentType::Video,
        Connectivity::FiveG,
        30.0,
    );

    c.bench_function("impact_text_3g", |b| {
        b.iter(|| calculate_impact(black_box(&text_session)))
    });

    c.bench_function("impact_video_5g", |b| {
        b.iter(|| calculate_impact(black_box(&video_session)))
    });
}

criterion_group!(benches, bench_calculate_impact);
criterion_main!(benches);
