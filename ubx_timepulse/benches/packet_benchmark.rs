use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ubx_timepulse::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("cfg_tp5_into_packet_bytes", |b| {
        b.iter(|| black_box(CfgTp5Builder::default()).into_packet_bytes())
    });

    let tp5 = CfgTp5Builder::default().into_packet_bytes().unwrap();
    c.bench_function("validate_cfg_tp5", |b| {
        b.iter(|| validate_frame(black_box(&tp5)).map(|f| f.kind()))
    });

    for payload_len in &[0usize, 32, 256, 1024] {
        let payload = vec![0x5Au8; *payload_len];
        let frame = encode_frame(0x06, 0x31, &payload).unwrap();
        c.bench_function(&format!("encode_frame_{}", payload_len), |b| {
            b.iter(|| encode_frame(0x06, 0x31, black_box(&payload)))
        });
        c.bench_function(&format!("validate_frame_{}", payload_len), |b| {
            b.iter(|| validate_frame(black_box(&frame)).is_ok())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
