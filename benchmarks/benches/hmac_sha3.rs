// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use ravelin_hmac::{hmac_sha3_256, hmac_sha3_512};

fn benchmark_hmac_sha3_256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha3_256");

    // The per-call heap scratch shows up here; sizes chosen to cross it
    for msg_len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} byte msg", msg_len), msg_len, |b, &msg_len| {
            let key = b"benchmark-authentication-key";
            let msg = vec![0xabu8; msg_len];

            b.iter(|| hmac_sha3_256(black_box(&msg), black_box(key)).expect("hmac_sha3_256 failed"));
        });
    }
    group.finish();
}

fn benchmark_hmac_sha3_512(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha3_512");

    for msg_len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} byte msg", msg_len), msg_len, |b, &msg_len| {
            let key = b"benchmark-authentication-key";
            let msg = vec![0xabu8; msg_len];

            b.iter(|| hmac_sha3_512(black_box(&msg), black_box(key)).expect("hmac_sha3_512 failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_hmac_sha3_256, benchmark_hmac_sha3_512);
criterion_main!(benches);
