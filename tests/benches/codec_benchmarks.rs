//! # Commitment Codec Benchmarks
//!
//! Every `GET /get/0x…` parses hex, strips the wire type byte and decodes the
//! commitment before touching the network; these keep that path cheap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sunrise_alt_da::{decode_wire, parse_hex, to_hex, CommitmentCodec};

fn bench_commitment_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("commitment-codec");
    let codec = CommitmentCodec::sunrise();
    let locator = b"ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

    group.bench_function("encode", |b| b.iter(|| codec.encode(black_box(locator))));

    let commitment = codec.encode(locator);
    group.bench_function("decode", |b| {
        b.iter(|| codec.decode(black_box(commitment.as_bytes())).is_ok())
    });

    let path = to_hex(&commitment.to_wire());
    group.bench_function("request_path", |b| {
        b.iter(|| {
            let wire = parse_hex(black_box(&path)).unwrap_or_default();
            decode_wire(&wire)
                .and_then(|c| codec.decode(c).map(<[u8]>::len))
                .unwrap_or(0)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_commitment_codec);
criterion_main!(benches);
