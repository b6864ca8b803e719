//! # Guardian Bridge Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | gb-02 VAA Verification | signature recovery, quorum verify, batch verify |
//! | gb-03 Replay Protection | claim, replay rejection, status lookup |

use criterion::{criterion_group, criterion_main};
use gb_tests::benchmarks::{gb_02_verification, gb_03_replay};

criterion_group!(
    benches,
    gb_02_verification::bench_signature_recovery,
    gb_02_verification::bench_single_vaa,
    gb_02_verification::bench_batch_verification,
    gb_02_verification::bench_parse_and_verify,
    gb_03_replay::bench_claims,
);

criterion_main!(benches);
