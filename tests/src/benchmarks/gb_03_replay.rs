//! # GB-03 Replay Protection Benchmarks
//!
//! Claim throughput on fresh keys and rejection cost on replays.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use gb_03_replay_protection::{ClaimKey, ReplayProtectionLedger};

use bridge_types::ChainId;

pub fn bench_claims(c: &mut Criterion) {
    let mut group = c.benchmark_group("gb-03/claims");

    group.bench_function("claim_fresh_key", |b| {
        let ledger = ReplayProtectionLedger::in_memory(b"bench");
        let mut sequence = 0u64;
        b.iter(|| {
            sequence += 1;
            let key = ClaimKey::new(ChainId::ETHEREUM, [7u8; 32], sequence);
            black_box(ledger.claim(&key).is_ok())
        })
    });

    group.bench_function("reject_replay", |b| {
        let ledger = ReplayProtectionLedger::in_memory(b"bench");
        let key = ClaimKey::new(ChainId::ETHEREUM, [7u8; 32], 1);
        let _ = ledger.claim(&key);
        b.iter(|| black_box(ledger.claim(&key).is_err()))
    });

    for claimed in [1_000u64, 100_000] {
        let ledger = ReplayProtectionLedger::in_memory(b"bench");
        for sequence in 0..claimed {
            let _ = ledger.claim(&ClaimKey::new(ChainId::SOLANA, [1u8; 32], sequence));
        }
        let lookup = ClaimKey::new(ChainId::SOLANA, [1u8; 32], claimed / 2);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("is_executed", claimed),
            &lookup,
            |b, key| b.iter(|| black_box(ledger.is_executed(key))),
        );
    }

    group.finish();
}
