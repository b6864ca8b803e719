//! # GB-02 VAA Verification Benchmarks
//!
//! - Single VAA at growing guardian set sizes (recovery cost is linear in
//!   the quorum)
//! - Sequential vs rayon batch verification
//! - Parse + verify from wire bytes

use std::sync::Arc;
use std::time::Duration;

use bridge_crypto::{double_keccak256, recover_guardian_address};
use bridge_types::Vaa;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use gb_02_vaa_verification::test_utils::{GuardianFixture, VaaBuilder};
use gb_02_vaa_verification::{verify_vaa, VaaVerificationApi, VaaVerificationService};
use parking_lot::RwLock;
use rand::Rng;

fn random_payload(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn signed_vaas(fixture: &GuardianFixture, count: usize) -> Vec<Vaa> {
    (0..count)
        .map(|i| {
            VaaBuilder::new()
                .sequence(i as u64)
                .payload(&random_payload(133))
                .sign_quorum(fixture)
        })
        .collect()
}

pub fn bench_signature_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("gb-02/recovery");

    let fixture = GuardianFixture::new(1);
    let vaa = VaaBuilder::new()
        .payload(&random_payload(133))
        .sign_all(&fixture);
    let digest = double_keccak256(&vaa.body_bytes());
    let signature = vaa.signatures[0].signature;

    group.bench_function("recover_guardian_address", |b| {
        b.iter(|| black_box(recover_guardian_address(&digest, &signature)))
    });
    group.bench_function("double_keccak_body", |b| {
        let body = vaa.body_bytes();
        b.iter(|| black_box(double_keccak256(&body)))
    });

    group.finish();
}

pub fn bench_single_vaa(c: &mut Criterion) {
    let mut group = c.benchmark_group("gb-02/single_vaa");
    group.measurement_time(Duration::from_secs(10));

    for guardians in [1usize, 7, 13, 19] {
        let fixture = GuardianFixture::new(guardians);
        let registry = fixture.registry(86_400);
        let vaa = signed_vaas(&fixture, 1).remove(0);

        group.throughput(Throughput::Elements(fixture.quorum() as u64));
        group.bench_with_input(
            BenchmarkId::new("verify_quorum", guardians),
            &vaa,
            |b, vaa| b.iter(|| black_box(verify_vaa(vaa.clone(), &registry).is_ok())),
        );
    }

    group.finish();
}

pub fn bench_batch_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("gb-02/batch");
    group.measurement_time(Duration::from_secs(15));

    let fixture = GuardianFixture::new(19);
    let service = VaaVerificationService::new(Arc::new(RwLock::new(fixture.registry(86_400))));

    for size in [10usize, 100, 500] {
        let vaas = signed_vaas(&fixture, size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &vaas, |b, vaas| {
            b.iter(|| {
                let valid = vaas
                    .iter()
                    .filter(|vaa| service.verify((*vaa).clone()).is_ok())
                    .count();
                black_box(valid)
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &vaas, |b, vaas| {
            b.iter(|| black_box(service.verify_batch(vaas.clone())))
        });
    }

    group.finish();
}

pub fn bench_parse_and_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gb-02/parse_and_verify");

    let fixture = GuardianFixture::new(19);
    let service = VaaVerificationService::new(Arc::new(RwLock::new(fixture.registry(86_400))));

    for payload in [133usize, 1_024, 16_384] {
        let bytes = VaaBuilder::new()
            .payload(&random_payload(payload))
            .sign_quorum(&fixture)
            .serialize().unwrap();

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("wire", payload), &bytes, |b, bytes| {
            b.iter(|| black_box(service.parse_and_verify(bytes).is_ok()))
        });
    }

    group.finish();
}
