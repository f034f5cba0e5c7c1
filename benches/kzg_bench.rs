use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zkpass::{commit, open, tate_pairing, trusted_setup, verify, Field, Fr, Polynomial};

fn random_polynomial(len: usize, rng: &mut StdRng) -> Polynomial {
    Polynomial::new((0..len).map(|_| Fr::from_u64(rng.gen::<u64>())).collect())
}

fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("kzg_setup");
    group.sample_size(10);
    for &len in &[4usize, 16] {
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| trusted_setup(&Fr::from_u64(0x5eed), len));
        });
    }
    group.finish();
}

fn bench_commit_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("kzg_commit_open");
    group.sample_size(10);
    let rng = &mut StdRng::seed_from_u64(1);

    for &len in &[4usize, 16] {
        let srs = trusted_setup(&Fr::from_u64(0x5eed), len).expect("setup");
        let poly = random_polynomial(len, rng);
        let point = (Fr::from_u64(3), poly.evaluate_scalar(&Fr::from_u64(3)));

        group.bench_function(BenchmarkId::new("commit", len), |b| {
            b.iter(|| commit(&poly, &srs.g1));
        });
        group.bench_function(BenchmarkId::new("open", len), |b| {
            b.iter(|| open(&poly, &point, &srs.g1));
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("kzg_verify");
    group.sample_size(10);
    let rng = &mut StdRng::seed_from_u64(2);

    let srs = trusted_setup(&Fr::from_u64(0x5eed), 16).expect("setup");
    let poly = random_polynomial(16, rng);
    let point = (Fr::from_u64(5), poly.evaluate_scalar(&Fr::from_u64(5)));
    let commitment = commit(&poly, &srs.g1).expect("commit");
    let proof = open(&poly, &point, &srs.g1).expect("open");

    group.bench_function("verify", |b| {
        b.iter(|| verify(&commitment, &proof, &point, &srs.g2));
    });
    group.bench_function("pairing", |b| {
        b.iter(|| tate_pairing(&srs.g1[1], &srs.g2));
    });
    group.finish();
}

criterion_group!(benches, bench_setup, bench_commit_open, bench_verify);
criterion_main!(benches);
