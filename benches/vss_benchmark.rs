use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proactive_vss::{recover_secret, Dealing, Parameters, Renewal};
use rand::rngs::OsRng;

fn bench_dealing(c: &mut Criterion) {
    c.bench_function("deal_4_of_7", |b| {
        let params = Parameters { n: 7, t: 4 };
        b.iter(|| Dealing::new(black_box(&params), &mut OsRng))
    });
}

fn bench_verification(c: &mut Criterion) {
    c.bench_function("verify_share", |b| {
        let params = Parameters { n: 7, t: 4 };
        let (dealing, _secret) = Dealing::new(&params, &mut OsRng).unwrap();
        b.iter(|| black_box(&dealing.shares[0]).verify(&dealing.verification_vector))
    });
}

fn bench_recovery(c: &mut Criterion) {
    c.bench_function("recover_from_4", |b| {
        let params = Parameters { n: 7, t: 4 };
        let (dealing, _secret) = Dealing::new(&params, &mut OsRng).unwrap();
        b.iter(|| recover_secret(black_box(&dealing.shares[0..4])))
    });
}

fn bench_renewal(c: &mut Criterion) {
    c.bench_function("renew_4_of_7", |b| {
        let params = Parameters { n: 7, t: 4 };
        let (dealing, _secret) = Dealing::new(&params, &mut OsRng).unwrap();
        b.iter(|| {
            Renewal::new(
                black_box(&params),
                &dealing.shares,
                &dealing.verification_vector,
                &mut OsRng,
            )
        })
    });
}

criterion_group!(benches, bench_dealing, bench_verification, bench_recovery, bench_renewal);
criterion_main!(benches);
