use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

use quorum::dkg::dealer::Dealing;
use quorum::dkg::poly::PriPoly;
use quorum::schemes::ThresholdBls12381;
use quorum::tbls;
use quorum::traits::Scheme;

const MSG: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];
const THRESHOLD: u32 = 14;

fn dealing<S: Scheme>() {
    let dealing = Dealing::<S>::generate(1, THRESHOLD).unwrap();
    for i in 1..=22 {
        black_box(dealing.share_for(i));
    }
}

fn reconstruction<S: Scheme>(sigs: &[tbls::SigShare<S>]) {
    black_box(tbls::reconstruct(sigs, THRESHOLD).unwrap());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("dealing", |b| b.iter(dealing::<ThresholdBls12381>));

    let poly = PriPoly::<ThresholdBls12381>::new(THRESHOLD).unwrap();
    let sigs: Vec<_> = (1..=THRESHOLD + 1)
        .map(|i| tbls::sign(i, poly.eval(i).value(), &MSG).unwrap())
        .collect();
    c.bench_function("reconstruction", |b| {
        b.iter(|| reconstruction::<ThresholdBls12381>(&sigs))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
