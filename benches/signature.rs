// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

use ringsag::{
    common::*,
    signature::RingSignature
};

fn signer<C: Curve>(x: usize) -> (PrivateKey<C>, Ring<C>, usize) {
    let key = PrivateKey::<C>::generate().unwrap();
    let index = thread_rng().gen::<usize>() % x;
    let ring = Ring::generate(x, &key, index).unwrap();
    return (key, ring, index)
}

fn sag_benchmark<C: Curve>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("SAG/{}", C::ID));
    group.sample_size(20);

    //build ring
    for x in RING_SIZES {
        let key = PrivateKey::<C>::generate().unwrap();
        group.bench_with_input(BenchmarkId::new("ring", format!("Ring size: {x}")), &key,
            |b, key| b.iter(|| {
                Ring::generate(x, key, 0).unwrap()
            }));
    }

    //sign
    for x in RING_SIZES {
        let params = signer::<C>(x);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &params,
            |b, (key, ring, index)| b.iter(|| {
                RingSignature::sign(b"abcdef", ring, key, *index).unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (key, ring, index) = signer::<C>(x);
        let sig = RingSignature::sign(b"abcdef", &ring, &key, index).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &sig,
            |b, sig| b.iter(|| {
                assert!(sig.verify())
            }));
    }
}

fn ristretto_benchmark(c: &mut Criterion) {
    #[cfg(feature = "ristretto")]
    sag_benchmark::<Ristretto>(c);
}

fn secp256k1_benchmark(c: &mut Criterion) {
    #[cfg(feature = "secp256k1")]
    sag_benchmark::<Secp256k1>(c);
}


criterion_group!(signature_sag, ristretto_benchmark, secp256k1_benchmark);
criterion_main!(signature_sag);
