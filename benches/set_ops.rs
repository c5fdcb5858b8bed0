use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llrb::LlrbSet;
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();

                set.insert(key);
            }
        })
    });
}

fn bench_llrb_set_insert(c: &mut Criterion) {
    c.bench_function("bench llrb set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = LlrbSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();

                set.insert(key);
            }
        })
    });
}

fn bench_llrb_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = LlrbSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();

        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench llrb set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_llrb_set_pop_min(c: &mut Criterion) {
    c.bench_function("bench llrb set pop_min", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = LlrbSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
            while let Some(key) = set.pop_min() {
                black_box(key);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_llrb_set_insert,
    bench_llrb_set_contains,
    bench_llrb_set_pop_min,
);
criterion_main!(benches);
