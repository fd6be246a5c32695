use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lineage_engine::{Alphabet, Group, Record, NIL};

// ── Hand-rolled LCG (no external deps) ──────────────────────────────────────

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }
    /// Returns a value in [0, bound).
    fn next_range(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

// ── Default 63-symbol alphabet ──────────────────────────────────────────────

fn default_alphabet() -> Alphabet {
    let mut symbols: Vec<char> = ('a'..='z').collect();
    symbols.extend('0'..='9');
    symbols.extend('A'..='Z');
    symbols.push('늌');
    Alphabet::new(symbols).unwrap()
}

/// Builds a group of `n` records with naive random parent assignment:
/// record `i` (i > 0) attaches to a uniformly random existing record.
fn random_forest(n: u32, seed: u64) -> Group<Record> {
    let mut rng = Lcg::new(seed);
    let mut group: Group<Record> = Group::new(default_alphabet());
    for i in 0..n {
        let parent = if i == 0 {
            NIL
        } else {
            rng.next_range(i as u64) as u32
        };
        group.insert(Record::new(i, parent));
    }
    group
}

fn bench_calculate_hierarchy(c: &mut Criterion) {
    let mut group = black_box(random_forest(150_000, 42));

    c.bench_function("calculate_hierarchy_150k_cold", |b| {
        b.iter_batched(
            || random_forest(150_000, 42),
            |mut g| {
                g.calculate_hierarchy();
                black_box(&g);
            },
            criterion::BatchSize::LargeInput,
        )
    });

    // Warm once, then measure the idempotent re-run (the common case once a
    // tree has stabilized: most chains are preserved, not reassigned).
    group.calculate_hierarchy();
    c.bench_function("calculate_hierarchy_150k_idempotent", |b| {
        b.iter(|| {
            group.calculate_hierarchy();
            black_box(&group);
        })
    });
}

criterion_group!(benches, bench_calculate_hierarchy);
criterion_main!(benches);
