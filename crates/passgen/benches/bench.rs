use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use passgen::{
    BasicWordGenerator, PassphraseGenerator, PassphraseOptions, PasswordGenerator,
    PasswordOptions, RandSource, RngSource, SeededRandom, ThreadRandom, WordGenerator, WordPool,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

// Number of secrets generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_SECRETS: usize = 1024;

/// Benchmarks a single generator producing secrets back to back.
fn bench_sequential<G>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
    generate: impl Fn(&G) -> String,
) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_SECRETS as u64));

    group.bench_function(format!("elems/{}", TOTAL_SECRETS), |b| {
        b.iter_custom(|iters| {
            let generator = generator_factory();
            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..TOTAL_SECRETS {
                    black_box(generate(&generator));
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one generator shared across threads.
fn bench_contended<G>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
    generate: impl Fn(&G) -> String + Sync,
) where
    G: Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let per_thread = TOTAL_SECRETS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_SECRETS as u64));
        group.bench_function(
            format!("elems/{}/threads/{}", TOTAL_SECRETS, thread_count),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = Arc::new(generator_factory());
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let generator = Arc::clone(&generator);
                                let barrier = Arc::clone(&barrier);
                                let generate = &generate;
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..per_thread {
                                        black_box(generate(&generator));
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

/// Shuffle cost alone, which dominates word selection.
fn bench_shuffle<R: RandSource>(c: &mut Criterion, group_name: &str, rng: R) {
    let mut group = c.benchmark_group(group_name);
    let pool = WordPool::large();
    group.throughput(Throughput::Elements(pool.len() as u64));

    group.bench_function(format!("elems/{}", pool.len()), |b| {
        let mut words: Vec<&str> = pool.iter().collect();
        b.iter(|| {
            rng.shuffle(&mut words);
            black_box(&words);
        });
    });

    group.finish();
}

// --- Words ---
fn benchmark_words_thread(c: &mut Criterion) {
    let generator = BasicWordGenerator::with_rng(ThreadRandom);
    c.bench_function("words/thread/3", |b| {
        b.iter(|| black_box(generator.generate_words(black_box(3))))
    });
}

fn benchmark_words_seeded(c: &mut Criterion) {
    let generator = BasicWordGenerator::with_rng(SeededRandom::new(1));
    c.bench_function("words/seeded/3", |b| {
        b.iter(|| black_box(generator.generate_words(black_box(3))))
    });
}

fn benchmark_shuffle_thread(c: &mut Criterion) {
    bench_shuffle(c, "shuffle/thread", ThreadRandom);
}

fn benchmark_shuffle_seeded(c: &mut Criterion) {
    bench_shuffle(c, "shuffle/seeded", SeededRandom::new(1));
}

fn benchmark_shuffle_rng_source(c: &mut Criterion) {
    bench_shuffle(c, "shuffle/std_rng", RngSource::new(StdRng::seed_from_u64(1)));
}

// --- Passphrases ---
fn benchmark_passphrase_sequential_thread(c: &mut Criterion) {
    let options = PassphraseOptions::default();
    bench_sequential(
        c,
        "passphrase/sequential/thread",
        || PassphraseGenerator::with_rng(ThreadRandom),
        |g| g.generate(&options).unwrap(),
    );
}

fn benchmark_passphrase_sequential_seeded(c: &mut Criterion) {
    let options = PassphraseOptions::default();
    bench_sequential(
        c,
        "passphrase/sequential/seeded",
        || PassphraseGenerator::with_rng(SeededRandom::new(1)),
        |g| g.generate(&options).unwrap(),
    );
}

fn benchmark_passphrase_contended_seeded(c: &mut Criterion) {
    let options = PassphraseOptions::default();
    bench_contended(
        c,
        "passphrase/contended/seeded",
        || PassphraseGenerator::with_rng(SeededRandom::new(1)),
        |g| g.generate(&options).unwrap(),
    );
}

fn benchmark_passphrase_contended_rng_source(c: &mut Criterion) {
    let options = PassphraseOptions::default();
    bench_contended(
        c,
        "passphrase/contended/std_rng",
        || PassphraseGenerator::with_rng(RngSource::new(StdRng::seed_from_u64(1))),
        |g| g.generate(&options).unwrap(),
    );
}

// --- Passwords ---
fn benchmark_password_sequential_thread(c: &mut Criterion) {
    let options = PasswordOptions::default().with_size(32);
    bench_sequential(
        c,
        "password/sequential/thread",
        || PasswordGenerator::new(ThreadRandom),
        |g| g.generate(&options).unwrap(),
    );
}

fn benchmark_password_sequential_seeded(c: &mut Criterion) {
    let options = PasswordOptions::default().with_size(32);
    bench_sequential(
        c,
        "password/sequential/seeded",
        || PasswordGenerator::new(SeededRandom::new(1)),
        |g| g.generate(&options).unwrap(),
    );
}

fn benchmark_password_contended_seeded(c: &mut Criterion) {
    let options = PasswordOptions::default().with_size(32);
    bench_contended(
        c,
        "password/contended/seeded",
        || PasswordGenerator::new(SeededRandom::new(1)),
        |g| g.generate(&options).unwrap(),
    );
}

criterion_group!(
    benches,
    // Word selection
    benchmark_words_thread,
    benchmark_words_seeded,
    benchmark_shuffle_thread,
    benchmark_shuffle_seeded,
    benchmark_shuffle_rng_source,
    // Passphrases
    benchmark_passphrase_sequential_thread,
    benchmark_passphrase_sequential_seeded,
    benchmark_passphrase_contended_seeded, // atomic fetch_add under contention
    benchmark_passphrase_contended_rng_source,
    // Passwords
    benchmark_password_sequential_thread,
    benchmark_password_sequential_seeded,
    benchmark_password_contended_seeded,
);
criterion_main!(benches);
