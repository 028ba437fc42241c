// Performance benchmarks for the strdist metrics
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use strdist::{
    bigram_distance, cosine_distance, edit_distance, jaro_winkler_distance, tokenize,
    trigram_distance, unigram_distance, DistanceReport,
};

const WORDS: [&str; 12] = [
    "mary", "had", "a", "little", "lamb", "whose", "fleece", "was", "white", "as", "snow", "everywhere",
];

fn generate_text(rng: &mut StdRng, terms: usize) -> String {
    (0..terms)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_pair(terms: usize) -> (String, String) {
    let mut rng = StdRng::seed_from_u64(terms as u64);
    (generate_text(&mut rng, terms), generate_text(&mut rng, terms))
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [8, 64, 512].iter() {
        let (text, _) = generate_pair(*size);
        group.bench_with_input(BenchmarkId::new("split_whitespace", size), &text, |b, text| {
            b.iter(|| black_box(tokenize(black_box(text))));
        });
    }

    group.finish();
}

fn benchmark_ngram_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngram_overlap");

    for size in [8, 64, 512].iter() {
        let (a, b) = generate_pair(*size);
        group.bench_with_input(BenchmarkId::new("unigram", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(unigram_distance(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("bigram", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(bigram_distance(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("trigram", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(trigram_distance(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

fn benchmark_cosine(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine");

    for size in [8, 64, 512].iter() {
        let (a, b) = generate_pair(*size);
        group.bench_with_input(BenchmarkId::new("term_frequency", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(cosine_distance(black_box(a), black_box(b)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");

    let (a, b) = generate_pair(8);
    group.bench_function("levenshtein", |bench| {
        bench.iter(|| black_box(edit_distance(black_box(&a), black_box(&b))));
    });
    group.bench_function("jaro_winkler", |bench| {
        bench.iter(|| black_box(jaro_winkler_distance(black_box(&a), black_box(&b))));
    });

    group.finish();
}

fn benchmark_report(c: &mut Criterion) {
    let (a, b) = generate_pair(8);
    c.bench_function("full_report", |bench| {
        bench.iter(|| black_box(DistanceReport::compute(black_box(&a), black_box(&b)).unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_tokenize,
    benchmark_ngram_overlap,
    benchmark_cosine,
    benchmark_edit,
    benchmark_report
);
criterion_main!(benches);
