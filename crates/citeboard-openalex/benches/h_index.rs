use citeboard_openalex::author::{YearCount, year_series};
use citeboard_openalex::works::h_index;

/// Deterministic citation counts with a long-tail shape
fn synthetic_citations(n: usize) -> Vec<i32> {
    (0..n as u64)
        .map(|i| {
            let hashed = i.wrapping_mul(2654435761) % 1024;
            (hashed / (i / 64 + 1)) as i32
        })
        .collect()
}

fn synthetic_year_counts(n: usize) -> Vec<YearCount> {
    (0..n as i32)
        .map(|i| YearCount {
            year: 2026 - (i * 7 % 40),
            works_count: i % 30,
            cited_by_count: i * 13 % 900,
        })
        .collect()
}

#[divan::bench(args = [100, 2_000, 50_000])]
fn h_index_long_tail(bencher: divan::Bencher, n: usize) {
    let citations = synthetic_citations(n);
    bencher.bench(|| h_index(divan::black_box(&citations)));
}

#[divan::bench(args = [10, 40, 200])]
fn year_series_sort(bencher: divan::Bencher, n: usize) {
    let counts = synthetic_year_counts(n);
    bencher.bench(|| year_series(divan::black_box(&counts)));
}

fn main() {
    divan::main();
}
