// Criterion benchmarks for skrt-lexicon.
//
// Uses a synthetic master file so the benchmarks run without the stemming
// data checkout.
//
// Run:
//   cargo bench -p skrt-lexicon

use criterion::{Criterion, criterion_group, criterion_main};
use skrt_lexicon::{Lexicon, rewrite};

const MASTER_LINES: usize = 50_000;
const TRIE_LINES: usize = 2_000;

fn synthetic_master() -> String {
    (0..MASTER_LINES)
        .map(|i| format!("form{i},{i}~-/=0"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every third line is known to the master file.
fn synthetic_trie() -> String {
    (0..TRIE_LINES)
        .map(|i| {
            if i % 3 == 0 {
                format!("form{},stale", i * 7)
            } else {
                format!("local{i},0~-/=0")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_build_lexicon(c: &mut Criterion) {
    let master = synthetic_master();
    c.bench_function("build_lexicon_50k", |b| {
        b.iter(|| std::hint::black_box(Lexicon::from_text(&master)))
    });
}

fn bench_rewrite(c: &mut Criterion) {
    let lexicon = Lexicon::from_text(&synthetic_master());
    let trie = synthetic_trie();
    c.bench_function("rewrite_2k_lines", |b| {
        b.iter(|| std::hint::black_box(rewrite(&lexicon, &trie)))
    });
}

criterion_group!(benches, bench_build_lexicon, bench_rewrite);
criterion_main!(benches);
