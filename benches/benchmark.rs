//! Run with:
//! ```bash
//! RUSTFLAGS="-C target-cpu=native" cargo bench --bench benchmark
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jagged_reduce::content::Content;
use jagged_reduce::index::TypedIndex;
use jagged_reduce::list::{reduce_axis, List};
use jagged_reduce::prepare::local::prepare_local;
use jagged_reduce::prepare::nonlocal::{maxcount_and_offsetscopy, preparenext};
use jagged_reduce::primitive::TypedBuffer;
use jagged_reduce::reduce::ReduceKind;
use jagged_reduce::sort::sort_next;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Number of sublists generated for the main benchmarks.
const N_SUBLISTS: usize = 10_000;
/// Maximum sublist length; actual lengths are uniform over `0..=MAX_SUBLIST_LEN`.
const MAX_SUBLIST_LEN: i64 = 32;
/// Fixed RNG seed for reproducible benchmarks.
const SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

/// Generate `n_sublists` random sublists, each a random length in
/// `0..=MAX_SUBLIST_LEN`, filled with random `i64` values.
fn generate_jagged(n_sublists: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut offsets = Vec::with_capacity(n_sublists + 1);
    let mut content = Vec::new();
    offsets.push(0i64);
    for _ in 0..n_sublists {
        let len = rng.gen_range(0..=MAX_SUBLIST_LEN);
        for _ in 0..len {
            content.push(rng.gen_range(-1000..1000));
        }
        offsets.push(content.len() as i64);
    }
    (offsets, content)
}

fn build_list(offsets: Vec<i64>, content: Vec<i64>) -> List {
    let numbers = Content::Numpy(TypedBuffer::I64(content));
    List::new(TypedIndex::from_i64_vec(offsets), numbers).unwrap()
}

/// Measures `reduce_axis` with `Sum` at the innermost axis — the fully
/// local path, one group per sublist.
fn bench_local_sum(c: &mut Criterion) {
    let (offsets, content) = generate_jagged(N_SUBLISTS, SEED);
    let list = Content::List(build_list(offsets, content));

    let mut group = c.benchmark_group("reduce_axis_local_sum");
    group.throughput(Throughput::Elements(N_SUBLISTS as u64));
    group.bench_function(
        BenchmarkId::new("sum_innermost", format!("{N_SUBLISTS}sublists")),
        |b| b.iter(|| black_box(reduce_axis(black_box(&list), ReduceKind::Sum, -1, false, false, None))),
    );
    group.finish();
}

/// Measures `reduce_axis` with `Max` at the innermost axis, which
/// additionally exercises the NaN-skip comparison branch.
fn bench_local_max(c: &mut Criterion) {
    let (offsets, content) = generate_jagged(N_SUBLISTS, SEED + 1);
    let list = Content::List(build_list(offsets, content));

    let mut group = c.benchmark_group("reduce_axis_local_max");
    group.throughput(Throughput::Elements(N_SUBLISTS as u64));
    group.bench_function(
        BenchmarkId::new("max_innermost", format!("{N_SUBLISTS}sublists")),
        |b| b.iter(|| black_box(reduce_axis(black_box(&list), ReduceKind::Max, -1, false, false, None))),
    );
    group.finish();
}

/// Measures the local preparation kernel alone (`prepare_local`), isolated
/// from the elementwise reduce loop that follows it.
fn bench_prepare_local(c: &mut Criterion) {
    let (offsets, content) = generate_jagged(N_SUBLISTS, SEED + 2);
    let content_len = content.len() as i64;

    let mut group = c.benchmark_group("prepare_local");
    group.throughput(Throughput::Elements(N_SUBLISTS as u64));
    group.bench_function(
        BenchmarkId::new("prepare_local", format!("{N_SUBLISTS}sublists")),
        |b| b.iter(|| black_box(prepare_local(black_box(&offsets), content_len))),
    );
    group.finish();
}

/// Measures the non-local transpose preparation (`preparenext`), the most
/// allocation-heavy step in the non-local path.
fn bench_prepare_nonlocal(c: &mut Criterion) {
    let (offsets, _content) = generate_jagged(N_SUBLISTS, SEED + 3);
    let (maxcount, _) = maxcount_and_offsetscopy(&offsets);
    let outlength = offsets.len() as i64 - 1;
    // One ancestor group per sublist (identity), the common case when
    // there's no enclosing non-local reduction above this level.
    let parents: Vec<i64> = (0..outlength).collect();

    let mut group = c.benchmark_group("prepare_nonlocal");
    group.throughput(Throughput::Elements(N_SUBLISTS as u64));
    group.bench_function(
        BenchmarkId::new(
            "preparenext",
            format!("{N_SUBLISTS}sublists_maxcount{maxcount}"),
        ),
        |b| {
            b.iter(|| {
                black_box(preparenext(
                    black_box(&offsets),
                    black_box(&parents),
                    maxcount,
                    outlength,
                ))
            })
        },
    );
    group.finish();
}

/// Measures `sort_next` (per-sublist stable ascending sort).
fn bench_sort(c: &mut Criterion) {
    let (offsets, content) = generate_jagged(N_SUBLISTS, SEED + 4);
    let list = build_list(offsets, content);

    let mut group = c.benchmark_group("sort_next");
    group.throughput(Throughput::Elements(N_SUBLISTS as u64));
    group.bench_function(
        BenchmarkId::new("ascending_stable", format!("{N_SUBLISTS}sublists")),
        |b| b.iter(|| black_box(sort_next(black_box(&list), true, true))),
    );
    group.finish();
}

criterion_group!(
    benches,
    bench_local_sum,
    bench_local_max,
    bench_prepare_local,
    bench_prepare_nonlocal,
    bench_sort,
);
criterion_main!(benches);
