use criterion::{
    black_box, AxisScale, BatchSize, Bencher, BenchmarkId, Criterion, PlotConfiguration, Throughput,
};
use rand::Rng;

use rowdex::{IndexCapability, NonUniqueSorted, Table, UniqueHashed, UniqueSorted, View};

use super::{random_word, rng};

const SAMPLE_SIZE: usize = 10;

#[cfg(all(test, not(feature = "long_benchmarks")))]
const ITEM_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

#[cfg(all(test, feature = "long_benchmarks"))]
const ITEM_COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ByName(String);

impl View<String> for ByName {
    fn of(record: &String) -> Self {
        ByName(record.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ByLength(usize);

impl View<String> for ByLength {
    fn of(record: &String) -> Self {
        ByLength(record.len())
    }
}

fn three_index_table() -> Table<String> {
    let indices: Vec<Box<dyn IndexCapability<String>>> = vec![
        Box::new(UniqueSorted::<String, ByName>::new()),
        Box::new(NonUniqueSorted::<String, ByLength>::new()),
        Box::new(UniqueHashed::<String, ByName>::new()),
    ];
    Table::new(indices)
}

fn generate_words(len: usize) -> Vec<String> {
    let mut rng = rng();
    let mut seen = std::collections::HashSet::with_capacity(len);
    std::iter::from_fn(|| {
        let word_len = 1 + rng.gen_range(0..12);
        Some(random_word(&mut rng, word_len))
    })
    .filter(|word| seen.insert(word.clone()))
    .take(len)
    .collect()
}

fn emplace(b: &mut Bencher<'_>, len: usize) {
    let words = generate_words(len);
    b.iter_with_setup(
        || (three_index_table(), words.clone()),
        |(mut table, words)| {
            for word in words {
                black_box(table.emplace(word));
            }
        },
    );
}

fn equal_by_unique_sorted(b: &mut Bencher<'_>, len: usize) {
    let words = generate_words(len);
    let mut table = three_index_table();
    for word in &words {
        table.emplace(word.clone()).unwrap();
    }

    b.iter(|| {
        for word in &words {
            black_box(table.equal(&ByName(word.clone())).size());
        }
    });
}

fn all_by_non_unique_sorted_descending(b: &mut Bencher<'_>, len: usize) {
    let words = generate_words(len);
    let mut table = three_index_table();
    for word in &words {
        table.emplace(word.clone()).unwrap();
    }

    b.iter(|| {
        black_box(table.all_by::<ByLength>().descending().count());
    });
}

fn bench_fn<F>(c: &mut Criterion, name: &str, benchmark: F)
where
    F: Fn(&mut Bencher<'_>, usize) + 'static,
{
    let mut group = c.benchmark_group(name);
    for item_count in ITEM_COUNTS.iter() {
        group
            .bench_with_input(
                BenchmarkId::from_parameter(item_count),
                item_count,
                |b: &mut Bencher<'_>, len: &usize| benchmark(b, *len),
            )
            .throughput(Throughput::Elements(*item_count as u64))
            .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
            .sample_size(SAMPLE_SIZE);
    }
    group.finish();
}

fn bench_erase_half(c: &mut Criterion) {
    c.bench_function("table/erase_half", |b| {
        b.iter_batched(
            || {
                let words = generate_words(10_000);
                let mut table = three_index_table();
                let handles: Vec<_> = words
                    .into_iter()
                    .map(|word| table.emplace(word).unwrap())
                    .collect();
                (table, handles)
            },
            |(mut table, handles)| {
                for handle in handles.into_iter().step_by(2) {
                    black_box(table.erase(handle));
                }
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn bench_table(c: &mut Criterion) {
    bench_fn(c, "table/emplace", emplace);
    bench_fn(c, "table/equal_unique_sorted", equal_by_unique_sorted);
    bench_fn(
        c,
        "table/all_non_unique_sorted_descending",
        all_by_non_unique_sorted_descending,
    );
    bench_erase_half(c);
}
