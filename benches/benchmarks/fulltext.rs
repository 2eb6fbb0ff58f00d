use criterion::{
    black_box, AxisScale, Bencher, BenchmarkId, Criterion, PlotConfiguration, Throughput,
};
use rand::Rng;

use rowdex::{FullTextIndex, IndexCapability, Table, WholeRecord};

use super::{random_word, rng};

const SAMPLE_SIZE: usize = 10;

#[cfg(all(test, not(feature = "long_benchmarks")))]
const ITEM_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

#[cfg(all(test, feature = "long_benchmarks"))]
const ITEM_COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn full_text_table() -> Table<String> {
    let indices: Vec<Box<dyn IndexCapability<String>>> =
        vec![Box::new(FullTextIndex::<String, WholeRecord, 3>::new())];
    Table::new(indices)
}

fn generate_sentences(len: usize) -> Vec<String> {
    let mut rng = rng();
    (0..len)
        .map(|_| {
            (0..8)
                .map(|_| random_word(&mut rng, 3 + rng.gen_range(0..6)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn emplace(b: &mut Bencher<'_>, len: usize) {
    let sentences = generate_sentences(len);
    b.iter_with_setup(
        || (full_text_table(), sentences.clone()),
        |(mut table, sentences)| {
            for sentence in sentences {
                black_box(table.emplace(sentence));
            }
        },
    );
}

fn find_all(b: &mut Bencher<'_>, len: usize) {
    let sentences = generate_sentences(len);
    let mut table = full_text_table();
    for sentence in &sentences {
        table.emplace(sentence.clone()).unwrap();
    }
    let query = sentences[len / 2][..4].to_string();

    b.iter(|| {
        black_box(table.find_all(query.as_bytes()));
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

pub fn bench_fulltext(c: &mut Criterion) {
    bench_fn(c, "fulltext/emplace", emplace);
    bench_fn(c, "fulltext/find_all", find_all);
}
