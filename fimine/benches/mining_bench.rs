use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fimine::io::transactions_from_matrix;
use fimine::Algorithm;
use ndarray::Array2;
use rand::Rng;

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx =
            (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    transactions_from_matrix(matrix.view())
}

fn min_count(fraction: f64, transactions: &[Vec<usize>]) -> usize {
    ((fraction * transactions.len() as f64).ceil() as usize).max(1)
}

/// All engines on growing datasets
fn bench_engines_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("engines_scaling");
    group.sample_size(10);

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let threshold = min_count(0.1, &transactions);

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), name),
                &transactions,
                |b, tx| {
                    b.iter(|| algorithm.mine(black_box(tx), black_box(threshold)));
                },
            );
        }
    }

    group.finish();
}

/// Lower thresholds grow the result combinatorially
fn bench_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_support");
    group.sample_size(10);

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &fraction in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let threshold = min_count(fraction, &transactions);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), format!("{:.2}", fraction)),
                &threshold,
                |b, &threshold| {
                    b.iter(|| algorithm.mine(black_box(&transactions), black_box(threshold)));
                },
            );
        }
    }

    group.finish();
}

/// FP-Growth across data densities
fn bench_fp_growth_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);
        let threshold = min_count(0.1, &transactions);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| Algorithm::FpGrowth.mine(black_box(tx), black_box(threshold)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_engines_scaling,
    bench_min_support,
    bench_fp_growth_density
);
criterion_main!(benches);
