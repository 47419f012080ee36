use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitreport::{process_packages, read_package, sample_packages, SensorPackage};

/// Benchmarks for dispatch and report rendering over growing batches

fn bench_single_package(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Package");

    for package in sample_packages() {
        group.bench_with_input(
            BenchmarkId::new("dispatch_and_render", &package.code),
            &package,
            |b, package| {
                b.iter(|| {
                    let training = read_package(black_box(&package.code), black_box(&package.data))
                        .and_then(|training| training.show_training_info());
                    let _ = training.map(|report| report.render());
                });
            },
        );
    }

    group.finish();
}

fn bench_batch_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Processing");

    for &size in &[10, 100, 1000] {
        let packages = create_package_batch(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("process_packages", size),
            &packages,
            |b, packages| {
                b.iter(|| {
                    let _ = process_packages(black_box(packages), false);
                });
            },
        );
    }

    group.finish();
}

fn create_package_batch(size: usize) -> Vec<SensorPackage> {
    sample_packages().into_iter().cycle().take(size).collect()
}

criterion_group!(benches, bench_single_package, bench_batch_processing);
criterion_main!(benches);
