use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockbook_inventory::Inventory;
use stockbook_persistence::{load, save};

fn build_store(items: usize) -> Inventory {
    let mut inventory = Inventory::new();
    for i in 0..items {
        inventory.add(&format!("item-{i:04}"), (i as i64 % 40) + 1, None);
    }
    inventory
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");
    for &size in &[100usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add_then_remove", size), &size, |b, &size| {
            b.iter(|| {
                let mut inventory = build_store(size);
                for i in 0..size {
                    inventory.remove(black_box(&format!("item-{i:04}")), 1);
                }
                inventory
            });
        });
    }
    group.finish();
}

fn bench_low_stock_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("low_stock");
    for &size in &[100usize, 1_000] {
        let inventory = build_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scan", size), &inventory, |b, inventory| {
            b.iter(|| inventory.low_stock(black_box(20)));
        });
    }
    group.finish();
}

fn bench_snapshot_round_trip(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir for benchmark snapshots");
    let path = dir.path().join("bench-inventory.json");
    let inventory = build_store(1_000);

    c.bench_function("snapshot_round_trip/1000", |b| {
        b.iter(|| {
            save(black_box(&inventory), &path).unwrap();
            load(&path).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_mutations,
    bench_low_stock_scan,
    bench_snapshot_round_trip
);
criterion_main!(benches);
