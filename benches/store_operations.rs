//! Benchmark suite for account store operations
//!
//! Measures the store's mutations and a full dataset round-trip through the
//! JSON file using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_ledger::{AccountStore, JsonFileStorage, MemoryStorage};
use divan::Bencher;
use tempfile::TempDir;

fn main() {
    divan::main();
}

const SIZES: [u32; 3] = [10, 1_000, 100_000];

/// Store with `count` accounts numbered 0..count, each holding 1,000 units
fn populated_store(count: u32) -> AccountStore<MemoryStorage> {
    let mut store = AccountStore::new(MemoryStorage::new());
    for number in 0..count {
        store
            .create_account(number, 1_000, &format!("Owner {}", number))
            .unwrap();
    }
    store
}

/// Deposit into then withdraw from every account
#[divan::bench(args = SIZES)]
fn deposit_withdraw_cycle(bencher: Bencher, count: u32) {
    bencher
        .with_inputs(|| populated_store(count))
        .bench_local_values(|mut store| {
            for number in 0..count {
                store.deposit(number, 10).unwrap();
                store.withdraw(number, 10).unwrap();
            }
            store
        });
}

/// Transfer around a ring of accounts
#[divan::bench(args = SIZES)]
fn transfer_ring(bencher: Bencher, count: u32) {
    bencher
        .with_inputs(|| populated_store(count))
        .bench_local_values(|mut store| {
            for number in 0..count {
                store.transfer(number, (number + 1) % count, 5).unwrap();
            }
            store
        });
}

/// Save every account to a JSON file and load it back
#[divan::bench(args = SIZES, sample_count = 10)]
fn json_round_trip(bencher: Bencher, count: u32) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank_data.json");

    bencher
        .with_inputs(|| {
            let mut store = AccountStore::new(JsonFileStorage::new(&path));
            for number in 0..count {
                store.create_account(number, 1_000, "Owner").unwrap();
            }
            store
        })
        .bench_local_values(|mut store| {
            store.save().unwrap();
            store.load().unwrap();
            store
        });
}
