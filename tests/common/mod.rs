#![allow(dead_code)]

use chrono::NaiveDate;
use spendwell_core::{
    core::FixedClock,
    ledger::SeedData,
    storage::{JsonFileStore, MemoryStore},
    LedgerStore,
};
use tempfile::TempDir;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Empty in-memory store whose clock is pinned to `today`.
pub fn memory_store_on(today: NaiveDate) -> LedgerStore<MemoryStore> {
    LedgerStore::open_with_clock(
        MemoryStore::new(),
        SeedData::empty(),
        Box::new(FixedClock::on(today)),
    )
}

/// File-backed store in a fresh temporary directory. Keep the guard alive
/// for as long as the store is used.
pub fn file_store(seed: SeedData) -> (LedgerStore<JsonFileStore>, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonFileStore::new(temp.path().join("data")).expect("create json store");
    (LedgerStore::open(storage, seed), temp)
}

/// Reopens the file-backed data written under `temp`.
pub fn reopen(temp: &TempDir, seed: SeedData) -> LedgerStore<JsonFileStore> {
    let storage = JsonFileStore::new(temp.path().join("data")).expect("reopen json store");
    LedgerStore::open(storage, seed)
}
