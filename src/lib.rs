#![doc(test(attr(deny(warnings))))]

//! Spendwell Core owns a personal finance ledger: recorded transactions and
//! category budgets, their persistence to a key-value store, and the totals,
//! budget progress, trend series, and insights derived from them.
//!
//! ```
//! use chrono::NaiveDate;
//! use spendwell_core::{
//!     domain::{Category, NewTransaction},
//!     ledger::SeedData,
//!     storage::MemoryStore,
//!     LedgerStore,
//! };
//!
//! let mut store = LedgerStore::open(MemoryStore::new(), SeedData::empty());
//! let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
//! store
//!     .add_transaction(NewTransaction::expense(12.5, Category::Food, "Lunch", date))
//!     .unwrap();
//! assert_eq!(store.category_total(Category::Food), 12.5);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::LedgerStore;
pub use errors::LedgerError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendwell Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
