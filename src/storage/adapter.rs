//! Snapshot persistence of the ledger collections over a [`KeyValueStore`].

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    domain::{Budget, Transaction},
    ledger::{Ledger, SeedData},
};

use super::{KeyValueStore, Result, BUDGETS_KEY, TRANSACTIONS_KEY};

/// Where a collection came from during [`PersistenceAdapter::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSource {
    /// Parsed from the persisted value.
    Persisted,
    /// Nothing was stored under the key; the seed set was used.
    SeedMissing,
    /// The stored value could not be read or parsed; the seed set was used.
    SeedCorrupt,
}

impl CollectionSource {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, CollectionSource::Persisted)
    }
}

/// Outcome of a load, including any recovered failures.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub transactions: CollectionSource,
    pub budgets: CollectionSource,
    pub warnings: Vec<String>,
}

/// Reads and writes the two ledger collections as independent JSON blobs.
pub struct PersistenceAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Loads both collections. Each one independently falls back to `seed`
    /// when its key is absent or its value is unusable; failures are logged
    /// and reported, never returned.
    pub fn load(&self, seed: &SeedData) -> LoadReport {
        let mut warnings = Vec::new();
        let (transactions, txn_source) =
            self.load_collection(TRANSACTIONS_KEY, &seed.transactions, &mut warnings);
        let (budgets, budget_source) =
            self.load_collection(BUDGETS_KEY, &seed.budgets, &mut warnings);
        tracing::info!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            ?txn_source,
            ?budget_source,
            "ledger loaded"
        );
        LoadReport {
            ledger: Ledger::from_parts(transactions, budgets),
            transactions: txn_source,
            budgets: budget_source,
            warnings,
        }
    }

    pub fn save_transactions(&mut self, transactions: &[Transaction]) -> Result<()> {
        self.write_collection(TRANSACTIONS_KEY, transactions)
    }

    pub fn save_budgets(&mut self, budgets: &[Budget]) -> Result<()> {
        self.write_collection(BUDGETS_KEY, budgets)
    }

    fn load_collection<T>(
        &self,
        key: &str,
        fallback: &[T],
        warnings: &mut Vec<String>,
    ) -> (Vec<T>, CollectionSource)
    where
        T: DeserializeOwned + Clone,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (fallback.to_vec(), CollectionSource::SeedMissing),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored collection, using defaults");
                warnings.push(format!("failed to read `{key}`: {err}"));
                return (fallback.to_vec(), CollectionSource::SeedCorrupt);
            }
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => (items, CollectionSource::Persisted),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to parse stored collection, using defaults");
                warnings.push(format!("failed to parse `{key}`: {err}"));
                (fallback.to_vec(), CollectionSource::SeedCorrupt)
            }
        }
    }

    fn write_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        self.store.set(key, &json)?;
        tracing::debug!(key, records = items.len(), "collection persisted");
        Ok(())
    }
}
