pub mod adapter;
pub mod json_backend;
pub mod memory;

pub use crate::errors::Result;

/// Key under which the serialized transaction collection is stored.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key under which the serialized budget collection is stored.
pub const BUDGETS_KEY: &str = "budgets";

/// Abstraction over durable key-value backends holding serialized collections.
pub trait KeyValueStore: Send {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

pub use adapter::{CollectionSource, LoadReport, PersistenceAdapter};
pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
