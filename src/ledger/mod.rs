//! Ledger state container and its default datasets.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod seed;

pub use ledger::Ledger;
pub use seed::SeedData;
