pub mod ledger_store;
pub mod services;
pub mod time;

pub use ledger_store::LedgerStore;
pub use time::{Clock, FixedClock, SystemClock};
