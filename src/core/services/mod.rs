//! Read-only aggregation over ledger snapshots. Services hold no state and
//! recompute every figure on each call.

pub mod budget_service;
pub mod insight_service;
pub mod summary_service;
pub mod transaction_service;
pub mod trend_service;

pub use budget_service::{BudgetHealth, BudgetService, BudgetStatus};
pub use insight_service::InsightService;
pub use summary_service::{CategoryShare, LedgerTotals, SummaryService};
pub use transaction_service::{TransactionFilter, TransactionService};
pub use trend_service::{BucketGranularity, TrendPeriod, TrendPoint, TrendService};
