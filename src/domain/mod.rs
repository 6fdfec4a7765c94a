pub mod budget;
pub mod category;
pub mod common;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, BudgetPeriod, NewBudget};
pub use category::{Category, ParseCategoryError};
pub use common::{Displayable, Identifiable, RecordId};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
