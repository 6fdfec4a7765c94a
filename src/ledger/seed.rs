//! Default datasets used when nothing usable has been persisted yet.

use chrono::NaiveDate;

use crate::domain::{Budget, BudgetPeriod, Category, RecordId, Transaction};

/// Collections a store falls back to, per collection, when the persisted
/// copy is missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl SeedData {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Sample ledger shown on first run: one salary and a handful of August 2023 expenses.
    pub fn sample() -> Self {
        let transactions = vec![
            sample_transaction(1, 35.50, Category::Food, "Groceries", (2023, 8, 1), true),
            sample_transaction(2, 25.00, Category::Transport, "Gas", (2023, 8, 2), true),
            sample_transaction(3, 1500.00, Category::Other, "Salary", (2023, 8, 1), false),
            sample_transaction(
                4,
                80.00,
                Category::Entertainment,
                "Movie and dinner",
                (2023, 8, 3),
                true,
            ),
            sample_transaction(
                5,
                120.00,
                Category::Utilities,
                "Electricity bill",
                (2023, 8, 5),
                true,
            ),
            sample_transaction(6, 60.00, Category::Shopping, "New shirt", (2023, 8, 6), true),
        ];
        let budgets = vec![
            sample_budget(1, Category::Food, 400.0),
            sample_budget(2, Category::Transport, 200.0),
            sample_budget(3, Category::Entertainment, 150.0),
        ];
        Self::new(transactions, budgets)
    }
}

fn sample_transaction(
    seq: u32,
    amount: f64,
    category: Category,
    description: &str,
    (year, month, day): (i32, u32, u32),
    is_expense: bool,
) -> Transaction {
    Transaction {
        id: RecordId::from(seq.to_string()),
        amount,
        category,
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        is_expense,
    }
}

fn sample_budget(seq: u32, category: Category, amount: f64) -> Budget {
    Budget {
        id: RecordId::from(seq.to_string()),
        category,
        amount,
        period: BudgetPeriod::Monthly,
    }
}
