use serde::Serialize;

use crate::domain::Category;
use crate::ledger::Ledger;

/// Spend attributed to one category, with its share of all expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: f64,
    /// Percentage of total expenses, `0.0..=100.0`.
    pub share: f64,
}

/// Income, expense, and net figures computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Stateless totals over a [`Ledger`] snapshot. Every call recomputes from scratch.
pub struct SummaryService;

impl SummaryService {
    /// Sum of expense amounts tagged with `category`. Income never counts.
    pub fn category_total(ledger: &Ledger, category: Category) -> f64 {
        ledger
            .expenses()
            .filter(|txn| txn.category == category)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn total_expenses(ledger: &Ledger) -> f64 {
        ledger.expenses().map(|txn| txn.amount).sum()
    }

    pub fn total_income(ledger: &Ledger) -> f64 {
        ledger.incomes().map(|txn| txn.amount).sum()
    }

    /// Income minus expenses; negative when spending exceeds income.
    pub fn net_income(ledger: &Ledger) -> f64 {
        Self::total_income(ledger) - Self::total_expenses(ledger)
    }

    pub fn totals(ledger: &Ledger) -> LedgerTotals {
        let income = Self::total_income(ledger);
        let expenses = Self::total_expenses(ledger);
        LedgerTotals {
            income,
            expenses,
            net: income - expenses,
        }
    }

    /// Categories with non-zero spend, in canonical category order.
    pub fn category_breakdown(ledger: &Ledger) -> Vec<CategoryShare> {
        let totals: Vec<(Category, f64)> = Category::ALL
            .iter()
            .map(|category| (*category, Self::category_total(ledger, *category)))
            .filter(|(_, amount)| *amount > 0.0)
            .collect();
        let overall: f64 = totals.iter().map(|(_, amount)| amount).sum();
        totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                share: if overall > 0.0 {
                    amount / overall * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// The category with the highest spend. Ties go to the earlier category.
    pub fn top_category(ledger: &Ledger) -> Option<CategoryShare> {
        let mut top: Option<CategoryShare> = None;
        for entry in Self::category_breakdown(ledger) {
            match &top {
                Some(current) if current.amount >= entry.amount => {}
                _ => top = Some(entry),
            }
        }
        top
    }
}
