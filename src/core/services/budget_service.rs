//! Budget usage derived from category spend.
//!
//! A budget's period is descriptive only: spend is the category total over the
//! entire transaction history, so budgets on the same category with different
//! periods report the same figure.

use serde::Serialize;

use crate::domain::{Budget, Category, RecordId};
use crate::ledger::Ledger;

use super::SummaryService;

/// Progress ceiling; overspend is not reflected above this value.
pub const MAX_PROGRESS: f64 = 100.0;

/// Coarse usage level used to colour progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Healthy,
    Caution,
    Warning,
    Critical,
}

impl BudgetHealth {
    pub fn from_progress(progress: f64) -> Self {
        if progress >= 90.0 {
            BudgetHealth::Critical
        } else if progress >= 75.0 {
            BudgetHealth::Warning
        } else if progress >= 50.0 {
            BudgetHealth::Caution
        } else {
            BudgetHealth::Healthy
        }
    }
}

/// Usage snapshot for a single budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget_id: RecordId,
    pub category: Category,
    pub limit: f64,
    pub spent: f64,
    /// `limit - spent`; negative once the budget is overspent.
    pub remaining: f64,
    /// Percentage used, clamped to `0.0..=100.0`.
    pub progress: f64,
    pub health: BudgetHealth,
}

impl BudgetStatus {
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Stateless budget helpers that operate over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Percentage of the budget consumed by its category's spend, at most 100.
    /// Unknown ids, zero limits, and zero spend all yield 0.
    pub fn budget_progress(ledger: &Ledger, budget_id: &RecordId) -> f64 {
        ledger
            .budget(budget_id)
            .map(|budget| progress_for(budget, Self::spent(ledger, budget)))
            .unwrap_or(0.0)
    }

    /// `limit - spent` for the budget, or `None` for an unknown id.
    pub fn budget_remaining(ledger: &Ledger, budget_id: &RecordId) -> Option<f64> {
        ledger
            .budget(budget_id)
            .map(|budget| budget.amount - Self::spent(ledger, budget))
    }

    pub fn budget_status(ledger: &Ledger, budget_id: &RecordId) -> Option<BudgetStatus> {
        ledger
            .budget(budget_id)
            .map(|budget| Self::status_for(ledger, budget))
    }

    /// Status of every budget, in insertion order.
    pub fn budget_statuses(ledger: &Ledger) -> Vec<BudgetStatus> {
        ledger
            .budgets
            .iter()
            .map(|budget| Self::status_for(ledger, budget))
            .collect()
    }

    fn status_for(ledger: &Ledger, budget: &Budget) -> BudgetStatus {
        let spent = Self::spent(ledger, budget);
        let progress = progress_for(budget, spent);
        BudgetStatus {
            budget_id: budget.id.clone(),
            category: budget.category,
            limit: budget.amount,
            spent,
            remaining: budget.amount - spent,
            progress,
            health: BudgetHealth::from_progress(progress),
        }
    }

    fn spent(ledger: &Ledger, budget: &Budget) -> f64 {
        SummaryService::category_total(ledger, budget.category)
    }
}

fn progress_for(budget: &Budget, spent: f64) -> f64 {
    if budget.amount <= 0.0 || spent <= 0.0 {
        return 0.0;
    }
    let ratio = spent / budget.amount * 100.0;
    if ratio.is_finite() {
        ratio.min(MAX_PROGRESS)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetPatch, BudgetPeriod, NewBudget, NewTransaction};
    use chrono::NaiveDate;

    fn ledger_with_food_spend(spend: f64) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(NewTransaction::expense(
            spend,
            Category::Food,
            "Groceries",
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        ));
        ledger
    }

    #[test]
    fn progress_is_clamped_at_one_hundred() {
        let mut ledger = ledger_with_food_spend(150.0);
        let id = ledger.add_budget(NewBudget::monthly(Category::Food, 100.0));
        assert_eq!(BudgetService::budget_progress(&ledger, &id), 100.0);
        assert_eq!(BudgetService::budget_remaining(&ledger, &id), Some(-50.0));
    }

    #[test]
    fn progress_is_zero_for_unknown_or_degenerate_budgets() {
        let mut ledger = Ledger::new();
        assert_eq!(BudgetService::budget_progress(&ledger, &RecordId::generate()), 0.0);

        let zero_limit = ledger.add_budget(NewBudget::monthly(Category::Food, 0.0));
        assert_eq!(BudgetService::budget_progress(&ledger, &zero_limit), 0.0);

        ledger.add_transaction(NewTransaction::expense(
            10.0,
            Category::Food,
            "Snack",
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        ));
        assert_eq!(BudgetService::budget_progress(&ledger, &zero_limit), 0.0);
    }

    #[test]
    fn status_reports_health_levels() {
        let mut ledger = ledger_with_food_spend(80.0);
        let id = ledger.add_budget(NewBudget::monthly(Category::Food, 100.0));
        let status = BudgetService::budget_status(&ledger, &id).expect("status");
        assert_eq!(status.spent, 80.0);
        assert_eq!(status.remaining, 20.0);
        assert_eq!(status.health, BudgetHealth::Warning);
        assert!(!status.is_overspent());

        ledger.update_budget(&id, BudgetPatch::default().amount(80.0));
        let status = BudgetService::budget_status(&ledger, &id).expect("status");
        assert_eq!(status.health, BudgetHealth::Critical);
    }

    // Current behaviour, not necessarily the intended one: the period does not
    // restrict which transactions count toward a budget.
    #[test]
    fn period_does_not_filter_spend() {
        let mut ledger = ledger_with_food_spend(60.0);
        let monthly = ledger.add_budget(NewBudget::monthly(Category::Food, 120.0));
        let daily = ledger.add_budget(NewBudget::new(Category::Food, 120.0, BudgetPeriod::Daily));

        let statuses = BudgetService::budget_statuses(&ledger);
        assert_eq!(statuses.len(), 2);
        assert_eq!(
            BudgetService::budget_progress(&ledger, &monthly),
            BudgetService::budget_progress(&ledger, &daily)
        );
        assert_eq!(statuses[0].spent, statuses[1].spent);
    }

    #[test]
    fn health_thresholds() {
        assert_eq!(BudgetHealth::from_progress(0.0), BudgetHealth::Healthy);
        assert_eq!(BudgetHealth::from_progress(49.9), BudgetHealth::Healthy);
        assert_eq!(BudgetHealth::from_progress(50.0), BudgetHealth::Caution);
        assert_eq!(BudgetHealth::from_progress(75.0), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::from_progress(90.0), BudgetHealth::Critical);
    }
}
