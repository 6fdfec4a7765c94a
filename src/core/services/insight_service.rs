//! Natural-language spending hints.

use chrono::NaiveDate;

use crate::domain::Category;
use crate::ledger::Ledger;
use crate::utils::format::{format_currency, round_half_up};

use super::{SummaryService, TrendPeriod, TrendService};

pub const NO_EXPENSES_HINT: &str = "Start tracking your expenses to see insights here.";
pub const SUBSCRIPTION_TIP: &str = "Consider tracking your subscriptions separately to identify any unused services you might be paying for.";

pub struct InsightService;

impl InsightService {
    /// Hints for the default trend period.
    pub fn generate(ledger: &Ledger, now: NaiveDate, currency: &str) -> Vec<String> {
        Self::generate_for_period(ledger, TrendPeriod::default(), now, currency)
    }

    /// Hints in fixed order: top category, entertainment spend, trend
    /// direction over `period`, then a generic tip. A ledger without expenses
    /// yields only the placeholder hint.
    pub fn generate_for_period(
        ledger: &Ledger,
        period: TrendPeriod,
        now: NaiveDate,
        currency: &str,
    ) -> Vec<String> {
        if ledger.expenses().next().is_none() {
            return vec![NO_EXPENSES_HINT.to_string()];
        }

        let mut insights = Vec::new();

        if let Some(top) = SummaryService::top_category(ledger) {
            insights.push(format!(
                "Your highest spending is on {} ({}), which is {}% of your total expenses.",
                top.category.display_name(),
                format_currency(top.amount, currency),
                round_half_up(top.share)
            ));
        }

        if ledger
            .expenses()
            .any(|txn| txn.category == Category::Entertainment)
        {
            let spent = SummaryService::category_total(ledger, Category::Entertainment);
            insights.push(format!(
                "You've spent {} on entertainment. Consider setting a monthly budget for this category.",
                format_currency(spent, currency)
            ));
        }

        let series = TrendService::trend_series(ledger, period, now);
        if let Some(change) = TrendService::percent_change(&series) {
            let magnitude = round_half_up(change).abs();
            if change > 0.0 {
                insights.push(format!(
                    "Your spending has increased by {magnitude}% compared to the beginning of this period."
                ));
            } else if change < 0.0 {
                insights.push(format!(
                    "Good job! Your spending has decreased by {magnitude}% compared to the beginning of this period."
                ));
            }
        }

        insights.push(SUBSCRIPTION_TIP.to_string());
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTransaction;

    #[test]
    fn empty_ledger_gets_placeholder_only() {
        let mut ledger = Ledger::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ledger.add_transaction(NewTransaction::income(900.0, Category::Other, "Pay", today));
        assert_eq!(
            InsightService::generate(&ledger, today, "USD"),
            vec![NO_EXPENSES_HINT.to_string()]
        );
    }

    #[test]
    fn tip_is_always_last() {
        let mut ledger = Ledger::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ledger.add_transaction(NewTransaction::expense(12.0, Category::Health, "Pharmacy", today));
        let insights = InsightService::generate(&ledger, today, "USD");
        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0],
            "Your highest spending is on Health & Medical ($12.00), which is 100% of your total expenses."
        );
        assert_eq!(insights.last().map(String::as_str), Some(SUBSCRIPTION_TIP));
    }
}
