//! Read-side helpers for listing transactions.

use chrono::NaiveDate;

use crate::domain::{Transaction, TransactionKind};
use crate::ledger::Ledger;

/// Narrows the transaction list shown to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive needle matched against description and category key.
    pub search: Option<String>,
    /// `None` keeps both expenses and income.
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        let kind_ok = self.kind.map_or(true, |kind| txn.kind() == kind);
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                txn.description.to_lowercase().contains(&needle)
                    || txn.category.key().contains(&needle)
            }
        };
        kind_ok && search_ok
    }
}

pub struct TransactionService;

impl TransactionService {
    /// The `limit` most recent transactions, newest first.
    pub fn recent(ledger: &Ledger, limit: usize) -> Vec<&Transaction> {
        let mut items = Self::newest_first(ledger.transactions.iter());
        items.truncate(limit);
        items
    }

    /// Transactions matching `filter`, newest first.
    pub fn filter<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        Self::newest_first(ledger.transactions.iter().filter(|txn| filter.matches(txn)))
    }

    /// Groups an already ordered list by calendar date, preserving order.
    pub fn group_by_date<'a>(
        transactions: &[&'a Transaction],
    ) -> Vec<(NaiveDate, Vec<&'a Transaction>)> {
        let mut groups: Vec<(NaiveDate, Vec<&'a Transaction>)> = Vec::new();
        for &txn in transactions {
            let same_day = groups.last().map_or(false, |(date, _)| *date == txn.date);
            match groups.last_mut() {
                Some((_, items)) if same_day => items.push(txn),
                _ => groups.push((txn.date, vec![txn])),
            }
        }
        groups
    }

    fn newest_first<'a>(items: impl Iterator<Item = &'a Transaction>) -> Vec<&'a Transaction> {
        let mut items: Vec<&Transaction> = items.collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::SeedData;

    fn sample_ledger() -> Ledger {
        let seed = SeedData::sample();
        Ledger::from_parts(seed.transactions, seed.budgets)
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let ledger = sample_ledger();
        let recent = TransactionService::recent(&ledger, 3);
        let descriptions: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["New shirt", "Electricity bill", "Movie and dinner"]);
    }

    #[test]
    fn filter_by_kind_and_search() {
        let ledger = sample_ledger();
        let income = TransactionService::filter(
            &ledger,
            &TransactionFilter::default().kind(TransactionKind::Income),
        );
        assert_eq!(income.len(), 1);

        let by_category = TransactionService::filter(
            &ledger,
            &TransactionFilter::default().search("TRANSPORT"),
        );
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].description, "Gas");

        let none = TransactionService::filter(
            &ledger,
            &TransactionFilter::default()
                .search("salary")
                .kind(TransactionKind::Expense),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn groups_consecutive_dates() {
        let ledger = sample_ledger();
        let ordered = TransactionService::filter(&ledger, &TransactionFilter::default());
        let groups = TransactionService::group_by_date(&ordered);
        assert_eq!(groups.len(), 5);
        let first_of_august = groups
            .iter()
            .find(|(date, _)| *date == NaiveDate::from_ymd_opt(2023, 8, 1).unwrap())
            .expect("group for Aug 1");
        assert_eq!(first_of_august.1.len(), 2);
    }
}
