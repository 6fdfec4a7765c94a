//! Domain types representing recorded income and expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category,
    common::{iso_date, Displayable, Identifiable, RecordId},
};

/// A single recorded money movement. The amount is always a magnitude; the
/// direction is carried by `is_expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub is_expense: bool,
}

impl Transaction {
    pub fn from_parts(id: RecordId, fields: NewTransaction) -> Self {
        Self {
            id,
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
            is_expense: fields.is_expense,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        if self.is_expense {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    /// Merges the provided fields into this record. The id never changes.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(is_expense) = patch.is_expense {
            self.is_expense = is_expense;
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let sign = if self.is_expense { '-' } else { '+' };
        format!(
            "{} {} {}{:.2} ({})",
            self.date,
            self.description,
            sign,
            self.amount,
            self.category.display_name()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// Transaction fields supplied by the caller; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    pub is_expense: bool,
}

impl NewTransaction {
    pub fn expense(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
            is_expense: true,
        }
    }

    pub fn income(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
            is_expense: false,
        }
    }
}

/// Partial update for a transaction; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub is_expense: Option<bool>,
}

impl TransactionPatch {
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_expense(mut self, is_expense: bool) -> Self {
        self.is_expense = Some(is_expense);
        self
    }
}
