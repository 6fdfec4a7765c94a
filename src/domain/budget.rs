use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category,
    common::{Displayable, Identifiable, RecordId},
};

/// A spending ceiling for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: RecordId,
    pub category: Category,
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn from_parts(id: RecordId, fields: NewBudget) -> Self {
        Self {
            id,
            category: fields.category,
            amount: fields.amount,
            period: fields.period,
        }
    }

    /// Merges the provided fields into this record. The id never changes.
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!(
            "{} ({} budget)",
            self.category.display_name(),
            self.period.label().to_lowercase()
        )
    }
}

/// Enumeration of budgeting periods. Descriptive only: aggregation does not
/// restrict spend to the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BudgetPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "Daily",
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Quarterly => "Quarterly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Budget fields supplied by the caller; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: Category,
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: Category, amount: f64, period: BudgetPeriod) -> Self {
        Self {
            category,
            amount,
            period,
        }
    }

    pub fn monthly(category: Category, amount: f64) -> Self {
        Self::new(category, amount, BudgetPeriod::Monthly)
    }
}

/// Partial update for a budget; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetPatch {
    pub category: Option<Category>,
    pub amount: Option<f64>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetPatch {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn period(mut self, period: BudgetPeriod) -> Self {
        self.period = Some(period);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_keeps_id_and_unset_fields() {
        let id = RecordId::generate();
        let mut budget = Budget::from_parts(id.clone(), NewBudget::monthly(Category::Food, 400.0));
        budget.apply(BudgetPatch::default().period(BudgetPeriod::Weekly));

        assert_eq!(budget.id, id);
        assert_eq!(budget.amount, 400.0);
        assert_eq!(budget.category, Category::Food);
        assert_eq!(budget.period, BudgetPeriod::Weekly);
    }

    #[test]
    fn period_roundtrips_as_lowercase() {
        let json = serde_json::to_string(&BudgetPeriod::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");
        let parsed: BudgetPeriod = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(parsed, BudgetPeriod::Daily);
    }

    #[test]
    fn label_names_category_and_period() {
        let budget = Budget::from_parts(
            RecordId::generate(),
            NewBudget::new(Category::Transport, 200.0, BudgetPeriod::Weekly),
        );
        assert_eq!(budget.display_label(), "Transportation (weekly budget)");
    }
}
