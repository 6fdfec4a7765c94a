use serde::{Deserialize, Serialize};

use crate::domain::{
    Budget, BudgetPatch, Identifiable, NewBudget, NewTransaction, RecordId, Transaction,
    TransactionPatch,
};

/// In-memory snapshot of every transaction and budget, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Appends a transaction under a freshly generated id and returns the id.
    pub fn add_transaction(&mut self, fields: NewTransaction) -> RecordId {
        let id = fresh_id(|candidate| self.transaction(candidate).is_some());
        self.transactions.push(Transaction::from_parts(id.clone(), fields));
        id
    }

    /// Merges `patch` into the matching transaction. Returns whether a record matched.
    pub fn update_transaction(&mut self, id: &RecordId, patch: TransactionPatch) -> bool {
        match self.transaction_mut(id) {
            Some(txn) => {
                txn.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove_transaction(&mut self, id: &RecordId) -> Option<Transaction> {
        let index = position_of(&self.transactions, id)?;
        Some(self.transactions.remove(index))
    }

    pub fn transaction(&self, id: &RecordId) -> Option<&Transaction> {
        position_of(&self.transactions, id).map(|index| &self.transactions[index])
    }

    pub fn transaction_mut(&mut self, id: &RecordId) -> Option<&mut Transaction> {
        let index = position_of(&self.transactions, id)?;
        self.transactions.get_mut(index)
    }

    /// Appends a budget under a freshly generated id and returns the id.
    pub fn add_budget(&mut self, fields: NewBudget) -> RecordId {
        let id = fresh_id(|candidate| self.budget(candidate).is_some());
        self.budgets.push(Budget::from_parts(id.clone(), fields));
        id
    }

    /// Merges `patch` into the matching budget. Returns whether a record matched.
    pub fn update_budget(&mut self, id: &RecordId, patch: BudgetPatch) -> bool {
        match self.budget_mut(id) {
            Some(budget) => {
                budget.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove_budget(&mut self, id: &RecordId) -> Option<Budget> {
        let index = position_of(&self.budgets, id)?;
        Some(self.budgets.remove(index))
    }

    pub fn budget(&self, id: &RecordId) -> Option<&Budget> {
        position_of(&self.budgets, id).map(|index| &self.budgets[index])
    }

    pub fn budget_mut(&mut self, id: &RecordId) -> Option<&mut Budget> {
        let index = position_of(&self.budgets, id)?;
        self.budgets.get_mut(index)
    }

    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|txn| txn.is_expense)
    }

    pub fn incomes(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|txn| !txn.is_expense)
    }
}

fn position_of<T: Identifiable>(items: &[T], id: &RecordId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

fn fresh_id(taken: impl Fn(&RecordId) -> bool) -> RecordId {
    loop {
        let candidate = RecordId::generate();
        if !taken(&candidate) {
            return candidate;
        }
    }
}
