//! The single owner of ledger state.

use chrono::NaiveDate;

use crate::{
    config::Config,
    core::{
        services::{
            BudgetService, BudgetStatus, CategoryShare, InsightService, LedgerTotals,
            SummaryService, TransactionFilter, TransactionService, TrendPeriod, TrendPoint,
            TrendService,
        },
        time::{Clock, SystemClock},
    },
    domain::{
        Budget, BudgetPatch, Category, Displayable, NewBudget, NewTransaction, RecordId,
        Transaction, TransactionPatch,
    },
    errors::Result,
    ledger::{Ledger, SeedData},
    storage::{CollectionSource, JsonFileStore, KeyValueStore, PersistenceAdapter},
};

const DEFAULT_CURRENCY: &str = "USD";

/// Facade that coordinates ledger state and persistence.
///
/// Every mutation is applied in memory first and then the affected collection
/// is written out in full, whether or not a record matched. A persistence
/// failure is returned, but the in-memory change stays applied.
pub struct LedgerStore<S: KeyValueStore> {
    ledger: Ledger,
    persistence: PersistenceAdapter<S>,
    clock: Box<dyn Clock>,
    currency: String,
    trend_period: TrendPeriod,
    revision: u64,
    transactions_source: CollectionSource,
    budgets_source: CollectionSource,
    load_warnings: Vec<String>,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Loads the ledger from `storage`, falling back to `seed` per collection.
    pub fn open(storage: S, seed: SeedData) -> Self {
        Self::open_with_clock(storage, seed, Box::new(SystemClock))
    }

    pub fn open_with_clock(storage: S, seed: SeedData, clock: Box<dyn Clock>) -> Self {
        let persistence = PersistenceAdapter::new(storage);
        let report = persistence.load(&seed);
        Self {
            ledger: report.ledger,
            persistence,
            clock,
            currency: DEFAULT_CURRENCY.to_string(),
            trend_period: TrendPeriod::default(),
            revision: 0,
            transactions_source: report.transactions,
            budgets_source: report.budgets,
            load_warnings: report.warnings,
        }
    }

    /// Currency code used when rendering insight text.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Replaces the clock that dates [`LedgerStore::insights`].
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Look-back window used by [`LedgerStore::insights`].
    pub fn with_trend_period(mut self, period: TrendPeriod) -> Self {
        self.trend_period = period;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.ledger.budgets
    }

    pub fn transaction(&self, id: &RecordId) -> Option<&Transaction> {
        self.ledger.transaction(id)
    }

    pub fn budget(&self, id: &RecordId) -> Option<&Budget> {
        self.ledger.budget(id)
    }

    /// Bumped on every mutation call, including no-ops.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn transactions_source(&self) -> CollectionSource {
        self.transactions_source
    }

    pub fn budgets_source(&self) -> CollectionSource {
        self.budgets_source
    }

    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn trend_period(&self) -> TrendPeriod {
        self.trend_period
    }

    pub fn storage(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_storage(self) -> S {
        self.persistence.into_inner()
    }

    // Mutations

    pub fn add_transaction(&mut self, fields: NewTransaction) -> Result<RecordId> {
        let id = self.ledger.add_transaction(fields);
        if let Some(txn) = self.ledger.transaction(&id) {
            tracing::debug!(%id, label = %txn.display_label(), "transaction added");
        }
        self.persist_transactions()?;
        Ok(id)
    }

    /// Merges `patch` into the transaction with `id`. Unknown ids are ignored.
    pub fn update_transaction(&mut self, id: &RecordId, patch: TransactionPatch) -> Result<()> {
        let matched = self.ledger.update_transaction(id, patch);
        tracing::debug!(%id, matched, "transaction update");
        self.persist_transactions()
    }

    /// Removes the transaction with `id`. Unknown ids are ignored.
    pub fn delete_transaction(&mut self, id: &RecordId) -> Result<()> {
        let removed = self.ledger.remove_transaction(id).is_some();
        tracing::debug!(%id, removed, "transaction delete");
        self.persist_transactions()
    }

    pub fn add_budget(&mut self, fields: NewBudget) -> Result<RecordId> {
        let id = self.ledger.add_budget(fields);
        if let Some(budget) = self.ledger.budget(&id) {
            tracing::debug!(%id, label = %budget.display_label(), "budget added");
        }
        self.persist_budgets()?;
        Ok(id)
    }

    /// Merges `patch` into the budget with `id`. Unknown ids are ignored.
    pub fn update_budget(&mut self, id: &RecordId, patch: BudgetPatch) -> Result<()> {
        let matched = self.ledger.update_budget(id, patch);
        tracing::debug!(%id, matched, "budget update");
        self.persist_budgets()
    }

    /// Removes the budget with `id`. Unknown ids are ignored.
    pub fn delete_budget(&mut self, id: &RecordId) -> Result<()> {
        let removed = self.ledger.remove_budget(id).is_some();
        tracing::debug!(%id, removed, "budget delete");
        self.persist_budgets()
    }

    fn persist_transactions(&mut self) -> Result<()> {
        self.revision += 1;
        self.persistence.save_transactions(&self.ledger.transactions)
    }

    fn persist_budgets(&mut self) -> Result<()> {
        self.revision += 1;
        self.persistence.save_budgets(&self.ledger.budgets)
    }

    // Aggregates

    pub fn category_total(&self, category: Category) -> f64 {
        SummaryService::category_total(&self.ledger, category)
    }

    pub fn total_expenses(&self) -> f64 {
        SummaryService::total_expenses(&self.ledger)
    }

    pub fn total_income(&self) -> f64 {
        SummaryService::total_income(&self.ledger)
    }

    pub fn net_income(&self) -> f64 {
        SummaryService::net_income(&self.ledger)
    }

    pub fn totals(&self) -> LedgerTotals {
        SummaryService::totals(&self.ledger)
    }

    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        SummaryService::category_breakdown(&self.ledger)
    }

    pub fn budget_progress(&self, budget_id: &RecordId) -> f64 {
        BudgetService::budget_progress(&self.ledger, budget_id)
    }

    pub fn budget_remaining(&self, budget_id: &RecordId) -> Option<f64> {
        BudgetService::budget_remaining(&self.ledger, budget_id)
    }

    pub fn budget_status(&self, budget_id: &RecordId) -> Option<BudgetStatus> {
        BudgetService::budget_status(&self.ledger, budget_id)
    }

    pub fn budget_statuses(&self) -> Vec<BudgetStatus> {
        BudgetService::budget_statuses(&self.ledger)
    }

    pub fn trend_series(&self, period: TrendPeriod, now: NaiveDate) -> Vec<TrendPoint> {
        TrendService::trend_series(&self.ledger, period, now)
    }

    /// Insight text for the configured trend period, as of the store's clock.
    pub fn insights(&self) -> Vec<String> {
        InsightService::generate_for_period(
            &self.ledger,
            self.trend_period,
            self.clock.today(),
            &self.currency,
        )
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        TransactionService::recent(&self.ledger, limit)
    }

    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        TransactionService::filter(&self.ledger, filter)
    }
}

impl LedgerStore<JsonFileStore> {
    /// Opens the file-backed store described by `config`.
    pub fn open_from_config(config: &Config) -> Result<Self> {
        let dir = config.resolve_data_dir();
        let storage = JsonFileStore::new(&dir)?;
        let seed = if config.use_sample_data {
            SeedData::sample()
        } else {
            SeedData::empty()
        };
        tracing::info!(path = %dir.display(), "opening ledger store");
        Ok(Self::open(storage, seed)
            .with_currency(config.currency.clone())
            .with_trend_period(config.trend_period))
    }
}
