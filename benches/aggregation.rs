use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use spendwell_core::{
    core::services::{BudgetService, InsightService, SummaryService, TrendPeriod, TrendService},
    domain::{Category, NewBudget, NewTransaction},
    ledger::{Ledger, SeedData},
    storage::{JsonFileStore, PersistenceAdapter},
};
use tempfile::tempdir;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for category in Category::ALL {
        ledger.add_budget(NewBudget::monthly(category, 500.0));
    }

    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let category = Category::ALL[idx % Category::ALL.len()];
        let amount = 5.0 + (idx % 100) as f64;
        let fields = if idx % 20 == 0 {
            NewTransaction::income(amount * 30.0, category, "Payroll", date)
        } else {
            NewTransaction::expense(amount, category, "Purchase", date)
        };
        ledger.add_transaction(fields);
    }
    ledger
}

fn bench_persistence(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("json store");
    let mut adapter = PersistenceAdapter::new(store);

    c.bench_function("transactions_save_10k", |b| {
        b.iter(|| {
            adapter
                .save_transactions(&ledger.transactions)
                .expect("save transactions");
        })
    });

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let report = adapter.load(&SeedData::empty());
            black_box(report);
        })
    });
}

fn bench_aggregates(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let reference = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    c.bench_function("category_breakdown", |b| {
        b.iter(|| black_box(SummaryService::category_breakdown(&ledger)))
    });

    c.bench_function("budget_statuses", |b| {
        b.iter(|| black_box(BudgetService::budget_statuses(&ledger)))
    });

    c.bench_function("trend_series_year", |b| {
        b.iter(|| {
            black_box(TrendService::trend_series(
                &ledger,
                TrendPeriod::Year,
                reference,
            ))
        })
    });

    c.bench_function("insights_month", |b| {
        b.iter_batched(
            || ledger.clone(),
            |snapshot| black_box(InsightService::generate(&snapshot, reference, "USD")),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_persistence, bench_aggregates);
criterion_main!(benches);
