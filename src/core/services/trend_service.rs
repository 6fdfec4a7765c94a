//! Time-bucketed expense series.

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// Look-back window for a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl TrendPeriod {
    /// First day included in a series ending at `now`.
    pub fn start_date(&self, now: NaiveDate) -> NaiveDate {
        let start = match self {
            TrendPeriod::Week => now.checked_sub_days(Days::new(7)),
            TrendPeriod::Month => now.checked_sub_months(Months::new(1)),
            TrendPeriod::Year => now.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    pub fn granularity(&self) -> BucketGranularity {
        match self {
            TrendPeriod::Week | TrendPeriod::Month => BucketGranularity::Day,
            TrendPeriod::Year => BucketGranularity::Month,
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendPeriod::Week => "week",
            TrendPeriod::Month => "month",
            TrendPeriod::Year => "year",
        };
        f.write_str(label)
    }
}

impl FromStr for TrendPeriod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TrendPeriod::Week),
            "month" => Ok(TrendPeriod::Month),
            "year" => Ok(TrendPeriod::Year),
            other => Err(format!("unknown trend period `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketGranularity {
    Day,
    Month,
}

impl BucketGranularity {
    /// Normalizes `date` to the first day of its bucket.
    pub fn bucket_of(&self, date: NaiveDate) -> NaiveDate {
        match self {
            BucketGranularity::Day => date,
            BucketGranularity::Month => {
                NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
            }
        }
    }

    /// Chart label: `Aug 1` for days, `Aug 2023` for months.
    pub fn label(&self, bucket: NaiveDate) -> String {
        match self {
            BucketGranularity::Day => bucket.format("%b %-d").to_string(),
            BucketGranularity::Month => bucket.format("%b %Y").to_string(),
        }
    }
}

/// One non-empty bucket of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub bucket: NaiveDate,
    pub label: String,
    pub amount: f64,
}

pub struct TrendService;

impl TrendService {
    /// Expense totals per bucket for `period` ending at `now`, both ends
    /// inclusive, in chronological order. Buckets without expenses are
    /// omitted, so the series is sparse.
    pub fn trend_series(ledger: &Ledger, period: TrendPeriod, now: NaiveDate) -> Vec<TrendPoint> {
        let start = period.start_date(now);
        let granularity = period.granularity();
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for txn in ledger
            .expenses()
            .filter(|txn| txn.date >= start && txn.date <= now)
        {
            *buckets.entry(granularity.bucket_of(txn.date)).or_insert(0.0) += txn.amount;
        }
        buckets
            .into_iter()
            .map(|(bucket, amount)| TrendPoint {
                bucket,
                label: granularity.label(bucket),
                amount,
            })
            .collect()
    }

    /// Percent change from the first to the last point. `None` with fewer
    /// than two points or when the first point is zero.
    pub fn percent_change(series: &[TrendPoint]) -> Option<f64> {
        if series.len() < 2 {
            return None;
        }
        let first = series.first()?.amount;
        let last = series.last()?.amount;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}
