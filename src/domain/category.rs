//! Spending categories shared by transactions and budgets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of categories a transaction or budget can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Shopping,
    Health,
    Other,
}

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Stable lowercase key used in persisted data.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    /// Human-readable name shown next to totals and budgets.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Food => "Food & Groceries",
            Category::Transport => "Transportation",
            Category::Utilities => "Bills & Utilities",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Health => "Health & Medical",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.key() == needle)
            .ok_or_else(|| ParseCategoryError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("Food".parse::<Category>(), Ok(Category::Food));
        assert_eq!(" health ".parse::<Category>(), Ok(Category::Health));
        assert!("rent".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.key());
        }
    }
}
