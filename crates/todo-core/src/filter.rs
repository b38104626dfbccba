//! Filtered Views
//!
//! Pure derivations over the collection. Nothing here mutates the input,
//! and results always keep the collection's order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::TodoItem;

/// Which items are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// All modes in display order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Whether `item` is visible under this mode
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}

/// Items visible under `mode`, in collection order
pub fn filter(items: &[TodoItem], mode: FilterMode) -> Vec<&TodoItem> {
    items.iter().filter(|item| mode.matches(item)).collect()
}

/// Collection positions of the items visible under `mode`
///
/// Row `i` of the filtered view lives at `visible_positions(..)[i]` in the
/// collection.
pub fn visible_positions(items: &[TodoItem], mode: FilterMode) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| mode.matches(item))
        .map(|(pos, _)| pos)
        .collect()
}
