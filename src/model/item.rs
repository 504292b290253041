use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,
    /// Display text (trimmed, non-empty — enforced at the boundary)
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Create a new item with a fresh id, not completed
    pub fn new(text: String) -> Self {
        Item {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
        }
    }
}

/// The active view selector. UI-only, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in chip display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Display label for the filter chip
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Parse a filter name (as used by `--filter`)
    pub fn parse(s: &str) -> Option<Filter> {
        match s {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" | "done" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Whether an item is visible under this filter
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Cycle forward: all → active → completed → all
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Cycle backward
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}
