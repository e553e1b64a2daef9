//! The fixed category registry
//!
//! Expenses are filed under one of six built-in categories, each with a
//! display color used by the charts.

use serde::Serialize;
use std::fmt;

/// One of the built-in spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Rent,
    Utilities,
    Entertainment,
    Other,
}

/// Display information for a registry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub name: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Rent,
            Self::Utilities,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the stored name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Chart color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#4cc9f0",
            Self::Transportation => "#f8961e",
            Self::Rent => "#f72585",
            Self::Utilities => "#7209b7",
            Self::Entertainment => "#4361ee",
            Self::Other => "#6c757d",
        }
    }

    /// Translucent background color
    pub fn background_color(&self) -> &'static str {
        match self {
            Self::Food => "rgba(76, 201, 240, 0.2)",
            Self::Transportation => "rgba(248, 150, 30, 0.2)",
            Self::Rent => "rgba(247, 37, 133, 0.2)",
            Self::Utilities => "rgba(114, 9, 183, 0.2)",
            Self::Entertainment => "rgba(67, 97, 238, 0.2)",
            Self::Other => "rgba(108, 117, 125, 0.2)",
        }
    }

    /// Bundle name and colors
    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: self.name(),
            color: self.color(),
            background_color: self.background_color(),
        }
    }

    /// Look up a category by its exact stored name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    /// Look up a category ignoring case and surrounding whitespace
    pub fn find(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Check whether `name` is a registry category
    pub fn is_registered(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// List every registry category with its colors, in display order
pub fn list_categories() -> Vec<CategoryInfo> {
    Category::all().iter().map(Category::info).collect()
}
