//! Expense model
//!
//! An expense is a single spending event: an amount filed under a category on
//! a given date, with a free-text description.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
///
/// `category` is kept as a plain string so that records persisted with a
/// category outside the registry still load and aggregate under that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never changes after creation
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category name
    pub category: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Description
    pub description: String,
}

impl Expense {
    /// Build an expense from validated form input
    pub fn from_input(id: ExpenseId, input: ExpenseInput) -> Result<Self, ExpenseValidationError> {
        let date = input.validate()?;
        let description = input.description.trim();
        let description = if description.is_empty() {
            default_description(date)
        } else {
            description.to_string()
        };

        Ok(Self {
            id,
            amount: input.amount,
            category: input.category.trim().to_string(),
            date,
            description,
        })
    }

    /// The registry category, if this expense uses one
    pub fn registry_category(&self) -> Option<Category> {
        Category::from_name(&self.category)
    }

    /// Convert back into editable input (used to merge partial edits)
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            amount: self.amount,
            category: self.category.clone(),
            date: Some(self.date),
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.amount)
    }
}

/// Description used when the user leaves the field blank
pub fn default_description(date: NaiveDate) -> String {
    format!("Expense on {}", date.format("%Y-%m-%d"))
}

/// Form input for creating or replacing an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub amount: Money,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl ExpenseInput {
    /// Create input with every field filled in
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date: Some(date),
            description: description.into(),
        }
    }

    /// Check every constraint, reporting all violations at once
    ///
    /// Returns the date on success.
    pub fn validate(&self) -> Result<NaiveDate, ExpenseValidationError> {
        let mut issues = Vec::new();

        if !self.amount.is_positive() {
            issues.push(ValidationIssue::NonPositiveAmount);
        } else if self.amount > Money::MAX_AMOUNT {
            issues.push(ValidationIssue::AmountTooLarge);
        }

        let category = self.category.trim();
        if category.is_empty() {
            issues.push(ValidationIssue::MissingCategory);
        } else if !Category::is_registered(category) {
            issues.push(ValidationIssue::UnknownCategory(category.to_string()));
        }

        if self.date.is_none() {
            issues.push(ValidationIssue::MissingDate);
        }

        match self.date {
            Some(date) if issues.is_empty() => Ok(date),
            _ => Err(ExpenseValidationError::new(issues)),
        }
    }
}

/// A single violated input constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    NonPositiveAmount,
    AmountTooLarge,
    MissingCategory,
    UnknownCategory(String),
    MissingDate,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Please enter a valid amount greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", Money::MAX_AMOUNT),
            Self::MissingCategory => write!(f, "Please select a category"),
            Self::UnknownCategory(name) => write!(f, "'{}' is not a known category", name),
            Self::MissingDate => write!(f, "Please select a date"),
        }
    }
}

/// Validation failure for expense input, listing every violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseValidationError {
    issues: Vec<ValidationIssue>,
}

impl ExpenseValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ExpenseValidationError {}
