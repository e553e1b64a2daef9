//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its identifier, money amounts, and the fixed
//! category registry.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{list_categories, Category, CategoryInfo};
pub use expense::{
    default_description, Expense, ExpenseInput, ExpenseValidationError, ValidationIssue,
};
pub use ids::{ExpenseId, IdGenerator};
pub use money::{Money, MoneyParseError};
