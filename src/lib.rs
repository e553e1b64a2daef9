//! Expense Tracker - personal expense recording and spending summaries
//!
//! This library provides the core of a single-user expense tracker: a fixed
//! category registry, an expense store that persists every change through a
//! key-value blob store, and pure aggregate calculations for the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, ids)
//! - `storage`: Blob stores and the expense repository
//! - `services`: The expense store
//! - `reports`: Aggregates and the dashboard summary
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::{ExpenseRepository, MemoryBlobStore};
//!
//! let mut store = ExpenseStore::initialize(ExpenseRepository::new(MemoryBlobStore::new()));
//! store.create(input)?;
//! let total = expense_tracker::reports::total_all(store.list_all());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
