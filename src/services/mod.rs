//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, identifier assignment, and persistence after every
//! change.

pub mod expense;
mod sample;

pub use expense::ExpenseStore;
