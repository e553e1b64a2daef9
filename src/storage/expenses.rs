//! Expense repository for blob storage
//!
//! The whole expense list is kept as one JSON array under a single key and
//! rewritten in full on every save.

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::blob::BlobStore;

/// Storage key holding the serialized expense list
pub const EXPENSES_KEY: &str = "expenseManagerExpenses";

/// Loads and saves the expense list through a blob store
#[derive(Debug, Clone)]
pub struct ExpenseRepository<B: BlobStore> {
    store: B,
}

impl<B: BlobStore> ExpenseRepository<B> {
    /// Create a repository over a blob store
    pub fn new(store: B) -> Self {
        Self { store }
    }

    /// Load the persisted expense list
    ///
    /// Returns `None` when nothing has been saved yet or the stored blob
    /// cannot be read or parsed. A bad blob is never fatal.
    pub fn load(&self) -> Option<Vec<Expense>> {
        let blob = match self.store.get(EXPENSES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("No expenses found in storage, starting empty");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Could not read stored expenses, starting empty");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Expense>>(&blob) {
            Ok(expenses) => {
                debug!(count = expenses.len(), "Loaded expenses from storage");
                Some(expenses)
            }
            Err(e) => {
                warn!(error = %e, "Stored expenses are corrupt, starting empty");
                None
            }
        }
    }

    /// Persist the full expense list, replacing what was stored
    pub fn save(&mut self, expenses: &[Expense]) -> ExpenseResult<()> {
        let blob = serde_json::to_string(expenses)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize expenses: {}", e)))?;
        self.store.set(EXPENSES_KEY, &blob)?;
        debug!(count = expenses.len(), "Saved expenses to storage");
        Ok(())
    }

    /// Borrow the underlying blob store
    pub fn store(&self) -> &B {
        &self.store
    }
}
