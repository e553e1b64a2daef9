//! Expense store
//!
//! Owns the in-memory expense list and keeps the persisted copy in sync after
//! every mutation. Persistence is best-effort: a failed save is logged and
//! remembered, but the in-memory change stands.

use chrono::{Duration, NaiveDate};
use tracing::{debug, error, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseInput, IdGenerator, Money};
use crate::storage::{BlobStore, ExpenseRepository};

use super::sample::SAMPLE_EXPENSES;

/// Handle owning all expense records
pub struct ExpenseStore<B: BlobStore> {
    expenses: Vec<Expense>,
    repository: ExpenseRepository<B>,
    ids: IdGenerator,
    last_persist_error: Option<String>,
}

impl<B: BlobStore> ExpenseStore<B> {
    /// Open a store, loading whatever the repository holds
    ///
    /// Missing or corrupt data yields an empty store.
    pub fn initialize(repository: ExpenseRepository<B>) -> Self {
        let expenses = repository.load().unwrap_or_default();
        let ids = IdGenerator::seeded(expenses.iter().map(|e| &e.id));
        info!(count = expenses.len(), "Expense store ready");

        Self {
            expenses,
            repository,
            ids,
            last_persist_error: None,
        }
    }

    /// Record a new expense
    pub fn create(&mut self, input: ExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::from_input(self.ids.next_id(), input)?;
        debug!(id = %expense.id, amount = %expense.amount, "Creating expense");

        self.expenses.push(expense.clone());
        self.persist();

        Ok(expense)
    }

    /// Replace every field of an expense except its id
    pub fn update(&mut self, id: ExpenseId, input: ExpenseInput) -> ExpenseResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let updated = Expense::from_input(id, input)?;
        debug!(id = %id, "Updating expense");

        self.expenses[index] = updated.clone();
        self.persist();

        Ok(updated)
    }

    /// Remove an expense, returning the removed record
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        debug!(id = %id, "Deleted expense");
        self.persist();

        Ok(removed)
    }

    /// Find an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Add the demonstration expenses, but only to an empty store
    ///
    /// Returns how many expenses were added.
    pub fn load_sample_data(&mut self, today: NaiveDate) -> ExpenseResult<usize> {
        if !self.expenses.is_empty() {
            debug!("Store not empty, skipping sample data");
            return Ok(0);
        }

        let mut samples = Vec::with_capacity(SAMPLE_EXPENSES.len());
        for sample in SAMPLE_EXPENSES {
            let input = ExpenseInput::new(
                Money::from_cents(sample.cents),
                sample.category.name(),
                today - Duration::days(sample.days_ago),
                sample.description,
            );
            samples.push(Expense::from_input(self.ids.next_id(), input)?);
        }

        let count = samples.len();
        self.expenses = samples;
        self.persist();
        info!(count, "Loaded sample data");

        Ok(count)
    }

    /// The most recent persistence failure, cleared by the next successful save
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Borrow the repository
    pub fn repository(&self) -> &ExpenseRepository<B> {
        &self.repository
    }

    /// Close the store, handing back its repository
    pub fn into_repository(self) -> ExpenseRepository<B> {
        self.repository
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    fn persist(&mut self) {
        match self.repository.save(&self.expenses) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                error!(error = %e, "Failed to persist expenses; keeping in-memory changes");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
