//! Expense collection persistence
//!
//! The whole collection is one JSON document under a fixed logical key.
//! Appending is read-modify-write: load, concatenate, rewrite the full
//! document. The backing service offers no partial append, and the
//! single-writer assumption makes the unsynchronized read-modify-write
//! acceptable (last full write wins).

use tracing::debug;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::Expense;

/// Logical key the expense document is stored under
pub const EXPENSES_KEY: &str = "expenses";

/// Append/clear operations over the persisted expense collection
pub struct ExpenseStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Access the underlying key-value service
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Load the current collection. An absent document reads as empty.
    pub fn load(&self) -> Result<Vec<Expense>> {
        match self.kv.get(EXPENSES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append records to the collection (load + concatenate + rewrite)
    pub fn append(&self, new: &[Expense]) -> Result<()> {
        let mut all = self.load()?;
        all.extend_from_slice(new);
        self.replace(&all)
    }

    /// Rewrite the whole collection
    pub fn replace(&self, records: &[Expense]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.kv.set(EXPENSES_KEY, &json)?;
        debug!("Wrote {} expenses", records.len());
        Ok(())
    }

    /// Remove the stored document entirely; subsequent loads are empty
    pub fn clear(&self) -> Result<()> {
        self.kv.remove(EXPENSES_KEY)
    }
}
