//! The ordered collection of a session's stored records.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeRecord, RecordSummary};

/// Stored records, addressed by insertion position.
///
/// Removing a record shifts every later record down by one position.
///
/// # Example
///
/// ```
/// use take_home_pay::session::RecordStore;
/// use take_home_pay::models::{IncomeRecord, PayBreakdown, PayForm};
/// use chrono::NaiveDate;
///
/// let mut store = RecordStore::default();
/// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let index = store.push(IncomeRecord::new(PayForm::default(), PayBreakdown::zero(), date));
/// assert_eq!(index, 0);
/// assert!(store.get(0).is_ok());
/// assert!(store.get(1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<IncomeRecord>,
}

impl RecordStore {
    /// Appends a record and returns its position.
    pub fn push(&mut self, record: IncomeRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> EngineResult<&IncomeRecord> {
        self.records.get(index).ok_or_else(|| self.not_found(index))
    }

    /// Overwrites the record at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, record: IncomeRecord) -> EngineResult<IncomeRecord> {
        let not_found = self.not_found(index);
        let slot = self.records.get_mut(index).ok_or(not_found)?;
        Ok(std::mem::replace(slot, record))
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> EngineResult<IncomeRecord> {
        if index >= self.records.len() {
            return Err(self.not_found(index));
        }
        Ok(self.records.remove(index))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in position order.
    pub fn iter(&self) -> impl Iterator<Item = &IncomeRecord> {
        self.records.iter()
    }

    /// Sidebar summaries in position order.
    pub fn summaries(&self) -> Vec<RecordSummary> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| record.summary(index))
            .collect()
    }

    fn not_found(&self, index: usize) -> EngineError {
        EngineError::RecordNotFound {
            index,
            len: self.records.len(),
        }
    }
}
