// File: crates/trend-core/src/store.rs
// Summary: Storage boundary for weight records and goals, with an in-memory implementation.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Record, RecordId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("user key must not be empty")]
    InvalidUser,
    #[error("no record with id {0}")]
    UnknownRecord(RecordId),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// What the engine needs from persistent storage. Records are keyed by user.
pub trait RecordStore {
    /// All records for `user`, in no particular order.
    fn records_for(&self, user: &str) -> Result<Vec<Record>, StoreError>;
    fn insert(&mut self, user: &str, date_text: &str, value_text: &str) -> Result<RecordId, StoreError>;
    fn update(&mut self, id: RecordId, date_text: &str, value_text: &str) -> Result<(), StoreError>;
    fn delete(&mut self, id: RecordId) -> Result<(), StoreError>;
    /// Stored goal, if one was ever set. Callers decide what a non-positive goal means.
    fn goal_for(&self, user: &str) -> Result<Option<f64>, StoreError>;
    fn set_goal(&mut self, user: &str, goal: f64) -> Result<(), StoreError>;
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    next_id: RecordId,
    rows: Vec<(String, Record)>,
    goals: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    fn row_mut(&mut self, id: RecordId) -> Result<&mut Record, StoreError> {
        self.rows
            .iter_mut()
            .map(|(_, r)| r)
            .find(|r| r.id == id)
            .ok_or(StoreError::UnknownRecord(id))
    }
}

fn check_user(user: &str) -> Result<(), StoreError> {
    if user.is_empty() { Err(StoreError::InvalidUser) } else { Ok(()) }
}

impl RecordStore for MemoryStore {
    fn records_for(&self, user: &str) -> Result<Vec<Record>, StoreError> {
        check_user(user)?;
        Ok(self.rows.iter().filter(|(u, _)| u == user).map(|(_, r)| r.clone()).collect())
    }

    fn insert(&mut self, user: &str, date_text: &str, value_text: &str) -> Result<RecordId, StoreError> {
        check_user(user)?;
        self.next_id += 1;
        let id = self.next_id;
        self.rows.push((user.to_string(), Record::new(id, date_text, value_text)));
        Ok(id)
    }

    fn update(&mut self, id: RecordId, date_text: &str, value_text: &str) -> Result<(), StoreError> {
        let row = self.row_mut(id)?;
        row.date_text = date_text.to_string();
        row.value_text = value_text.to_string();
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let pos = self.rows.iter().position(|(_, r)| r.id == id).ok_or(StoreError::UnknownRecord(id))?;
        self.rows.remove(pos);
        Ok(())
    }

    fn goal_for(&self, user: &str) -> Result<Option<f64>, StoreError> {
        check_user(user)?;
        Ok(self.goals.get(user).copied())
    }

    fn set_goal(&mut self, user: &str, goal: f64) -> Result<(), StoreError> {
        check_user(user)?;
        self.goals.insert(user.to_string(), goal);
        Ok(())
    }
}

/// A list-row action coming from the UI layer.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordAction {
    Add { date_text: String, value_text: String },
    Edit { id: RecordId, date_text: String, value_text: String },
    Delete { id: RecordId },
}

/// Result of a successfully applied [`RecordAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(RecordId),
    Edited(RecordId),
    Deleted(RecordId),
}

impl RecordAction {
    pub fn apply<S: RecordStore + ?Sized>(&self, store: &mut S, user: &str) -> Result<ActionOutcome, StoreError> {
        match self {
            RecordAction::Add { date_text, value_text } => {
                store.insert(user, date_text, value_text).map(ActionOutcome::Added)
            }
            RecordAction::Edit { id, date_text, value_text } => {
                store.update(*id, date_text, value_text)?;
                Ok(ActionOutcome::Edited(*id))
            }
            RecordAction::Delete { id } => {
                store.delete(*id)?;
                Ok(ActionOutcome::Deleted(*id))
            }
        }
    }
}
