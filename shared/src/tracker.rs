//! State machine behind the expense page.
//!
//! `Loading` → `Ready` or `Failed`, driven by the single list call made on
//! mount. There is no way back to `Loading`: created expenses are appended to
//! the ready list instead of triggering a refetch.

use crate::{Expense, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    /// Waiting for the list. `created` holds expenses added in the meantime.
    Loading { created: Vec<Expense> },
    Ready(Vec<Expense>),
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    /// The list call finished
    Loaded(Result<Vec<Expense>, FetchError>),
    /// A create call returned the stored expense
    Created(Expense),
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerState {
    pub fn new() -> Self {
        TrackerState::Loading { created: Vec::new() }
    }

    pub fn apply(self, action: TrackerAction) -> Self {
        match (self, action) {
            (TrackerState::Loading { created }, TrackerAction::Loaded(Ok(mut expenses))) => {
                // The list may already include expenses created while it was in flight
                for expense in created {
                    if !expenses.iter().any(|existing| existing.id == expense.id) {
                        expenses.push(expense);
                    }
                }
                TrackerState::Ready(expenses)
            }
            (TrackerState::Loading { .. }, TrackerAction::Loaded(Err(error))) => {
                TrackerState::Failed(error)
            }
            (TrackerState::Loading { mut created }, TrackerAction::Created(expense)) => {
                created.push(expense);
                TrackerState::Loading { created }
            }
            (TrackerState::Ready(mut expenses), TrackerAction::Created(expense)) => {
                expenses.push(expense);
                TrackerState::Ready(expenses)
            }
            // The list is only fetched once, and a failed page shows no table
            (state, _) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TrackerState::Loading { .. })
    }

    /// Expenses to render, once the list has arrived.
    pub fn expenses(&self) -> Option<&[Expense]> {
        match self {
            TrackerState::Ready(expenses) => Some(expenses),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            TrackerState::Failed(error) => Some(error),
            _ => None,
        }
    }
}
