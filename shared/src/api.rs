//! # Expense API
//!
//! The backend exposes two calls on `{base_url}/items`: `GET` for the full
//! list and `POST` to create one expense. `ExpenseApi` abstracts over the
//! transport so the page flows can run against the browser client or a test
//! double. Nothing is retried and no idempotency key is sent, so a create
//! retried after a timeout may produce a duplicate.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::tracker::TrackerAction;
use crate::{Expense, ExpenseForm, NewExpense};

/// A failed call to the backend. Every variant is the same kind of failure
/// from the page's point of view and is shown by its message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// The two backend operations the page depends on.
#[async_trait(?Send)]
pub trait ExpenseApi {
    /// Fetch every expense, in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Expense>, FetchError>;

    /// Create an expense and return the stored record with its new id.
    async fn create(&self, expense: &NewExpense) -> Result<Expense, FetchError>;
}

/// URL of the items collection under `base_url`.
pub fn items_endpoint(base_url: &str) -> String {
    format!("{}/items", base_url.trim_end_matches('/'))
}

/// Fetch the list once and turn the outcome into a state machine action.
pub async fn load_expenses<A>(api: &A) -> TrackerAction
where
    A: ExpenseApi + ?Sized,
{
    TrackerAction::Loaded(api.list().await)
}

/// Build a create request from the form, dated `today`, and send it.
pub async fn submit_expense<A>(
    api: &A,
    form: &ExpenseForm,
    today: NaiveDate,
) -> Result<Expense, FetchError>
where
    A: ExpenseApi + ?Sized,
{
    let expense = form.to_new_expense(today);
    api.create(&expense).await
}
