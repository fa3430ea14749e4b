use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod api;
pub mod config;
pub mod price;
pub mod settlement;
pub mod totals;
pub mod tracker;

pub use api::{items_endpoint, load_expenses, submit_expense, ExpenseApi, FetchError};
pub use config::{ClientConfig, ConfigError, Participants};
pub use price::parse_price;
pub use settlement::{ExpenseSummary, PayeeTotal, Settlement};
pub use totals::{total_for, totals_by_payee};
pub use tracker::{TrackerAction, TrackerState};

/// Identifier assigned by the backend when an expense is created.
///
/// Backends disagree on whether ids are strings or integers, so both are
/// accepted on the wire and kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
            Float(f64),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        };
        Ok(Self(id))
    }
}

/// A shared expense as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    /// Participant who paid for the purchase
    pub payee_name: String,
    /// What was bought
    pub product: String,
    /// Amount paid; NaN when the entered price was not a number
    #[serde(
        default = "price::missing_price",
        deserialize_with = "price::deserialize_price"
    )]
    pub price: f64,
    /// Creation date (YYYY-MM-DD)
    pub set_date: String,
}

/// Request body for creating an expense. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub payee_name: String,
    pub product: String,
    #[serde(
        default = "price::missing_price",
        deserialize_with = "price::deserialize_price"
    )]
    pub price: f64,
    pub set_date: String,
}

/// Raw values collected from the add-expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub payee_name: String,
    pub product: String,
    pub price: String,
}

impl ExpenseForm {
    /// Build the create request, stamping `today` as the expense date.
    ///
    /// Fields are not validated. A price that does not start with a number
    /// becomes NaN and is sent as-is.
    pub fn to_new_expense(&self, today: chrono::NaiveDate) -> NewExpense {
        NewExpense {
            payee_name: self.payee_name.clone(),
            product: self.product.clone(),
            price: parse_price(&self.price),
            set_date: today.format("%Y-%m-%d").to_string(),
        }
    }
}
