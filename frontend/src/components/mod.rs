pub mod add_expense_modal;
pub mod expense_table;
pub mod expense_tracker;
pub mod header;

pub use expense_tracker::ExpenseTracker;
