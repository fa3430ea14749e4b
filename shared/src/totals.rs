use std::collections::BTreeMap;

use crate::Expense;

/// Sum of `price` over the expenses paid by `payee_name` (exact, case-sensitive match).
///
/// Returns `0.0` when nobody by that name paid for anything.
pub fn total_for(expenses: &[Expense], payee_name: &str) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.payee_name == payee_name)
        .fold(0.0, |total, expense| total + expense.price)
}

/// Per-payee totals over the whole collection.
pub fn totals_by_payee(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.payee_name.clone()).or_insert(0.0) += expense.price;
    }
    totals
}
