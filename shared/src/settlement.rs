use std::fmt;

use crate::{total_for, Expense, Participants};

/// Net transfer that evens out what two participants have paid.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    NoPaymentDue,
    Payment { from: String, to: String, amount: f64 },
}

impl Settlement {
    /// Compare two totals and settle the difference under a 50/50 split.
    ///
    /// Totals are compared with plain `>`, so a NaN total on either side
    /// yields `NoPaymentDue`.
    pub fn from_totals(first: (&str, f64), second: (&str, f64)) -> Self {
        let (first_name, first_total) = first;
        let (second_name, second_total) = second;

        if first_total > second_total {
            Settlement::Payment {
                from: second_name.to_string(),
                to: first_name.to_string(),
                amount: (first_total - second_total) / 2.0,
            }
        } else if second_total > first_total {
            Settlement::Payment {
                from: first_name.to_string(),
                to: second_name.to_string(),
                amount: (second_total - first_total) / 2.0,
            }
        } else {
            Settlement::NoPaymentDue
        }
    }

    pub fn between(participants: &Participants, expenses: &[Expense]) -> Self {
        Self::from_totals(
            (participants.first(), total_for(expenses, participants.first())),
            (participants.second(), total_for(expenses, participants.second())),
        )
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Settlement::NoPaymentDue => None,
            Settlement::Payment { amount, .. } => Some(*amount),
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Settlement::NoPaymentDue => write!(f, "No one has to pay."),
            Settlement::Payment { from, to, .. } => write!(f, "{} will pay to {}", from, to),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayeeTotal {
    pub name: String,
    pub total: f64,
}

impl PayeeTotal {
    pub fn label(&self) -> String {
        format!("{} paid", self.name)
    }
}

/// Everything rendered below the expense rows: one total per participant,
/// in participant order, and the settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub totals: [PayeeTotal; 2],
    pub settlement: Settlement,
}

impl ExpenseSummary {
    pub fn compute(expenses: &[Expense], participants: &Participants) -> Self {
        let totals = participants.names().map(|name| PayeeTotal {
            name: name.to_string(),
            total: total_for(expenses, name),
        });
        let settlement = Settlement::from_totals(
            (totals[0].name.as_str(), totals[0].total),
            (totals[1].name.as_str(), totals[1].total),
        );

        Self { totals, settlement }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExpenseId;

    fn expense(id: u32, payee_name: &str, price: f64) -> Expense {
        Expense {
            id: ExpenseId::new(id.to_string()),
            payee_name: payee_name.to_string(),
            product: "groceries".to_string(),
            price,
            set_date: "2024-02-01".to_string(),
        }
    }

    #[test]
    fn test_rahul_paid_more() {
        let expenses = vec![expense(1, "Rahul", 100.0), expense(2, "Ramesh", 50.0)];
        let summary = ExpenseSummary::compute(&expenses, &Participants::default());

        assert_eq!(summary.totals[0].label(), "Rahul paid");
        assert_eq!(summary.totals[0].total, 100.0);
        assert_eq!(summary.totals[1].label(), "Ramesh paid");
        assert_eq!(summary.totals[1].total, 50.0);
        assert_eq!(summary.settlement.to_string(), "Ramesh will pay to Rahul");
        assert_eq!(summary.settlement.amount(), Some(25.0));
    }

    #[test]
    fn test_equal_totals_need_no_payment() {
        let expenses = vec![
            expense(1, "Rahul", 40.0),
            expense(2, "Ramesh", 30.0),
            expense(3, "Ramesh", 10.0),
        ];
        let settlement = Settlement::between(&Participants::default(), &expenses);

        assert_eq!(settlement, Settlement::NoPaymentDue);
        assert_eq!(settlement.to_string(), "No one has to pay.");
        assert_eq!(settlement.amount(), None);
    }

    #[test]
    fn test_no_expenses_need_no_payment() {
        assert_eq!(
            Settlement::between(&Participants::default(), &[]),
            Settlement::NoPaymentDue
        );
    }

    #[test]
    fn test_settlement_is_symmetric() {
        let cases = [(100.0, 50.0), (0.0, 80.0), (12.5, 7.25), (-10.0, 30.0)];

        for (a, b) in cases {
            let forward = Settlement::from_totals(("Rahul", a), ("Ramesh", b));
            let swapped = Settlement::from_totals(("Rahul", b), ("Ramesh", a));

            match (&forward, &swapped) {
                (
                    Settlement::Payment { from: f1, to: t1, amount: a1 },
                    Settlement::Payment { from: f2, to: t2, amount: a2 },
                ) => {
                    assert_eq!(f1, t2);
                    assert_eq!(t1, f2);
                    assert_eq!(a1, a2);
                }
                other => panic!("expected payments for {:?}, got {:?}", (a, b), other),
            }
        }
    }

    #[test]
    fn test_amount_is_half_the_difference() {
        let settlement = Settlement::from_totals(("Rahul", 30.0), ("Ramesh", 130.0));
        assert_eq!(
            settlement,
            Settlement::Payment {
                from: "Rahul".to_string(),
                to: "Ramesh".to_string(),
                amount: 50.0,
            }
        );
        assert_eq!(settlement.to_string(), "Rahul will pay to Ramesh");
    }

    #[test]
    fn test_nan_total_means_no_payment() {
        let expenses = vec![expense(1, "Rahul", f64::NAN), expense(2, "Ramesh", 50.0)];
        let summary = ExpenseSummary::compute(&expenses, &Participants::default());

        assert!(summary.totals[0].total.is_nan());
        assert_eq!(summary.settlement, Settlement::NoPaymentDue);
    }

    #[test]
    fn test_custom_participants() {
        let participants = Participants::new("Asha", "Vikram").unwrap();
        let expenses = vec![
            expense(1, "Vikram", 90.0),
            expense(2, "Rahul", 1000.0),
            expense(3, "Asha", 10.0),
        ];

        let summary = ExpenseSummary::compute(&expenses, &participants);
        assert_eq!(summary.settlement.to_string(), "Asha will pay to Vikram");
        assert_eq!(summary.settlement.amount(), Some(40.0));
    }
}
