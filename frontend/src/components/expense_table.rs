use shared::{Expense, ExpenseSummary, Participants, Settlement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub expenses: Vec<Expense>,
    pub participants: Participants,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let summary = ExpenseSummary::compute(&props.expenses, &props.participants);

    html! {
        <table class="table table-striped table-bordered table-hover table-dark">
            <thead>
                <tr>
                    <th>{"#"}</th>
                    <th>{"Payee"}</th>
                    <th>{"Description"}</th>
                    <th>{"Date"}</th>
                    <th>{"Amount"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.expenses.iter().enumerate().map(|(index, expense)| {
                    html! {
                        <tr key={expense.id.to_string()}>
                            <td>{(index + 1).to_string()}</td>
                            <td>{&expense.payee_name}</td>
                            <td>{&expense.product}</td>
                            <td>{&expense.set_date}</td>
                            <td class="font-monospace text-end">{expense.price.to_string()}</td>
                        </tr>
                    }
                })}
                {for summary.totals.iter().map(|payee_total| {
                    html! {
                        <tr>
                            <td colspan="4" class="text-end">{payee_total.label()}</td>
                            <td class="font-monospace text-end">{payee_total.total.to_string()}</td>
                        </tr>
                    }
                })}
                <tr>
                    {match &summary.settlement {
                        Settlement::Payment { amount, .. } => html! {
                            <>
                                <td colspan="4" class="text-end">{summary.settlement.to_string()}</td>
                                <td class="font-monospace text-end">{amount.to_string()}</td>
                            </>
                        },
                        Settlement::NoPaymentDue => html! {
                            <td colspan="5" class="text-end">{summary.settlement.to_string()}</td>
                        },
                    }}
                </tr>
            </tbody>
        </table>
    }
}
