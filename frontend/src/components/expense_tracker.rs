use shared::{Participants, TrackerState};
use yew::prelude::*;

use super::add_expense_modal::AddExpenseModal;
use super::expense_table::ExpenseTable;
use super::header::Header;
use crate::hooks::use_expenses::{use_expenses, UseExpensesResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpenseTrackerProps {
    pub api_client: ApiClient,
    pub participants: Participants,
}

/// The expense page: loading spinner, error banner or the expense table.
#[function_component(ExpenseTracker)]
pub fn expense_tracker(props: &ExpenseTrackerProps) -> Html {
    let UseExpensesResult { state, actions } = use_expenses(&props.api_client);

    html! {
        <div class="container my-4">
            <AddExpenseModal
                is_open={state.modal_open}
                participants={props.participants.clone()}
                submitting={state.submitting}
                error={state.form_error.clone()}
                on_close={actions.close_modal.clone()}
                on_submit={actions.add_expense.clone()}
            />

            <Header on_add_expense={actions.open_modal.clone()} />

            {match &state.tracker {
                TrackerState::Loading { .. } => html! {
                    <div class="d-flex justify-content-center">
                        <div class="spinner-border" role="status">
                            <span class="visually-hidden">{"Loading..."}</span>
                        </div>
                    </div>
                },
                TrackerState::Failed(error) => html! {
                    <div class="alert alert-danger" role="alert">{error.to_string()}</div>
                },
                TrackerState::Ready(expenses) => html! {
                    <ExpenseTable
                        expenses={expenses.clone()}
                        participants={props.participants.clone()}
                    />
                },
            }}
        </div>
    }
}
