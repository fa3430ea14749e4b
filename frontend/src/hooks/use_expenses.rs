use std::rc::Rc;

use shared::{load_expenses, submit_expense, ExpenseForm, TrackerAction, TrackerState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today_utc;
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-hook";

/// Yew reducer wrapper around the page state machine
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseStore {
    pub tracker: TrackerState,
}

impl Reducible for ExpenseStore {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            tracker: self.tracker.clone().apply(action),
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct ExpensesState {
    pub tracker: TrackerState,

    // Add expense modal state
    pub modal_open: bool,
    pub submitting: bool,
    pub form_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub open_modal: Callback<()>,
    pub close_modal: Callback<()>,
    pub add_expense: Callback<ExpenseForm>,
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let store = use_reducer(ExpenseStore::default);
    let modal_open = use_state(|| false);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    // Results that arrive after unmount are dropped
    let is_mounted = use_mut_ref(|| true);

    // Fetch the list once on mount
    {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let is_mounted = is_mounted.clone();

        use_effect_with((), move |_| {
            *is_mounted.borrow_mut() = true;

            let still_mounted = is_mounted.clone();
            spawn_local(async move {
                Logger::info_with_component(COMPONENT, "Loading expenses");
                let action = load_expenses(&api_client).await;

                match &action {
                    TrackerAction::Loaded(Ok(expenses)) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Loaded {} expenses", expenses.len()),
                        );
                    }
                    TrackerAction::Loaded(Err(e)) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to load expenses: {}", e),
                        );
                    }
                    TrackerAction::Created(_) => {}
                }

                if *still_mounted.borrow() {
                    dispatcher.dispatch(action);
                } else {
                    Logger::debug_with_component(COMPONENT, "Dropping expense list, page unmounted");
                }
            });

            move || {
                *is_mounted.borrow_mut() = false;
            }
        });
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            modal_open.set(false);
        })
    };

    let add_expense = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let modal_open = modal_open.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let is_mounted = is_mounted.clone();

        Callback::from(move |form: ExpenseForm| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let modal_open = modal_open.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let is_mounted = is_mounted.clone();

            form_error.set(None);
            submitting.set(true);

            spawn_local(async move {
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Adding expense '{}' paid by {}", form.product, form.payee_name),
                );
                let result = submit_expense(&api_client, &form, today_utc()).await;

                if !*is_mounted.borrow() {
                    Logger::debug_with_component(COMPONENT, "Dropping created expense, page unmounted");
                    return;
                }

                match result {
                    Ok(expense) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Created expense {}", expense.id),
                        );
                        dispatcher.dispatch(TrackerAction::Created(expense));
                        modal_open.set(false);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to add expense: {}", e),
                        );
                        form_error.set(Some(e.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let state = ExpensesState {
        tracker: store.tracker.clone(),
        modal_open: *modal_open,
        submitting: *submitting,
        form_error: (*form_error).clone(),
    };

    let actions = UseExpensesActions {
        open_modal,
        close_modal,
        add_expense,
    };

    UseExpensesResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Expense, ExpenseId, FetchError};

    fn expense(id: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            payee_name: "Rahul".to_string(),
            product: "Milk".to_string(),
            price: 30.0,
            set_date: "2024-07-01".to_string(),
        }
    }

    #[test]
    fn test_store_starts_loading() {
        assert!(ExpenseStore::default().tracker.is_loading());
    }

    #[test]
    fn test_store_reduces_load_and_create() {
        let store = Rc::new(ExpenseStore::default())
            .reduce(TrackerAction::Loaded(Ok(vec![expense("1")])))
            .reduce(TrackerAction::Created(expense("2")));

        assert_eq!(
            store.tracker,
            TrackerState::Ready(vec![expense("1"), expense("2")])
        );
    }

    #[test]
    fn test_store_reduces_failed_load() {
        let store = Rc::new(ExpenseStore::default())
            .reduce(TrackerAction::Loaded(Err(FetchError::Network("offline".to_string()))));

        assert_eq!(
            store.tracker.error().map(ToString::to_string),
            Some("Network Error: offline".to_string())
        );
    }
}
