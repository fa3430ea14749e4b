use shared::{ExpenseForm, Participants};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

/// Shown first in the payee select. Submitting without picking someone sends
/// this text as the payee name.
pub const PAYEE_PLACEHOLDER: &str = "----Select payee----";

#[derive(Properties, PartialEq)]
pub struct AddExpenseModalProps {
    pub is_open: bool,
    pub participants: Participants,
    pub submitting: bool,
    pub error: Option<String>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<ExpenseForm>,
}

#[function_component(AddExpenseModal)]
pub fn add_expense_modal(props: &AddExpenseModalProps) -> Html {
    let payee_name = use_state(|| PAYEE_PLACEHOLDER.to_string());
    let product = use_state(String::new);
    let price = use_state(String::new);

    // Reset the form every time the modal opens
    use_effect_with(props.is_open, {
        let payee_name = payee_name.clone();
        let product = product.clone();
        let price = price.clone();
        move |is_open| {
            if *is_open {
                payee_name.set(PAYEE_PLACEHOLDER.to_string());
                product.set(String::new());
                price.set(String::new());
            }
            || ()
        }
    });

    let on_payee_change = {
        let payee_name = payee_name.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            payee_name.set(select.value());
        })
    };

    let on_product_input = {
        let product = product.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            product.set(input.value());
        })
    };

    let on_price_input = {
        let price = price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_submit = {
        let payee_name = payee_name.clone();
        let product = product.clone();
        let price = price.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(ExpenseForm {
                payee_name: (*payee_name).clone(),
                product: (*product).clone(),
                price: (*price).clone(),
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <>
            <div class="modal-backdrop fade show"></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog" onclick={on_backdrop_click}>
                <div class="modal-dialog" onclick={on_dialog_click}>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{"Add an expense"}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                onclick={on_close_click.clone()}
                            />
                        </div>
                        <div class="modal-body">
                            {if let Some(error) = props.error.as_ref() {
                                html! {
                                    <div class="alert alert-danger" role="alert">{error}</div>
                                }
                            } else { html! {} }}

                            <form onsubmit={on_submit}>
                                <div class="mb-3">
                                    <label for="payeeName" class="form-label">{"Who paid?"}</label>
                                    <select
                                        id="payeeName"
                                        class="form-select"
                                        aria-label="Payee Name"
                                        onchange={on_payee_change}
                                        disabled={props.submitting}
                                    >
                                        <option
                                            value={PAYEE_PLACEHOLDER}
                                            selected={*payee_name == PAYEE_PLACEHOLDER}
                                        >
                                            {PAYEE_PLACEHOLDER}
                                        </option>
                                        {for props.participants.names().into_iter().map(|name| {
                                            html! {
                                                <option value={name.to_string()} selected={*payee_name == name}>
                                                    {name.to_string()}
                                                </option>
                                            }
                                        })}
                                    </select>
                                </div>

                                <div class="mb-3">
                                    <label for="product" class="form-label">{"For what?"}</label>
                                    <input
                                        type="text"
                                        id="product"
                                        class="form-control"
                                        value={(*product).clone()}
                                        oninput={on_product_input}
                                        disabled={props.submitting}
                                    />
                                </div>

                                <div class="mb-3">
                                    <label for="price" class="form-label">{"How much?"}</label>
                                    <input
                                        type="text"
                                        id="price"
                                        class="form-control"
                                        min="0"
                                        value={(*price).clone()}
                                        oninput={on_price_input}
                                        disabled={props.submitting}
                                    />
                                </div>

                                <button type="button" class="btn btn-secondary me-2" onclick={on_close_click}>
                                    {"Close"}
                                </button>
                                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                                    {if props.submitting { "Adding..." } else { "Add Expense" }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
