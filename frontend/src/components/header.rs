use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_add_expense: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_add_click = {
        let on_add_expense = props.on_add_expense.clone();
        Callback::from(move |_: MouseEvent| {
            on_add_expense.emit(());
        })
    };

    html! {
        <>
            <h1>
                {"Expense Tracker"}
                <button type="button" class="btn btn-primary float-end" onclick={on_add_click}>
                    {"Add Expense"}
                </button>
            </h1>
            <hr />
        </>
    }
}
