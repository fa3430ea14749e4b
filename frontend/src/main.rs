mod components;
mod config;
mod hooks;
mod services;

use yew::prelude::*;

use components::ExpenseTracker;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| config::load());

    html! {
        <ExpenseTracker
            api_client={ApiClient::with_base_url(config.base_url.clone())}
            participants={config.participants.clone()}
        />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
