mod components;
mod config;
mod pages;
mod router;
mod services;

use shared::BoardConfig;
use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| config::load());

    html! {
        <ContextProvider<BoardConfig> context={(*config).clone()}>
            <BrowserRouter>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<BoardConfig>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
