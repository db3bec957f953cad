use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Mergington High School" }</h1>
                <nav>
                    <Link<Route> to={Route::Board}>{ "Extracurricular Activities" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
