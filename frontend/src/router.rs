use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{board::Board, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Board,
    // The API server redirects `/` here.
    #[at("/static/index.html")]
    StaticIndex,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Board | Route::StaticIndex => html! { <Board /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
