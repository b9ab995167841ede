//! Catch-all page for unknown routes

use super::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "There is no map here." }</p>
            <Link<Route> to={Route::Map}>{ "Back to the map" }</Link<Route>>
        </div>
    }
}
