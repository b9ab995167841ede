//! Browser front end
//!
//! Yew components for the map page and its surroundings, plus the DOM and
//! `localStorage` adapters that back the widget's traits.

pub mod card;
pub mod dom;
pub mod footnote;
pub mod map_page;
pub mod not_found;
pub mod storage;
pub mod toolbar;

pub use map_page::MapPage;
pub use storage::LocalStore;

use yew::prelude::*;
use yew_router::prelude::*;

/// The map graphic; interactive shapes are `path` elements with a `name`
pub const MAP_SVG: &str = include_str!("../../assets/map.svg");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Map,
    #[not_found]
    #[at("/not-found")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Map => html! { <MapPage /> },
        Route::NotFound => html! { <not_found::NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <Switch<Route> render={switch} />
        </HashRouter>
    }
}

/// Install the console logger and mount the app on the document body
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(crate::log_level()));
    log::info!("visited-map {}", crate::VERSION);
    yew::Renderer::<App>::new().render();
}
