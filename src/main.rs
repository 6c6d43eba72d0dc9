use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod breakpoint;
mod config;
mod content;
mod dom;
mod error;
mod listener;
mod logo;
mod nav;
mod scroll;
mod slug;
mod spring;
mod components {
    pub mod footer;
    pub mod header;
    pub mod insight_card;
    pub mod service_card;
    pub mod vertical_logo;
}
mod pages {
    pub mod detail;
    pub mod home;
}

use pages::{
    detail::{InsightDetail, NotFound, ServiceDetail},
    home::Home,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/insights/:slug")]
    Insight { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Service { slug } => {
            info!("Rendering Service page: {}", slug);
            html! { <ServiceDetail slug={slug} /> }
        }
        Route::Insight { slug } => {
            info!("Rendering Insight page: {}", slug);
            html! { <InsightDetail slug={slug} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
