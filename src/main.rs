use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod slider;
mod components {
    pub mod back_to_top;
    pub mod contact;
    pub mod counter;
    pub mod hero_slider;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
    pub mod slide_view;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use config::SiteConfig;
use pages::home::{nav_links, service_links, Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_memo(|_| config::load_site_config(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*site).clone()}>
            <BrowserRouter>
                <Nav links={nav_links()} services={service_links()} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
