use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod state {
    pub mod demo;
    pub mod lead_form;
}
mod components {
    pub mod background;
    pub mod banner;
    pub mod career_map;
    pub mod cta;
    pub mod demo_player;
    pub mod lead_form;
    pub mod notification;
    pub mod profiles;
    pub mod testimonials;
}
mod pages {
    pub mod get_started;
    pub mod home;
}

use pages::{get_started::GetStarted, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/get-started")]
    GetStarted,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::GetStarted => {
            info!("Rendering Get Started page");
            html! { <GetStarted /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
