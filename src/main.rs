use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod emailer;
mod forms;
mod components {
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod notification;
    pub mod start_now_modal;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::cookie_consent::CookieConsent;
use pages::landing::Landing;
use pages::termsprivacy::PrivacyPolicy;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering privacy policy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <CookieConsent />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
