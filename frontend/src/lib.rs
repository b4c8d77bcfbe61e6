pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::AppProvider;
use crate::pages::{
    custom_wheel::CustomWheel,
    home::Home,
    not_found::NotFound,
    settings::SettingsPage,
    wheel_page::WheelPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/wheel/:slug")]
    Wheel { slug: String },
    #[at("/custom")]
    Custom,
    #[at("/my/:id")]
    MyWheel { id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppProvider>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <div class="mx-auto">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </AppProvider>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Wheel { slug } => html! { <WheelPage key={slug.clone()} slug={slug.clone()} /> },
        Route::Custom => html! { <CustomWheel /> },
        Route::MyWheel { id } => html! { <CustomWheel key={id.clone()} id={id.clone()} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
