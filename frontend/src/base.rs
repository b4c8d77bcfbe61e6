use log::warn;
use shared::storage::KeyValueStore;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::styles;
use crate::Route;

const THEME_KEY: &str = "spinlearn_theme";

fn apply_theme(dark_mode: bool) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        html.set_class_name(if dark_mode { "dark" } else { "light" });
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let app = use_app_context();
    let dark_mode = {
        let store = app.store.clone();
        use_state(move || {
            store
                .backend()
                .get(THEME_KEY)
                .ok()
                .flatten()
                .map_or(false, |theme| theme == "dark")
        })
    };

    use_effect_with(*dark_mode, |dark_mode| {
        apply_theme(*dark_mode);
        || ()
    });

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        let store = app.store.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*dark_mode;
            if let Err(e) = store.backend().set(THEME_KEY, if next { "dark" } else { "light" }) {
                warn!("Failed to save theme: {}", e);
            }
            dark_mode.set(next);
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };
    let root_class = classes!(
        if *dark_mode { "dark h-full bg-gray-900" } else { "h-full bg-gray-50" },
        app.settings.large_text.then_some("text-lg"),
        app.settings.high_contrast.then_some("contrast-125"),
    );

    html! {
        <div class={root_class}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Spin & Learn"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Custom} classes={styles::NAV_LINK}>{"My Wheel"}</Link<Route>>
                            <Link<Route> to={Route::Settings} classes={styles::NAV_LINK}>{"Settings"}</Link<Route>>
                            <button class={styles::BUTTON_ICON} onclick={toggle_theme} aria-label="Toggle theme">
                                {theme_icon}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16 min-h-screen">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="h-16 flex items-center justify-center">
                    <span class={styles::TEXT_SMALL}>{"Spin & Learn"}</span>
                </div>
            </footer>
        </div>
    }
}
