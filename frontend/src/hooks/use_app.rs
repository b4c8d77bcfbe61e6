use std::rc::Rc;

use log::warn;
use shared::storage::{AppStore, Purchases, Settings};
use yew::prelude::*;

use crate::storage::LocalStore;

/// App-wide state handed down through a `ContextProvider`.
#[derive(Clone)]
pub struct AppContext {
    pub store: Rc<AppStore<LocalStore>>,
    pub settings: Settings,
    pub purchases: Purchases,
    pub set_settings: Callback<Settings>,
    pub set_purchases: Callback<Purchases>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.settings == other.settings
            && self.purchases == other.purchases
    }
}

impl AppContext {
    /// Context for components rendered outside the provider. Changes are
    /// saved but nothing re-renders.
    fn detached() -> Self {
        let store = Rc::new(AppStore::new(LocalStore::open()));
        let settings = store.settings();
        let purchases = store.purchases();
        let settings_store = store.clone();
        let purchases_store = store.clone();
        Self {
            store,
            settings,
            purchases,
            set_settings: Callback::from(move |settings: Settings| {
                if let Err(e) = settings_store.save_settings(&settings) {
                    warn!("Failed to save settings: {}", e);
                }
            }),
            set_purchases: Callback::from(move |purchases: Purchases| {
                if let Err(e) = purchases_store.save_purchases(&purchases) {
                    warn!("Failed to save purchases: {}", e);
                }
            }),
        }
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(AppContext::detached)
}

#[derive(Properties, PartialEq)]
pub struct AppProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AppProvider)]
pub fn app_provider(props: &AppProviderProps) -> Html {
    let store = use_memo((), |_| AppStore::new(LocalStore::open()));
    let settings = use_state(|| store.settings());
    let purchases = use_state(|| store.purchases());

    let set_settings = {
        let store = store.clone();
        let settings = settings.clone();
        Callback::from(move |next: Settings| {
            if let Err(e) = store.save_settings(&next) {
                warn!("Failed to save settings: {}", e);
            }
            settings.set(next);
        })
    };

    let set_purchases = {
        let store = store.clone();
        let purchases = purchases.clone();
        Callback::from(move |next: Purchases| {
            if let Err(e) = store.save_purchases(&next) {
                warn!("Failed to save purchases: {}", e);
            }
            purchases.set(next);
        })
    };

    let context = AppContext {
        store,
        settings: (*settings).clone(),
        purchases: (*purchases).clone(),
        set_settings,
        set_purchases,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}
