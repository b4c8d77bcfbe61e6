use log::{info, warn};
use shared::services::{
    apply_receipt, AdCreative, AdProvider, AdRequest, Product, PurchaseGateway, PurchaseRequest,
    SimulatedPurchaseGateway, StubAdProvider,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::styles;

const PARENT_PROMPT: &str = "Grown-ups only: remove ads from Spin & Learn?";

/// Asks a grown-up before any purchase goes through. With parental
/// controls off the purchase is treated as already verified.
fn parent_verified(parental_controls: bool) -> bool {
    if !parental_controls {
        return true;
    }
    window()
        .and_then(|w| w.confirm_with_message(PARENT_PROMPT).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct AdBannerProps {
    pub placement: AttrValue,
}

#[function_component(AdBanner)]
pub fn ad_banner(props: &AdBannerProps) -> Html {
    let app = use_app_context();
    let creative = use_state(|| None::<AdCreative>);
    let error = use_state(String::new);
    let gateway = use_memo((), |_| SimulatedPurchaseGateway::new());

    {
        let creative = creative.clone();
        let placement = props.placement.to_string();
        use_effect_with((app.purchases.clone(), placement), move |(purchases, placement)| {
            let provider = StubAdProvider::new(purchases.clone());
            let request = AdRequest {
                placement: placement.clone(),
                personalized: false,
            };
            spawn_local(async move {
                match provider.load_banner(request).await {
                    Ok(banner) => creative.set(banner),
                    Err(e) => {
                        warn!("Ad banner unavailable: {}", e);
                        creative.set(None);
                    }
                }
            });
            || ()
        });
    }

    let on_remove_ads = {
        let app = app.clone();
        let error = error.clone();
        let gateway = gateway.clone();
        Callback::from(move |_: MouseEvent| {
            let request = PurchaseRequest {
                product: Product::NoAds,
                parent_verified: parent_verified(app.settings.parental_controls_enabled),
            };
            let app = app.clone();
            let error = error.clone();
            let gateway = gateway.clone();
            spawn_local(async move {
                match gateway.purchase(request).await {
                    Ok(receipt) => {
                        info!("Purchase {} completed", receipt.receipt_id);
                        let mut purchases = app.purchases.clone();
                        apply_receipt(&mut purchases, &receipt);
                        app.set_purchases.emit(purchases);
                        error.set(String::new());
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        })
    };

    let Some(banner) = (*creative).clone() else {
        return html! {};
    };

    html! {
        <div class={classes!(styles::CARD, "w-full", "max-w-xl", "mx-auto", "flex", "flex-col", "sm:flex-row", "items-center", "justify-between", "gap-4")}>
            <div>
                <p class={styles::CARD_TITLE}>{banner.headline}</p>
                <p class={styles::CARD_TEXT}>{banner.body}</p>
                if !error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{(*error).clone()}</p>
                }
            </div>
            <button class={styles::BUTTON_SECONDARY} onclick={on_remove_ads}>
                {"Remove ads"}
            </button>
        </div>
    }
}
