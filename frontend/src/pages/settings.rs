use log::warn;
use shared::constants::{DEFAULT_SPIN_TIME_SECS, MAX_SPIN_TIME_SECS, MIN_SPIN_TIME_SECS};
use shared::storage::Settings;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::base::Base;
use crate::hooks::use_app_context;
use crate::styles;

#[derive(Properties, PartialEq)]
struct ToggleProps {
    label: AttrValue,
    hint: AttrValue,
    checked: bool,
    on_toggle: Callback<bool>,
}

#[function_component(Toggle)]
fn toggle(props: &ToggleProps) -> Html {
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <label class="flex items-start gap-3 py-2 cursor-pointer">
            <input type="checkbox" class="mt-1 h-4 w-4" checked={props.checked} onchange={on_change} />
            <div>
                <span class={styles::TEXT_LABEL}>{&props.label}</span>
                <p class={styles::TEXT_HINT}>{&props.hint}</p>
            </div>
        </label>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let app = use_app_context();
    let settings = app.settings.clone();

    // Each control edits one field of the current settings
    let update = |edit: fn(&mut Settings, bool)| {
        let settings = settings.clone();
        let set_settings = app.set_settings.clone();
        Callback::from(move |value: bool| {
            let mut next = settings.clone();
            edit(&mut next, value);
            set_settings.emit(next);
        })
    };

    let on_spin_time = {
        let settings = settings.clone();
        let set_settings = app.set_settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = settings.clone();
            next.spin_time_secs = input
                .value()
                .parse::<u32>()
                .ok()
                .map(|secs| secs.clamp(MIN_SPIN_TIME_SECS, MAX_SPIN_TIME_SECS));
            set_settings.emit(next);
        })
    };

    let on_reset = {
        let store = app.store.clone();
        let set_settings = app.set_settings.clone();
        let set_purchases = app.set_purchases.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = store.clear() {
                warn!("Failed to clear saved data: {}", e);
            }
            set_settings.emit(Settings::default());
            set_purchases.emit(store.purchases());
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <h1 class={styles::TEXT_H1}>{"Settings"}</h1>

                <div class={classes!(styles::CARD, "mt-6", "space-y-2")}>
                    <h2 class={styles::TEXT_H3}>{"Spinning"}</h2>
                    <div class="py-2">
                        <label class={styles::TEXT_LABEL} for="spin-time">{"Spin time (seconds)"}</label>
                        <input
                            id="spin-time"
                            type="number"
                            min={MIN_SPIN_TIME_SECS.to_string()}
                            max={MAX_SPIN_TIME_SECS.to_string()}
                            placeholder={DEFAULT_SPIN_TIME_SECS.to_string()}
                            value={settings.spin_time_secs.map(|s| s.to_string()).unwrap_or_default()}
                            class={styles::INPUT}
                            onchange={on_spin_time}
                        />
                        <p class={styles::TEXT_HINT}>{"Leave empty for the standard spin."}</p>
                    </div>
                    <Toggle label="Spin slowly" hint="Fewer turns before the wheel stops."
                        checked={settings.spin_slowly} on_toggle={update(|s, v| s.spin_slowly = v)} />
                    <Toggle label="Remove winners" hint="Take each winning option off the wheel after a spin."
                        checked={settings.exclude_after_spin} on_toggle={update(|s, v| s.exclude_after_spin = v)} />
                    <Toggle label="Reduced motion" hint="Short, gentle spins."
                        checked={settings.reduced_motion} on_toggle={update(|s, v| s.reduced_motion = v)} />
                </div>

                <div class={classes!(styles::CARD, "mt-6", "space-y-2")}>
                    <h2 class={styles::TEXT_H3}>{"Accessibility"}</h2>
                    <Toggle label="Large text" hint="Bigger labels across the app."
                        checked={settings.large_text} on_toggle={update(|s, v| s.large_text = v)} />
                    <Toggle label="High contrast" hint="Stronger colors."
                        checked={settings.high_contrast} on_toggle={update(|s, v| s.high_contrast = v)} />
                </div>

                <div class={classes!(styles::CARD, "mt-6", "space-y-2")}>
                    <h2 class={styles::TEXT_H3}>{"Grown-ups"}</h2>
                    <Toggle label="Family-safe words" hint="Block rude words in custom wheels."
                        checked={settings.family_safe} on_toggle={update(|s, v| s.family_safe = v)} />
                    <Toggle label="Parental controls" hint="Ask a grown-up before any purchase."
                        checked={settings.parental_controls_enabled} on_toggle={update(|s, v| s.parental_controls_enabled = v)} />
                    <div class="pt-4">
                        <button class={styles::BUTTON_DANGER} onclick={on_reset}>{"Erase all saved data"}</button>
                    </div>
                </div>
            </div>
        </Base>
    }
}
