use gloo_timers::callback::Timeout;
use log::{debug, warn};
use shared::editor::WheelEditor;
use shared::segment::{Segment, Wheel};
use yew::prelude::*;

use crate::base::Base;
use crate::components::{apply_action, EditAction, OptionEditor, WheelGame};
use crate::config::{spin_config, CUSTOM_WHEEL_ID, EXCLUDE_DELAY_MS, WHEEL_SIZE};
use crate::hooks::use_app_context;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CustomWheelProps {
    #[prop_or(AttrValue::Static(CUSTOM_WHEEL_ID))]
    pub id: AttrValue,
}

/// Editable wheel, saved under its id after every change.
#[function_component(CustomWheel)]
pub fn custom_wheel(props: &CustomWheelProps) -> Html {
    let app = use_app_context();
    let editor = {
        let store = app.store.clone();
        let id = props.id.to_string();
        let family_safe = app.settings.family_safe;
        use_mut_ref(move || {
            let wheel = store
                .wheel(&id)
                .unwrap_or_else(|| Wheel::new(id.clone(), "My Wheel", Vec::new()));
            WheelEditor::new(wheel).family_safe(family_safe)
        })
    };
    let wheel = use_state(|| editor.borrow().wheel().clone());
    let status = use_state(|| None::<Result<String, String>>);
    let is_spinning = use_state(|| false);

    let on_action = {
        let editor = editor.clone();
        let wheel = wheel.clone();
        let status = status.clone();
        let store = app.store.clone();
        Callback::from(move |action: EditAction| {
            let result = apply_action(&mut editor.borrow_mut(), action);
            match result {
                Ok(message) => {
                    let current = editor.borrow().wheel().clone();
                    if let Err(e) = store.upsert_wheel(current.clone()) {
                        warn!("Failed to save wheel {}: {}", current.id, e);
                    }
                    wheel.set(current);
                    status.set(message.map(Ok));
                }
                Err(e) => status.set(Some(Err(e.to_string()))),
            }
        })
    };

    let on_spin_start = {
        let is_spinning = is_spinning.clone();
        Callback::from(move |_: ()| is_spinning.set(true))
    };

    let on_spin_complete = {
        let on_action = on_action.clone();
        let is_spinning = is_spinning.clone();
        let exclude = app.settings.exclude_after_spin;
        Callback::from(move |winner: Segment| {
            is_spinning.set(false);
            if !exclude {
                return;
            }
            debug!("Excluding {} after spin", winner.label);
            let on_action = on_action.clone();
            Timeout::new(EXCLUDE_DELAY_MS, move || {
                on_action.emit(EditAction::Exclude(winner.id));
            })
            .forget();
        })
    };

    let config = spin_config(&app.settings, &wheel);

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={styles::TEXT_H1}>{&wheel.name}</h1>
                <div class="mt-6 grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                    <div class="flex justify-center">
                        <WheelGame
                            wheel={(*wheel).clone()}
                            config={config}
                            size={WHEEL_SIZE}
                            on_spin_start={on_spin_start}
                            on_spin_complete={on_spin_complete}
                        />
                    </div>
                    <div class="space-y-4">
                        { match &*status {
                            Some(Ok(message)) => html! { <div class={styles::ALERT_SUCCESS}>{message}</div> },
                            Some(Err(message)) => html! { <div class={styles::ALERT_ERROR}>{message}</div> },
                            None => html! {},
                        } }
                        <OptionEditor wheel={(*wheel).clone()} on_action={on_action} disabled={*is_spinning} />
                    </div>
                </div>
            </div>
        </Base>
    }
}
