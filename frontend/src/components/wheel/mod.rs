mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use shared::{Segment, SpinConfig, SpinOutcome, SpinTick, Wheel, WheelSpinEngine};
use yew::prelude::*;

use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

type SharedEngine = Rc<RefCell<WheelSpinEngine>>;

#[derive(Properties, PartialEq)]
pub struct WheelGameProps {
    pub wheel: Wheel,
    #[prop_or_default]
    pub config: SpinConfig,
    #[prop_or(500)]
    pub size: u32,
    #[prop_or_default]
    pub on_spin_start: Callback<()>,
    #[prop_or_default]
    pub on_spin_complete: Callback<Segment>,
}

// Everything one animation frame needs to move the wheel along
struct FrameLoop {
    engine: SharedEngine,
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    started_at: f64,
    rotation: UseStateHandle<f64>,
    on_done: Callback<SpinOutcome>,
}

fn schedule_frame(ctx: Rc<FrameLoop>) {
    let next = ctx.clone();
    let handle = request_animation_frame(move |_timestamp| {
        let elapsed = js_sys::Date::now() - next.started_at;
        let tick = next.engine.borrow_mut().advance(elapsed);
        match tick {
            SpinTick::Animating { rotation, .. } => {
                next.rotation.set(rotation);
                schedule_frame(next);
            }
            SpinTick::Completed(outcome) => {
                next.rotation.set(outcome.rotation);
                next.on_done.emit(outcome);
            }
            SpinTick::Idle => {}
        }
    });
    *ctx.handle.borrow_mut() = Some(handle);
}

#[function_component(WheelGame)]
pub fn wheel_game(props: &WheelGameProps) -> Html {
    let engine: SharedEngine = use_mut_ref(|| WheelSpinEngine::new(props.wheel.clone(), props.config.clone()));
    let frame_handle = use_mut_ref(|| None::<AnimationFrame>);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<Segment>);
    let visible = use_state(|| engine.borrow().visible_segments().to_vec());

    // Each edit hands the engine a whole new wheel
    {
        let engine = engine.clone();
        let visible = visible.clone();
        use_effect_with(
            (props.wheel.clone(), props.config.clone()),
            move |(wheel, config)| {
                let mut engine = engine.borrow_mut();
                engine.set_config(config.clone());
                engine.replace_wheel(wheel.clone());
                // The canvas keeps showing the segments a running spin resolves against
                if !engine.is_spinning() {
                    visible.set(engine.visible_segments().to_vec());
                }
                || ()
            },
        );
    }

    // Stop any pending frame when the wheel goes away
    {
        let frame_handle = frame_handle.clone();
        use_effect_with((), move |_| {
            move || {
                frame_handle.borrow_mut().take();
            }
        });
    }

    let on_done = {
        let engine = engine.clone();
        let visible = visible.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let on_spin_complete = props.on_spin_complete.clone();
        Callback::from(move |outcome: SpinOutcome| {
            debug!("Wheel landed on {} at {:.2}°", outcome.segment.label, outcome.pointer_angle);
            is_spinning.set(false);
            visible.set(engine.borrow().visible_segments().to_vec());
            winner.set(Some(outcome.segment.clone()));
            on_spin_complete.emit(outcome.segment);
        })
    };

    let spin = {
        let engine = engine.clone();
        let frame_handle = frame_handle.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let visible = visible.clone();
        let on_spin_start = props.on_spin_start.clone();
        Callback::from(move |_: ()| {
            if engine.borrow_mut().spin().is_none() {
                return;
            }
            visible.set(engine.borrow().visible_segments().to_vec());
            is_spinning.set(true);
            winner.set(None);
            on_spin_start.emit(());

            if web_sys::window().is_none() {
                // No animation timing available: land immediately
                warn!("No window for animation frames, resolving spin immediately");
                let outcome = engine.borrow_mut().finish_now();
                if let Some(outcome) = outcome {
                    rotation.set(outcome.rotation);
                    on_done.emit(outcome);
                }
                return;
            }

            schedule_frame(Rc::new(FrameLoop {
                engine: engine.clone(),
                handle: frame_handle.clone(),
                started_at: js_sys::Date::now(),
                rotation: rotation.clone(),
                on_done: on_done.clone(),
            }));
        })
    };

    let on_click = spin.reform(|_: MouseEvent| ());
    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            spin.emit(());
        }
    });

    let on_reset = {
        let engine = engine.clone();
        let rotation = rotation.clone();
        let winner = winner.clone();
        Callback::from(move |_: MouseEvent| {
            if engine.borrow_mut().reset() {
                rotation.set(0.0);
                winner.set(None);
            }
        })
    };

    let is_ready = !visible.is_empty();
    let layout = props.config.layout;

    html! {
        <div class="flex flex-col items-center gap-6">
            <div
                role="button"
                tabindex="0"
                aria-label={format!("{} wheel with {} segments", props.wheel.name, visible.len())}
                onkeydown={on_keydown}
            >
                <WheelCanvas
                    segments={(*visible).clone()}
                    layout={layout}
                    rotation={*rotation}
                    is_spinning={*is_spinning}
                    size={props.size}
                />
            </div>
            <div class="w-full max-w-xs flex flex-col gap-3">
                <SpinButton
                    is_spinning={*is_spinning}
                    is_ready={is_ready}
                    onclick={on_click}
                />
                <button
                    class={styles::RESET_LINK}
                    disabled={*is_spinning}
                    onclick={on_reset}
                >
                    {"Reset wheel"}
                </button>
            </div>
            <ResultDisplay winner={(*winner).clone()} />
        </div>
    }
}
