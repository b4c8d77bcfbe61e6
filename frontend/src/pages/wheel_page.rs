use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::segment::{Segment, Wheel};
use shared::templates;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::{AdBanner, WheelGame};
use crate::config::{spin_config, EXCLUDE_DELAY_MS, RELATED_TEMPLATES, WHEEL_SIZE};
use crate::hooks::use_app_context;
use crate::pages::not_found::NotFound;
use crate::styles;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
struct TemplateWheel {
    wheel: Option<Wheel>,
}

enum TemplateAction {
    Exclude(String),
}

impl TemplateWheel {
    fn load(slug: &str) -> Self {
        Self {
            wheel: templates::template(slug).map(|t| t.to_wheel()),
        }
    }
}

impl Reducible for TemplateWheel {
    type Action = TemplateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TemplateAction::Exclude(id) => {
                let mut next = (*self).clone();
                if let Some(wheel) = next.wheel.as_mut() {
                    wheel.segments.retain(|s| s.id != id);
                }
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub slug: AttrValue,
}

/// A ready-made wheel. Winners can be knocked out for the rest of the
/// visit; reloading the page restores the full template.
#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let app = use_app_context();
    let template = templates::template(&props.slug);
    let wheel = {
        let slug = props.slug.clone();
        use_reducer(move || TemplateWheel::load(&slug))
    };

    let (Some(template), Some(current)) = (template, wheel.wheel.clone()) else {
        return html! { <NotFound /> };
    };

    let on_spin_complete = {
        let dispatcher = wheel.dispatcher();
        let exclude = app.settings.exclude_after_spin;
        Callback::from(move |winner: Segment| {
            if !exclude {
                return;
            }
            let dispatcher = dispatcher.clone();
            Timeout::new(EXCLUDE_DELAY_MS, move || {
                dispatcher.dispatch(TemplateAction::Exclude(winner.id));
            })
            .forget();
        })
    };

    let config = spin_config(&app.settings, &current);

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class={styles::HERO_TITLE_WRAPPER}>
                    <h1 class={styles::TEXT_H1}>{&template.title}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-2")}>{&template.description}</p>
                </div>
                <div class="mt-8 flex justify-center">
                    <WheelGame wheel={current} config={config} size={WHEEL_SIZE} on_spin_complete={on_spin_complete} />
                </div>
                <section class="mt-10">
                    <h2 class={styles::TEXT_H3}>{"Try another wheel"}</h2>
                    <div class={styles::SECTION_GRID}>
                        { for templates::related(&template.slug, RELATED_TEMPLATES).into_iter().map(|related| html! {
                            <Link<Route> to={Route::Wheel { slug: related.slug.clone() }} classes={styles::CARD_HOVER}>
                                <p class={styles::CARD_TITLE}>{&related.title}</p>
                                <p class={styles::CARD_TEXT}>{&related.description}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>
                <div class="mt-8">
                    <AdBanner placement="wheel" />
                </div>
            </div>
        </Base>
    }
}
