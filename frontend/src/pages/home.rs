use shared::templates::{self, Category};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::AdBanner;
use crate::hooks::use_app_context;
use crate::styles;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let app = use_app_context();
    let saved = app.store.wheels();

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class={styles::HERO_TITLE_WRAPPER}>
                    <h1 class={styles::TEXT_H1}>{"Spin & Learn"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-2")}>
                        {"Pick a wheel, give it a spin, and see where it lands."}
                    </p>
                    <div class="mt-6">
                        <Link<Route> to={Route::Custom} classes={styles::BUTTON_PRIMARY}>
                            {"Build your own wheel"}
                        </Link<Route>>
                    </div>
                </div>

                <section class="mt-10">
                    <h2 class={styles::TEXT_H2}>{"Your wheels"}</h2>
                    <div class={styles::SECTION_GRID}>
                        { for saved.iter().map(|wheel| html! {
                            <Link<Route> to={Route::MyWheel { id: wheel.id.clone() }} classes={styles::CARD_HOVER}>
                                <p class={styles::CARD_TITLE}>{&wheel.name}</p>
                                <p class={styles::CARD_TEXT}>{format!("{} options", wheel.len())}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>

                { for Category::ALL.iter().map(|&category| html! {
                    <section key={category.label()} class="mt-6">
                        <h2 class={styles::TEXT_H2}>{category.label()}</h2>
                        <div class={styles::SECTION_GRID}>
                            { for templates::templates_in(category).map(|template| html! {
                                <Link<Route>
                                    to={Route::Wheel { slug: template.slug.clone() }}
                                    classes={styles::CARD_HOVER}
                                >
                                    <p class={styles::CARD_TITLE}>{&template.title}</p>
                                    <p class={styles::CARD_TEXT}>{&template.description}</p>
                                </Link<Route>>
                            }) }
                        </div>
                    </section>
                }) }

                <div class="mt-8">
                    <AdBanner placement="home" />
                </div>
            </div>
        </Base>
    }
}
