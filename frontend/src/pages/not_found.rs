use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::styles;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <div class={styles::FLEX_CENTER}>
                <div class={styles::HERO_TITLE_WRAPPER}>
                    <h1 class={styles::TEXT_H1}>{"That wheel rolled away"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-4")}>{"We couldn't find the page you asked for."}</p>
                    <div class="mt-6">
                        <Link<Route> to={Route::Home} classes={styles::BUTTON_PRIMARY}>{"Back to all wheels"}</Link<Route>>
                    </div>
                </div>
            </div>
        </Base>
    }
}
