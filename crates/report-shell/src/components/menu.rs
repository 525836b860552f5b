use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

/// Header navigation. Clicking a link is handled by the router, so this must
/// be rendered inside a `<Router>`.
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <div class="menu">
            <div class="title">
                <ul class="ul-menu">
                    {AppRoute::MENU
                        .into_iter()
                        .map(|route| view! {
                            <li class=route.menu_class()>
                                <A href=route>{route.label()}</A>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
