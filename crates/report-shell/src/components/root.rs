use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::Router;

use crate::config::ShellConfig;
use crate::routes::AppRoute;

#[component]
pub fn Root(#[prop(optional)] config: Option<ShellConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_meta_context();

    view! {
        <Meta charset="UTF-8"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Title text=config.title/>

        <Router>
            {AppRoute::routes()}
        </Router>
    }
}
