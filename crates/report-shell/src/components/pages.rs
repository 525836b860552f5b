use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <h2>{AppRoute::Home.label()}</h2> }
}

#[component]
pub fn ArchivesPage() -> impl IntoView {
    view! { <h2>{AppRoute::Archives.label()}</h2> }
}

#[component]
pub fn ReportPage() -> impl IntoView {
    view! { <h2>{AppRoute::Report.label()}</h2> }
}
