use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <h1>"loading..."</h1>
        </div>
    }
}
