use leptos::prelude::*;

use super::layout::Shell;
use crate::error::RouteError;

#[component]
pub fn ErrorBody(error: RouteError) -> impl IntoView {
    log::warn!("route failed: {error:?}");

    view! {
        <div class="error-body">
            <h2>"Ooof, that didn't go well."</h2>
            <br/>
            <p>
                <i>{error.display_text().to_string()}</i>
            </p>
        </div>
    }
}

/// Full page for errors raised outside the layout route, e.g. unmatched paths.
#[component]
pub fn ErrorPage(error: RouteError) -> impl IntoView {
    view! {
        <Shell>
            <ErrorBody error/>
        </Shell>
    }
}
