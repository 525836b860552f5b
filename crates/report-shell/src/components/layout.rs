use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::error_page::ErrorBody;
use super::loading::Loading;
use super::menu::Menu;
use crate::error::RouteError;

/// Page frame shared by every route: the menu on top, `children` below.
///
/// The body is whatever the caller passes in; the router layout hands it an
/// `<Outlet/>`, the error page hands it the error body.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="App">
            <div class="container">
                <div class="header">
                    <Menu/>
                </div>
                <div class="body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Layout route. Render failures of the matched page are caught here and shown
/// in place of the page, with the menu still usable.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <ErrorBoundary fallback=|errors| view! { <CaughtErrors errors/> }>
                <Suspense fallback=|| view! { <Loading/> }>
                    <Outlet/>
                </Suspense>
            </ErrorBoundary>
        </Shell>
    }
}

#[component]
fn CaughtErrors(errors: ArcRwSignal<Errors>) -> impl IntoView {
    move || {
        let error = RouteError::most_relevant(
            errors.get().into_iter().map(|(_, error)| RouteError::from(&error)),
        );
        view! { <ErrorBody error/> }
    }
}
