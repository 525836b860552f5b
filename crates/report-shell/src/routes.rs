use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes, ToHref};
use leptos_router::path;

use crate::components::{App, ArchivesPage, ErrorPage, HomePage, ReportPage};
use crate::error::RouteError;

/// The navigation targets of the reporting front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Archives,
    Report,
    /// Never linked; every unknown path resolves here.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route matches path: {0}")]
pub struct RouteParseError(pub String);

impl AppRoute {
    /// Menu targets, in display order.
    pub const MENU: [AppRoute; 3] = [AppRoute::Home, AppRoute::Archives, AppRoute::Report];

    pub const fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Archives => "/archives",
            AppRoute::Report => "/report",
            AppRoute::NotFound => "/404",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "eCommerce Reporting Service",
            AppRoute::Archives => "Archives",
            AppRoute::Report => "Report",
            AppRoute::NotFound => "Not Found",
        }
    }

    /// List-item class used by the menu: the title sits left, the rest right.
    pub const fn menu_class(&self) -> &'static str {
        match self {
            AppRoute::Home => "ul-left",
            AppRoute::Archives | AppRoute::Report | AppRoute::NotFound => "ul-right",
        }
    }

    /// The router tree: one layout route hosting every page, with the error
    /// page as the fallback for unmatched paths.
    pub fn routes() -> impl IntoView {
        view! {
            <Routes fallback=AppRoute::fallback>
                <ParentRoute path=path!("") view=App>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("archives") view=ArchivesPage/>
                    <Route path=path!("report") view=ReportPage/>
                </ParentRoute>
            </Routes>
        }
    }

    pub fn fallback() -> impl IntoView {
        view! { <ErrorPage error=RouteError::not_found()/> }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl ToHref for AppRoute {
    fn to_href(&self) -> Box<dyn Fn() -> String + '_> {
        let owned_self = *self;
        Box::new(move || owned_self.path().to_string())
    }
}

impl FromStr for AppRoute {
    type Err = RouteParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let path = strip_query_and_fragment(input);
        let path_segments: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match path_segments.as_slice() {
            [] => Ok(AppRoute::Home),
            ["archives"] => Ok(AppRoute::Archives),
            ["report"] => Ok(AppRoute::Report),
            ["404"] => Ok(AppRoute::NotFound),
            _ => Err(RouteParseError(input.to_string())),
        }
    }
}

impl From<&str> for AppRoute {
    fn from(value: &str) -> Self {
        value.parse().unwrap_or(AppRoute::NotFound)
    }
}

fn strip_query_and_fragment(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(idx) => &url[..idx],
        None => url,
    }
}
