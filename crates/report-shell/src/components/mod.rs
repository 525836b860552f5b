mod error_page;
mod layout;
mod loading;
mod menu;
mod pages;
mod root;

pub use error_page::{ErrorBody, ErrorPage};
pub use layout::{App, Shell};
pub use loading::Loading;
pub use menu::Menu;
pub use pages::{ArchivesPage, HomePage, ReportPage};
pub use root::Root;
