pub mod components;
pub mod config;
pub mod error;
pub mod routes;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{ConfigError, ShellConfig};
    pub use crate::error::RouteError;
    pub use crate::routes::{AppRoute, RouteParseError};
}
