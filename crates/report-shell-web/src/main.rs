use leptos::prelude::*;
use report_shell::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ShellConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (ShellConfig::default(), Some(err)),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        leptos::logging::error!("console logger unavailable: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("{err}, falling back to defaults");
    }

    log::info!("mounting {}", config.title);
    leptos::mount::mount_to_body(move || view! { <Root config/> });
}
