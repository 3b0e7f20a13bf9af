use dioxus::prelude::*;

mod platform;
mod ui;

use css_grid_generator_config::Config;
use ui::App;

fn main() {
    // Initialize logging
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("css-grid-generator starting up!");

    #[cfg(not(target_arch = "wasm32"))]
    {
        log::info!("About to launch Dioxus app for desktop");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(make_window_config())
            .launch(app_root);
    }

    #[cfg(target_arch = "wasm32")]
    {
        dioxus::launch(app_root);
    }
}

fn app_root() -> Element {
    let config = use_hook(load_config);

    log::info!(
        "app_root() creating App component with a {}x{} grid",
        config.grid.columns,
        config.grid.rows
    );

    rsx! {
        App {
            dimensions: config.grid,
            options: config.output,
        }
    }
}

/// Settings from the config file, or the built-in defaults when there is no
/// usable file. A broken config never stops the app from starting.
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Config {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded settings from config file");
            config
        }
        Ok(None) => {
            log::info!("No config file found, using default settings");
            create_default_config()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            log::warn!("Will use default settings");
            Config::default()
        }
    }
}

/// Write the defaults to the config path so there is a file to edit
#[cfg(not(target_arch = "wasm32"))]
fn create_default_config() -> Config {
    let default_config = Config::default();
    match default_config.save() {
        Ok(()) => log::info!(
            "Created default config file at {}",
            Config::config_path().display()
        ),
        Err(e) => {
            log::warn!("Failed to create default config file: {e}");
            log::warn!("Will use default settings without persisting config");
        }
    }
    default_config
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Config {
    Config::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("CSS Grid Generator")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
