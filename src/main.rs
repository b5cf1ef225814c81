// Windows release: hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use admin_dashboard::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    admin_dashboard::{PERSISTENCE, ui::UI_TEXT},
    clap::Parser,
    eframe::NativeOptions,
    std::panic,
};

#[cfg(target_arch = "wasm32")]
use {
    admin_dashboard::DashboardError,
    wasm_bindgen::{JsCast, prelude::*},
};

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(env!("CARGO_CRATE_NAME"), my_code_level)
        .level_for("admin_dashboard", my_code_level)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(DashboardError::MissingElement(CANVAS_ID))
        .map_err(|e| {
            log::error!("{}", e);
            JsValue::from_str(&e.to_string())
        })?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn native_options() -> NativeOptions {
    NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_app_id(PERSISTENCE.app.app_id)
            .with_title(UI_TEXT.app_title.as_str()),
        // Only the theme flag goes into storage.
        persist_window: false,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("admin_dashboard"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = native_options();

    eframe::run_native(
        PERSISTENCE.app.app_id,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_window_geometry_not_persisted() {
        let options = native_options();
        assert!(!options.persist_window);
    }

    #[test]
    fn test_window_title_from_ui_text() {
        let options = native_options();
        assert_eq!(options.viewport.title.as_deref(), Some("Admin Dashboard"));
    }
}
