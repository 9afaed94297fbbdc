//! JS-facing entry points.
//!
//! The loader calls `start()` (or `startWithConfig(json)`) once. If the
//! document is still parsing, wiring waits for `DOMContentLoaded`. Exactly one
//! controller is kept per page; starting again replaces the previous one.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::controller::PageController;
use super::listener::Listener;
use super::{document, window};
use crate::config::PageConfig;
use crate::error::PageError;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<Listener>> = const { RefCell::new(None) };
}

/// Start with the default configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(PageConfig::default()).map_err(Into::into)
}

/// Start with a JSON `PageConfig`; missing fields take defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json).map_err(PageError::from)?;
    start_with(config).map_err(Into::into)
}

/// Tear down the running controller and cancel a pending start.
#[wasm_bindgen]
pub fn teardown() {
    PENDING.with(|pending| pending.borrow_mut().take());
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(controller) = controller {
        controller.teardown();
        log::debug!("page controller torn down");
    }
}

/// Theme currently applied by the running controller.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    CONTROLLER.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|controller| controller.current_theme().as_str().to_owned())
    })
}

fn start_with(config: PageConfig) -> Result<(), PageError> {
    install_logging(&config)?;
    let window = window()?;
    let document = document(&window)?;

    if !is_loading(&document) {
        mount(&config);
        return Ok(());
    }

    let listener = Listener::new(&document, "DOMContentLoaded", move |_| mount(&config))?;
    PENDING.with(|pending| *pending.borrow_mut() = Some(listener));
    Ok(())
}

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

fn mount(config: &PageConfig) {
    let previous = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(previous) = previous {
        previous.teardown();
    }
    match PageController::init(config) {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(err) => log::error!("page controller failed to start: {err}"),
    }
}

fn install_logging(config: &PageConfig) -> Result<(), PageError> {
    let level = config.log_level()?;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        // Logger already installed by an earlier start; only adjust the level.
        log::set_max_level(level.to_level_filter());
    }
    Ok(())
}
