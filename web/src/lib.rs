//! Browser front-end for the chat page.
//!
//! Validates the page's DOM, wires the prompt form's `submit` event to the
//! page controller and loads the existing conversation.

mod api;
mod dom;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, SubmitEvent};

use chatpage_core::{DomSelectors, PageConfig, PageController};

pub use api::{FetchBody, FetchTransport};
pub use dom::DomPage;

/// Entry point, run when the wasm module is instantiated.
///
/// A missing element aborts setup before any handler is wired.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = PageConfig::default();
    let page = DomPage::locate(&DomSelectors::default(), config.clone()).map_err(|e| {
        let message = e.to_string();
        console::error_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })?;

    let form = page.form().clone();
    let controller = Rc::new(PageController::new(page, FetchTransport::new(), config));

    // Failures are already routed to the controller's error handler.
    let submit_controller = Rc::clone(&controller);
    let on_submit = Closure::<dyn FnMut(SubmitEvent)>::new(move |event: SubmitEvent| {
        event.prevent_default();
        let controller = Rc::clone(&submit_controller);
        spawn_local(async move {
            let _ = controller.submit().await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    spawn_local(async move {
        let _ = controller.load_history().await;
    });

    Ok(())
}
