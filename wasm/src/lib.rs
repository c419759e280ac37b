//! WebAssembly front-end for the Crop Advisor
//!
//! Binds the page on load:
//! - Tab selectors toggle content panels
//! - The recommend button submits the form to the recommendation service
//! - The history list is rendered from `localStorage`

use std::rc::Rc;

use shared::{HistoryStore, Submitter, DEFAULT_ENDPOINT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod dom;
pub mod storage;
pub mod tabs;
pub mod ui;

pub use api::FetchClient;
pub use storage::{BrowserClock, LocalStorageRepository};
pub use ui::{DomHistoryView, DomSubmitUi};

type BrowserSubmitter = Submitter<FetchClient, LocalStorageRepository, BrowserClock>;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    dom::log("Starting Crop Advisor");
    mount(DEFAULT_ENDPOINT)
}

/// Wire the page against `endpoint`
fn mount(endpoint: &str) -> Result<(), JsValue> {
    let document = dom::document()?;

    tabs::bind_tabs(&document)?;

    let history = HistoryStore::new(LocalStorageRepository::default(), BrowserClock);
    let history_view = Rc::new(DomHistoryView::from_document(&document)?);
    history.render(history_view.as_ref());

    let submitter: Rc<BrowserSubmitter> =
        Rc::new(Submitter::new(FetchClient::new(endpoint), history));
    let submit_ui = Rc::new(DomSubmitUi::from_document(&document)?);

    let button = submit_ui.button().clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let submitter = Rc::clone(&submitter);
        let submit_ui = Rc::clone(&submit_ui);
        let history_view = Rc::clone(&history_view);
        let document = document.clone();

        spawn_local(async move {
            let fields = match ui::read_form(&document) {
                Ok(fields) => fields,
                Err(e) => {
                    web_sys::console::error_1(&e);
                    return;
                }
            };
            // Outcome is already shown to the user by the submitter
            let _ = submitter
                .submit(&fields, submit_ui.as_ref(), history_view.as_ref())
                .await;
        });
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// Confidence fraction as the percentage shown in the results list
#[wasm_bindgen]
pub fn format_confidence(confidence: f64) -> String {
    shared::format_percent(confidence)
}

/// Render a raw service response body as result markup
#[wasm_bindgen]
pub fn render_response(body: &str) -> Result<String, JsValue> {
    match shared::ServiceResponse::from_json(body) {
        Ok(shared::ServiceResponse::Success(result)) => {
            Ok(shared::compute_display_model(&result).to_html())
        }
        Ok(shared::ServiceResponse::Failure { error }) => Err(JsValue::from_str(
            &shared::service_error_message(&error),
        )),
        Err(e) => Err(JsValue::from_str(&format!("Invalid response JSON: {}", e))),
    }
}

/// Markup of every stored history item, oldest first
#[wasm_bindgen]
pub fn render_history(raw: Option<String>) -> String {
    let log = shared::HistoryLog::decode(raw.as_deref());
    shared::history_view(&log)
        .iter()
        .map(|item| format!("<li>{}</li>", item.to_html()))
        .collect()
}
