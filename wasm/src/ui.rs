//! DOM implementations of the submitter and history views

use shared::{
    FormFields, HistoryItemView, HistoryView, RecommendationView, SubmitUi, BUSY_CLASSES,
    BUSY_LABEL, IDLE_LABEL,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::dom::{add_classes, alert, element_by_id, remove_classes};

/// Classes of one rendered history item
const HISTORY_ITEM_CLASSES: [&str; 4] = ["bg-white", "p-3", "rounded-lg", "shadow"];

/// Read the five form fields by id
pub fn read_form(document: &Document) -> Result<FormFields, JsValue> {
    Ok(FormFields {
        location: field_value(document, "location")?,
        month: field_value(document, "month")?,
        n: field_value(document, "n")?,
        p: field_value(document, "p")?,
        k: field_value(document, "k")?,
    })
}

fn field_value(document: &Document, id: &str) -> Result<String, JsValue> {
    let element: Element = element_by_id(document, id)?;
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Ok(select.value());
    }
    element
        .dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .map_err(|_| JsValue::from_str(&format!("#{} is not a form field", id)))
}

/// Trigger button and result panel
pub struct DomSubmitUi {
    button: HtmlButtonElement,
    result_box: Element,
    crop_name: HtmlElement,
    reasoning: Element,
}

impl DomSubmitUi {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            button: element_by_id(document, "recommendBtn")?,
            result_box: element_by_id(document, "recommendResult")?,
            crop_name: element_by_id(document, "cropName")?,
            reasoning: element_by_id(document, "reasoning")?,
        })
    }

    pub fn button(&self) -> &HtmlButtonElement {
        &self.button
    }
}

impl SubmitUi for DomSubmitUi {
    fn set_busy(&self, busy: bool) {
        self.button.set_disabled(busy);
        if busy {
            self.button.set_inner_text(BUSY_LABEL);
            add_classes(&self.button, &BUSY_CLASSES);
        } else {
            self.button.set_inner_text(IDLE_LABEL);
            remove_classes(&self.button, &BUSY_CLASSES);
        }
    }

    fn alert(&self, message: &str) {
        alert(message);
    }

    fn show_recommendation(&self, view: &RecommendationView) {
        remove_classes(&self.result_box, &[shared::HIDDEN_PANEL_CLASS]);
        self.crop_name.set_inner_text(&view.headline);
        self.reasoning.set_inner_html(&view.to_html());
    }
}

/// The `historyList` element
pub struct DomHistoryView {
    document: Document,
    list: Element,
}

impl DomHistoryView {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            list: element_by_id(document, "historyList")?,
        })
    }

    fn append_item(&self, item: &HistoryItemView) -> Result<(), JsValue> {
        let li = self.document.create_element("li")?;
        add_classes(&li, &HISTORY_ITEM_CLASSES);
        li.set_inner_html(&item.to_html());
        self.list.append_child(&li)?;
        Ok(())
    }
}

impl HistoryView for DomHistoryView {
    fn show(&self, items: &[HistoryItemView]) {
        self.list.set_inner_html("");
        for item in items {
            if let Err(e) = self.append_item(item) {
                web_sys::console::error_1(&e);
            }
        }
    }
}
