use std::collections::HashMap;

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use profile_preview_core::{FieldId, OutputId, COPY_BUTTON_ID, PUBLIC_LINK_ID};

/// Element handles resolved once when the page becomes interactive.
pub(crate) struct PageContext {
    pub(crate) document: Document,
    fields: HashMap<FieldId, Element>,
    outputs: HashMap<OutputId, HtmlElement>,
    pub(crate) copy_button: Option<Element>,
    pub(crate) public_link: Option<Element>,
}

impl PageContext {
    pub(crate) fn resolve(document: &Document) -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .filter_map(|id| Some((id, document.get_element_by_id(id.input_id())?)))
            .collect();
        let outputs = OutputId::ALL
            .into_iter()
            .filter_map(|id| {
                let element = document.get_element_by_id(id.element_id())?;
                Some((id, element.dyn_into::<HtmlElement>().ok()?))
            })
            .collect();
        Self {
            document: document.clone(),
            fields,
            outputs,
            copy_button: document.get_element_by_id(COPY_BUTTON_ID),
            public_link: document.get_element_by_id(PUBLIC_LINK_ID),
        }
    }

    pub(crate) fn field(&self, id: FieldId) -> Option<&Element> {
        self.fields.get(&id)
    }

    pub(crate) fn output(&self, id: OutputId) -> Option<&HtmlElement> {
        self.outputs.get(&id)
    }
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Current `value` of a form control; elements without one read as empty.
pub(crate) fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub(crate) fn apply_style(element: &HtmlElement, style: &[(&str, &str)]) {
    let declaration = element.style();
    for (name, value) in style {
        let _ = declaration.set_property(name, value);
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        if let Some(message) = err.to_string().as_string() {
            return message;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
