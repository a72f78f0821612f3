use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::page::apply_style;
use profile_preview_core::{Notify, ToastPhase, TOAST_BASE_STYLE, TOAST_ID};

#[derive(Default)]
struct ToastState {
    element: Option<HtmlElement>,
    hide_timer: Option<Timeout>,
}

/// Corner toast shared by every notification on the page.
///
/// The element is created on first use (or adopted if the markup already
/// has one) and is only ever faded, never removed. Each notification drops
/// the pending hide before scheduling its own, so the latest message always
/// stays up for the full `hide_ms`.
pub(crate) struct Toaster {
    document: Document,
    hide_ms: u32,
    state: RefCell<ToastState>,
}

impl Toaster {
    pub(crate) fn new(document: Document, hide_ms: u32) -> Self {
        Self {
            document,
            hide_ms,
            state: RefCell::new(ToastState::default()),
        }
    }

    fn ensure_element(&self) -> Option<HtmlElement> {
        if let Some(element) = self.state.borrow().element.as_ref() {
            return Some(element.clone());
        }
        let element = match self.document.get_element_by_id(TOAST_ID) {
            Some(existing) => existing.dyn_into::<HtmlElement>().ok()?,
            None => self.create_element()?,
        };
        self.state.borrow_mut().element = Some(element.clone());
        Some(element)
    }

    fn create_element(&self) -> Option<HtmlElement> {
        let body = self.document.body()?;
        let element = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        element.set_id(TOAST_ID);
        apply_style(&element, TOAST_BASE_STYLE);
        body.append_child(&element).ok()?;
        Some(element)
    }
}

impl Notify for Toaster {
    fn notify(&self, message: &str) {
        let Some(element) = self.ensure_element() else {
            gloo::console::warn!("toast unavailable", message);
            return;
        };
        element.set_text_content(Some(message));
        apply_style(&element, ToastPhase::Shown.style());
        let timer = Timeout::new(self.hide_ms, move || {
            apply_style(&element, ToastPhase::Hidden.style());
        });
        self.state.borrow_mut().hide_timer = Some(timer);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::page::document;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_toaster(hide_ms: u32) -> Toaster {
        let document = document().expect("document available");
        if let Some(existing) = document.get_element_by_id(TOAST_ID) {
            existing.remove();
        }
        Toaster::new(document, hide_ms)
    }

    fn toast_count() -> u32 {
        document()
            .and_then(|document| document.query_selector_all(&format!("#{TOAST_ID}")).ok())
            .map(|list| list.length())
            .unwrap_or(0)
    }

    fn toast_style(name: &str) -> String {
        document()
            .and_then(|document| document.get_element_by_id(TOAST_ID))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .and_then(|element| element.style().get_property_value(name).ok())
            .unwrap_or_default()
    }

    fn toast_text() -> String {
        document()
            .and_then(|document| document.get_element_by_id(TOAST_ID))
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn first_notify_creates_styled_toast() {
        set_panic_hook();
        let toaster = fresh_toaster(1_000);
        toaster.notify("hello");
        assert_eq!(toast_count(), 1);
        assert_eq!(toast_text(), "hello");
        assert_eq!(toast_style("position"), "fixed");
        assert_eq!(toast_style("opacity"), "1");
        assert!(toast_style("transform").starts_with("translateY(0"));
    }

    #[wasm_bindgen_test]
    fn later_notify_reuses_element() {
        set_panic_hook();
        let toaster = fresh_toaster(1_000);
        toaster.notify("one");
        toaster.notify("two");
        assert_eq!(toast_count(), 1);
        assert_eq!(toast_text(), "two");

        let second = Toaster::new(document().expect("document"), 1_000);
        second.notify("three");
        assert_eq!(toast_count(), 1);
        assert_eq!(toast_text(), "three");
    }

    #[wasm_bindgen_test]
    async fn toast_fades_after_delay() {
        set_panic_hook();
        let toaster = fresh_toaster(30);
        toaster.notify("bye");
        TimeoutFuture::new(80).await;
        assert_eq!(toast_style("opacity"), "0");
        assert_eq!(toast_style("transform"), "translateY(-10px)");
        assert_eq!(toast_count(), 1);
    }

    #[wasm_bindgen_test]
    async fn new_notify_cancels_pending_hide() {
        set_panic_hook();
        let toaster = fresh_toaster(150);
        toaster.notify("first");
        TimeoutFuture::new(100).await;
        toaster.notify("second");
        TimeoutFuture::new(100).await;
        assert_eq!(toast_style("opacity"), "1");
        TimeoutFuture::new(150).await;
        assert_eq!(toast_style("opacity"), "0");
    }
}
