use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Event;

use crate::page::{control_value, PageContext};
use profile_preview_core::{synchronize, FieldId, OutputId, PreviewSurface};

pub(crate) struct DomPreviewSurface<'a> {
    page: &'a PageContext,
}

impl<'a> DomPreviewSurface<'a> {
    pub(crate) fn new(page: &'a PageContext) -> Self {
        Self { page }
    }
}

impl PreviewSurface for DomPreviewSurface<'_> {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.page.field(field).map(control_value)
    }

    fn has_output(&self, output: OutputId) -> bool {
        self.page.output(output).is_some()
    }

    fn set_text(&mut self, output: OutputId, text: &str) {
        if let Some(element) = self.page.output(output) {
            element.set_text_content(Some(text));
        }
    }

    fn set_visible(&mut self, output: OutputId, visible: bool) {
        if let Some(element) = self.page.output(output) {
            let display = if visible { "flex" } else { "none" };
            let _ = element.style().set_property("display", display);
        }
    }

    fn set_href(&mut self, output: OutputId, href: &str) {
        if let Some(element) = self.page.output(output) {
            let _ = element.set_attribute("href", href);
        }
    }
}

pub(crate) fn sync_page(page: &PageContext) {
    synchronize(&mut DomPreviewSurface::new(page));
}

/// Runs one pass now and re-runs the full pass on every `input` event from a
/// watched field. The returned listeners must stay alive.
pub(crate) fn install_live_preview(page: &Rc<PageContext>) -> Vec<EventListener> {
    sync_page(page);
    FieldId::ALL
        .into_iter()
        .filter_map(|id| page.field(id))
        .map(|element| {
            let page = page.clone();
            EventListener::new(element, "input", move |_event: &Event| {
                sync_page(&page);
            })
        })
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::page::document;
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, HtmlInputElement};

    use profile_preview_core::{BIO_PLACEHOLDER, CUSTOM_LINK_DEFAULT_LABEL, NAME_PLACEHOLDER};

    wasm_bindgen_test_configure!(run_in_browser);

    const FORM_MARKUP: &str = r#"
        <input id="name" value="  Mia  ">
        <textarea id="bio"></textarea>
        <input id="instagram" value="https://instagram.com/mia">
        <input id="twitter" value="">
        <input id="youtube">
        <input id="linkedin">
        <input id="github">
        <input id="customLabel">
        <input id="customUrl">
        <h2 id="previewName"></h2>
        <p id="previewBio"></p>
        <a id="linkInstagram"></a>
        <a id="linkTwitter"></a>
        <a id="linkYoutube"></a>
        <a id="linkLinkedin"></a>
        <a id="linkGithub"></a>
        <a id="linkCustom"><span id="linkCustomLabel"></span></a>
    "#;

    fn mount(markup: &str) -> Element {
        let document = document().expect("document available");
        let root = document.create_element("div").expect("create fixture root");
        root.set_inner_html(markup);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append fixture");
        root
    }

    fn element<T: JsCast>(id: &str) -> T {
        document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<T>().ok())
            .unwrap_or_else(|| panic!("missing #{id}"))
    }

    fn text(id: &str) -> String {
        element::<Element>(id).text_content().unwrap_or_default()
    }

    fn display(id: &str) -> String {
        element::<HtmlElement>(id)
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    fn type_into(id: &str, value: &str) {
        let input = element::<HtmlInputElement>(id);
        input.set_value(value);
        let event = Event::new("input").expect("create input event");
        input.dispatch_event(&event).expect("dispatch input");
    }

    #[wasm_bindgen_test]
    fn initial_pass_reflects_prefilled_values() {
        set_panic_hook();
        let root = mount(FORM_MARKUP);
        let page = Rc::new(PageContext::resolve(&document().expect("document")));
        let _listeners = install_live_preview(&page);

        assert_eq!(text("previewName"), "Mia");
        assert_eq!(text("previewBio"), BIO_PLACEHOLDER);
        assert_eq!(display("linkInstagram"), "flex");
        assert_eq!(
            element::<Element>("linkInstagram").get_attribute("href").as_deref(),
            Some("https://instagram.com/mia")
        );
        assert_eq!(display("linkTwitter"), "none");
        assert_eq!(display("linkCustom"), "none");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn input_events_rerun_the_pass() {
        set_panic_hook();
        let root = mount(FORM_MARKUP);
        let page = Rc::new(PageContext::resolve(&document().expect("document")));
        let _listeners = install_live_preview(&page);

        type_into("name", "   ");
        assert_eq!(text("previewName"), NAME_PLACEHOLDER);

        type_into("customUrl", " https://mia.dev ");
        assert_eq!(display("linkCustom"), "flex");
        assert_eq!(
            element::<Element>("linkCustom").get_attribute("href").as_deref(),
            Some("https://mia.dev")
        );
        assert_eq!(text("linkCustomLabel"), CUSTOM_LINK_DEFAULT_LABEL);

        type_into("customLabel", "Portfolio");
        assert_eq!(text("linkCustomLabel"), "Portfolio");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn partial_markup_is_tolerated() {
        set_panic_hook();
        let root = mount(r#"<input id="name" value="Mia"><a id="linkGithub"></a>"#);
        let page = Rc::new(PageContext::resolve(&document().expect("document")));
        let listeners = install_live_preview(&page);

        assert_eq!(listeners.len(), 1);
        assert_eq!(display("linkGithub"), "");
        root.remove();
    }
}
