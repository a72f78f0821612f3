use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event};

use crate::page::{js_err, PageContext};
use crate::toast::Toaster;
use profile_preview_core::{copy_share_link, Clipboard, ClipboardError, CopyOutcome};

/// `navigator.clipboard`, when the page is allowed to use it.
pub(crate) struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::Unavailable("missing window".to_string()))?;
        let navigator = window.navigator();
        // undefined outside secure contexts
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| ClipboardError::Unavailable(js_err(err)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable(
                "navigator.clipboard missing".to_string(),
            ));
        }
        let clipboard = clipboard.unchecked_into::<web_sys::Clipboard>();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(js_err(err)))
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// One click: copies `origin + publicLink text` and reports the result in a
/// toast. Failures are logged here and never reach the caller.
pub(crate) async fn run_copy<C: Clipboard + ?Sized>(
    clipboard: &C,
    toaster: &Toaster,
    public_link: &Element,
) -> CopyOutcome {
    let origin = page_origin();
    let path = public_link.text_content().unwrap_or_default();
    let outcome = copy_share_link(clipboard, toaster, &origin, &path).await;
    if let CopyOutcome::Failed { error, .. } = &outcome {
        gloo::console::error!("Clipboard error:", error.to_string());
    }
    outcome
}

/// Wires the copy button, if the page has both the button and the public
/// link it copies. Returns `None` (installing nothing) otherwise.
pub(crate) fn install_copy_control(
    page: &PageContext,
    toaster: Rc<Toaster>,
) -> Option<EventListener> {
    let (Some(button), Some(public_link)) = (page.copy_button.as_ref(), page.public_link.clone())
    else {
        gloo::console::log!("profile preview: copy control missing");
        return None;
    };
    let listener = EventListener::new(button, "click", move |_event: &Event| {
        let toaster = toaster.clone();
        let public_link = public_link.clone();
        spawn_local(async move {
            run_copy(&BrowserClipboard, &toaster, &public_link).await;
        });
    });
    Some(listener)
}
