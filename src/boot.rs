use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Event};

use crate::app_config::{load_page_config, PageConfig};
use crate::copy_link::install_copy_control;
use crate::page::{self, PageContext};
use crate::preview_view::install_live_preview;
use crate::toast::Toaster;

/// Everything installed on the page; dropping it detaches all listeners.
pub(crate) struct App {
    _preview_listeners: Vec<EventListener>,
    _copy_listener: Option<EventListener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static READY_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn install(document: &Document, config: PageConfig) -> App {
    let page = Rc::new(PageContext::resolve(document));
    let toaster = Rc::new(Toaster::new(page.document.clone(), config.toast_hide_ms));
    App {
        _preview_listeners: install_live_preview(&page),
        _copy_listener: install_copy_control(&page, toaster),
    }
}

fn start_on(document: &Document) {
    let app = install(document, load_page_config());
    APP.with(|slot| {
        *slot.borrow_mut() = Some(app);
    });
    gloo::console::log!("profile preview: ready");
}

/// `document.readyState` is a plain string in web-sys.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Installs the app once the DOM has been parsed.
pub(crate) fn start() {
    let Some(document) = page::document() else {
        return;
    };
    if is_parsed(&document.ready_state()) {
        start_on(&document);
        return;
    }
    let target = document.clone();
    let listener = EventListener::once(&target, "DOMContentLoaded", move |_event: &Event| {
        start_on(&document);
    });
    READY_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}
