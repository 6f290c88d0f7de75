use crate::constants::*;
use anyhow::anyhow;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Elements the page must provide, plus the optional ones whose absence
/// only disables a convenience.
pub struct PageElements {
    pub viewer: web::HtmlElement,
    pub file_input: web::HtmlInputElement,
    pub loading: web::Element,
    pub error_banner: web::Element,
    pub error_text: web::Element,
    pub error_close: Option<web::Element>,
    pub upload_label: Option<web::Element>,
    pub drag_overlay: Option<web::Element>,
    pub drop_region: Option<web::Element>,
    pub progress_bar: Option<web::HtmlElement>,
    pub progress_container: Option<web::Element>,
}

impl PageElements {
    pub fn locate(document: &web::Document) -> anyhow::Result<Self> {
        let viewer = require_id(document, VIEWER_ID)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("#{} is not an HTML element", VIEWER_ID))?;
        if !viewer.tag_name().eq_ignore_ascii_case(MODEL_VIEWER_TAG) {
            return Err(anyhow!(
                "#{} is a <{}>, expected <{}>",
                VIEWER_ID,
                viewer.tag_name().to_ascii_lowercase(),
                MODEL_VIEWER_TAG
            ));
        }
        let file_input = require_id(document, FILE_INPUT_ID)?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|_| anyhow!("#{} is not an <input>", FILE_INPUT_ID))?;

        let progress_bar = query(&viewer, PROGRESS_BAR_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let progress_container = query(&viewer, PROGRESS_CONTAINER_SELECTOR);

        Ok(Self {
            file_input,
            loading: require_id(document, LOADING_ID)?,
            error_banner: require_id(document, ERROR_BANNER_ID)?,
            error_text: require_id(document, ERROR_TEXT_ID)?,
            error_close: optional_id(document, ERROR_CLOSE_ID),
            upload_label: query(document, UPLOAD_LABEL_SELECTOR),
            drag_overlay: optional_id(document, DRAG_OVERLAY_ID),
            drop_region: query(document, DROP_REGION_SELECTOR),
            progress_bar,
            progress_container,
            viewer,
        })
    }
}

fn require_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

fn optional_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[init] optional #{} not found", id);
    }
    el
}

/// `querySelector` on a document or element; a selector error counts as absent.
fn query(root: &JsValue, selector: &str) -> Option<web::Element> {
    let found = if let Some(doc) = root.dyn_ref::<web::Document>() {
        doc.query_selector(selector)
    } else if let Some(el) = root.dyn_ref::<web::Element>() {
        el.query_selector(selector)
    } else {
        Ok(None)
    };
    let el = found.ok().flatten();
    if el.is_none() {
        log::warn!("[init] optional {} not found", selector);
    }
    el
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    set_class(el, HIDDEN_CLASS, hidden);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Attach `handler` for `kind` events for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        log::warn!("[init] could not listen for {}: {:?}", kind, e);
    }
    closure.forget();
}

/// Resolves once the document has been parsed.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = JsFuture::from(ready).await;
}
