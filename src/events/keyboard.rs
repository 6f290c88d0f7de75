use crate::dom;
use crate::viewer::ModelViewer;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{camera, CameraInteraction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_camera_keydown(
    ev: &web::KeyboardEvent,
    viewer: &ModelViewer,
    interaction: &RefCell<CameraInteraction>,
) {
    let target = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
    let tag = target.as_ref().map(|el| el.tag_name());
    let editable = target
        .as_ref()
        .and_then(|el| el.dyn_ref::<web::HtmlElement>())
        .map(|el| el.is_content_editable())
        .unwrap_or(false);

    let modifier_held = ev.ctrl_key() || ev.meta_key() || ev.alt_key();

    let command = interaction
        .borrow()
        .on_key(&ev.key(), tag.as_deref(), editable, modifier_held);
    if let Some(command) = command {
        camera::execute(viewer, command);
        ev.prevent_default();
    }
}

pub fn wire_camera_keys(
    document: &web::Document,
    viewer: Rc<ModelViewer>,
    interaction: Rc<RefCell<CameraInteraction>>,
) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_camera_keydown(&ev, &viewer, &interaction);
    });
}
