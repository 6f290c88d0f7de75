use crate::dom;
use crate::viewer::ModelViewer;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{camera, CameraInteraction};
use web_sys as web;

/// Double-click and double-tap reset the camera; the context menu is
/// suppressed over the viewer.
pub fn wire_viewer_pointer(viewer: Rc<ModelViewer>, interaction: Rc<RefCell<CameraInteraction>>) {
    let element = viewer.element().clone();

    dom::listen(&element, "contextmenu", |ev: web::MouseEvent| ev.prevent_default());

    {
        let viewer = viewer.clone();
        let interaction = interaction.clone();
        dom::listen(&element, "click", move |ev: web::MouseEvent| {
            let command = interaction.borrow_mut().on_click(ev.time_stamp());
            if let Some(command) = command {
                camera::execute(&*viewer, command);
                ev.prevent_default();
            }
        });
    }

    {
        let interaction = interaction.clone();
        dom::listen(&element, "touchstart", move |ev: web::TouchEvent| {
            interaction.borrow_mut().on_touch_start(ev.time_stamp());
        });
    }

    dom::listen(&element, "touchend", move |ev: web::TouchEvent| {
        let touches = ev.changed_touches().length();
        let command = interaction
            .borrow_mut()
            .on_touch_end(ev.time_stamp(), touches);
        if let Some(command) = command {
            camera::execute(&*viewer, command);
            ev.prevent_default();
        }
    });
}
