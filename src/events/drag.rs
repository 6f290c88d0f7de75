use crate::constants::DRAG_EVENTS;
use crate::dom;
use crate::intake::{all_files, candidate_from_file, WebIntake};
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{route_drop, DragDepth};
use web_sys as web;

pub struct DropWiring {
    pub region: web::Element,
    pub overlay: Option<web::Element>,
    pub document: web::Document,
    pub intake: Rc<RefCell<WebIntake>>,
}

fn render_overlay(overlay: &Option<web::Element>, depth: &DragDepth) {
    if let Some(el) = overlay {
        dom::set_hidden(el, !depth.overlay_visible());
    }
}

pub fn wire_drag_and_drop(w: DropWiring) {
    // Keep the browser from opening a file dropped anywhere outside the region.
    for kind in DRAG_EVENTS {
        dom::listen(&w.document, kind, |ev: web::DragEvent| ev.prevent_default());
    }

    let depth = Rc::new(RefCell::new(DragDepth::default()));

    {
        let depth = depth.clone();
        let overlay = w.overlay.clone();
        dom::listen(&w.region, "dragenter", move |ev: web::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let mut d = depth.borrow_mut();
            d.enter();
            render_overlay(&overlay, &d);
        });
    }
    {
        let depth = depth.clone();
        let overlay = w.overlay.clone();
        dom::listen(&w.region, "dragover", move |ev: web::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            render_overlay(&overlay, &depth.borrow());
        });
    }
    {
        let depth = depth.clone();
        let overlay = w.overlay.clone();
        dom::listen(&w.region, "dragleave", move |ev: web::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let mut d = depth.borrow_mut();
            d.leave();
            render_overlay(&overlay, &d);
        });
    }

    let DropWiring {
        region,
        overlay,
        intake,
        ..
    } = w;
    dom::listen(&region, "drop", move |ev: web::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let files = all_files(ev.data_transfer().and_then(|dt| dt.files()));
        let mut d = depth.borrow_mut();
        route_drop(
            &mut d,
            &mut intake.borrow_mut(),
            files.into_iter().map(candidate_from_file),
        );
        render_overlay(&overlay, &d);
    });
    log::info!("[drag] drag and drop ready");
}
