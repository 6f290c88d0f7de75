#![cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{CameraInteraction, FileIntakeController, StatusPresenter, ViewerConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod intake;
mod status;
mod viewer;

use viewer::{ModelViewer, ModelViewerElement, ObjectUrlSource};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gltf viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    let page = dom::PageElements::locate(&document)?;
    let config = ViewerConfig::default().with_overrides(|name| page.viewer.get_attribute(name));
    let viewer_el = ModelViewerElement::from_element(page.viewer.clone());

    // File intake works before the custom element is upgraded: `src` is
    // picked up once it is.
    let presenter = status::DomPresenter::new(
        status::StatusElements {
            loading: page.loading.clone(),
            error_banner: page.error_banner.clone(),
            error_text: page.error_text.clone(),
            progress_bar: page.progress_bar.clone(),
            progress_container: page.progress_container.clone(),
        },
        viewer_el.clone(),
        config.clone(),
    );
    presenter.hide_error();
    status::wire_viewer_signals(&viewer_el, presenter.clone());

    let intake = Rc::new(RefCell::new(FileIntakeController::new(
        config.clone(),
        ObjectUrlSource::new(viewer_el.clone()),
        presenter.clone(),
    )));
    intake::wire_file_input(&page.file_input, intake.clone());
    if let Some(label) = &page.upload_label {
        intake::wire_upload_label(label, page.file_input.clone());
    }
    if let Some(close) = &page.error_close {
        intake::wire_error_close(close, presenter.clone());
    }
    log::info!("[init] file intake ready");

    viewer::wait_until_defined().await?;
    log::info!("[init] model-viewer defined");
    viewer::configure(&viewer_el, &config);

    let camera = Rc::new(ModelViewer::probe(viewer_el.clone(), document.clone()));
    let interaction = Rc::new(RefCell::new(CameraInteraction::new(
        config.double_tap_window_ms,
    )));
    events::wire_camera_keys(&document, camera.clone(), interaction.clone());
    events::wire_viewer_pointer(camera, interaction);

    match page.drop_region.clone() {
        Some(region) => events::wire_drag_and_drop(events::drag::DropWiring {
            region,
            overlay: page.drag_overlay.clone(),
            document: document.clone(),
            intake,
        }),
        None => log::warn!("[drag] no drop region; drag and drop disabled"),
    }

    if config.startup_rotate_delay_ms > 0 {
        Timeout::new(config.startup_rotate_delay_ms, move || {
            viewer_el.set_auto_rotate(true);
            log::info!("[viewer] auto-rotate force enabled");
        })
        .forget();
    }
    log::info!("[init] all components initialized");
    Ok(())
}
