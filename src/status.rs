use crate::constants::PROGRESS_HIDE_CLASS;
use crate::dom;
use crate::viewer::ModelViewerElement;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use viewer_core::{
    handle_model_error, handle_model_load, DismissToken, StatusPresenter, StatusState, ViewerConfig,
};
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct StatusElements {
    pub loading: web::Element,
    pub error_banner: web::Element,
    pub error_text: web::Element,
    pub progress_bar: Option<web::HtmlElement>,
    pub progress_container: Option<web::Element>,
}

/// Renders [`StatusState`] into the page and owns one cancellable timer slot
/// per kind of delayed work. Replacing a slot drops, and so cancels, the
/// previous timer.
pub struct DomPresenter {
    this: Weak<DomPresenter>,
    elements: StatusElements,
    viewer: ModelViewerElement,
    config: ViewerConfig,
    state: RefCell<StatusState>,
    error_timer: RefCell<Option<Timeout>>,
    progress_timer: RefCell<Option<Timeout>>,
    rotate_timer: RefCell<Option<Timeout>>,
}

impl DomPresenter {
    pub fn new(elements: StatusElements, viewer: ModelViewerElement, config: ViewerConfig) -> Rc<Self> {
        let presenter = Rc::new_cyclic(|this| Self {
            this: this.clone(),
            elements,
            viewer,
            config,
            state: RefCell::new(StatusState::default()),
            error_timer: RefCell::new(None),
            progress_timer: RefCell::new(None),
            rotate_timer: RefCell::new(None),
        });
        presenter.render();
        presenter
    }

    fn render(&self) {
        let state = self.state.borrow();
        dom::set_hidden(&self.elements.loading, !state.is_loading());
        if let Some(text) = state.error_text() {
            self.elements.error_text.set_text_content(Some(text));
        }
        dom::set_hidden(&self.elements.error_banner, !state.is_error_visible());

        if let Some(bar) = &self.elements.progress_bar {
            let width = format!("{}%", state.progress.width_percent);
            _ = bar.style().set_property("width", &width);
        }
        if let Some(container) = &self.elements.progress_container {
            dom::set_class(container, PROGRESS_HIDE_CLASS, !state.progress.visible);
        }
    }

    fn expire_error(&self, token: DismissToken) {
        if self.state.borrow_mut().expire_error(token) {
            log::debug!("[status] error auto-dismissed");
            self.render();
        }
    }

    fn expire_progress(&self, token: DismissToken) {
        if self.state.borrow_mut().progress.expire(token) {
            self.render();
        }
    }

    pub fn on_model_load(&self) {
        let Some(delay) = handle_model_load(self, &self.config) else {
            return;
        };
        let viewer = self.viewer.clone();
        *self.rotate_timer.borrow_mut() = Some(Timeout::new(delay, move || {
            viewer.set_auto_rotate(true);
        }));
    }

    pub fn on_model_error(&self, detail: &JsValue) {
        log::error!("[viewer] model failed to load: {:?}", detail);
        handle_model_error(self);
    }

    pub fn on_progress(&self, fraction: f64) {
        let token = self.state.borrow_mut().progress.update(fraction);
        self.render();
        let mut slot = self.progress_timer.borrow_mut();
        *slot = token.map(|token| {
            let this = self.this.clone();
            Timeout::new(self.config.progress_hide_ms, move || {
                if let Some(p) = this.upgrade() {
                    p.expire_progress(token);
                }
            })
        });
    }
}

impl StatusPresenter for DomPresenter {
    fn show_loading(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.show_loading();
            state.progress.begin();
        }
        self.progress_timer.borrow_mut().take();
        self.render();
    }

    fn hide_loading(&self) {
        self.state.borrow_mut().hide_loading();
        self.render();
    }

    fn show_error(&self, message: &str) {
        let token = self.state.borrow_mut().show_error(message);
        self.render();
        let this = self.this.clone();
        *self.error_timer.borrow_mut() = Some(Timeout::new(self.config.error_dismiss_ms, move || {
            if let Some(p) = this.upgrade() {
                p.expire_error(token);
            }
        }));
    }

    fn hide_error(&self) {
        self.state.borrow_mut().hide_error();
        self.error_timer.borrow_mut().take();
        self.render();
    }
}

pub fn wire_viewer_signals(viewer: &ModelViewerElement, presenter: Rc<DomPresenter>) {
    let on_load = presenter.clone();
    dom::listen(viewer, "load", move |_: web::Event| on_load.on_model_load());

    let on_error = presenter.clone();
    dom::listen(viewer, "error", move |ev: web::CustomEvent| {
        on_error.on_model_error(&ev.detail())
    });

    dom::listen(viewer, "progress", move |ev: web::CustomEvent| {
        let fraction = js_sys::Reflect::get(&ev.detail(), &JsValue::from_str("totalProgress"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        presenter.on_progress(fraction);
    });
}
