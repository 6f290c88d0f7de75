//! Loading indicator, error banner and progress bar visibility.
//!
//! [`StatusState`] is the pure state machine; the browser presenter renders it
//! into the DOM and owns the timers. Every delayed hide is keyed by a
//! [`DismissToken`], and a token only takes effect while its epoch is current,
//! so a timer left over from an earlier error or load can never hide newer
//! content.

use crate::config::ViewerConfig;
use crate::constants::LOAD_FAILURE_MESSAGE;
use std::rc::Rc;

/// Visibility operations used by file intake and viewer signal handlers.
pub trait StatusPresenter {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
}

impl<T: StatusPresenter + ?Sized> StatusPresenter for Rc<T> {
    fn show_loading(&self) {
        (**self).show_loading()
    }
    fn hide_loading(&self) {
        (**self).hide_loading()
    }
    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }
    fn hide_error(&self) {
        (**self).hide_error()
    }
}

/// Viewer `load` signal. Returns the delay after which auto-rotate should be
/// switched back on, since the viewer turns it off while loading a source.
pub fn handle_model_load<P: StatusPresenter + ?Sized>(
    presenter: &P,
    config: &ViewerConfig,
) -> Option<u32> {
    log::info!("[viewer] model loaded");
    presenter.hide_loading();
    presenter.hide_error();
    (config.load_rotate_delay_ms > 0).then_some(config.load_rotate_delay_ms)
}

/// Viewer `error` signal; the viewer gives no usable cause, so the banner
/// text is generic.
pub fn handle_model_error<P: StatusPresenter + ?Sized>(presenter: &P) {
    presenter.hide_loading();
    presenter.show_error(LOAD_FAILURE_MESSAGE);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    pub width_percent: f64,
    pub visible: bool,
    epoch: u64,
    hide_pending: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            width_percent: 0.0,
            visible: true,
            epoch: 0,
            hide_pending: false,
        }
    }
}

impl ProgressState {
    /// Show an empty bar for a fresh load and drop any pending hide.
    pub fn begin(&mut self) {
        self.width_percent = 0.0;
        self.visible = true;
        self.epoch += 1;
        self.hide_pending = false;
    }

    /// Apply a total-progress fraction. Returns a token when the bar reached
    /// completion and should be hidden after the configured delay.
    pub fn update(&mut self, fraction: f64) -> Option<DismissToken> {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.width_percent = fraction * 100.0;
        self.visible = true;
        self.epoch += 1;
        self.hide_pending = fraction >= 1.0;
        self.hide_pending.then_some(DismissToken(self.epoch))
    }

    pub fn expire(&mut self, token: DismissToken) -> bool {
        if !self.hide_pending || token.0 != self.epoch {
            return false;
        }
        self.hide_pending = false;
        self.visible = false;
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusState {
    loading: bool,
    error: Option<String>,
    error_epoch: u64,
    pub progress: ProgressState,
}

impl StatusState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_error_visible(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    /// Show `message` and return the token for its auto-dismiss. Showing an
    /// error always hides the loading indicator.
    pub fn show_error(&mut self, message: &str) -> DismissToken {
        self.loading = false;
        self.error = Some(message.to_string());
        self.error_epoch += 1;
        DismissToken(self.error_epoch)
    }

    pub fn hide_error(&mut self) {
        self.error = None;
        self.error_epoch += 1;
    }

    /// Auto-dismiss for the error identified by `token`; stale tokens are ignored.
    pub fn expire_error(&mut self, token: DismissToken) -> bool {
        if token.0 != self.error_epoch || self.error.is_none() {
            return false;
        }
        self.error = None;
        true
    }
}
