use crate::gestures::{is_text_entry_tag, DoubleClickDetector, DoubleTapDetector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    Reset,
    ToggleAutoRotate,
    ToggleFullscreen,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<CameraCommand> {
    match key {
        "r" | "R" => Some(CameraCommand::Reset),
        " " => Some(CameraCommand::ToggleAutoRotate),
        "f" | "F" => Some(CameraCommand::ToggleFullscreen),
        _ => None,
    }
}

/// Optional camera methods the viewer element was found to expose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewerCapabilities {
    pub reset_turntable: bool,
    pub jump_to_goal: bool,
}

/// The slice of the embedded viewer that camera commands act on.
pub trait CameraSurface {
    fn capabilities(&self) -> ViewerCapabilities;
    fn reset_turntable_rotation(&self);
    fn jump_camera_to_goal(&self);
    fn auto_rotate(&self) -> bool;
    fn set_auto_rotate(&self, enabled: bool);
    fn is_fullscreen(&self) -> bool;
    /// Rejections are reported by the implementation, never to the user.
    fn request_fullscreen(&self);
    fn exit_fullscreen(&self);
}

/// Returns false when the viewer offers neither reset capability.
pub fn reset_camera<S: CameraSurface + ?Sized>(surface: &S) -> bool {
    let caps = surface.capabilities();
    if caps.reset_turntable {
        surface.reset_turntable_rotation();
    }
    if caps.jump_to_goal {
        surface.jump_camera_to_goal();
    }
    if caps.reset_turntable || caps.jump_to_goal {
        log::info!("[camera] reset");
        true
    } else {
        log::debug!("[camera] reset methods not available");
        false
    }
}

pub fn toggle_auto_rotate<S: CameraSurface + ?Sized>(surface: &S) -> bool {
    let enabled = !surface.auto_rotate();
    surface.set_auto_rotate(enabled);
    log::info!("[camera] auto-rotate {}", if enabled { "enabled" } else { "disabled" });
    enabled
}

pub fn toggle_fullscreen<S: CameraSurface + ?Sized>(surface: &S) {
    if surface.is_fullscreen() {
        surface.exit_fullscreen();
    } else {
        surface.request_fullscreen();
    }
}

pub fn execute<S: CameraSurface + ?Sized>(surface: &S, command: CameraCommand) {
    match command {
        CameraCommand::Reset => {
            reset_camera(surface);
        }
        CameraCommand::ToggleAutoRotate => {
            toggle_auto_rotate(surface);
        }
        CameraCommand::ToggleFullscreen => toggle_fullscreen(surface),
    }
}

/// Turns raw key, click and touch input into camera commands.
#[derive(Clone, Debug)]
pub struct CameraInteraction {
    clicks: DoubleClickDetector,
    taps: DoubleTapDetector,
}

impl CameraInteraction {
    pub fn new(double_tap_window_ms: f64) -> Self {
        Self {
            clicks: DoubleClickDetector::new(double_tap_window_ms),
            taps: DoubleTapDetector::new(double_tap_window_ms),
        }
    }

    /// `target_tag` is the tag name of the focused element, if any;
    /// `target_editable` covers content-editable hosts. Keys pressed with
    /// Ctrl, Meta or Alt belong to the browser.
    pub fn on_key(
        &self,
        key: &str,
        target_tag: Option<&str>,
        target_editable: bool,
        modifier_held: bool,
    ) -> Option<CameraCommand> {
        if modifier_held
            || target_editable
            || target_tag.map(is_text_entry_tag).unwrap_or(false)
        {
            return None;
        }
        command_for_key(key)
    }

    pub fn on_click(&mut self, now_ms: f64) -> Option<CameraCommand> {
        self.clicks.register(now_ms).then_some(CameraCommand::Reset)
    }

    pub fn on_touch_start(&mut self, now_ms: f64) {
        self.taps.touch_start(now_ms);
    }

    pub fn on_touch_end(&mut self, now_ms: f64, changed_touches: u32) -> Option<CameraCommand> {
        self.taps
            .touch_end(now_ms, changed_touches)
            .then_some(CameraCommand::Reset)
    }
}
