// Host-side tests for camera shortcuts, double click/tap and capability probing.

use std::cell::{Cell, RefCell};
use viewer_core::{
    camera, command_for_key, is_text_entry_tag, CameraCommand, CameraInteraction, CameraSurface,
    DoubleClickDetector, DoubleTapDetector, ViewerCapabilities,
};

#[derive(Default)]
struct FakeViewer {
    caps: ViewerCapabilities,
    calls: RefCell<Vec<&'static str>>,
    auto_rotate: Cell<bool>,
    fullscreen: Cell<bool>,
}

impl CameraSurface for FakeViewer {
    fn capabilities(&self) -> ViewerCapabilities {
        self.caps
    }
    fn reset_turntable_rotation(&self) {
        self.calls.borrow_mut().push("reset_turntable");
    }
    fn jump_camera_to_goal(&self) {
        self.calls.borrow_mut().push("jump_to_goal");
    }
    fn auto_rotate(&self) -> bool {
        self.auto_rotate.get()
    }
    fn set_auto_rotate(&self, enabled: bool) {
        self.auto_rotate.set(enabled);
    }
    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }
    fn request_fullscreen(&self) {
        self.calls.borrow_mut().push("request_fullscreen");
    }
    fn exit_fullscreen(&self) {
        self.calls.borrow_mut().push("exit_fullscreen");
    }
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(command_for_key("r"), Some(CameraCommand::Reset));
    assert_eq!(command_for_key("R"), Some(CameraCommand::Reset));
    assert_eq!(command_for_key(" "), Some(CameraCommand::ToggleAutoRotate));
    assert_eq!(command_for_key("f"), Some(CameraCommand::ToggleFullscreen));
    assert_eq!(command_for_key("F"), Some(CameraCommand::ToggleFullscreen));
    assert_eq!(command_for_key("x"), None);
    assert_eq!(command_for_key("Enter"), None);
    assert_eq!(command_for_key(""), None);
}

#[test]
fn shortcuts_are_ignored_while_typing() {
    let i = CameraInteraction::new(300.0);
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("textarea"));
    assert!(!is_text_entry_tag("MODEL-VIEWER"));
    assert_eq!(i.on_key("r", Some("INPUT"), false, false), None);
    assert_eq!(i.on_key("r", Some("TEXTAREA"), false, false), None);
    assert_eq!(i.on_key("r", Some("DIV"), true, false), None);
    assert_eq!(i.on_key("r", Some("BODY"), false, false), Some(CameraCommand::Reset));
    assert_eq!(i.on_key(" ", None, false, false), Some(CameraCommand::ToggleAutoRotate));
}

#[test]
fn modified_keys_are_left_to_the_browser() {
    let i = CameraInteraction::new(300.0);
    assert_eq!(i.on_key("r", Some("BODY"), false, true), None);
    assert_eq!(i.on_key("f", None, false, true), None);
    assert_eq!(i.on_key("F", None, false, false), Some(CameraCommand::ToggleFullscreen));
}

#[test]
fn double_click_within_window() {
    let mut d = DoubleClickDetector::new(300.0);
    assert!(!d.register(1000.0));
    assert!(d.register(1200.0));
    // Sequence restarts after a detection.
    assert!(!d.register(1300.0));
}

#[test]
fn slow_clicks_are_not_a_double_click() {
    let mut d = DoubleClickDetector::new(300.0);
    assert!(!d.register(0.0));
    assert!(!d.register(400.0));
    assert!(d.register(500.0));
}

#[test]
fn double_tap_requires_two_short_single_touch_taps() {
    let mut d = DoubleTapDetector::new(300.0);
    d.touch_start(0.0);
    assert!(!d.touch_end(80.0, 1));
    d.touch_start(200.0);
    assert!(d.touch_end(260.0, 1));
}

#[test]
fn long_press_or_multi_touch_is_not_a_tap() {
    let mut d = DoubleTapDetector::new(300.0);
    d.touch_start(0.0);
    assert!(!d.touch_end(500.0, 1));
    d.touch_start(600.0);
    assert!(!d.touch_end(650.0, 2));
    d.touch_start(700.0);
    assert!(!d.touch_end(750.0, 1));
    d.touch_start(1200.0);
    assert!(!d.touch_end(1250.0, 1), "taps 500ms apart");
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut d = DoubleTapDetector::new(300.0);
    assert!(!d.touch_end(10.0, 1));
}

#[test]
fn interaction_turns_double_tap_into_reset() {
    let mut i = CameraInteraction::new(300.0);
    i.on_touch_start(0.0);
    assert_eq!(i.on_touch_end(50.0, 1), None);
    i.on_touch_start(150.0);
    assert_eq!(i.on_touch_end(190.0, 1), Some(CameraCommand::Reset));
    assert_eq!(i.on_click(10.0), None);
    assert_eq!(i.on_click(20.0), Some(CameraCommand::Reset));
}

#[test]
fn reset_uses_only_available_capabilities() {
    let full = FakeViewer {
        caps: ViewerCapabilities {
            reset_turntable: true,
            jump_to_goal: true,
        },
        ..Default::default()
    };
    assert!(camera::reset_camera(&full));
    assert_eq!(*full.calls.borrow(), vec!["reset_turntable", "jump_to_goal"]);

    let partial = FakeViewer {
        caps: ViewerCapabilities {
            reset_turntable: false,
            jump_to_goal: true,
        },
        ..Default::default()
    };
    assert!(camera::reset_camera(&partial));
    assert_eq!(*partial.calls.borrow(), vec!["jump_to_goal"]);

    let bare = FakeViewer::default();
    assert!(!camera::reset_camera(&bare));
    assert!(bare.calls.borrow().is_empty());
}

#[test]
fn auto_rotate_toggles() {
    let v = FakeViewer::default();
    camera::execute(&v, CameraCommand::ToggleAutoRotate);
    assert!(v.auto_rotate.get());
    camera::execute(&v, CameraCommand::ToggleAutoRotate);
    assert!(!v.auto_rotate.get());
}

#[test]
fn fullscreen_toggles_on_current_state() {
    let v = FakeViewer::default();
    camera::execute(&v, CameraCommand::ToggleFullscreen);
    v.fullscreen.set(true);
    camera::execute(&v, CameraCommand::ToggleFullscreen);
    assert_eq!(*v.calls.borrow(), vec!["request_fullscreen", "exit_fullscreen"]);
}
