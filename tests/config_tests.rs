// Host-side tests for configuration defaults, overrides and size formatting.

use std::collections::HashMap;
use viewer_core::constants::*;
use viewer_core::{format_file_size, CameraCommand, CameraInteraction, IntakeError, ViewerConfig};

#[test]
#[allow(clippy::assertions_on_constants)]
fn delays_have_expected_relationships() {
    assert_eq!(MAX_FILE_SIZE_BYTES, 52_428_800);
    assert!(ERROR_DISMISS_MS > LOAD_ROTATE_DELAY_MS);
    assert!(STARTUP_ROTATE_DELAY_MS > LOAD_ROTATE_DELAY_MS);
    assert!(PROGRESS_HIDE_MS < LOAD_ROTATE_DELAY_MS);
    assert!(DOUBLE_TAP_WINDOW_MS > 0.0);
}

#[test]
fn defaults_follow_constants() {
    let c = ViewerConfig::default();
    assert_eq!(c.max_file_size, MAX_FILE_SIZE_BYTES);
    assert_eq!(c.error_dismiss_ms, 8_000);
    assert_eq!(c.progress_hide_ms, 300);
    assert_eq!(c.load_rotate_delay_ms, 1_000);
    assert_eq!(c.startup_rotate_delay_ms, 2_000);
    assert_eq!(c.supported_extensions, vec![".gltf", ".glb"]);
    assert!(c.supported_media_types.iter().any(|t| t == "model/gltf-binary"));
    assert_eq!(c.rotation_per_second, "30deg");
    assert_eq!(c.interaction_policy, "always-allow");
}

#[test]
fn data_attributes_override_defaults() {
    let attrs: HashMap<&str, &str> = [
        ("data-max-file-size", "1048576"),
        ("data-error-dismiss-ms", " 5000 "),
        ("data-load-rotate-delay-ms", "0"),
        ("data-double-tap-ms", "250.5"),
    ]
    .into_iter()
    .collect();
    let c = ViewerConfig::default().with_overrides(|name| attrs.get(name).map(|v| v.to_string()));
    assert_eq!(c.max_file_size, 1_048_576);
    assert_eq!(c.error_dismiss_ms, 5_000);
    assert_eq!(c.load_rotate_delay_ms, 0);
    assert_eq!(c.double_tap_window_ms, 250.5);
    assert_eq!(c.progress_hide_ms, PROGRESS_HIDE_MS);
}

#[test]
fn unparsable_overrides_keep_defaults() {
    let c = ViewerConfig::default().with_overrides(|name| match name {
        "data-progress-hide-ms" => Some("soon".to_string()),
        "data-max-file-size" => Some("-1".to_string()),
        _ => None,
    });
    assert_eq!(c, ViewerConfig::default());
}

#[test]
fn non_positive_or_non_finite_tap_window_is_ignored() {
    for raw in ["NaN", "inf", "-inf", "-50", "0"] {
        let c = ViewerConfig::default().with_overrides(|name| {
            (name == "data-double-tap-ms").then(|| raw.to_string())
        });
        assert_eq!(c.double_tap_window_ms, DOUBLE_TAP_WINDOW_MS, "accepted {raw}");

        let mut i = CameraInteraction::new(c.double_tap_window_ms);
        assert_eq!(i.on_click(0.0), None);
        assert_eq!(i.on_click(10.0), Some(CameraCommand::Reset), "with {raw}");
    }
}

#[test]
fn zero_dismiss_delays_are_ignored_but_zero_rotation_delays_disable() {
    let c = ViewerConfig::default().with_overrides(|name| match name {
        "data-error-dismiss-ms"
        | "data-progress-hide-ms"
        | "data-max-file-size"
        | "data-load-rotate-delay-ms"
        | "data-startup-rotate-delay-ms" => Some("0".to_string()),
        _ => None,
    });
    assert_eq!(c.error_dismiss_ms, ERROR_DISMISS_MS);
    assert_eq!(c.progress_hide_ms, PROGRESS_HIDE_MS);
    assert_eq!(c.max_file_size, MAX_FILE_SIZE_BYTES);
    assert_eq!(c.load_rotate_delay_ms, 0);
    assert_eq!(c.startup_rotate_delay_ms, 0);
}

#[test]
fn file_sizes_render_on_base_1024() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1_500_000), "1.43 MB");
    assert_eq!(format_file_size(MAX_FILE_SIZE_BYTES), "50 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn oversized_message_names_the_limit() {
    let err = IntakeError::TooLarge {
        size: 60 * 1024 * 1024,
        max_bytes: MAX_FILE_SIZE_BYTES,
    };
    assert_eq!(
        err.to_string(),
        "File size too large. Maximum allowed size is 50 MB."
    );
}
