//! Fixed limits and delays for the viewer page.
//!
//! These are the defaults behind [`crate::ViewerConfig`]; the page may
//! override some of them through `data-*` attributes on the viewer element.

// Intake limits
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".gltf", ".glb"];
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &["model/gltf-binary", "model/gltf+json", ".gltf", ".glb"];

// Status timers (milliseconds)
pub const ERROR_DISMISS_MS: u32 = 8_000;
pub const PROGRESS_HIDE_MS: u32 = 300;
pub const LOAD_ROTATE_DELAY_MS: u32 = 1_000;
pub const STARTUP_ROTATE_DELAY_MS: u32 = 2_000;

// Click/tap sequence window (milliseconds)
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

// Viewer element defaults applied once the custom element is defined
pub const AUTO_ROTATE_DELAY_MS: u32 = 2_000;
pub const ROTATION_PER_SECOND: &str = "30deg";
pub const INTERACTION_POLICY: &str = "always-allow";

// Banner text for failures the viewer reports without detail
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load the 3D model. Please check if the file is valid and try again.";
