//! DOM contract of the viewer page: element ids, selectors and classes.
//!
//! Every element is looked up once at start-up and injected into the
//! controllers that need it.

pub const MODEL_VIEWER_TAG: &str = "model-viewer";

// Mandatory elements
pub const VIEWER_ID: &str = "model-viewer";
pub const FILE_INPUT_ID: &str = "file-input";
pub const LOADING_ID: &str = "loading";
pub const ERROR_BANNER_ID: &str = "error-message";
pub const ERROR_TEXT_ID: &str = "error-text";

// Optional elements
pub const ERROR_CLOSE_ID: &str = "error-close";
pub const DRAG_OVERLAY_ID: &str = "drag-overlay";
pub const UPLOAD_LABEL_SELECTOR: &str = ".file-upload-label";
pub const DROP_REGION_SELECTOR: &str = ".viewer-container";
// Slotted inside the viewer element
pub const PROGRESS_BAR_SELECTOR: &str = ".update-bar";
pub const PROGRESS_CONTAINER_SELECTOR: &str = ".progress-bar";

pub const HIDDEN_CLASS: &str = "hidden";
pub const PROGRESS_HIDE_CLASS: &str = "hide";

pub const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];
