use crate::constants::*;

/// Tunables for intake validation, status timers and viewer set-up.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub max_file_size: u64,
    pub supported_extensions: Vec<String>,
    pub supported_media_types: Vec<String>,
    pub error_dismiss_ms: u32,
    pub progress_hide_ms: u32,
    /// Delay before auto-rotate is switched back on after a load; `0` disables it.
    pub load_rotate_delay_ms: u32,
    /// Delay before auto-rotate is forced on after start-up; `0` disables it.
    pub startup_rotate_delay_ms: u32,
    pub double_tap_window_ms: f64,
    pub auto_rotate_delay_ms: u32,
    pub rotation_per_second: String,
    pub interaction_policy: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE_BYTES,
            supported_extensions: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            supported_media_types: SUPPORTED_MEDIA_TYPES.iter().map(|s| s.to_string()).collect(),
            error_dismiss_ms: ERROR_DISMISS_MS,
            progress_hide_ms: PROGRESS_HIDE_MS,
            load_rotate_delay_ms: LOAD_ROTATE_DELAY_MS,
            startup_rotate_delay_ms: STARTUP_ROTATE_DELAY_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            auto_rotate_delay_ms: AUTO_ROTATE_DELAY_MS,
            rotation_per_second: ROTATION_PER_SECOND.to_string(),
            interaction_policy: INTERACTION_POLICY.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Apply `data-*` overrides read through `lookup` (attribute name -> value).
    /// Unparsable or out-of-range values keep the current setting. Only the
    /// two rotation delays accept `0`, which disables them.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |v: &u32| *v > 0;
        let any = |_: &u32| true;
        override_value(&lookup, "data-max-file-size", &mut self.max_file_size, |v| *v > 0);
        override_value(&lookup, "data-error-dismiss-ms", &mut self.error_dismiss_ms, positive);
        override_value(&lookup, "data-progress-hide-ms", &mut self.progress_hide_ms, positive);
        override_value(&lookup, "data-load-rotate-delay-ms", &mut self.load_rotate_delay_ms, any);
        override_value(&lookup, "data-startup-rotate-delay-ms", &mut self.startup_rotate_delay_ms, any);
        override_value(&lookup, "data-double-tap-ms", &mut self.double_tap_window_ms, |v| {
            v.is_finite() && *v > 0.0
        });
        self
    }
}

fn override_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    attr: &str,
    slot: &mut T,
    accept: impl Fn(&T) -> bool,
) {
    let Some(raw) = lookup(attr) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if accept(&v) => *slot = v,
        Ok(_) => log::warn!("[config] ignoring {}={:?}: out of range", attr, raw),
        Err(_) => log::warn!("[config] ignoring {}={:?}: not a number", attr, raw),
    }
}
