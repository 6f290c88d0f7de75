//! Double-click and double-tap detection from event timestamps (milliseconds).

#[derive(Clone, Debug)]
pub struct DoubleClickDetector {
    window_ms: f64,
    last_click: Option<f64>,
}

impl DoubleClickDetector {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_click: None,
        }
    }

    /// Returns true when this click completes a double click. The sequence
    /// restarts after a detection.
    pub fn register(&mut self, now_ms: f64) -> bool {
        match self.last_click {
            Some(prev) if now_ms - prev < self.window_ms => {
                self.last_click = None;
                true
            }
            _ => {
                self.last_click = Some(now_ms);
                false
            }
        }
    }
}

/// A tap is a single-finger touch shorter than the window; two taps whose
/// starts fall within the window form a double tap.
#[derive(Clone, Debug)]
pub struct DoubleTapDetector {
    window_ms: f64,
    touch_start: Option<f64>,
    last_tap_start: Option<f64>,
}

impl DoubleTapDetector {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            touch_start: None,
            last_tap_start: None,
        }
    }

    pub fn touch_start(&mut self, now_ms: f64) {
        self.touch_start = Some(now_ms);
    }

    pub fn touch_end(&mut self, now_ms: f64, changed_touches: u32) -> bool {
        let Some(start) = self.touch_start.take() else {
            return false;
        };
        if changed_touches != 1 || now_ms - start >= self.window_ms {
            return false;
        }
        match self.last_tap_start {
            Some(prev) if start - prev < self.window_ms => {
                self.last_tap_start = None;
                true
            }
            _ => {
                self.last_tap_start = Some(start);
                false
            }
        }
    }
}

/// Tag names of controls where typing must not trigger shortcuts.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
