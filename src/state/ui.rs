// UI state - presentation settings and transient messages
use crate::model::Section;
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub last_screen_width: Option<f32>,
    pub scroll_target: Option<Section>,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            last_screen_width: None,
            scroll_target: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    /// Record the current width. Returns true when it differs from the last one seen.
    pub fn width_changed(&mut self, width: f32) -> bool {
        if self.last_screen_width == Some(width) {
            return false;
        }
        self.last_screen_width = Some(width);
        true
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}
