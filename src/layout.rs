// Layout constants for the portfolio page

use eframe::egui;

// --- Sizing ---
pub const NAV_HEIGHT: f32 = 48.0;
pub const CONTENT_MAX_WIDTH: f32 = 900.0;
pub const SECTION_MIN_HEIGHT: f32 = 320.0;
pub const SECTION_PADDING: f32 = 32.0;
pub const CARD_WIDTH: f32 = 160.0;
pub const CARD_HEIGHT: f32 = 56.0;
pub const PHOTO_SIZE: f32 = 160.0;
pub const FORM_WIDTH: f32 = 420.0;
pub const MESSAGE_ROWS: usize = 5;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

/// Current window width in points
pub fn screen_width(ctx: &egui::Context) -> f32 {
    ctx.input(|i| i.screen_rect().width())
}

/// Width available to section content, centered in the window
pub fn content_width(ui: &egui::Ui) -> f32 {
    ui.available_width().min(CONTENT_MAX_WIDTH)
}

/// Whether the navigation collapses behind the menu button
pub fn is_compact(width: f32, breakpoint: f32) -> bool {
    width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_at_breakpoint() {
        assert!(is_compact(768.0, 768.0));
        assert!(is_compact(320.0, 768.0));
        assert!(!is_compact(769.0, 768.0));
    }
}
