//! Width-based layout decisions
//!
//! The app targets a phone-shaped window but stays usable maximized; wide
//! windows switch the onboarding screen to a two-column layout and cap the
//! width of form content.

use eframe::egui::Ui;

/// Layout mode based on available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// <600px - single column, content fills the window
    Compact,
    /// >=600px - two-column onboarding, forms capped and centered
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: f32) -> Self {
        if width >= 600.0 {
            LayoutMode::Wide
        } else {
            LayoutMode::Compact
        }
    }

    pub fn from_ui(ui: &Ui) -> Self {
        Self::from_width(ui.available_width())
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, LayoutMode::Wide)
    }
}

/// Width for centered form content: the full window on phones, capped on
/// anything wider.
pub fn content_width(ui: &Ui) -> f32 {
    ui.available_width().min(420.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert_eq!(LayoutMode::from_width(360.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(599.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(600.0), LayoutMode::Wide);
        assert!(LayoutMode::from_width(1080.0).is_wide());
    }
}
