pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, skip_pill_frame, toast_frame, ACCENT, ACCENT_DIM, ACCENT_SOFT, BG, OUTLINE,
    SURFACE, TEXT_MUTED, TEXT_ON_ACCENT, TEXT_PRIMARY, TEXT_SECONDARY,
};
