pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, badge_frame, card_frame, nav_frame, panel_frame, ACCENT, ACCENT_DIM, ACCENT_GLOW,
    BG_DARK, BG_LIGHT, LIVE, SELECTION_BG, SKY_BADGE, SUCCESS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY, TNT_BADGE,
};
