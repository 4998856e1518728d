// Color palette and frame presets

use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke};

pub const BG_DARK: Color32 = Color32::from_rgb(9, 12, 20);
pub const BG_MID: Color32 = Color32::from_rgb(16, 21, 34);
pub const BG_LIGHT: Color32 = Color32::from_rgb(30, 38, 58);
pub const BG_HOVER: Color32 = Color32::from_rgb(38, 48, 72);

pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(37, 82, 160);
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(96, 165, 250);
pub const SELECTION_BG: Color32 = Color32::from_rgb(24, 40, 74);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 244, 250);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 180, 200);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 120, 140);

pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

/// LIVE badge fill
pub const LIVE: Color32 = Color32::from_rgb(220, 38, 38);

pub const SKY_BADGE: Color32 = Color32::from_rgb(14, 116, 224);
pub const TNT_BADGE: Color32 = Color32::from_rgb(200, 60, 40);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_MID;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_GLOW);
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.inactive.weak_bg_fill = BG_LIGHT;
    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.active.bg_fill = ACCENT_DIM;
    visuals.widgets.active.weak_bg_fill = ACCENT_DIM;
    // Focus is drawn by our own ring
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BG_HOVER);

    ctx.set_visuals(visuals);
}

/// Stroke drawn around the focused element
pub fn focus_stroke() -> Stroke {
    Stroke::new(3.0, ACCENT_GLOW)
}

pub fn card_frame(focused: bool) -> egui::Frame {
    let frame = egui::Frame::NONE
        .fill(if focused { SELECTION_BG } else { BG_MID })
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(12));
    if focused {
        frame.stroke(focus_stroke())
    } else {
        frame.stroke(Stroke::new(1.0, BG_LIGHT))
    }
}

pub fn panel_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .inner_margin(Margin::same(8))
        .stroke(Stroke::new(1.0, BG_LIGHT))
}

pub fn nav_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .inner_margin(Margin::symmetric(16, 8))
}

/// Small filled pill used for LIVE and category badges
pub fn badge_frame(fill: Color32) -> egui::Frame {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
}
