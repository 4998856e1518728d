use crate::app::app::SportsApp;
use crate::catalog::SIDEBAR_CATEGORIES;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl SportsApp {
    /// Static category list. The first entry is the active one.
    pub fn display_panel_sidebar(&mut self, ui: &mut Ui) {
        ui.add_space(16.0);
        for (i, category) in SIDEBAR_CATEGORIES.iter().enumerate() {
            let active = i == 0;
            let frame = if active {
                egui::Frame::NONE
                    .fill(theme::SELECTION_BG)
                    .stroke(egui::Stroke::new(1.0, theme::ACCENT_DIM))
            } else {
                egui::Frame::NONE.fill(theme::BG_LIGHT.gamma_multiply(0.5))
            };
            frame
                .corner_radius(8)
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let color = if active { theme::ACCENT_GLOW } else { theme::TEXT_SECONDARY };
                        ui.label(RichText::new(*category).strong().color(color));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(icons::CARET_RIGHT).color(color));
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }
}
