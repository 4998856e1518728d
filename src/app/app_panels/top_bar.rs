use crate::app::app::SportsApp;
use crate::catalog::TOP_SECTIONS;
use crate::paths::logo_uri;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl SportsApp {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            // === Logo ===
            if let Some(uri) = logo_uri() {
                ui.add(egui::Image::new(uri).max_size(egui::vec2(40.0, 40.0)));
            }
            ui.label(RichText::new("127 SPORTS").size(22.0).strong());
            ui.add_space(32.0);

            // === Sections (static, only Channels has content) ===
            for (i, section) in TOP_SECTIONS.iter().enumerate() {
                ui.add(
                    egui::Button::new(*section)
                        .min_size(egui::vec2(90.0, 32.0))
                        .corner_radius(16)
                        .selected(i == 0),
                );
            }

            // === Right Side: Subscription & account ===
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("LOGGED IN AS").small().color(theme::TEXT_MUTED));
                    ui.label(RichText::new("Admin").strong());
                });
                ui.add_space(12.0);
                egui::Frame::NONE
                    .stroke(egui::Stroke::new(1.0, theme::SUCCESS.gamma_multiply(0.4)))
                    .corner_radius(12)
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(RichText::new("Subscription Expires: Never").color(theme::SUCCESS));
                    });
                ui.add_space(12.0);
                ui.label(RichText::new(icons::MAGNIFYING_GLASS).size(20.0));
                if self.is_tv() {
                    let device = if self.capabilities.is_fire_tv {
                        "FireTV"
                    } else {
                        self.capabilities.kind.label()
                    };
                    ui.add_space(12.0);
                    ui.label(RichText::new(device).small().weak());
                }
            });
        });
    }
}
