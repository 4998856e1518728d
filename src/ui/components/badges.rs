use eframe::egui::{self, RichText, Ui};

use crate::catalog::Category;
use crate::ui::theme;

pub fn live_badge(ui: &mut Ui) {
    theme::badge_frame(theme::LIVE).show(ui, |ui| {
        ui.label(RichText::new("● LIVE").small().strong().color(egui::Color32::WHITE));
    });
}

pub fn category_badge(ui: &mut Ui, category: Category) {
    let fill = match category {
        Category::SkySports => theme::SKY_BADGE,
        Category::TntSports => theme::TNT_BADGE,
    };
    theme::badge_frame(fill).show(ui, |ui| {
        ui.label(RichText::new(category.label()).small().color(egui::Color32::WHITE));
    });
}
