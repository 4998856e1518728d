//! Channel card for the grid
//!
//! The card's interactive rect is allocated under [`element_id`] so the
//! navigator can resolve it by navigation id alone.

use eframe::egui::{self, RichText, Sense, Ui};
use egui_phosphor::regular as icons;

use crate::catalog::Channel;
use crate::paths::thumbnail_uri;
use crate::ui::components::badges::{category_badge, live_badge};
use crate::ui::focus::{decorate_focused, element_id, scroll_to};
use crate::ui::theme;

pub const CARD_WIDTH: f32 = 260.0;
const THUMB_HEIGHT: f32 = 120.0;

pub struct CardState {
    pub focused: bool,
    /// Scroll the card into view this frame
    pub scroll: bool,
    /// Animated ring (TV screens)
    pub pulsing: bool,
}

/// Render one channel card. Returns the response of the card's clickable area.
pub fn channel_card(ui: &mut Ui, channel: &Channel, state: &CardState) -> egui::Response {
    let nav_id = channel.nav_id();

    let frame = theme::card_frame(state.focused).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            if let Some(uri) = channel.thumbnail.and_then(thumbnail_uri) {
                ui.add(
                    egui::Image::new(uri)
                        .max_height(THUMB_HEIGHT)
                        .max_width(CARD_WIDTH)
                        .corner_radius(6),
                );
            } else {
                placeholder_thumbnail(ui, channel);
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("CH {}", channel.number))
                        .strong()
                        .color(theme::ACCENT_GLOW),
                );
                if channel.is_live {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), live_badge);
                }
            });

            ui.label(RichText::new(channel.name).heading().strong());
            ui.label(RichText::new(channel.description).color(theme::TEXT_SECONDARY));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                category_badge(ui, channel.category);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let watch_color = if channel.stream_url.is_some() {
                        theme::TEXT_PRIMARY
                    } else {
                        theme::TEXT_MUTED
                    };
                    ui.label(RichText::new(format!("{} Watch", icons::PLAY)).color(watch_color));
                });
            });
        });
    });

    let response = ui.interact(frame.response.rect, element_id(&nav_id), Sense::click());
    if state.focused {
        decorate_focused(ui, &response, state.pulsing);
    }
    if state.scroll {
        scroll_to(&response);
    }
    response
}

fn placeholder_thumbnail(ui: &mut Ui, channel: &Channel) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(CARD_WIDTH, THUMB_HEIGHT), Sense::hover());
    ui.painter().rect_filled(rect, 6.0, theme::BG_LIGHT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        channel.category.label(),
        egui::FontId::proportional(22.0),
        theme::TEXT_MUTED,
    );
}
