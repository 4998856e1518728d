// Player page: stream controls for the selected channel

use super::app::{PlayerPage, SportsApp, PLAYER_BACK, PLAYER_FULLSCREEN, PLAYER_OPEN};
use crate::nav::NavAction;
use crate::ui::components::live_badge;
use crate::ui::focus::{decorate_focused, scroll_to};
use crate::ui::{theme, EguiSurface};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl SportsApp {
    pub(super) fn display_page_player(&mut self, ui: &mut Ui) {
        let pulsing = self.is_tv();
        let Some(page) = self.player.as_mut() else {
            return;
        };
        let channel = page.channel;
        let mut clicked = None;

        ui.horizontal(|ui| {
            if control_button(ui, page, PLAYER_BACK, &format!("{} Back", icons::ARROW_LEFT), pulsing) {
                clicked = Some(PLAYER_BACK);
            }
            ui.add_space(12.0);
            live_badge(ui);
            ui.label(RichText::new(channel.title()).size(22.0).strong().color(egui::Color32::WHITE));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("{} Fullscreen", icons::CORNERS_OUT);
                if control_button(ui, page, PLAYER_FULLSCREEN, &label, pulsing) {
                    clicked = Some(PLAYER_FULLSCREEN);
                }
            });
        });

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(RichText::new(icons::TELEVISION).size(64.0).color(theme::ACCENT_GLOW));
            ui.label(
                RichText::new(format!("{} Live Stream", channel.name))
                    .size(26.0)
                    .color(egui::Color32::WHITE),
            );
            ui.label(RichText::new("Playing in your default player").color(theme::TEXT_MUTED));
            ui.add_space(24.0);
            let label = format!("{} Open stream again", icons::PLAY);
            if control_button(ui, page, PLAYER_OPEN, &label, pulsing) {
                clicked = Some(PLAYER_OPEN);
            }
        });

        if let Some(id) = clicked {
            let ctx = ui.ctx().clone();
            page.navigator.set_focus(id, &mut EguiSurface::new(&ctx, &mut page.handles));
            self.on_player_action(&ctx, NavAction::Select(id.to_string()));
        }
    }
}

/// One focusable player control. Returns whether it was clicked.
fn control_button(ui: &mut Ui, page: &mut PlayerPage, nav_id: &str, label: &str, pulsing: bool) -> bool {
    let focused = page.navigator.is_focused(nav_id);
    let response = ui.add(
        egui::Button::new(RichText::new(label).size(16.0))
            .min_size(egui::vec2(120.0, 40.0))
            .selected(focused),
    );
    page.handles.register(nav_id, response.id);
    if focused {
        decorate_focused(ui, &response, pulsing);
    }
    if page.handles.take_scroll_request(nav_id) {
        scroll_to(&response);
    }
    response.clicked()
}
