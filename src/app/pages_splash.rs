// Intro, loading and toast overlays

use super::app::{Screen, SportsApp};
use crate::paths::logo_uri;
use crate::ui::splash::{
    intro_phase, loading_phase, logo_opacity, stage_status, SplashPhase, StageStatus, LOADING_STAGES,
};
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl SportsApp {
    pub(super) fn splash_phase(&self) -> Option<SplashPhase> {
        let elapsed = self.screen_elapsed_ms();
        match self.screen {
            Screen::Intro => Some(intro_phase(elapsed, self.skipped_at)),
            Screen::Loading => Some(loading_phase(elapsed, self.skipped_at)),
            Screen::Channels | Screen::Player => None,
        }
    }

    pub(super) fn display_intro(&mut self, ctx: &egui::Context) {
        let elapsed = self.screen_elapsed_ms();
        let opacity = self.splash_phase().map_or(0.0, SplashPhase::opacity);
        let logo_alpha = logo_opacity(elapsed) * opacity;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG_DARK))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    match logo_uri() {
                        Some(uri) => {
                            ui.add(egui::Image::new(uri).max_size(egui::vec2(256.0, 256.0)).tint(
                                egui::Color32::WHITE.gamma_multiply(logo_alpha),
                            ));
                        }
                        None => {
                            ui.label(
                                RichText::new("127 SPORTS")
                                    .size(72.0)
                                    .strong()
                                    .color(theme::ACCENT_GLOW.gamma_multiply(logo_alpha)),
                            );
                        }
                    }
                    ui.add_space(48.0);
                    loading_dots(ui, elapsed, logo_alpha * 0.5);
                });
            });

        ctx.request_repaint();
    }

    pub(super) fn display_loading(&mut self, ctx: &egui::Context) {
        let elapsed = self.screen_elapsed_ms();
        let opacity = self.splash_phase().map_or(0.0, SplashPhase::opacity);
        let fade = |c: egui::Color32| c.gamma_multiply(opacity);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG_DARK))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.15);
                    ui.label(
                        RichText::new("Update Media Contents")
                            .size(40.0)
                            .strong()
                            .color(fade(theme::ACCENT_GLOW)),
                    );
                    ui.add_space(40.0);

                    ui.horizontal(|ui| {
                        let total = LOADING_STAGES.len() as f32 * 200.0;
                        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                        for stage in LOADING_STAGES {
                            let status = stage_status(stage.delay_ms, elapsed);
                            stage_tile(ui, stage.name, status, opacity);
                        }
                    });

                    ui.add_space(40.0);
                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() / 2.0 - 80.0).max(0.0));
                        ui.add(egui::Spinner::new().size(20.0).color(fade(theme::ACCENT)));
                        ui.label(RichText::new("Please wait......").size(18.0).color(fade(theme::TEXT_PRIMARY)));
                    });
                    ui.add_space(24.0);
                    ui.label(RichText::new("Press OK to skip").color(fade(theme::TEXT_MUTED)));
                });
            });

        ctx.request_repaint();
    }

    pub(super) fn display_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        egui::Area::new("toast".into())
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme::BG_LIGHT)
                    .corner_radius(8.0)
                    .stroke(egui::Stroke::new(1.0, theme::ACCENT_DIM))
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.title).strong());
                        ui.label(RichText::new(&toast.body).color(theme::TEXT_SECONDARY));
                    });
            });
    }
}

fn loading_dots(ui: &mut Ui, elapsed_ms: u64, alpha: f32) {
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() / 2.0 - 24.0).max(0.0));
        for i in 0..3u64 {
            // Staggered 200 ms apart
            let t = (elapsed_ms + 1000 - i * 200) as f32 / 1000.0;
            let pulse = (t * std::f32::consts::TAU).sin() * 0.3 + 0.7;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 4.0, theme::ACCENT.gamma_multiply(alpha * pulse));
        }
    });
}

fn stage_tile(ui: &mut Ui, name: &str, status: StageStatus, opacity: f32) {
    let (icon, color) = match status {
        StageStatus::Waiting => (icons::CLOCK, theme::TEXT_MUTED),
        StageStatus::Loading => (icons::SPINNER, theme::ACCENT),
        StageStatus::Completed => (icons::CHECK_CIRCLE, theme::SUCCESS),
    };
    let color = color.gamma_multiply(opacity);

    theme::card_frame(status == StageStatus::Completed).show(ui, |ui| {
        ui.set_width(176.0);
        ui.set_height(150.0);
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new(icon).size(32.0).color(color));
            ui.add_space(8.0);
            ui.label(
                RichText::new(name)
                    .size(18.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY.gamma_multiply(opacity)),
            );
            ui.label(RichText::new(status.label()).color(color));
            if status == StageStatus::Loading {
                ui.add(egui::ProgressBar::new(0.5).desired_height(4.0).animate(true));
            }
        });
    });
}
