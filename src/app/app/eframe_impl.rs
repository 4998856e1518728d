//! eframe::App implementation for SportsApp

use super::{Screen, SportsApp};
use crate::ui::{theme, EguiSurface};
use eframe::egui;

impl eframe::App for SportsApp {
    fn raw_input_hook(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            // Keep draining remotes so stale presses don't fire on refocus
            let _ = self.drain_remote_keys();
            return;
        }
        self.handle_input(ctx, raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint full-screen background to fill any gaps between panels
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::BG_DARK);

        self.expire_toast();
        if self.splash_phase().is_some_and(|phase| phase.is_done()) {
            self.finish_splash();
        }

        let rendered = self.screen;
        match rendered {
            Screen::Intro => self.display_intro(ctx),
            Screen::Loading => self.display_loading(ctx),
            Screen::Channels => {
                egui::TopBottomPanel::top("top_nav_panel")
                    .frame(theme::nav_frame())
                    .show(ctx, |ui| self.display_panel_top(ui));

                egui::SidePanel::left("categories_panel")
                    .resizable(false)
                    .exact_width(240.0)
                    .frame(theme::panel_frame())
                    .show_separator_line(false)
                    .show(ctx, |ui| self.display_panel_sidebar(ui));

                egui::CentralPanel::default()
                    .frame(
                        egui::Frame::NONE
                            .fill(theme::BG_DARK)
                            .inner_margin(egui::Margin::same(24)),
                    )
                    .show(ctx, |ui| self.display_page_channels(ui));
            }
            Screen::Player => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE.fill(egui::Color32::BLACK).inner_margin(egui::Margin::same(16)))
                    .show(ctx, |ui| self.display_page_player(ui));
            }
        }

        self.display_toast(ctx);

        // Deferred focus runs once this frame's widgets exist. A view mounted
        // during this frame waits for its own first render.
        if self.screen != rendered {
            ctx.request_repaint();
            return;
        }
        match rendered {
            Screen::Channels => {
                if let Some(page) = self.channels.as_mut() {
                    page.navigator.after_render(&mut EguiSurface::new(ctx, &mut page.handles));
                }
            }
            Screen::Player => {
                if let Some(page) = self.player.as_mut() {
                    page.navigator.after_render(&mut EguiSurface::new(ctx, &mut page.handles));
                }
            }
            Screen::Intro | Screen::Loading => {}
        }

        if ctx.input(|input| input.focused) {
            ctx.request_repaint_after(std::time::Duration::from_millis(33)); // 30 fps
        }
    }
}
