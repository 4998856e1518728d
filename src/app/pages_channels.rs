// Channel grid page

use super::app::SportsApp;
use crate::catalog::find_by_nav_id;
use crate::nav::pure::row_count;
use crate::ui::components::{channel_card, CardState};
use crate::ui::{theme, EguiSurface};

use eframe::egui::{self, RichText, Ui};

impl SportsApp {
    pub(super) fn display_page_channels(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Live Sports Channels").size(30.0).strong());
        ui.label(RichText::new("Premium sports content available 24/7").color(theme::TEXT_MUTED));
        ui.add_space(24.0);

        let pulsing = self.is_tv();
        let Some(page) = self.channels.as_mut() else {
            return;
        };

        let items = page.navigator.items().to_vec();
        let mut clicked = None;

        egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            for row in 0..row_count(&items) as i32 {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 24.0;
                    for item in items.iter().filter(|item| item.row == row) {
                        let Some(channel) = find_by_nav_id(&item.id) else {
                            continue;
                        };
                        let state = CardState {
                            focused: page.navigator.is_focused(&item.id),
                            scroll: page.handles.take_scroll_request(&item.id),
                            pulsing,
                        };
                        let response = channel_card(ui, channel, &state);
                        page.handles.register(&item.id, response.id);
                        if response.clicked() {
                            clicked = Some(item.id.clone());
                        }
                    }
                });
                ui.add_space(24.0);
            }
        });

        // Pointer selection goes through the navigator like OK does
        if let Some(id) = clicked {
            let ctx = ui.ctx().clone();
            page.navigator.set_focus(&id, &mut EguiSurface::new(&ctx, &mut page.handles));
            self.select_channel(&id);
        }
    }
}
