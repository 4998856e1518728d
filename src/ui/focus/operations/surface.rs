// FocusSurface over egui widgets

use eframe::egui;

use crate::nav::FocusSurface;
use crate::ui::focus::types::{element_id, FocusHandles};

/// Resolves navigation ids to egui widgets for one view
pub struct EguiSurface<'a> {
    ctx: &'a egui::Context,
    handles: &'a mut FocusHandles,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ctx: &'a egui::Context, handles: &'a mut FocusHandles) -> Self {
        Self { ctx, handles }
    }

    fn resolve(&self, item_id: &str) -> Option<egui::Id> {
        if let Some(id) = self.handles.get(item_id) {
            return Some(id);
        }
        // Not registered yet: look for a widget laid out under the derived id
        let fallback = element_id(item_id);
        self.ctx.read_response(fallback).map(|_| fallback)
    }
}

impl FocusSurface for EguiSurface<'_> {
    fn focus_element(&mut self, item_id: &str) -> bool {
        match self.resolve(item_id) {
            Some(id) => {
                self.ctx.memory_mut(|m| m.request_focus(id));
                true
            }
            None => false,
        }
    }

    fn scroll_into_view(&mut self, item_id: &str) {
        // Consumed by the widget on its next render
        self.handles.request_scroll(item_id);
        self.ctx.request_repaint();
    }
}
