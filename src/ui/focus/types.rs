//! Focus bookkeeping shared between rendering and the navigator

use std::collections::HashMap;

use eframe::egui;

/// egui id used for the element backing a navigation id.
///
/// Widgets that allocate with this id can be resolved even before their
/// handle has been registered.
pub fn element_id(nav_id: &str) -> egui::Id {
    egui::Id::new(("nav-element", nav_id))
}

/// Handles registered by the view while it renders, keyed by navigation id
#[derive(Debug, Default)]
pub struct FocusHandles {
    handles: HashMap<String, egui::Id>,
    scroll_request: Option<String>,
}

impl FocusHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the widget that renders `nav_id` this frame
    pub fn register(&mut self, nav_id: &str, id: egui::Id) {
        if self.handles.get(nav_id) != Some(&id) {
            self.handles.insert(nav_id.to_string(), id);
        }
    }

    pub fn get(&self, nav_id: &str) -> Option<egui::Id> {
        self.handles.get(nav_id).copied()
    }

    pub fn request_scroll(&mut self, nav_id: &str) {
        self.scroll_request = Some(nav_id.to_string());
    }

    /// True once for the element that asked to be scrolled into view
    pub fn take_scroll_request(&mut self, nav_id: &str) -> bool {
        if self.scroll_request.as_deref() == Some(nav_id) {
            self.scroll_request = None;
            true
        } else {
            false
        }
    }
}
