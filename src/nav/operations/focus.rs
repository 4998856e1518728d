// Focus application against the presentation layer

use crate::nav::pure::find_item;
use crate::nav::types::{NavError, NavigationItem};

/// Presentation-side resolver from item ids to rendered elements.
///
/// The view owns the elements; the navigator only ever refers to them by id.
pub trait FocusSurface {
    /// Give input focus to the element backing `item_id`.
    ///
    /// Implementations try the handle registered for the id first and may
    /// fall back to an out-of-band lookup by the same id. Returns false
    /// when no element could be resolved.
    fn focus_element(&mut self, item_id: &str) -> bool;

    /// Scroll the element backing `item_id` into the viewport
    fn scroll_into_view(&mut self, item_id: &str);
}

/// Apply focus to `item_id`, which must belong to `items`
pub fn apply_focus(
    surface: &mut dyn FocusSurface,
    items: &[NavigationItem],
    item_id: &str,
) -> Result<(), NavError> {
    if find_item(items, item_id).is_none() {
        return Err(NavError::NotFound(item_id.to_string()));
    }
    if !surface.focus_element(item_id) {
        return Err(NavError::ElementUnresolved(item_id.to_string()));
    }
    surface.scroll_into_view(item_id);
    Ok(())
}
