// Grid focus navigator: owns one view's focus pointer and turns input into focus moves and actions
//
// One instance per mounted view. The view creates it on mount, feeds it every
// key event while mounted, calls `after_render` once per frame, and calls
// `unmount` (or drops it) on teardown.

use crate::nav::operations::{apply_focus, CancelHandle, DeferredFocus, FocusSurface};
use crate::nav::pure::{classify, compute_next_focus, find_item, initial_focus_target};
use crate::nav::types::{
    InputOutcome, NavAction, NavConfig, NavDirection, NavInput, NavigationItem, RawKey,
};

pub struct Navigator {
    items: Vec<NavigationItem>,
    config: NavConfig,
    current_focus: Option<String>,
    deferred: DeferredFocus,
    initial_task: Option<CancelHandle>,
    mounted: bool,
}

impl Navigator {
    /// Mount a navigator over `items`. Initial focus is applied after the next render pass.
    pub fn mount(items: Vec<NavigationItem>, config: NavConfig) -> Self {
        let mut navigator = Self {
            items,
            config,
            current_focus: None,
            deferred: DeferredFocus::new(),
            initial_task: None,
            mounted: true,
        };
        navigator.schedule_initial_focus();
        navigator
    }

    pub fn current_focus(&self) -> Option<&str> {
        self.current_focus.as_deref()
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn is_focused(&self, item_id: &str) -> bool {
        self.current_focus.as_deref() == Some(item_id)
    }

    /// Replace the item set and re-apply initial focus after the next render.
    ///
    /// A focused id that left the set is cleared right away so focus never
    /// names a missing item.
    pub fn set_items(&mut self, items: Vec<NavigationItem>) {
        if items == self.items {
            return;
        }
        self.items = items;

        let still_present = self
            .current_focus
            .as_deref()
            .is_some_and(|id| find_item(&self.items, id).is_some());
        if !still_present {
            if let Some(id) = self.current_focus.take() {
                log::debug!("nav: focused item `{}` left the item set", id);
            }
        }
        self.schedule_initial_focus();
    }

    /// Focus `item_id`. Returns whether a backing element was found and focused.
    ///
    /// The focus pointer only advances on success.
    pub fn set_focus(&mut self, item_id: &str, surface: &mut dyn FocusSurface) -> bool {
        match apply_focus(surface, &self.items, item_id) {
            Ok(()) => {
                self.current_focus = Some(item_id.to_string());
                true
            }
            Err(err) => {
                log::debug!("nav: focus not applied: {}", err);
                false
            }
        }
    }

    /// Feed one key event. The returned outcome says whether to suppress the event.
    pub fn handle_input(&mut self, key: &RawKey, surface: &mut dyn FocusSurface) -> InputOutcome {
        if !self.mounted {
            return InputOutcome::ignored();
        }

        let input = classify(key);
        if let Some(direction) = input.direction() {
            return self.handle_direction(direction, surface);
        }
        match input {
            NavInput::Select => match &self.current_focus {
                Some(id) => InputOutcome::with_action(NavAction::Select(id.clone())),
                None => InputOutcome::consumed(),
            },
            NavInput::Back => InputOutcome::with_action(NavAction::Back),
            _ => InputOutcome::ignored(),
        }
    }

    fn handle_direction(&mut self, direction: NavDirection, surface: &mut dyn FocusSurface) -> InputOutcome {
        let Some(current) = self.current_focus.clone() else {
            // No focus yet: enter the grid at the first item
            if let Some(first) = self.items.first().map(|item| item.id.clone()) {
                if self.set_focus(&first, surface) {
                    self.cancel_initial_focus();
                }
            }
            return InputOutcome::consumed();
        };

        let next = match compute_next_focus(&self.items, &current, direction, self.config.grid_cols) {
            Ok(item) => item.id.clone(),
            Err(err) => {
                log::trace!("nav: {}", err);
                return InputOutcome::ignored();
            }
        };

        if next != current && self.set_focus(&next, surface) {
            InputOutcome::consumed()
        } else {
            InputOutcome::ignored()
        }
    }

    /// Run the deferred initial focus, if one is due. Call once after each render pass.
    pub fn after_render(&mut self, surface: &mut dyn FocusSurface) {
        if !self.mounted {
            return;
        }
        let Some(target) = self.deferred.take() else {
            return;
        };
        self.initial_task = None;

        if !self.set_focus(&target, surface) {
            log::debug!("nav: initial focus on `{}` failed, not retrying", target);
        }
    }

    /// Detach from input and cancel any pending initial focus
    pub fn unmount(&mut self) {
        self.cancel_initial_focus();
        self.mounted = false;
    }

    fn schedule_initial_focus(&mut self) {
        self.cancel_initial_focus();
        let target = initial_focus_target(&self.items, self.config.initial_focus.as_deref())
            .map(|item| item.id.clone());
        if let Some(target) = target {
            self.initial_task = Some(self.deferred.schedule(target));
        }
    }

    fn cancel_initial_focus(&mut self) {
        if let Some(handle) = self.initial_task.take() {
            self.deferred.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Surface with a fixed set of attached elements that records every call
    #[derive(Default)]
    struct TestSurface {
        attached: HashSet<String>,
        focused: Vec<String>,
        scrolled: Vec<String>,
    }

    impl TestSurface {
        fn with(ids: &[&str]) -> Self {
            Self {
                attached: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }

        fn attach_all(items: &[NavigationItem]) -> Self {
            Self {
                attached: items.iter().map(|item| item.id.clone()).collect(),
                ..Default::default()
            }
        }
    }

    impl FocusSurface for TestSurface {
        fn focus_element(&mut self, item_id: &str) -> bool {
            if self.attached.contains(item_id) {
                self.focused.push(item_id.to_string());
                true
            } else {
                false
            }
        }

        fn scroll_into_view(&mut self, item_id: &str) {
            self.scrolled.push(item_id.to_string());
        }
    }

    fn abc() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new("a", 0, 0),
            NavigationItem::new("b", 0, 1),
            NavigationItem::new("c", 1, 0),
        ]
    }

    fn grid(rows: i32, cols: i32) -> Vec<NavigationItem> {
        let mut items = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                items.push(NavigationItem::new(format!("r{row}c{col}"), row, col));
            }
        }
        items
    }

    fn press(nav: &mut Navigator, surface: &mut TestSurface, name: &str) -> InputOutcome {
        nav.handle_input(&RawKey::named(name), surface)
    }

    #[test]
    fn test_initial_focus_is_deferred_to_after_render() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        assert_eq!(nav.current_focus(), None);

        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("a"));
        assert_eq!(surface.scrolled, vec!["a"]);
    }

    #[test]
    fn test_initial_focus_uses_configured_id() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let config = NavConfig::new(2).with_initial_focus(Some("c".into()));
        let mut nav = Navigator::mount(items, config);
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("c"));
    }

    #[test]
    fn test_initial_focus_falls_back_to_first_item() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let config = NavConfig::new(2).with_initial_focus(Some("zzz".into()));
        let mut nav = Navigator::mount(items, config);
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_initial_focus_single_attempt() {
        let items = abc();
        let mut nav = Navigator::mount(items.clone(), NavConfig::new(2));

        // Element not attached yet when the deferred task runs
        let mut empty = TestSurface::default();
        nav.after_render(&mut empty);
        assert_eq!(nav.current_focus(), None);

        // No further attempt once elements appear
        let mut surface = TestSurface::attach_all(&items);
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), None);
        assert!(surface.focused.is_empty());
    }

    #[test]
    fn test_unmount_cancels_pending_initial_focus() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.unmount();
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), None);
        assert!(surface.focused.is_empty());
    }

    #[test]
    fn test_unmounted_navigator_ignores_input() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);
        nav.unmount();

        assert_eq!(press(&mut nav, &mut surface, "ArrowRight"), InputOutcome::ignored());
        assert_eq!(press(&mut nav, &mut surface, "Enter"), InputOutcome::ignored());
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_abc_scenario() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("a"));

        assert!(press(&mut nav, &mut surface, "ArrowRight").consumed);
        assert_eq!(nav.current_focus(), Some("b"));

        assert!(press(&mut nav, &mut surface, "ArrowDown").consumed);
        assert_eq!(nav.current_focus(), Some("c"));

        assert!(press(&mut nav, &mut surface, "ArrowUp").consumed);
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_remote_codes_drive_navigation() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);

        assert!(nav.handle_input(&RawKey::coded(106), &mut surface).consumed); // KEY_RIGHT
        assert_eq!(nav.current_focus(), Some("b"));

        let outcome = nav.handle_input(&RawKey::coded(352), &mut surface); // KEY_OK
        assert_eq!(outcome.action, Some(NavAction::Select("b".into())));
    }

    #[test]
    fn test_direction_without_focus_enters_at_first_item() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let config = NavConfig::new(2).with_initial_focus(Some("c".into()));
        let mut nav = Navigator::mount(items, config);

        // Input arrives before the first render pass
        let outcome = press(&mut nav, &mut surface, "ArrowDown");
        assert_eq!(outcome, InputOutcome::consumed());
        assert_eq!(nav.current_focus(), Some("a"));

        // The pending initial focus does not override the user's entry point
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_direction_with_empty_items_is_consumed() {
        let mut surface = TestSurface::default();
        let mut nav = Navigator::mount(Vec::new(), NavConfig::new(4));
        assert_eq!(press(&mut nav, &mut surface, "ArrowLeft"), InputOutcome::consumed());
        assert_eq!(nav.current_focus(), None);
    }

    #[test]
    fn test_right_clamp_in_full_grid() {
        let items = grid(3, 3);
        let mut surface = TestSurface::attach_all(&items);
        let config = NavConfig::new(3).with_initial_focus(Some("r1c2".into()));
        let mut nav = Navigator::mount(items, config);
        nav.after_render(&mut surface);

        let outcome = press(&mut nav, &mut surface, "ArrowRight");
        assert!(!outcome.consumed);
        assert_eq!(nav.current_focus(), Some("r1c2"));
    }

    #[test]
    fn test_single_column_edges_are_no_ops() {
        let items: Vec<_> = (0..4)
            .map(|row| NavigationItem::new(format!("item{row}"), row, 0))
            .collect();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(1));
        nav.after_render(&mut surface);

        for key in ["ArrowLeft", "ArrowRight", "ArrowUp"] {
            assert!(!press(&mut nav, &mut surface, key).consumed, "{key}");
            assert_eq!(nav.current_focus(), Some("item0"));
        }

        for _ in 0..3 {
            assert!(press(&mut nav, &mut surface, "ArrowDown").consumed);
        }
        assert_eq!(nav.current_focus(), Some("item3"));
        assert!(!press(&mut nav, &mut surface, "ArrowDown").consumed);
        assert_eq!(nav.current_focus(), Some("item3"));
    }

    #[test]
    fn test_move_to_unresolved_element_keeps_focus() {
        let items = abc();
        let mut surface = TestSurface::with(&["a", "c"]);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);

        let outcome = press(&mut nav, &mut surface, "ArrowRight");
        assert!(!outcome.consumed);
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_select_without_focus_raises_nothing() {
        let mut surface = TestSurface::default();
        let mut nav = Navigator::mount(abc(), NavConfig::new(2));
        let outcome = press(&mut nav, &mut surface, "Enter");
        assert!(outcome.consumed);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn test_select_with_focus_raises_once_per_event() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);
        press(&mut nav, &mut surface, "ArrowRight");

        for key in ["Enter", " "] {
            let outcome = press(&mut nav, &mut surface, key);
            assert_eq!(outcome, InputOutcome::with_action(NavAction::Select("b".into())));
        }
    }

    #[test]
    fn test_back_always_consumed() {
        let mut surface = TestSurface::default();
        let mut nav = Navigator::mount(abc(), NavConfig::new(2));
        for key in ["Escape", "Backspace"] {
            let outcome = press(&mut nav, &mut surface, key);
            assert_eq!(outcome, InputOutcome::with_action(NavAction::Back));
        }
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let mut surface = TestSurface::default();
        let mut nav = Navigator::mount(abc(), NavConfig::new(2));
        assert_eq!(press(&mut nav, &mut surface, "Tab"), InputOutcome::ignored());
        assert_eq!(nav.handle_input(&RawKey::coded(30), &mut surface), InputOutcome::ignored());
    }

    #[test]
    fn test_set_focus_is_idempotent() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items, NavConfig::new(2));

        assert!(nav.set_focus("b", &mut surface));
        assert!(nav.set_focus("b", &mut surface));
        assert_eq!(nav.current_focus(), Some("b"));
        assert_eq!(surface.focused, vec!["b", "b"]);
    }

    #[test]
    fn test_set_focus_rejects_unknown_or_detached_ids() {
        let items = abc();
        let mut surface = TestSurface::with(&["a", "ghost"]);
        let mut nav = Navigator::mount(items, NavConfig::new(2));

        assert!(!nav.set_focus("ghost", &mut surface));
        assert!(!nav.set_focus("b", &mut surface));
        assert_eq!(nav.current_focus(), None);
        assert!(surface.scrolled.is_empty());
    }

    #[test]
    fn test_set_items_reresolves_missing_focus() {
        let items = abc();
        let mut surface = TestSurface::with(&["a", "b", "c", "d"]);
        let mut nav = Navigator::mount(items, NavConfig::new(2));
        nav.after_render(&mut surface);
        press(&mut nav, &mut surface, "ArrowRight");
        assert_eq!(nav.current_focus(), Some("b"));

        nav.set_items(vec![
            NavigationItem::new("c", 0, 0),
            NavigationItem::new("d", 0, 1),
        ]);
        assert_eq!(nav.current_focus(), None);
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("c"));
    }

    #[test]
    fn test_set_items_reapplies_initial_focus() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let config = NavConfig::new(2).with_initial_focus(Some("a".into()));
        let mut nav = Navigator::mount(items, config);
        nav.after_render(&mut surface);
        press(&mut nav, &mut surface, "ArrowDown");
        assert_eq!(nav.current_focus(), Some("c"));

        nav.set_items(vec![
            NavigationItem::new("a", 0, 0),
            NavigationItem::new("c", 1, 0),
        ]);
        // Surviving focus holds until the deferred task runs
        assert_eq!(nav.current_focus(), Some("c"));
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("a"));
    }

    #[test]
    fn test_set_items_unchanged_is_noop() {
        let items = abc();
        let mut surface = TestSurface::attach_all(&items);
        let mut nav = Navigator::mount(items.clone(), NavConfig::new(2));
        nav.after_render(&mut surface);
        press(&mut nav, &mut surface, "ArrowDown");

        nav.set_items(items);
        nav.after_render(&mut surface);
        assert_eq!(nav.current_focus(), Some("c"));
    }
}
