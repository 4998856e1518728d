//! Grid navigation types shared by the pure search, focus operations and the navigator pipeline

use thiserror::Error;

/// One selectable entity placed on the logical grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: String,
    pub row: i32,
    pub col: i32,
}

impl NavigationItem {
    pub fn new(id: impl Into<String>, row: i32, col: i32) -> Self {
        Self {
            id: id.into(),
            row,
            col,
        }
    }
}

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, NavDirection::Up | NavDirection::Down)
    }
}

/// Normalized navigation input, whatever device produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
    Unknown,
}

impl NavInput {
    pub fn direction(self) -> Option<NavDirection> {
        match self {
            NavInput::Up => Some(NavDirection::Up),
            NavInput::Down => Some(NavDirection::Down),
            NavInput::Left => Some(NavDirection::Left),
            NavInput::Right => Some(NavDirection::Right),
            NavInput::Select | NavInput::Back | NavInput::Unknown => None,
        }
    }
}

/// A raw key event as reported by the host.
///
/// Keyboards report a symbolic name, evdev remotes report a numeric key code.
/// Either or both may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKey {
    pub name: Option<String>,
    pub code: Option<u16>,
}

impl RawKey {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            code: None,
        }
    }

    pub fn coded(code: u16) -> Self {
        Self {
            name: None,
            code: Some(code),
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }
}

/// Navigation anomalies. None of these ever reach the user; they all degrade to no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("item `{0}` is not in the current item set")]
    NotFound(String),
    #[error("no item {direction:?} of `{from}`")]
    NoTarget { from: String, direction: NavDirection },
    #[error("no element is attached for item `{0}`")]
    ElementUnresolved(String),
}

/// Per-view navigator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Logical column count used to clamp rightward movement
    pub grid_cols: i32,
    pub initial_focus: Option<String>,
}

impl NavConfig {
    pub fn new(grid_cols: i32) -> Self {
        Self {
            grid_cols: grid_cols.max(1),
            initial_focus: None,
        }
    }

    pub fn with_initial_focus(mut self, id: Option<String>) -> Self {
        self.initial_focus = id;
        self
    }
}

/// Action raised by the navigator for the owning view to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Select/OK pressed while an item is focused
    Select(String),
    /// Back/Escape pressed
    Back,
}

/// Result of feeding one input event to the navigator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// The event's default effect must be suppressed
    pub consumed: bool,
    pub action: Option<NavAction>,
}

impl InputOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            action: None,
        }
    }

    pub fn with_action(action: NavAction) -> Self {
        Self {
            consumed: true,
            action: Some(action),
        }
    }
}
