use serde::{Deserialize, Serialize};

use crate::nav::LayoutPolicy;

pub const DEFAULT_GRID_COLS: u32 = 4;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    SingleRow,
    SingleColumn,
    #[default]
    Grid,
}

impl LayoutKind {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "row" | "single_row" => Some(Self::SingleRow),
            "column" | "single_column" => Some(Self::SingleColumn),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }
}

/// Main application configuration
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AppConfig {
    /// Column count of the channel grid
    #[serde(default = "default_grid_cols")]
    pub grid_cols: u32,
    #[serde(default)]
    pub layout: LayoutKind,
    /// Navigation id focused when the channel grid first mounts (e.g. "tnt-410")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_focus: Option<String>,
    #[serde(default = "default_true")]
    pub show_intro: bool,
    #[serde(default)]
    pub show_loading: bool,
    /// Start fullscreen. None = fullscreen on TV-like devices only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    /// UI zoom. None = pick from the device kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f32>,
    /// Overrides the detected device identity (e.g. "AFTMM" to force Fire TV behaviour)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_identity: Option<String>,
    /// Poll evdev remotes for key codes
    #[serde(default = "default_true")]
    pub remote_input: bool,
}

fn default_grid_cols() -> u32 {
    DEFAULT_GRID_COLS
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            grid_cols: DEFAULT_GRID_COLS,
            layout: LayoutKind::Grid,
            initial_focus: None,
            show_intro: true,
            show_loading: false,
            fullscreen: None,
            zoom_factor: None,
            device_identity: None,
            remote_input: true,
        }
    }
}

impl AppConfig {
    /// Fix up values a hand-edited file may carry.
    /// Call this after loading config from disk
    pub fn migrate(&mut self) {
        if self.grid_cols == 0 {
            self.grid_cols = DEFAULT_GRID_COLS;
        }
        if let Some(zoom) = self.zoom_factor {
            if !(0.5..=4.0).contains(&zoom) {
                self.zoom_factor = None;
            }
        }
        if self.initial_focus.as_deref().is_some_and(str::is_empty) {
            self.initial_focus = None;
        }
    }

    pub fn layout_policy(&self) -> LayoutPolicy {
        match self.layout {
            LayoutKind::SingleRow => LayoutPolicy::SingleRow,
            LayoutKind::SingleColumn => LayoutPolicy::SingleColumn,
            LayoutKind::Grid => LayoutPolicy::Grid {
                cols: i32::try_from(self.grid_cols).unwrap_or(i32::MAX),
            },
        }
    }
}
