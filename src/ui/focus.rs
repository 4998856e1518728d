//! Focus presentation: rings, handle registry and the egui focus surface

pub mod operations;
pub mod types;

// Re-exports
pub use operations::{decorate_focused, scroll_to, EguiSurface};
pub use types::{element_id, FocusHandles};
