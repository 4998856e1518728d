pub mod highlight;
pub mod surface;

// Re-exports
pub use highlight::{decorate_focused, scroll_to};
pub use surface::EguiSurface;
