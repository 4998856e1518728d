pub mod components;
pub mod focus;
pub mod splash;
pub mod theme;

// Re-exports
pub use focus::{EguiSurface, FocusHandles};
