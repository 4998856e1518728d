pub mod deferred;
pub mod focus;

// Re-exports
pub use deferred::{CancelHandle, DeferredFocus};
pub use focus::{apply_focus, FocusSurface};
