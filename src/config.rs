pub mod operations;
pub mod types;

// Re-export types
pub use types::{AppConfig, LayoutKind};

// Re-export operations
pub use operations::load_cfg;
