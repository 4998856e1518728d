pub mod detect;

// Re-exports
pub use detect::{detect_device, parse_mode_width};
