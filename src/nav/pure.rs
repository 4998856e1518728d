pub mod input_map;
pub mod layout;
pub mod search;

// Re-exports
pub use input_map::{classify, classify_code, classify_name};
pub use layout::{build_items, row_count, LayoutPolicy};
pub use search::{compute_next_focus, find_item, initial_focus_target};
