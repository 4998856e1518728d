//! Remote/D-pad grid focus navigation
//!
//! - `types` - items, inputs, actions, errors
//! - `pure` - key classification, directional search, layout building
//! - `operations` - focus application and the deferred initial-focus task
//! - `pipelines` - the per-view `Navigator`

pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::FocusSurface;
pub use pipelines::Navigator;
pub use pure::{build_items, classify, LayoutPolicy};
pub use types::{NavAction, NavConfig, NavInput, RawKey};
