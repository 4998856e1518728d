pub mod classify;

// Re-exports
pub use classify::is_remote_like;
