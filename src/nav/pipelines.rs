pub mod navigator;

// Re-exports
pub use navigator::Navigator;
