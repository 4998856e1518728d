// Device operations - startup environment probing

pub mod signals;

pub use signals::gather_signals;
