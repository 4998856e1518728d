pub mod operations;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::gather_signals;
pub use pure::detect_device;
pub use types::{Capabilities, DeviceKind, DeviceSignals};

/// Probe the environment and compute the capability flags for this run
pub fn detect_capabilities(identity_override: Option<&str>, remote_present: bool) -> Capabilities {
    let signals = gather_signals(identity_override, remote_present);
    let kind = detect_device(&signals);
    log::info!(
        "device: {} (identity={:?}, screen_width={:?}, remote={})",
        kind.label(),
        signals.identity,
        signals.screen_width,
        signals.remote_present
    );
    Capabilities::from_kind(kind)
}
