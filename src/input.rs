//! Remote-control input over evdev
//!
//! Keyboard input reaches the app through the window system; TV remotes
//! (IR receivers, HDMI-CEC bridges, Bluetooth remotes) show up as evdev key
//! devices and are polled here for their numeric key codes.

pub mod operations;
pub mod pure;
pub mod types;

pub use operations::{scan_remote_devices, RemoteDevice};
pub use types::PollResult;

/// Poll every enabled remote and collect key-down codes in device order
pub fn poll_remotes(remotes: &mut [RemoteDevice]) -> Vec<u16> {
    let mut codes = Vec::new();
    for remote in remotes.iter_mut().filter(|r| r.enabled()) {
        match remote.poll() {
            PollResult::Keys(keys) => codes.extend(keys),
            PollResult::DeviceDisabled(reason) => {
                log::warn!("evdev: {} ({}) disabled: {}", remote.name(), remote.path(), reason);
            }
        }
    }
    codes
}
