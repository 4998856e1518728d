// Remote device scanning (I/O: evdev enumeration)

use crate::input::operations::device::RemoteDevice;
use crate::input::pure::is_remote_like;

/// Scan all input devices and return the remote-like ones, opened non-blocking
pub fn scan_remote_devices() -> Vec<RemoteDevice> {
    let mut remotes: Vec<RemoteDevice> = Vec::new();
    for (path, mut dev) in evdev::enumerate() {
        let remote_like = dev
            .supported_keys()
            .is_some_and(|keys| is_remote_like(|key| keys.contains(key)));
        if !remote_like {
            continue;
        }

        let Some(path) = path.to_str().map(str::to_string) else {
            continue;
        };
        if dev.set_nonblocking(true).is_err() {
            log::warn!("evdev: Failed to set non-blocking mode for {}", path);
            continue;
        }
        // Exclusive access so the window system does not see the same keys
        if !keep_grabbed(&path, dev.grab()) {
            continue;
        }

        log::info!(
            "evdev: remote {:?} at {}",
            dev.name().unwrap_or("unknown"),
            path
        );
        remotes.push(RemoteDevice::new(path, dev));
    }

    if remotes.is_empty() {
        log::info!("evdev: no remote-like input devices (is the user in the 'input' group?)");
    }
    remotes.sort_by(|a, b| a.path().cmp(b.path()));
    remotes
}

fn keep_grabbed(path: &str, grabbed: std::io::Result<()>) -> bool {
    match grabbed {
        Ok(()) => true,
        Err(e) => {
            log::warn!("evdev: skipping {}, could not grab it: {}", path, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_grabbed_device_is_kept() {
        assert!(keep_grabbed("/dev/input/event3", Ok(())));
    }

    #[test]
    fn test_ungrabbable_device_is_skipped() {
        let denied = Error::new(ErrorKind::PermissionDenied, "no access");
        assert!(!keep_grabbed("/dev/input/event3", Err(denied)));
    }
}
