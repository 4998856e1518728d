// RemoteDevice struct and poll implementation (I/O: calls fetch_events)

use crate::input::types::PollResult;
use evdev::*;

pub struct RemoteDevice {
    path: String,
    dev: Device,
    enabled: bool,
}

impl RemoteDevice {
    pub fn new(path: String, dev: Device) -> Self {
        Self {
            path,
            dev,
            enabled: true,
        }
    }

    pub fn name(&self) -> &str {
        self.dev.name().unwrap_or("")
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn poll(&mut self) -> PollResult {
        // Quick check: if device node is gone, disable immediately
        if !std::path::Path::new(&self.path).exists() {
            self.enabled = false;
            return PollResult::DeviceDisabled(format!("device node gone: {}", self.path));
        }

        const MAX_EVENTS_PER_POLL: usize = 256;

        let mut codes = Vec::new();
        match self.dev.fetch_events() {
            Ok(events) => {
                for (count, event) in events.enumerate() {
                    if count >= MAX_EVENTS_PER_POLL {
                        self.enabled = false;
                        return PollResult::DeviceDisabled(format!(
                            "exceeded max events for {}, disabling device",
                            self.path
                        ));
                    }
                    // 1 = press, 2 = auto-repeat while held
                    if let EventSummary::Key(_, code, 1 | 2) = event.destructure() {
                        codes.push(code.0);
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
            Err(e) if e.raw_os_error() == Some(19) => {
                // ENODEV: device disconnected
                self.enabled = false;
                return PollResult::DeviceDisabled(format!("device disconnected: {}", self.path));
            }
            Err(e) => {
                log::trace!("evdev: read error on {}: {}", self.path, e);
            }
        }

        PollResult::Keys(codes)
    }
}
