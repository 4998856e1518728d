// Startup signal gathering (I/O: env vars, sysfs)

use std::fs;
use std::path::Path;

use crate::device::pure::parse_mode_width;
use crate::device::types::DeviceSignals;

pub const ENV_DEVICE_IDENTITY: &str = "SPORTS127_DEVICE";

const IDENTITY_FILES: [&str; 2] = ["/sys/class/dmi/id/product_name", "/proc/device-tree/model"];
const DRM_CLASS: &str = "/sys/class/drm";

/// Collect the signals device detection runs on.
///
/// `identity_override` comes from the config file and takes precedence over
/// the environment, which takes precedence over sysfs.
pub fn gather_signals(identity_override: Option<&str>, remote_present: bool) -> DeviceSignals {
    let identity = identity_override
        .map(str::to_string)
        .or_else(|| std::env::var(ENV_DEVICE_IDENTITY).ok())
        .or_else(read_identity_file)
        .unwrap_or_default()
        .to_lowercase();

    DeviceSignals {
        identity,
        screen_width: read_connected_screen_width(Path::new(DRM_CLASS)),
        remote_present,
    }
}

fn read_identity_file() -> Option<String> {
    IDENTITY_FILES.iter().find_map(|path| {
        let contents = fs::read_to_string(path).ok()?;
        // device-tree strings are NUL terminated
        let trimmed = contents.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Width of the first connected DRM connector's preferred mode
fn read_connected_screen_width(drm_class: &Path) -> Option<u32> {
    let entries = fs::read_dir(drm_class).ok()?;
    let mut connectors: Vec<_> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
    connectors.sort();

    connectors.iter().find_map(|connector| {
        let status = fs::read_to_string(connector.join("status")).ok()?;
        if status.trim() != "connected" {
            return None;
        }
        let modes = fs::read_to_string(connector.join("modes")).ok()?;
        modes.lines().next().and_then(parse_mode_width)
    })
}
