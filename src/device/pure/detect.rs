// Device kind detection from startup signals (pure functions)

use crate::device::types::{DeviceKind, DeviceSignals};

/// Displays at least this wide count as TV-sized
pub const LARGE_SCREEN_WIDTH: u32 = 1920;

const FIRE_TV_MARKERS: [&str; 3] = ["afts", "aftm", "aftb"];
const SMART_TV_MARKERS: [&str; 5] = ["smart-tv", "smarttv", "webos", "tizen", "roku"];

// The generic `aft` and `tv` markers only count as whole tokens (`aftka`,
// `Roku TV`); as bare substrings they hit names like `Craft` or `ATVision`.
fn tokens(identity: &str) -> impl Iterator<Item = &str> {
    identity.split(|c: char| !c.is_ascii_alphanumeric()).filter(|t| !t.is_empty())
}

fn is_fire_tv(identity: &str) -> bool {
    FIRE_TV_MARKERS.iter().any(|m| identity.contains(m))
        || tokens(identity).any(|t| t.starts_with("aft"))
}

fn is_smart_tv(identity: &str) -> bool {
    SMART_TV_MARKERS.iter().any(|m| identity.contains(m)) || tokens(identity).any(|t| t == "tv")
}

/// Classify the device. First matching rule wins.
pub fn detect_device(signals: &DeviceSignals) -> DeviceKind {
    let identity = signals.identity.to_lowercase();

    if is_fire_tv(&identity) {
        DeviceKind::FireTv
    } else if identity.contains("android tv") {
        DeviceKind::AndroidTv
    } else if identity.contains("apple tv") {
        DeviceKind::AppleTv
    } else if is_smart_tv(&identity) {
        DeviceKind::SmartTv
    } else if signals.remote_present
        && signals.screen_width.is_some_and(|w| w >= LARGE_SCREEN_WIDTH)
    {
        DeviceKind::TvLike
    } else {
        DeviceKind::Desktop
    }
}

/// Parse the width out of a DRM mode line such as `1920x1080`
pub fn parse_mode_width(mode: &str) -> Option<u32> {
    let (width, _) = mode.trim().split_once('x')?;
    width.parse().ok()
}
