// Device capability types

/// Raw environment signals gathered once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSignals {
    /// Lowercased device identity (user-agent style string or DMI product name)
    pub identity: String,
    /// Width in pixels of the first connected display, if known
    pub screen_width: Option<u32>,
    /// A remote-like evdev input device is present
    pub remote_present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    FireTv,
    AndroidTv,
    AppleTv,
    SmartTv,
    TvLike,
    Desktop,
}

impl DeviceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::FireTv => "Fire TV",
            Self::AndroidTv => "Android TV",
            Self::AppleTv => "Apple TV",
            Self::SmartTv => "Smart TV",
            Self::TvLike => "TV",
            Self::Desktop => "Desktop",
        }
    }
}

/// Capability flags handed to the views. Computed once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub kind: DeviceKind,
    pub is_tv_like: bool,
    pub is_fire_tv: bool,
}

impl Capabilities {
    pub fn from_kind(kind: DeviceKind) -> Self {
        Self {
            kind,
            is_tv_like: kind != DeviceKind::Desktop,
            is_fire_tv: kind == DeviceKind::FireTv,
        }
    }
}
