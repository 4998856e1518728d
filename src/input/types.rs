// Remote input types

/// Result of polling a remote device
pub enum PollResult {
    /// Key-down (or auto-repeat) codes, in arrival order
    Keys(Vec<u16>),
    /// Device was disabled (with reason for logging at the app layer)
    DeviceDisabled(String),
}
