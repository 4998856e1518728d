// Input device operations - atomic I/O functions

pub mod device;
pub mod scan;

pub use device::RemoteDevice;
pub use scan::scan_remote_devices;
