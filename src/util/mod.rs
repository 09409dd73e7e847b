pub mod fmt;
pub mod panic;
#[cfg(all(feature = "fs", target_os = "linux"))]
pub mod syscall;
