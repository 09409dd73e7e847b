use std::fmt::{self, Debug, Formatter};

/// Prints its contents verbatim in [`Debug`] output, so values like `0o644` or `4.0 KiB` don't end
/// up quoted.
pub struct DebugRaw(pub String);

impl DebugRaw {
    #[cfg(all(feature = "fs", target_os = "linux"))]
    pub fn octal(value: u32) -> DebugRaw {
        DebugRaw(format!("0o{:o}", value))
    }

    #[cfg(all(feature = "fs", target_os = "linux"))]
    pub fn bytes(count: u64) -> DebugRaw {
        DebugRaw(human_bytes(count))
    }
}

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a byte count with a binary unit, one decimal place above bytes.
#[cfg(all(feature = "fs", target_os = "linux"))]
pub fn human_bytes(count: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

    if count < 1024 {
        return format!("{} B", count);
    }

    let mut value = count as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
