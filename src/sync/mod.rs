mod locked;

pub use locked::*;
