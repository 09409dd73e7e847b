/// The crate version, as recorded by Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
