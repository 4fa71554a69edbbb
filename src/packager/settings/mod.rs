//! Configuration types for the packaging pipeline.

mod arch;
mod core;
mod platform;
mod request;

// Re-export all public types
pub use arch::Arch;
pub use core::Settings;
pub use platform::Platform;
pub use request::PackageRequest;
