//! Build information baked in at compile time.

/// The crate version of the favorites service.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The source revision, if `FAVORITES_REVISION` was set during the build.
pub const REVISION: Option<&str> = option_env!("FAVORITES_REVISION");

/// When the binary was built, if `BUILD_TIMESTAMP` was set during the build.
pub const BUILD_TIMESTAMP: Option<&str> = option_env!("BUILD_TIMESTAMP");
