//! webcam-bootstrap: acquire a webcam on window load and bind it to a video surface
//!
//! A window owns a document of addressable video surfaces, a navigator that may
//! expose a capture capability, and a console for developer diagnostics. The
//! [`CameraBootstrap`] handler, assigned as the window's load handler, requests
//! a video-only stream when the window loads and binds it to the `"video"`
//! surface. Failures are logged once and never surface as errors.
//!
//! # Usage
//! ```rust,ignore
//! use std::sync::Arc;
//! use webcam_bootstrap::{CameraBootstrap, Document, Navigator, Window};
//!
//! #[tokio::main]
//! async fn main() {
//!     webcam_bootstrap::init_logging();
//!     let window = Window::with_console(
//!         Arc::new(Document::with_video("video")),
//!         Navigator::native(0),
//!     );
//!     window.set_onload(Arc::new(CameraBootstrap::new()));
//!     let outcome = window.dispatch_load().await;
//!     println!("{:?}", outcome);
//! }
//! ```
pub mod bootstrap;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod errors;
pub mod platform;
pub mod types;
pub mod window;

// Testing utilities - scripted capabilities for offline testing
pub mod testing;

pub use bootstrap::{CameraBootstrap, DEFAULT_SURFACE_ID};
pub use config::BootstrapConfig;
pub use diagnostics::{ConsoleSink, DiagnosticSink, MemorySink, WEBCAM_ACCESS_FAILED};
pub use document::{Document, VideoElement};
pub use errors::{CaptureError, ConfigError};
pub use platform::{MediaDevices, NativeMediaDevices, Navigator};
pub use types::{BootstrapOutcome, MediaStream, MediaStreamConstraints, StreamInfo, VideoTrack};
pub use window::{LoadHandler, Window};

/// Initialize logging with the default filter
pub fn init_logging() {
    init_logging_with(&config::LoggingConfig::default().level);
}

/// Initialize logging, using `default_filter` when `RUST_LOG` is unset
pub fn init_logging_with(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
