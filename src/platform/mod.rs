//! Platform capture capability and its detection.

pub mod native;

use crate::errors::CaptureError;
use crate::types::{MediaStream, MediaStreamConstraints};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub use native::NativeMediaDevices;

/// Capture capability exposed by the host platform
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// Request a live stream matching `constraints`.
    ///
    /// Suspends while the platform resolves permission and opens the device.
    async fn get_user_media(
        &self,
        constraints: MediaStreamConstraints,
    ) -> Result<MediaStream, CaptureError>;
}

/// Entry point for platform capabilities. The capture capability may be absent.
#[derive(Clone, Default)]
pub struct Navigator {
    media_devices: Option<Arc<dyn MediaDevices>>,
}

impl Navigator {
    pub fn new(media_devices: Option<Arc<dyn MediaDevices>>) -> Self {
        Self { media_devices }
    }

    pub fn with_media_devices(media_devices: Arc<dyn MediaDevices>) -> Self {
        Self::new(Some(media_devices))
    }

    pub fn without_media() -> Self {
        Self::new(None)
    }

    /// Navigator backed by the camera at `device_index`
    pub fn native(device_index: u32) -> Self {
        Self::with_media_devices(Arc::new(NativeMediaDevices::new(device_index)))
    }

    pub fn media_devices(&self) -> Option<Arc<dyn MediaDevices>> {
        self.media_devices.clone()
    }

    /// Capability check
    pub fn has_user_media(&self) -> bool {
        self.media_devices.is_some()
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("has_user_media", &self.has_user_media())
            .finish()
    }
}
