use crate::errors::CaptureError;
use crate::platform::MediaDevices;
use crate::types::{MediaStream, MediaStreamConstraints, VideoTrack};
use async_trait::async_trait;
use nokhwa::{
    pixel_format::RgbFormat,
    query,
    utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType},
    CallbackCamera,
};
use std::sync::{Arc, Mutex};

/// Capture capability backed by a local camera through nokhwa
#[derive(Debug, Clone)]
pub struct NativeMediaDevices {
    device_index: u32,
}

impl NativeMediaDevices {
    pub fn new(device_index: u32) -> Self {
        Self { device_index }
    }

    pub fn device_index(&self) -> u32 {
        self.device_index
    }
}

#[async_trait]
impl MediaDevices for NativeMediaDevices {
    async fn get_user_media(
        &self,
        constraints: MediaStreamConstraints,
    ) -> Result<MediaStream, CaptureError> {
        if !constraints.video {
            return Err(CaptureError::Unsupported(
                "video must be requested".to_string(),
            ));
        }
        if constraints.audio {
            return Err(CaptureError::Unsupported(
                "audio capture is not available".to_string(),
            ));
        }

        let device_index = self.device_index;
        let track = tokio::task::spawn_blocking(move || open_camera(device_index))
            .await
            .map_err(|e| {
                CaptureError::AcquisitionFailed(format!("Camera worker failed: {}", e))
            })??;

        log::info!("Opened camera {} ({})", device_index, track.label);
        Ok(MediaStream::new(Arc::new(track)))
    }
}

fn open_camera(device_index: u32) -> Result<NativeTrack, CaptureError> {
    let label = device_label(device_index);
    let requested_format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::None);

    let mut camera =
        CallbackCamera::new(CameraIndex::Index(device_index), requested_format, |_| {})
            .map_err(|e| {
                CaptureError::AcquisitionFailed(format!("Failed to initialize camera: {}", e))
            })?;

    camera.open_stream().map_err(|e| {
        CaptureError::AcquisitionFailed(format!("Failed to start stream: {}", e))
    })?;

    Ok(NativeTrack {
        camera: Mutex::new(camera),
        label,
    })
}

fn device_label(device_index: u32) -> String {
    let wanted = CameraIndex::Index(device_index).to_string();
    match query(ApiBackend::Auto) {
        Ok(cameras) => cameras
            .into_iter()
            .find(|info| info.index().to_string() == wanted)
            .map(|info| info.human_name())
            .unwrap_or_else(|| format!("Camera {}", device_index)),
        Err(e) => {
            log::debug!("Camera query failed: {}", e);
            format!("Camera {}", device_index)
        }
    }
}

/// Open nokhwa stream; stopped when the last stream handle drops
struct NativeTrack {
    camera: Mutex<CallbackCamera>,
    label: String,
}

impl VideoTrack for NativeTrack {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn is_live(&self) -> bool {
        self.camera
            .lock()
            .ok()
            .and_then(|c| c.is_stream_open().ok())
            .unwrap_or(false)
    }
}

impl Drop for NativeTrack {
    // CallbackCamera stops its own stream on drop.
    fn drop(&mut self) {
        log::debug!("Released camera stream ({})", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_audio_request_is_rejected_without_hardware() {
        let devices = NativeMediaDevices::new(0);
        let result = devices
            .get_user_media(MediaStreamConstraints {
                video: true,
                audio: true,
            })
            .await;
        assert!(matches!(result, Err(CaptureError::Unsupported(_))));
    }

    #[tokio::test]
    async fn test_video_must_be_requested() {
        let devices = NativeMediaDevices::new(0);
        let result = devices
            .get_user_media(MediaStreamConstraints {
                video: false,
                audio: false,
            })
            .await;
        assert!(matches!(result, Err(CaptureError::Unsupported(_))));
    }

    fn assert_video_track<T: VideoTrack>() {}

    #[test]
    fn test_native_track_is_a_video_track() {
        assert_video_track::<NativeTrack>();
        let _is_live: fn(&NativeTrack) -> bool = NativeTrack::is_live;
        let _label: fn(&NativeTrack) -> String = NativeTrack::label;
    }

    #[test]
    fn test_device_label_falls_back_for_unknown_index() {
        assert_eq!(device_label(u32::MAX), format!("Camera {}", u32::MAX));
    }

    #[test]
    fn test_open_unknown_camera_fails_acquisition() {
        let result = open_camera(u32::MAX);
        assert!(matches!(result, Err(CaptureError::AcquisitionFailed(_))));
    }

    #[test]
    #[ignore] // Requires camera hardware
    fn test_open_camera_is_live_until_dropped() {
        let track = open_camera(0).expect("camera 0 should open");
        assert!(track.is_live());
        assert!(!track.label().is_empty());
        drop(track);

        // Device is free again once the track is gone
        let reopened = open_camera(0).expect("camera 0 should reopen");
        assert!(reopened.is_live());
    }

    #[tokio::test]
    #[ignore] // Requires camera hardware
    async fn test_get_user_media_returns_active_stream() {
        let devices = NativeMediaDevices::new(0);
        let stream = devices
            .get_user_media(MediaStreamConstraints::video_only())
            .await
            .expect("camera 0 should open");
        assert!(stream.active());
    }
}
