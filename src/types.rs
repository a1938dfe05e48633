use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Constraints passed to a capture request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStreamConstraints {
    pub video: bool,
    pub audio: bool,
}

impl MediaStreamConstraints {
    /// `{ video: true }` with audio left off
    pub fn video_only() -> Self {
        Self {
            video: true,
            audio: false,
        }
    }
}

impl Default for MediaStreamConstraints {
    fn default() -> Self {
        Self::video_only()
    }
}

/// A live video source owned by the platform backend.
pub trait VideoTrack: Send + Sync {
    /// Human readable device label
    fn label(&self) -> String;

    /// Whether the underlying capture is still delivering frames
    fn is_live(&self) -> bool;
}

/// Opaque handle to a live capture stream.
///
/// Clones share the same track; the track is released when the last handle
/// goes away.
#[derive(Clone)]
pub struct MediaStream {
    id: Uuid,
    acquired_at: DateTime<Utc>,
    track: Arc<dyn VideoTrack>,
}

impl MediaStream {
    pub fn new(track: Arc<dyn VideoTrack>) -> Self {
        Self {
            id: Uuid::new_v4(),
            acquired_at: Utc::now(),
            track,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    pub fn label(&self) -> String {
        self.track.label()
    }

    pub fn active(&self) -> bool {
        self.track.is_live()
    }

    pub fn info(&self) -> StreamInfo {
        StreamInfo {
            id: self.id,
            label: self.label(),
            active: self.active(),
            acquired_at: self.acquired_at,
        }
    }
}

impl PartialEq for MediaStream {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaStream {}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("id", &self.id)
            .field("label", &self.label())
            .field("active", &self.active())
            .finish()
    }
}

/// Serializable snapshot of a stream handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub id: Uuid,
    pub label: String,
    pub active: bool,
    pub acquired_at: DateTime<Utc>,
}

/// What a single run of the bootstrap handler did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// Stream acquired and bound to the surface
    Bound { stream: StreamInfo },
    /// Acquisition or binding failed; the diagnostic was logged
    Failed,
    /// No capture capability; nothing was requested
    Unsupported,
}

impl BootstrapOutcome {
    pub fn is_bound(&self) -> bool {
        matches!(self, BootstrapOutcome::Bound { .. })
    }
}

impl fmt::Display for BootstrapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapOutcome::Bound { stream } => {
                write!(f, "bound stream {} ({})", stream.id, stream.label)
            }
            BootstrapOutcome::Failed => write!(f, "failed"),
            BootstrapOutcome::Unsupported => write!(f, "unsupported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTrack;

    impl VideoTrack for FixedTrack {
        fn label(&self) -> String {
            "fixed".to_string()
        }

        fn is_live(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_default_constraints_are_video_only() {
        let constraints = MediaStreamConstraints::default();
        assert!(constraints.video);
        assert!(!constraints.audio);
    }

    #[test]
    fn test_stream_clones_share_identity() {
        let stream = MediaStream::new(Arc::new(FixedTrack));
        let clone = stream.clone();
        assert_eq!(stream, clone);
        assert_ne!(stream, MediaStream::new(Arc::new(FixedTrack)));
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_string(&BootstrapOutcome::Unsupported).unwrap();
        assert_eq!(json, r#"{"outcome":"unsupported"}"#);
    }
}
