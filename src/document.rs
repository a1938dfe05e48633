//! Addressable display surfaces.

use crate::types::MediaStream;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Element that renders a bound media stream
#[derive(Debug)]
pub struct VideoElement {
    id: String,
    binding: Mutex<Binding>,
}

#[derive(Debug, Default)]
struct Binding {
    src_object: Option<MediaStream>,
    assignments: usize,
}

impl VideoElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            binding: Mutex::new(Binding::default()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the live input source
    pub fn set_src_object(&self, stream: Option<MediaStream>) {
        let mut binding = self
            .binding
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        binding.src_object = stream;
        binding.assignments += 1;
    }

    pub fn src_object(&self) -> Option<MediaStream> {
        self.binding
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .src_object
            .clone()
    }

    /// Number of times `set_src_object` has been called
    pub fn assignment_count(&self) -> usize {
        self.binding
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .assignments
    }
}

/// Registry of elements addressable by id
#[derive(Debug, Default)]
pub struct Document {
    elements: RwLock<HashMap<String, Arc<VideoElement>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding a single video element
    pub fn with_video(id: impl Into<String>) -> Self {
        let document = Self::new();
        document.add_video(id);
        document
    }

    /// Insert a video element, replacing any element with the same id
    pub fn add_video(&self, id: impl Into<String>) -> Arc<VideoElement> {
        let element = Arc::new(VideoElement::new(id));
        self.elements
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(element.id().to_string(), Arc::clone(&element));
        element
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Arc<VideoElement>> {
        self.elements
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
    }
}
