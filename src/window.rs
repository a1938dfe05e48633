//! Host window: owns the document, the navigator, the console and the
//! single load event slot.

use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::document::Document;
use crate::platform::Navigator;
use crate::types::BootstrapOutcome;
use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Callback run when the window finishes loading
#[async_trait]
pub trait LoadHandler: Send + Sync {
    async fn on_load(&self, window: &Window) -> BootstrapOutcome;
}

pub struct Window {
    document: Arc<Document>,
    navigator: Navigator,
    console: Arc<dyn DiagnosticSink>,
    onload: Mutex<Option<Arc<dyn LoadHandler>>>,
    loaded: AtomicBool,
}

impl Window {
    pub fn new(
        document: Arc<Document>,
        navigator: Navigator,
        console: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            document,
            navigator,
            console,
            onload: Mutex::new(None),
            loaded: AtomicBool::new(false),
        }
    }

    /// Window logging diagnostics through `log`
    pub fn with_console(document: Arc<Document>, navigator: Navigator) -> Self {
        Self::new(document, navigator, Arc::new(ConsoleSink))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn console(&self) -> &dyn DiagnosticSink {
        self.console.as_ref()
    }

    /// Assign the load handler, replacing any previous one
    pub fn set_onload(&self, handler: Arc<dyn LoadHandler>) {
        let mut slot = self
            .onload
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.replace(handler).is_some() {
            log::debug!("Replaced previously assigned load handler");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Fire the load event.
    ///
    /// Load fires once per window; later calls return `None` without running
    /// anything. Also `None` when no handler is assigned.
    pub async fn dispatch_load(&self) -> Option<BootstrapOutcome> {
        if self.loaded.swap(true, Ordering::SeqCst) {
            log::debug!("Load event already dispatched");
            return None;
        }

        let handler = self
            .onload
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()?;
        Some(handler.on_load(self).await)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("navigator", &self.navigator)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
