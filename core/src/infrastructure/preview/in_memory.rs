use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;
use uuid::Uuid;

use crate::domain::capture::{
    entities::{CapturedImage, PreviewRef},
    ports::PreviewStore,
};

/// Object-URL style registry: `blob:<uuid>` handles backed by in-process bytes.
#[derive(Debug, Default)]
pub struct InMemoryPreviewStore {
    entries: Mutex<HashMap<PreviewRef, CapturedImage>>,
}

impl InMemoryPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, preview: &PreviewRef) -> Option<CapturedImage> {
        self.entries().get(preview).cloned()
    }

    pub fn live_count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<PreviewRef, CapturedImage>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreviewStore for InMemoryPreviewStore {
    fn create(&self, image: &CapturedImage) -> PreviewRef {
        let preview = PreviewRef(format!("blob:{}", Uuid::new_v4()));
        self.entries().insert(preview.clone(), image.clone());
        debug!(preview = preview.as_str(), "preview created");
        preview
    }

    fn revoke(&self, preview: &PreviewRef) {
        self.entries().remove(preview);
        debug!(preview = preview.as_str(), "preview revoked");
    }
}
