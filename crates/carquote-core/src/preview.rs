//! Preview handles for selected images.
//!
//! A handle is acquired when an image is selected and released exactly once,
//! either when it is dropped or through [`PreviewHandle::release`]. The
//! registry tracks how many handles are live so callers can verify nothing
//! leaks across replacement and teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tracing::debug;

use crate::payload::ImagePayload;

#[derive(Debug, Default)]
struct RegistryState {
    next_id: AtomicU64,
    live: AtomicUsize,
}

/// Issues preview handles and counts the ones still alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    state: Arc<RegistryState>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, image: ImagePayload) -> PreviewHandle {
        let id = self.state.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.state.live.fetch_add(1, Ordering::AcqRel);
        debug!(id, bytes = image.len(), mime = %image.mime(), "preview acquired");
        PreviewHandle {
            id,
            image,
            state: Arc::clone(&self.state),
        }
    }

    /// Number of handles acquired and not yet released.
    pub fn live(&self) -> usize {
        self.state.live.load(Ordering::Acquire)
    }
}

/// A live reference to a selected image.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    image: ImagePayload,
    state: Arc<RegistryState>,
}

impl PreviewHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn image(&self) -> &ImagePayload {
        &self.image
    }

    /// Release the handle now. Equivalent to dropping it.
    pub fn release(self) {}
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.state.live.fetch_sub(1, Ordering::AcqRel);
        debug!(id = self.id, "preview released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ImageMime;

    fn image() -> ImagePayload {
        ImagePayload::new(vec![0xff, 0xd8, 0xff], ImageMime::Jpeg)
    }

    #[test]
    fn acquire_and_drop() {
        let registry = PreviewRegistry::new();
        let handle = registry.acquire(image());
        assert_eq!(registry.live(), 1);
        assert_eq!(handle.image().len(), 3);
        drop(handle);
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn explicit_release() {
        let registry = PreviewRegistry::new();
        let handle = registry.acquire(image());
        handle.release();
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn replacing_releases_previous() {
        let registry = PreviewRegistry::new();
        let mut current = Some(registry.acquire(image()));
        let first_id = current.as_ref().unwrap().id();

        current = Some(registry.acquire(image()));
        assert_eq!(registry.live(), 1);
        assert_ne!(current.as_ref().unwrap().id(), first_id);

        current.take();
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn clones_share_counts() {
        let registry = PreviewRegistry::new();
        let other = registry.clone();
        let _handle = other.acquire(image());
        assert_eq!(registry.live(), 1);
    }
}
