//! Transient success/error messages.
//!
//! Every message starts its own timer. When a timer fires it clears both
//! messages, so an older timer can wipe a newer message early.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Banner {
    state: Arc<Mutex<BannerState>>,
}

impl Banner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success message for `delay`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn success(&self, message: impl Into<String>, delay: Duration) {
        self.lock().success = Some(message.into());
        self.schedule_clear(delay);
    }

    /// Show an error message for `delay`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn error(&self, message: impl Into<String>, delay: Duration) {
        self.lock().error = Some(message.into());
        self.schedule_clear(delay);
    }

    #[must_use]
    pub fn snapshot(&self) -> BannerState {
        self.lock().clone()
    }

    pub fn clear(&self) {
        *self.lock() = BannerState::default();
    }

    fn schedule_clear(&self, delay: Duration) {
        let banner = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("banner cleared");
            banner.clear();
        });
    }

    fn lock(&self) -> MutexGuard<'_, BannerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
