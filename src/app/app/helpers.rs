//! Helper methods for SportsApp

use std::time::{Duration, Instant};

use super::SportsApp;
use crate::input::poll_remotes;
use crate::nav::RawKey;

/// Short-lived notice shown over the current screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub until: Instant,
}

impl Toast {
    pub fn new(title: impl Into<String>, body: impl Into<String>, ttl: Duration) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            until: Instant::now() + ttl,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.until
    }
}

impl SportsApp {
    /// Key-down events from evdev remotes since the last frame
    pub(crate) fn drain_remote_keys(&mut self) -> Vec<RawKey> {
        if !self.config.remote_input || self.remotes.is_empty() {
            return Vec::new();
        }
        poll_remotes(&mut self.remotes)
            .into_iter()
            .map(RawKey::coded)
            .collect()
    }

    /// Drop the toast once it has run its course
    pub(crate) fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::expired) {
            self.toast = None;
        }
    }

    pub fn is_tv(&self) -> bool {
        self.capabilities.is_tv_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        assert!(!Toast::new("a", "b", Duration::from_secs(60)).expired());
        assert!(Toast::new("a", "b", Duration::ZERO).expired());
    }
}
