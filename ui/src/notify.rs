// Timed notifications ("toasts"). The renderer draws whatever `visible`
// yields, sampling `opacity` per frame, and calls `sweep` to drop entries
// whose fade has finished.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::animate::Fade;

/// How long a notification stays fully visible before fading.
pub const DEFAULT_DISMISS: Duration = Duration::from_secs(5);
/// Length of the fade-out tail after the visible lifetime.
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub level: Level,
    created: Instant,
    lifetime: Duration,
}

impl Notification {
    /// Instant at which the fade-out begins.
    pub fn expires_at(&self) -> Instant {
        self.created + self.lifetime
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    dismiss_after: Duration,
    fade: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_timings(DEFAULT_DISMISS, DEFAULT_FADE)
    }

    pub fn with_timings(dismiss_after: Duration, fade: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            dismiss_after,
            fade,
        }
    }

    /// Queues a notification with the center's default lifetime and returns
    /// its id for later manual dismissal.
    pub fn push(&mut self, message: impl Into<String>, level: Level) -> Uuid {
        let id = Uuid::new_v4();
        let message = message.into();
        tracing::debug!("Notification {:?}: {}", level, message);
        self.notifications.push(Notification {
            id,
            message,
            level,
            created: Instant::now(),
            lifetime: self.dismiss_after,
        });
        id
    }

    /// Close-button path: removes the notification immediately. Returns
    /// whether the id was present.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Drops every notification whose lifetime and fade tail have both
    /// elapsed by `now`.
    pub fn sweep(&mut self, now: Instant) {
        let fade = self.fade;
        self.notifications
            .retain(|n| now < n.expires_at() + fade);
    }

    /// Notifications still on screen at `now`, oldest first. Entries already
    /// fully faded are skipped even if `sweep` has not run yet.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        let fade = self.fade;
        self.notifications
            .iter()
            .filter(move |n| now < n.expires_at() + fade)
    }

    /// Opacity of one notification at `now`: fully opaque during its
    /// lifetime, then ramping to zero across the fade tail.
    pub fn opacity(&self, notification: &Notification, now: Instant) -> f32 {
        if !notification.is_expired(now) {
            return 1.0;
        }
        Fade::fade_out(notification.expires_at(), self.fade).opacity(now)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
