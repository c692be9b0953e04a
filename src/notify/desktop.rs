//! Desktop notifications via the platform notification service.

use notify_rust::{Notification, Timeout};
use tracing::debug;

use crate::error::PomoError;
use crate::notify::Notifier;

const APP_NAME: &str = "pomo";

/// Shows notifications through `notify-rust`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopNotifier {
    /// Keep the notification on screen until dismissed.
    persistent: bool,
}

impl DesktopNotifier {
    /// Create a desktop notifier.
    #[must_use]
    pub const fn new(persistent: bool) -> Self {
        Self { persistent }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), PomoError> {
        debug!(title, message, "sending desktop notification");

        let mut notification = Notification::new();
        notification.appname(APP_NAME).summary(title).body(message);
        if self.persistent {
            notification.timeout(Timeout::Never);
        }

        notification
            .show()
            .map(|_| ())
            .map_err(|e| PomoError::Notification(e.to_string()))
    }
}
