//! Phase-boundary notifications.
//!
//! The session timer calls a [`Notifier`] whenever it crosses a phase
//! boundary. Delivery is best-effort: the timer logs failures and keeps going.

mod desktop;

pub use desktop::DesktopNotifier;

use crate::config::Config;
use crate::error::PomoError;

/// Delivers a titled message to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Send a notification.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Notification` if the message could not be delivered.
    fn notify(&self, title: &str, message: &str) -> Result<(), PomoError>;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, title: &str, message: &str) -> Result<(), PomoError> {
        (**self).notify(title, message)
    }
}

/// Notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), PomoError> {
        Ok(())
    }
}

/// Build the notifier selected by the configuration.
#[must_use]
pub fn from_config(config: &Config) -> Box<dyn Notifier> {
    match desktop_notifier(config) {
        Some(notifier) => Box::new(notifier),
        None => Box::new(NullNotifier),
    }
}

/// The desktop notifier to use, or `None` when notifications are disabled.
const fn desktop_notifier(config: &Config) -> Option<DesktopNotifier> {
    if config.notifications.enabled {
        Some(DesktopNotifier::new(config.notifications.persistent))
    } else {
        None
    }
}
