//! Locale-change notification seam.
//!
//! Dispatch is synchronous and in-process; delivery is fire-and-forget.

use unic_langid::LanguageIdentifier;

/// Payload published after the active locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChanged {
    /// The locale that is now current.
    pub locale: LanguageIdentifier,
}

impl LocaleChanged {
    /// Event name for hosts that bridge into a keyed notification system.
    pub const NAME: &'static str = "dupnium.locale-changed";
}

/// Receives locale-change events.
pub trait ChangeNotifier: Send + Sync {
    fn publish(&self, change: &LocaleChanged);
}

/// Drops every event. The default when no notifier is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn publish(&self, _change: &LocaleChanged) {}
}

/// Invokes registered callbacks in registration order.
#[derive(Default)]
pub struct CallbackNotifier {
    subscribers: Vec<Box<dyn Fn(&LocaleChanged) + Send + Sync>>,
}

impl CallbackNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl Fn(&LocaleChanged) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(callback));
    }
}

impl ChangeNotifier for CallbackNotifier {
    fn publish(&self, change: &LocaleChanged) {
        for subscriber in &self.subscribers {
            subscriber(change);
        }
    }
}

/// Sends each event over a channel. A full or disconnected channel drops
/// the event rather than blocking the caller.
impl ChangeNotifier for crossbeam_channel::Sender<LocaleChanged> {
    fn publish(&self, change: &LocaleChanged) {
        if self.try_send(change.clone()).is_err() {
            tracing::debug!(locale = %change.locale, "locale change event dropped");
        }
    }
}
