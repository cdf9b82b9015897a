//! Session change notifications
//!
//! The EventBus decouples the handlers that change a session from whatever
//! wants to observe those changes (audit logging, metrics, tests). It uses
//! `tokio::sync::broadcast`, so every subscriber sees every event.
//!
//! # Usage
//!
//! ```rust,ignore
//! let event_bus = EventBus::new(64);
//! let mut rx = event_bus.subscribe();
//!
//! event_bus.publish(SessionEvent::SignedOut { user_id, email });
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{}", envelope.event.action());
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// A change (or failed change) of a viewer's session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A viewer signed in
    SignedIn { user_id: Uuid, email: String },

    /// A viewer signed out
    SignedOut { user_id: Uuid, email: String },

    /// Ending a session failed; the session is left as it was
    SignOutFailed {
        user_id: Option<Uuid>,
        message: String,
    },
}

impl SessionEvent {
    /// Get the action name (signed_in, signed_out, sign_out_failed)
    pub fn action(&self) -> &str {
        match self {
            SessionEvent::SignedIn { .. } => "signed_in",
            SessionEvent::SignedOut { .. } => "signed_out",
            SessionEvent::SignOutFailed { .. } => "sign_out_failed",
        }
    }

    /// Get the user this event relates to (if known)
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            SessionEvent::SignedIn { user_id, .. } | SessionEvent::SignedOut { user_id, .. } => {
                Some(*user_id)
            }
            SessionEvent::SignOutFailed { user_id, .. } => *user_id,
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    pub event: SessionEvent,
}

impl EventEnvelope {
    pub fn new(event: SessionEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone (the sender is reference counted).
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before
    /// slow receivers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Never fails. Returns the number of receivers that will see the event;
    /// with no subscribers the event is dropped.
    pub fn publish(&self, event: SessionEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        // send() returns Err only if there are no receivers
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
