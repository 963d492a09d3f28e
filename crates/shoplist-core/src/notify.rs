//! Change notification for broadcasting provider writes to observers.
//!
//! The provider publishes a [`ChangeEvent`] after every write that affected at
//! least one row. Observers subscribe to a URI and receive the events relevant
//! to it; there is no replay, so a subscription only ever sees writes that
//! happen after it was created.

use log::debug;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::uri::ContentUri;

/// Number of undelivered events a subscriber may fall behind by before it
/// starts missing them.
const CHANNEL_CAPACITY: usize = 256;

/// A write to `uri` has committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub uri: ContentUri,
}

impl ChangeEvent {
    /// True when an observer of `observed` must learn about this event.
    ///
    /// Exact matches and changes to an ancestor (such as clearing a whole
    /// table while a row is observed) always match. Changes below the observed
    /// URI only match when the observer asked for descendants.
    pub fn affects(&self, observed: &ContentUri, notify_for_descendants: bool) -> bool {
        self.uri == *observed
            || self.uri.is_ancestor_of(observed)
            || (notify_for_descendants && observed.is_ancestor_of(&self.uri))
    }
}

/// Process-wide pub/sub point keyed by URI.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<ChangeEvent>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Registers an observer for `uri`. Row ids are matched by value, so
    /// `list/01` observes the same row as `list/1`.
    pub fn subscribe(&self, uri: ContentUri, notify_for_descendants: bool) -> ChangeSubscription {
        ChangeSubscription {
            rx: self.tx.subscribe(),
            uri: uri.canonical(),
            notify_for_descendants,
        }
    }

    /// Announces that `uri` changed. Having no subscribers is not an error.
    pub fn notify_change(&self, uri: &ContentUri) {
        debug!("Change published for {uri}");
        let _ = self.tx.send(ChangeEvent {
            uri: uri.canonical(),
        });
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving half of one observer registration.
#[derive(Debug)]
pub struct ChangeSubscription {
    rx: broadcast::Receiver<ChangeEvent>,
    uri: ContentUri,
    notify_for_descendants: bool,
}

impl ChangeSubscription {
    /// Canonical URI this subscription observes.
    pub fn uri(&self) -> &ContentUri {
        &self.uri
    }

    /// Waits for the next relevant event.
    ///
    /// Returns `None` once every notifier handle is gone. If this subscriber
    /// fell behind and events were dropped, a synthetic event for the observed
    /// URI is returned so the caller re-queries.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if self.matches(&event) => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => return Some(self.lagged(skipped)),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next relevant event that is already queued, if any.
    pub fn try_recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.matches(&event) => return Some(event),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => return Some(self.lagged(skipped)),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Drains every queued relevant event.
    pub fn drain(&mut self) -> Vec<ChangeEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    fn matches(&self, event: &ChangeEvent) -> bool {
        event.affects(&self.uri, self.notify_for_descendants)
    }

    fn lagged(&self, skipped: u64) -> ChangeEvent {
        debug!("Subscriber for {} skipped {skipped} change(s)", self.uri);
        ChangeEvent {
            uri: self.uri.clone(),
        }
    }
}
