//! Subscription manager for broadcasting state events.

use crate::types::{Revision, Section};
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::types::{
    DropReason, StateEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};

/// Default threshold for including section data in events (bytes).
pub const DEFAULT_PAYLOAD_THRESHOLD: usize = 64 * 1024;

/// Internal subscription state.
struct Subscription {
    config: SubscriptionConfig,
    sender: Sender<StateEvent>,
}

impl Subscription {
    /// Try to send an event. Returns false if buffer is full (subscriber will be dropped).
    fn try_send(&self, event: StateEvent) -> bool {
        self.sender.try_send(event).is_ok()
    }
}

/// Manages subscriptions and broadcasts events.
pub struct SubscriptionManager {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
    /// Threshold for including section data in events.
    payload_threshold: usize,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self::with_payload_threshold(DEFAULT_PAYLOAD_THRESHOLD)
    }

    /// Create a new subscription manager with custom payload threshold.
    pub fn with_payload_threshold(threshold: usize) -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            payload_threshold: threshold,
        }
    }

    /// Create a new subscription.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size);

        self.subscriptions
            .write()
            .insert(id, Subscription { config, sender });

        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.subscriptions.write();
        if let Some(sub) = subs.remove(&id) {
            // Best effort
            let _ = sub.sender.try_send(StateEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Broadcast a replaced section to matching subscriptions.
    pub fn broadcast_section(&self, section: Section, revision: Revision, value: &Value) {
        if self.subscription_count() == 0 {
            return;
        }

        let data_bytes = serde_json::to_vec(value).map(|b| b.len()).unwrap_or(0);
        let data = (data_bytes <= self.payload_threshold).then(|| value.clone());

        let event = StateEvent::SectionReplaced {
            section,
            revision,
            data,
            data_bytes,
        };

        self.broadcast(|sub| sub.config.filter.matches(section), event);
    }

    /// Internal broadcast helper. Drops subscribers that fail to receive.
    fn broadcast<F>(&self, filter: F, event: StateEvent)
    where
        F: Fn(&Subscription) -> bool,
    {
        let mut to_remove = Vec::new();

        {
            let subs = self.subscriptions.read();
            for (id, sub) in subs.iter() {
                if filter(sub) && !sub.try_send(event.clone()) {
                    to_remove.push(*id);
                }
            }
        }

        if !to_remove.is_empty() {
            let mut subs = self.subscriptions.write();
            for id in to_remove {
                if let Some(sub) = subs.remove(&id) {
                    debug!(subscription = id.0, "dropping slow subscriber");
                    // Buffer is full, so this usually fails
                    let _ = sub.sender.try_send(StateEvent::Dropped {
                        reason: DropReason::BufferOverflow,
                    });
                }
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriptions::SubscriptionFilter;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_subscribe_unsubscribe() {
        let manager = SubscriptionManager::new();

        let handle = manager.subscribe(SubscriptionConfig::default());
        assert_eq!(manager.subscription_count(), 1);

        manager.unsubscribe(handle.id);
        assert_eq!(manager.subscription_count(), 0);

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert!(matches!(
            event,
            StateEvent::Dropped {
                reason: DropReason::Unsubscribed
            }
        ));
    }

    #[test]
    fn test_broadcast_to_matching() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe(SubscriptionConfig {
            filter: SubscriptionFilter::sections(vec![Section::Settings]),
            ..Default::default()
        });

        manager.broadcast_section(Section::Settings, Revision(3), &json!({"fontSize": "12"}));

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        match event {
            StateEvent::SectionReplaced {
                section,
                revision,
                data,
                ..
            } => {
                assert_eq!(section, Section::Settings);
                assert_eq!(revision, Revision(3));
                assert_eq!(data, Some(json!({"fontSize": "12"})));
            }
            _ => panic!("Expected SectionReplaced event, got {:?}", event),
        }
    }

    #[test]
    fn test_broadcast_filters_non_matching() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe(SubscriptionConfig {
            filter: SubscriptionFilter::sections(vec![Section::Settings]),
            ..Default::default()
        });

        manager.broadcast_section(Section::Resume, Revision(1), &json!({}));

        let result = handle.recv_timeout(Duration::from_millis(50));
        assert!(result.is_err());
    }

    #[test]
    fn test_large_payload_omitted() {
        let manager = SubscriptionManager::with_payload_threshold(8);
        let handle = manager.subscribe(SubscriptionConfig::default());

        let value = json!({"summary": "a fairly long profile summary"});
        manager.broadcast_section(Section::Resume, Revision(1), &value);

        match handle.try_recv().unwrap() {
            StateEvent::SectionReplaced {
                data, data_bytes, ..
            } => {
                assert!(data.is_none());
                assert_eq!(data_bytes, serde_json::to_vec(&value).unwrap().len());
            }
            other => panic!("Expected SectionReplaced event, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_slow_subscriber() {
        let manager = SubscriptionManager::new();
        let _handle = manager.subscribe(SubscriptionConfig {
            buffer_size: 2,
            filter: SubscriptionFilter::all(),
        });

        for i in 0..10 {
            manager.broadcast_section(Section::Resume, Revision(i), &json!({}));
        }

        assert_eq!(manager.subscription_count(), 0);
    }
}
