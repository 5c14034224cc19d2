//! Anchor navigation
//!
//! Maps location-hash changes ("#capabilities") onto smooth scroll commands.
//! The nav holds the hash subscription for exactly as long as it is attached;
//! detaching (or dropping the nav) unsubscribes, so an unmounted page can
//! never receive a late callback.

use std::sync::{Arc, Mutex};

use tracing::debug;
use unveil_core::{EventHub, Subscription};
use unveil_layout::{ScrollBehavior, ScrollCommand};

/// Browser-style location hash change
#[derive(Clone, Debug, PartialEq)]
pub struct HashChange {
    pub hash: String,
}

impl HashChange {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// One header link
#[derive(Clone, Debug)]
pub struct NavLink {
    pub label: String,
    pub target_id: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_id: target_id.into(),
        }
    }
}

/// Header navigation driven by hash changes
pub struct AnchorNav {
    links: Vec<NavLink>,
    pending: Arc<Mutex<Option<ScrollCommand>>>,
    subscription: Option<Subscription<HashChange>>,
}

impl AnchorNav {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            pending: Arc::new(Mutex::new(None)),
            subscription: None,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Subscribe to hash changes on the hub, replacing any prior subscription
    pub fn attach(&mut self, hub: &EventHub<HashChange>) {
        let pending = Arc::clone(&self.pending);
        self.subscription = Some(hub.subscribe(move |event: &HashChange| {
            let command = command_for_hash(&event.hash);
            debug!(hash = %event.hash, "hash change");
            *pending.lock().unwrap() = Some(command);
        }));
    }

    /// Drop the hash subscription; no callback can fire after this returns
    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|sub| sub.is_active())
    }

    /// The most recent scroll command produced by a hash change
    pub fn take_pending(&mut self) -> Option<ScrollCommand> {
        self.pending.lock().unwrap().take()
    }
}

fn command_for_hash(hash: &str) -> ScrollCommand {
    let target = hash.strip_prefix('#').unwrap_or(hash);
    if target.is_empty() {
        ScrollCommand::ToTop {
            behavior: ScrollBehavior::Smooth,
        }
    } else {
        ScrollCommand::ToElement {
            element_id: target.to_string(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> AnchorNav {
        AnchorNav::new(vec![
            NavLink::new("Capabilities", "capabilities"),
            NavLink::new("Protocol", "protocol"),
        ])
    }

    #[test]
    fn test_hash_change_queues_smooth_scroll() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);

        hub.emit(&HashChange::new("#protocol"));

        assert_eq!(
            nav.take_pending(),
            Some(ScrollCommand::ToElement {
                element_id: "protocol".into(),
                behavior: ScrollBehavior::Smooth,
            })
        );
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn test_empty_hash_scrolls_to_top() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);

        hub.emit(&HashChange::new(""));

        assert_eq!(
            nav.take_pending(),
            Some(ScrollCommand::ToTop {
                behavior: ScrollBehavior::Smooth,
            })
        );
    }

    #[test]
    fn test_latest_hash_wins() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);

        hub.emit(&HashChange::new("#capabilities"));
        hub.emit(&HashChange::new("#protocol"));

        assert!(matches!(
            nav.take_pending(),
            Some(ScrollCommand::ToElement { element_id, .. }) if element_id == "protocol"
        ));
    }

    #[test]
    fn test_detach_stops_callbacks() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);
        assert!(nav.is_attached());
        assert_eq!(hub.subscriber_count(), 1);

        nav.detach();
        assert!(!nav.is_attached());
        assert_eq!(hub.subscriber_count(), 0);

        hub.emit(&HashChange::new("#protocol"));
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn test_dropping_nav_unsubscribes() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);
        assert_eq!(hub.subscriber_count(), 1);

        drop(nav);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_reattach_replaces_subscription() {
        let hub = EventHub::new();
        let mut nav = nav();
        nav.attach(&hub);
        nav.attach(&hub);
        assert_eq!(hub.subscriber_count(), 1);
    }
}
