//! Viewport intersection observation
//!
//! Watches laid-out elements and reports when their visible fraction crosses
//! a threshold. Observation is registered per block id and handed back as an
//! [`ObserverRegistration`] guard; dropping the guard unregisters the entry,
//! so an unmounted section stops being watched without any explicit teardown
//! call.
//!
//! Trigger-once entries are recorded in a [`RevealTracker`]. Once a block has
//! triggered it stays triggered: later layout rebuilds, scrolling away, or
//! re-observing the same id never produce a second enter event.

use std::sync::{Arc, Mutex, Weak};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use unveil_core::Rect;

new_key_type! {
    pub struct ObserverEntryId;
}

/// Where a block is in its reveal lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    NotTriggered,
    Triggered,
}

impl RevealPhase {
    pub fn has_triggered(&self) -> bool {
        matches!(self, RevealPhase::Triggered)
    }
}

/// Records which blocks have triggered, keyed by block id.
///
/// The transition is one-way: there is deliberately no way to move a block
/// back to `NotTriggered`.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: FxHashMap<String, RevealPhase>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, block_id: &str) -> RevealPhase {
        self.states.get(block_id).copied().unwrap_or_default()
    }

    pub fn has_triggered(&self, block_id: &str) -> bool {
        self.phase(block_id).has_triggered()
    }

    pub fn mark_triggered(&mut self, block_id: &str) {
        self.states
            .insert(block_id.to_string(), RevealPhase::Triggered);
    }

    pub fn triggered_count(&self) -> usize {
        self.states
            .values()
            .filter(|phase| phase.has_triggered())
            .count()
    }
}

/// An intersection transition observed during an update pass
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub block_id: String,
    /// true when the block crossed into view, false when it left
    pub entering: bool,
}

#[derive(Debug)]
struct ObserverEntry {
    block_id: String,
    threshold: f32,
    trigger_once: bool,
    visible: bool,
}

#[derive(Default)]
struct ObserverInner {
    entries: SlotMap<ObserverEntryId, ObserverEntry>,
    tracker: RevealTracker,
}

/// Watches element bounds against the viewport and emits enter/leave events
pub struct IntersectionObserver {
    inner: Arc<Mutex<ObserverInner>>,
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ObserverInner::default())),
        }
    }

    /// Register a block for observation.
    ///
    /// The threshold is the visible fraction that counts as "in view",
    /// clamped to `0.0..=1.0`; at zero, any overlap at all qualifies. The
    /// returned guard keeps the entry alive and removes it on drop.
    pub fn observe(
        &self,
        block_id: impl Into<String>,
        threshold: f32,
        trigger_once: bool,
    ) -> ObserverRegistration {
        let block_id = block_id.into();
        let mut inner = self.inner.lock().unwrap();
        let id = inner.entries.insert(ObserverEntry {
            block_id: block_id.clone(),
            threshold: threshold.clamp(0.0, 1.0),
            trigger_once,
            visible: false,
        });
        ObserverRegistration {
            inner: Arc::downgrade(&self.inner),
            id,
            block_id,
        }
    }

    /// Run one observation pass against the current viewport.
    ///
    /// `bounds_of` resolves a block id to its page-space bounds; returning
    /// `None` (the block is not in the current layout) leaves that entry
    /// untouched. One pass emits at most one transition per entry.
    pub fn update<F>(&self, viewport: Rect, bounds_of: F) -> Vec<IntersectionEvent>
    where
        F: Fn(&str) -> Option<Rect>,
    {
        let mut inner = self.inner.lock().unwrap();
        let inner = &mut *inner;
        let mut events = Vec::new();

        for entry in inner.entries.values_mut() {
            if entry.trigger_once && inner.tracker.has_triggered(&entry.block_id) {
                continue;
            }

            let Some(bounds) = bounds_of(&entry.block_id) else {
                continue;
            };

            let fraction = bounds.visible_fraction(&viewport);
            let in_view = if entry.threshold > 0.0 {
                fraction >= entry.threshold
            } else {
                fraction > 0.0
            };

            if in_view && !entry.visible {
                entry.visible = true;
                if entry.trigger_once {
                    inner.tracker.mark_triggered(&entry.block_id);
                }
                events.push(IntersectionEvent {
                    block_id: entry.block_id.clone(),
                    entering: true,
                });
            } else if !in_view && entry.visible {
                entry.visible = false;
                events.push(IntersectionEvent {
                    block_id: entry.block_id.clone(),
                    entering: false,
                });
            }
        }

        events
    }

    pub fn has_triggered(&self, block_id: &str) -> bool {
        self.inner.lock().unwrap().tracker.has_triggered(block_id)
    }

    pub fn phase(&self, block_id: &str) -> RevealPhase {
        self.inner.lock().unwrap().tracker.phase(block_id)
    }

    pub fn triggered_count(&self) -> usize {
        self.inner.lock().unwrap().tracker.triggered_count()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_observed(&self, block_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .entries
            .values()
            .any(|entry| entry.block_id == block_id)
    }
}

impl Default for IntersectionObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for one observed block; dropping it removes the entry.
///
/// Holds only a weak reference, so a guard outliving its observer degrades
/// to a no-op instead of keeping the observer alive.
pub struct ObserverRegistration {
    inner: Weak<Mutex<ObserverInner>>,
    id: ObserverEntryId,
    block_id: String,
}

impl ObserverRegistration {
    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    /// Whether the observer (and this entry) still exists
    pub fn is_active(&self) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.lock().unwrap().entries.contains_key(self.id),
            None => false,
        }
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().entries.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_enter_fires_when_threshold_met() {
        let observer = IntersectionObserver::new();
        let _guard = observer.observe("hero", 0.15, true);

        // 10% visible: below threshold
        let events = observer.update(viewport(), |_| Some(Rect::new(0.0, 540.0, 800.0, 600.0)));
        assert!(events.is_empty());
        assert!(!observer.has_triggered("hero"));

        // 15% visible: exactly at threshold
        let events = observer.update(viewport(), |_| Some(Rect::new(0.0, 510.0, 800.0, 600.0)));
        assert_eq!(
            events,
            vec![IntersectionEvent {
                block_id: "hero".into(),
                entering: true,
            }]
        );
        assert!(observer.has_triggered("hero"));
    }

    #[test]
    fn test_trigger_once_never_fires_again() {
        let observer = IntersectionObserver::new();
        let _guard = observer.observe("features", 0.15, true);

        let in_view = Rect::new(0.0, 100.0, 800.0, 300.0);
        let below = Rect::new(0.0, 2000.0, 800.0, 300.0);

        assert_eq!(observer.update(viewport(), |_| Some(in_view)).len(), 1);
        // Scroll away and back: no leave event, no second enter
        assert!(observer.update(viewport(), |_| Some(below)).is_empty());
        assert!(observer.update(viewport(), |_| Some(in_view)).is_empty());

        assert_eq!(observer.phase("features"), RevealPhase::Triggered);
        assert_eq!(observer.triggered_count(), 1);
    }

    #[test]
    fn test_repeating_entry_emits_leave_and_reenter() {
        let observer = IntersectionObserver::new();
        let _guard = observer.observe("ticker", 0.5, false);

        let in_view = Rect::new(0.0, 100.0, 800.0, 200.0);
        let below = Rect::new(0.0, 2000.0, 800.0, 200.0);

        let entered = observer.update(viewport(), |_| Some(in_view));
        assert!(entered[0].entering);

        let left = observer.update(viewport(), |_| Some(below));
        assert_eq!(left.len(), 1);
        assert!(!left[0].entering);

        let reentered = observer.update(viewport(), |_| Some(in_view));
        assert!(reentered[0].entering);
        // Repeating entries never touch the tracker
        assert!(!observer.has_triggered("ticker"));
    }

    #[test]
    fn test_missing_element_is_a_no_op() {
        let observer = IntersectionObserver::new();
        let _guard = observer.observe("late", 0.15, true);

        let events = observer.update(viewport(), |_| None);
        assert!(events.is_empty());
        assert!(!observer.has_triggered("late"));

        // The block appears in a later layout pass and triggers normally
        let events = observer.update(viewport(), |_| Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_dropping_registration_unregisters() {
        let observer = IntersectionObserver::new();
        let guard = observer.observe("hero", 0.15, true);
        assert_eq!(observer.entry_count(), 1);
        assert!(guard.is_active());

        drop(guard);
        assert_eq!(observer.entry_count(), 0);
        assert!(!observer.is_observed("hero"));

        let events = observer.update(viewport(), |_| Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_registration_outlives_observer() {
        let observer = IntersectionObserver::new();
        let guard = observer.observe("hero", 0.15, true);
        drop(observer);

        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_zero_threshold_triggers_on_any_overlap() {
        let observer = IntersectionObserver::new();
        let _guard = observer.observe("sliver", 0.0, true);

        // One row of pixels inside the viewport
        let events = observer.update(viewport(), |_| Some(Rect::new(0.0, 599.0, 800.0, 400.0)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_tracker_defaults_to_not_triggered() {
        let tracker = RevealTracker::new();
        assert_eq!(tracker.phase("anything"), RevealPhase::NotTriggered);
        assert!(!tracker.has_triggered("anything"));
    }
}
