//! Timeline scheduler
//!
//! Owns every active [`RevealTimeline`] and advances them all from one frame
//! clock. The page loop calls [`TimelineScheduler::advance`] once per frame
//! with the elapsed milliseconds; everything else goes through
//! [`SchedulerHandle`], a weak reference whose operations degrade to no-ops
//! once the scheduler is gone, and [`TimelineTicket`], an RAII guard that
//! removes its timeline on drop.
//!
//! Registration does not start playback. A timeline sits pending until its
//! ticket's `start` fires, which is how the observer defers playback to the
//! moment a block first intersects the viewport.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::style::RevealStyle;
use crate::timeline::RevealTimeline;

new_key_type! {
    /// Key for a registered timeline
    pub struct TimelineId;
}

struct SchedulerInner {
    timelines: SlotMap<TimelineId, RevealTimeline>,
}

/// Registry and frame driver for reveal timelines
pub struct TimelineScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl Default for TimelineScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timelines: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for registration-free access
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Add a timeline; it plays only after the ticket's `start`
    pub fn register(&self, timeline: RevealTimeline) -> TimelineTicket {
        let id = match self.inner.lock() {
            Ok(mut inner) => inner.timelines.insert(timeline),
            Err(_) => TimelineId::default(),
        };
        tracing::trace!("TimelineScheduler: registered {:?}", id);
        TimelineTicket {
            handle: self.handle(),
            id,
        }
    }

    /// Advance all running timelines by `dt_ms`
    ///
    /// Returns true if any timeline is still running afterwards.
    pub fn advance(&self, dt_ms: f32) -> bool {
        let Ok(mut inner) = self.inner.lock() else {
            return false;
        };

        let mut any_running = false;
        for (_, timeline) in inner.timelines.iter_mut() {
            if timeline.tick(dt_ms) {
                any_running = true;
            }
        }

        // Finished timelines stay registered; their terminal sample is the
        // target style and removal is the owning ticket's job.
        any_running
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.timelines.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn running_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| {
                inner
                    .timelines
                    .iter()
                    .filter(|(_, t)| t.is_running())
                    .count()
            })
            .unwrap_or(0)
    }
}

/// Weak reference to a [`TimelineScheduler`]
///
/// All operations are no-ops (or return `None`) after the scheduler drops,
/// so holders never keep playback state alive past the page that owns it.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    fn with_inner<R>(&self, f: impl FnOnce(&mut SchedulerInner) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.lock().ok()?;
        Some(f(&mut guard))
    }

    /// Whether the scheduler behind this handle still exists
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn start(&self, id: TimelineId) {
        self.with_inner(|inner| {
            if let Some(timeline) = inner.timelines.get_mut(id) {
                timeline.start();
            }
        });
    }

    pub fn sample(&self, id: TimelineId) -> Option<RevealStyle> {
        self.with_inner(|inner| inner.timelines.get(id).map(|t| t.sample()))
            .flatten()
    }

    pub fn progress(&self, id: TimelineId) -> Option<f32> {
        self.with_inner(|inner| inner.timelines.get(id).map(|t| t.progress()))
            .flatten()
    }

    pub fn is_finished(&self, id: TimelineId) -> bool {
        self.with_inner(|inner| {
            inner
                .timelines
                .get(id)
                .map(|t| t.is_finished())
                .unwrap_or(false)
        })
        .unwrap_or(false)
    }

    pub fn is_running(&self, id: TimelineId) -> bool {
        self.with_inner(|inner| {
            inner
                .timelines
                .get(id)
                .map(|t| t.is_running())
                .unwrap_or(false)
        })
        .unwrap_or(false)
    }

    pub fn remove(&self, id: TimelineId) {
        self.with_inner(|inner| {
            inner.timelines.remove(id);
        });
    }
}

/// RAII guard for one registered timeline
///
/// Proxies playback operations and unregisters the timeline when dropped.
pub struct TimelineTicket {
    handle: SchedulerHandle,
    id: TimelineId,
}

impl TimelineTicket {
    pub fn id(&self) -> TimelineId {
        self.id
    }

    /// Trigger playback; the timeline's delay countdown begins now
    pub fn start(&self) {
        self.handle.start(self.id);
    }

    /// Current style snapshot, or `None` once the scheduler is gone
    pub fn sample(&self) -> Option<RevealStyle> {
        self.handle.sample(self.id)
    }

    pub fn progress(&self) -> f32 {
        self.handle.progress(self.id).unwrap_or(0.0)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished(self.id)
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running(self.id)
    }
}

impl Drop for TimelineTicket {
    fn drop(&mut self) {
        self.handle.remove(self.id);
    }
}

impl std::fmt::Debug for TimelineTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineTicket")
            .field("id", &self.id)
            .field("finished", &self.is_finished())
            .finish()
    }
}
