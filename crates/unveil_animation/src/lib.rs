//! Unveil Animation
//!
//! The playback half of the reveal pipeline:
//!
//! - **Styles**: [`RevealStyle`] snapshots (opacity, translation, scale) and
//!   the [`Interpolate`] trait that blends them
//! - **Timelines**: [`RevealTimeline`], a finite one-shot player with delay,
//!   duration, and easing, guaranteed to land exactly on its target
//! - **Scheduling**: [`TimelineScheduler`] advances every registered timeline
//!   from a single frame clock; [`TimelineTicket`] guards unregister on drop
//! - **Stagger**: [`StaggerConfig`] computes per-child delay offsets for
//!   cascading group reveals
//!
//! Everything is driven by explicit `advance(dt_ms)` calls; there is no
//! hidden thread or wall clock, which keeps playback deterministic under
//! test.

pub mod scheduler;
pub mod stagger;
pub mod style;
pub mod timeline;

pub use scheduler::{SchedulerHandle, TimelineId, TimelineScheduler, TimelineTicket};
pub use stagger::{StaggerConfig, StaggerDirection};
pub use style::{Interpolate, RevealStyle};
pub use timeline::RevealTimeline;

pub use unveil_core::Easing;
