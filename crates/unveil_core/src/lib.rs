//! Unveil Core
//!
//! Foundation types shared by every Unveil crate:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`] with the intersection math
//!   the viewport observer is built on
//! - **Color**: RGBA color with hex constructors and interpolation
//! - **Easing**: monotonic easing curves for reveal playback
//! - **Events**: [`EventHub`] scoped subscriptions with RAII unsubscription
//!
//! Everything here is plain data plus small pure functions; no rendering,
//! no I/O.

pub mod color;
pub mod easing;
pub mod events;
pub mod geometry;

pub use color::Color;
pub use easing::Easing;
pub use events::{EventHub, Subscription, SubscriptionId};
pub use geometry::{Point, Rect, Size};
