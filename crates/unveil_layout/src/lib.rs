//! Unveil Layout Engine
//!
//! Flexbox layout powered by Taffy with a GPUI-style builder API, plus the
//! viewport machinery that drives scroll reveals: an intersection observer
//! with trigger-once tracking, a scroll model with smooth glides, and the
//! [`reveal`] wrapper that attaches animation metadata to subtrees.
//!
//! # Example
//!
//! ```rust
//! use unveil_layout::prelude::*;
//!
//! let page = div()
//!     .flex_col()
//!     .gap(24.0)
//!     .child(
//!         reveal()
//!             .id("hero")
//!             .slide_up(800.0)
//!             .child(text("Autonomous agents, shared ledger").size(40.0)),
//!     )
//!     .child(div().min_h(900.0));
//!
//! let (mut ctx, root) = BuildContext::build_root(&page);
//! ctx.tree.compute_layout(root, 1280.0, 800.0);
//! assert_eq!(ctx.reveals[0].block_id, "hero");
//! ```
//!
//! [`reveal`]: crate::reveal::reveal

pub mod div;
pub mod element;
pub mod measure;
pub mod observer;
pub mod registry;
pub mod reveal;
pub mod text;
pub mod tree;
pub mod viewport;

// Core types
pub use element::{ElementBounds, TextContent, VisualProps};
pub use registry::ElementRegistry;
pub use tree::{LayoutNodeId, LayoutTree};

// Builder API
pub use div::{div, BuildContext, Div, ElementBuilder};
pub use reveal::{reveal, Reveal, RevealSpec, DEFAULT_DURATION_MS, DEFAULT_THRESHOLD};
pub use text::{text, Text};

// Viewport observation
pub use observer::{
    IntersectionEvent, IntersectionObserver, ObserverRegistration, RevealPhase, RevealTracker,
};
pub use viewport::{ScrollBehavior, ScrollCommand, Viewport};

// Text measurement
pub use measure::{measure_text, TextMeasureContext, TextMetrics};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::div::{div, BuildContext, Div, ElementBuilder};
    pub use crate::element::{ElementBounds, TextContent, VisualProps};
    pub use crate::observer::{
        IntersectionEvent, IntersectionObserver, ObserverRegistration, RevealPhase, RevealTracker,
    };
    pub use crate::registry::ElementRegistry;
    pub use crate::reveal::{reveal, Reveal, RevealSpec};
    pub use crate::text::{text, Text};
    pub use crate::tree::{LayoutNodeId, LayoutTree};
    pub use crate::viewport::{ScrollBehavior, ScrollCommand, Viewport};

    pub use unveil_animation::{
        Easing, RevealStyle, RevealTimeline, StaggerConfig, StaggerDirection, TimelineScheduler,
    };
    pub use unveil_core::{Color, Point, Rect, Size};
}
