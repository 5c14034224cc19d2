//! Viewport scroll model
//!
//! A vertical scroll window over the laid-out page. The offset is always
//! clamped to the scrollable range; smooth scrolling glides toward its target
//! with an ease-out curve and snaps to it exactly on the final frame.
//!
//! Scroll commands are queued (latest wins) and consumed by the page's frame
//! loop, which is where element ids get resolved to offsets; the viewport
//! itself only knows geometry.

use unveil_core::{Easing, Rect};

/// How a programmatic scroll moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately
    #[default]
    Auto,
    /// Glide with ease-out
    Smooth,
}

/// A pending scroll operation, resolved by the page loop
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollCommand {
    ToOffset { y: f32, behavior: ScrollBehavior },
    ByAmount { dy: f32, behavior: ScrollBehavior },
    /// Align the top of an element with the top of the viewport
    ToElement {
        element_id: String,
        behavior: ScrollBehavior,
    },
    ToTop { behavior: ScrollBehavior },
    ToBottom { behavior: ScrollBehavior },
}

const SMOOTH_SCROLL_MS: f32 = 450.0;

#[derive(Clone, Copy, Debug)]
struct Glide {
    from: f32,
    to: f32,
    elapsed_ms: f32,
    duration_ms: f32,
}

/// The visible window over the page
#[derive(Debug)]
pub struct Viewport {
    width: f32,
    height: f32,
    offset_y: f32,
    content_height: f32,
    glide: Option<Glide>,
    pending: Option<ScrollCommand>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_y: 0.0,
            content_height: 0.0,
            glide: None,
            pending: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Update the total page height after layout; re-clamps the offset
    pub fn set_content_height(&mut self, content_height: f32) {
        self.content_height = content_height.max(0.0);
        self.offset_y = self.clamp(self.offset_y);
    }

    /// Change the window size, keeping the offset inside the new range
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.offset_y = self.clamp(self.offset_y);
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// The visible region in page coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.offset_y, self.width, self.height)
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    fn clamp(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_offset())
    }

    /// Jump to an absolute offset, cancelling any glide
    pub fn set_offset(&mut self, y: f32) {
        self.offset_y = self.clamp(y);
        self.glide = None;
    }

    pub fn scroll_by(&mut self, dy: f32) {
        self.set_offset(self.offset_y + dy);
    }

    /// Move toward an absolute offset with the given behavior
    pub fn scroll_to(&mut self, y: f32, behavior: ScrollBehavior) {
        let target = self.clamp(y);
        match behavior {
            ScrollBehavior::Auto => self.set_offset(target),
            ScrollBehavior::Smooth => {
                if (target - self.offset_y).abs() < f32::EPSILON {
                    self.glide = None;
                    return;
                }
                self.glide = Some(Glide {
                    from: self.offset_y,
                    to: target,
                    elapsed_ms: 0.0,
                    duration_ms: SMOOTH_SCROLL_MS,
                });
            }
        }
    }

    /// Queue a scroll command for the page loop; the latest request wins
    pub fn request(&mut self, command: ScrollCommand) {
        self.pending = Some(command);
    }

    pub fn take_pending(&mut self) -> Option<ScrollCommand> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance an active glide; returns true while still gliding
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(mut glide) = self.glide.take() else {
            return false;
        };

        glide.elapsed_ms += dt_ms.max(0.0);
        let t = (glide.elapsed_ms / glide.duration_ms).min(1.0);

        if t >= 1.0 {
            self.offset_y = glide.to;
            return false;
        }

        let eased = Easing::EaseOut.apply(t);
        self.offset_y = glide.from + (glide.to - glide.from) * eased;
        self.glide = Some(glide);
        true
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn is_at_top(&self) -> bool {
        self.offset_y <= 0.0
    }

    pub fn is_at_bottom(&self) -> bool {
        // Small tolerance
        self.offset_y >= self.max_offset() - 1.0
    }

    /// 0.0 at the top of the page, 1.0 at the bottom
    pub fn scroll_progress(&self) -> f32 {
        let max = self.max_offset();
        if max > 0.0 {
            (self.offset_y / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
