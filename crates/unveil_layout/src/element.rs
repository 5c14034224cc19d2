//! Element bounds and visual properties

use unveil_core::{Color, Rect};

/// Computed bounds of a laid-out element, in page coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a taffy layout plus the accumulated parent offset
    pub fn from_layout(layout: &taffy::Layout, parent_offset: (f32, f32)) -> Self {
        Self {
            x: layout.location.x + parent_offset.0,
            y: layout.location.y + parent_offset.1,
            width: layout.size.width,
            height: layout.size.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Text carried by a leaf element
#[derive(Clone, Debug, PartialEq)]
pub struct TextContent {
    pub content: String,
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

/// Static visual properties attached to a node at build time
///
/// Layout geometry lives in the tree; these are the paint-side properties a
/// renderer (or the walkthrough summary) reads per node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualProps {
    pub background: Option<Color>,
    pub corner_radius: f32,
    pub text: Option<TextContent>,
}

impl VisualProps {
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.text.is_none() && self.corner_radius == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        let bounds = ElementBounds::new(10.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains(10.0, 10.0));
        assert!(bounds.contains(50.0, 30.0));
        assert!(!bounds.contains(110.0, 30.0));
        assert!(!bounds.contains(5.0, 30.0));
    }

    #[test]
    fn test_bounds_to_rect() {
        let bounds = ElementBounds::new(0.0, 620.0, 800.0, 240.0);
        let rect = bounds.rect();
        assert_eq!(rect.bottom(), 860.0);
    }
}
