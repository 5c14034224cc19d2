//! Layout tree management

use slotmap::{new_key_type, SlotMap};
use std::collections::HashMap;
use taffy::prelude::*;

use crate::element::ElementBounds;
use crate::measure::{measure_text, TextMeasureContext};

new_key_type! {
    pub struct LayoutNodeId;
}

/// Measure function for text nodes during taffy layout
fn text_measure_function(
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    _node_id: NodeId,
    node_context: Option<&mut TextMeasureContext>,
    _style: &Style,
) -> Size<f32> {
    if let (Some(width), Some(height)) = (known_dimensions.width, known_dimensions.height) {
        return Size { width, height };
    }

    let Some(ctx) = node_context else {
        return Size::ZERO;
    };

    let max_width = if ctx.wrap {
        known_dimensions.width.or(match available_space.width {
            AvailableSpace::Definite(w) => Some(w),
            AvailableSpace::MaxContent => None,
            AvailableSpace::MinContent => Some(0.0),
        })
    } else {
        None
    };

    let metrics = measure_text(&ctx.content, ctx.font_size, ctx.line_height, max_width);

    Size {
        width: known_dimensions.width.unwrap_or(metrics.width),
        height: known_dimensions.height.unwrap_or(metrics.height),
    }
}

/// Maps between Unveil node IDs and taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree<TextMeasureContext>,
    node_map: SlotMap<LayoutNodeId, NodeId>,
    reverse_map: HashMap<NodeId, LayoutNodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            node_map: SlotMap::with_key(),
            reverse_map: HashMap::new(),
        }
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: Style) -> LayoutNodeId {
        let taffy_node = self.taffy.new_leaf(style).unwrap();
        let id = self.node_map.insert(taffy_node);
        self.reverse_map.insert(taffy_node, id);
        id
    }

    /// Create a text node whose height comes from wrapped measurement
    pub fn create_text_node(&mut self, style: Style, context: TextMeasureContext) -> LayoutNodeId {
        let taffy_node = self.taffy.new_leaf_with_context(style, context).unwrap();
        let id = self.node_map.insert(taffy_node);
        self.reverse_map.insert(taffy_node, id);
        id
    }

    pub fn set_style(&mut self, id: LayoutNodeId, style: Style) {
        if let Some(&taffy_node) = self.node_map.get(id) {
            let _ = self.taffy.set_style(taffy_node, style);
        }
    }

    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        if let (Some(&parent_node), Some(&child_node)) =
            (self.node_map.get(parent), self.node_map.get(child))
        {
            let _ = self.taffy.add_child(parent_node, child_node);
        }
    }

    /// Compute layout for the tree rooted at `root` within a definite area
    pub fn compute_layout(&mut self, root: LayoutNodeId, width: f32, height: f32) {
        if let Some(&taffy_node) = self.node_map.get(root) {
            let available = Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            };
            let _ =
                self.taffy
                    .compute_layout_with_measure(taffy_node, available, text_measure_function);
        }
    }

    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
    }

    /// Computed layout as [`ElementBounds`] with an accumulated parent offset
    pub fn get_bounds(&self, id: LayoutNodeId, parent_offset: (f32, f32)) -> Option<ElementBounds> {
        self.get_layout(id)
            .map(|layout| ElementBounds::from_layout(layout, parent_offset))
    }

    /// Bounds in page space, found by accumulating ancestor offsets up to
    /// the root; this is what intersection checks run against
    pub fn absolute_bounds(&self, id: LayoutNodeId) -> Option<ElementBounds> {
        let layout = self.get_layout(id)?;
        let (width, height) = (layout.size.width, layout.size.height);
        let mut x = layout.location.x;
        let mut y = layout.location.y;

        let mut current = *self.node_map.get(id)?;
        while let Some(parent) = self.taffy.parent(current) {
            if let Ok(parent_layout) = self.taffy.layout(parent) {
                x += parent_layout.location.x;
                y += parent_layout.location.y;
            }
            current = parent;
        }

        Some(ElementBounds {
            x,
            y,
            width,
            height,
        })
    }

    /// Total content size of a node, which may exceed its own size when
    /// children overflow; this is what scroll limits are computed from
    pub fn get_content_size(&self, id: LayoutNodeId) -> Option<(f32, f32)> {
        self.get_layout(id)
            .map(|layout| (layout.content_size.width, layout.content_size.height))
    }

    pub fn children(&self, parent: LayoutNodeId) -> Vec<LayoutNodeId> {
        let Some(&taffy_node) = self.node_map.get(parent) else {
            return Vec::new();
        };

        let Ok(children) = self.taffy.children(taffy_node) else {
            return Vec::new();
        };

        children
            .iter()
            .filter_map(|&child_taffy| self.reverse_map.get(&child_taffy).copied())
            .collect()
    }

    pub fn node_exists(&self, id: LayoutNodeId) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn remove_node(&mut self, id: LayoutNodeId) {
        if let Some(taffy_node) = self.node_map.remove(id) {
            self.reverse_map.remove(&taffy_node);
            let _ = self.taffy.remove(taffy_node);
        }
    }

    /// Remove a node and all its descendants
    pub fn remove_subtree(&mut self, id: LayoutNodeId) {
        let children = self.children(id);
        for child in children {
            self.remove_subtree(child);
        }
        self.remove_node(id);
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_style() -> Style {
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_and_compute() {
        let mut tree = LayoutTree::new();

        let root = tree.create_node(Style {
            size: Size {
                width: Dimension::Length(200.0),
                height: Dimension::Length(100.0),
            },
            ..column_style()
        });
        let child = tree.create_node(Style {
            size: Size {
                width: Dimension::Length(50.0),
                height: Dimension::Length(40.0),
            },
            ..Default::default()
        });
        tree.add_child(root, child);
        tree.compute_layout(root, 800.0, 600.0);

        let bounds = tree.get_bounds(child, (0.0, 0.0)).unwrap();
        assert_eq!(bounds.width, 50.0);
        assert_eq!(bounds.height, 40.0);
    }

    #[test]
    fn test_column_children_stack_vertically() {
        let mut tree = LayoutTree::new();

        let root = tree.create_node(column_style());
        let make_child = |tree: &mut LayoutTree| {
            tree.create_node(Style {
                size: Size {
                    width: Dimension::Length(100.0),
                    height: Dimension::Length(30.0),
                },
                ..Default::default()
            })
        };
        let a = make_child(&mut tree);
        let b = make_child(&mut tree);
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.compute_layout(root, 800.0, 600.0);

        assert_eq!(tree.get_bounds(a, (0.0, 0.0)).unwrap().y, 0.0);
        assert_eq!(tree.get_bounds(b, (0.0, 0.0)).unwrap().y, 30.0);
    }

    #[test]
    fn test_text_node_contributes_height() {
        let mut tree = LayoutTree::new();

        let root = tree.create_node(Style {
            size: Size {
                width: Dimension::Length(200.0),
                height: Dimension::Auto,
            },
            ..column_style()
        });
        let text = tree.create_text_node(
            Style::default(),
            TextMeasureContext {
                content: "agents settle value between each other continuously".into(),
                font_size: 16.0,
                line_height: 1.4,
                wrap: true,
            },
        );
        tree.add_child(root, text);
        tree.compute_layout(root, 200.0, 600.0);

        let bounds = tree.get_bounds(text, (0.0, 0.0)).unwrap();
        // Wraps to multiple lines within 200px
        assert!(bounds.height > 16.0 * 1.4 * 1.5);
    }

    #[test]
    fn test_absolute_bounds_accumulate_ancestor_offsets() {
        let mut tree = LayoutTree::new();

        let root = tree.create_node(column_style());
        let spacer = tree.create_node(Style {
            size: Size {
                width: Dimension::Length(100.0),
                height: Dimension::Length(500.0),
            },
            ..Default::default()
        });
        let section = tree.create_node(Style {
            padding: taffy::Rect {
                left: LengthPercentage::Length(0.0),
                right: LengthPercentage::Length(0.0),
                top: LengthPercentage::Length(40.0),
                bottom: LengthPercentage::Length(0.0),
            },
            ..column_style()
        });
        let inner = tree.create_node(Style {
            size: Size {
                width: Dimension::Length(100.0),
                height: Dimension::Length(60.0),
            },
            ..Default::default()
        });
        tree.add_child(root, spacer);
        tree.add_child(root, section);
        tree.add_child(section, inner);
        tree.compute_layout(root, 800.0, 600.0);

        let bounds = tree.absolute_bounds(inner).unwrap();
        // 500 of spacer + 40 of section padding
        assert_eq!(bounds.y, 540.0);
        assert_eq!(bounds.height, 60.0);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(column_style());
        let child = tree.create_node(Style::default());
        let grandchild = tree.create_node(Style::default());
        tree.add_child(root, child);
        tree.add_child(child, grandchild);
        assert_eq!(tree.len(), 3);

        tree.remove_subtree(child);
        assert_eq!(tree.len(), 1);
        assert!(tree.node_exists(root));
        assert!(!tree.node_exists(grandchild));
    }
}
