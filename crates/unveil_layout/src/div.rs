//! Element builder API
//!
//! GPUI-style chainable builders that lower into the taffy-backed
//! [`LayoutTree`]. Building happens through a [`BuildContext`], which collects
//! everything the page loop needs besides geometry: the id registry, per-node
//! visual properties, and the reveal blocks declared by [`reveal`]
//! wrappers.
//!
//! [`reveal`]: crate::reveal::reveal

use smallvec::SmallVec;
use taffy::prelude::*;
use unveil_core::Color;

use crate::element::VisualProps;
use crate::registry::ElementRegistry;
use crate::reveal::RevealSpec;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Everything produced while lowering an element tree
pub struct BuildContext {
    pub tree: LayoutTree,
    pub registry: ElementRegistry,
    pub visuals: slotmap::SecondaryMap<LayoutNodeId, VisualProps>,
    pub reveals: Vec<RevealSpec>,
    next_block_index: usize,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildContext {
    pub fn new() -> Self {
        Self {
            tree: LayoutTree::new(),
            registry: ElementRegistry::new(),
            visuals: slotmap::SecondaryMap::new(),
            reveals: Vec::new(),
            next_block_index: 0,
        }
    }

    /// Lower a whole element tree, returning the context and root node
    pub fn build_root(element: &dyn ElementBuilder) -> (Self, LayoutNodeId) {
        let mut ctx = Self::new();
        let root = element.build(&mut ctx);
        (ctx, root)
    }

    /// Stable fallback id for reveal blocks declared without one
    pub(crate) fn next_block_id(&mut self) -> String {
        let id = format!("reveal-{}", self.next_block_index);
        self.next_block_index += 1;
        id
    }

    pub fn visual(&self, id: LayoutNodeId) -> Option<&VisualProps> {
        self.visuals.get(id)
    }
}

/// Anything that can lower itself into the layout tree
pub trait ElementBuilder {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId;
}

impl ElementBuilder for Box<dyn ElementBuilder> {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId {
        self.as_ref().build(ctx)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Axis {
    Row,
    #[default]
    Column,
}

/// A flexbox container element
#[derive(Default)]
pub struct Div {
    axis: Axis,
    width: Option<f32>,
    height: Option<f32>,
    width_percent: Option<f32>,
    max_width: Option<f32>,
    min_height: Option<f32>,
    gap: f32,
    padding: (f32, f32, f32, f32),
    flex_grow: f32,
    wrap: bool,
    align_items: Option<AlignItems>,
    justify_content: Option<JustifyContent>,
    background: Option<Color>,
    corner_radius: f32,
    id: Option<String>,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create an empty flexbox container (column by default)
pub fn div() -> Div {
    Div::default()
}

impl Div {
    pub fn flex_col(mut self) -> Self {
        self.axis = Axis::Column;
        self
    }

    pub fn flex_row(mut self) -> Self {
        self.axis = Axis::Row;
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.w(width).h(height)
    }

    pub fn square(self, side: f32) -> Self {
        self.size(side, side)
    }

    /// Fill the parent's width
    pub fn w_full(mut self) -> Self {
        self.width_percent = Some(1.0);
        self
    }

    pub fn max_w(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn min_h(mut self, min_height: f32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Uniform padding on all sides
    pub fn p(mut self, padding: f32) -> Self {
        self.padding = (padding, padding, padding, padding);
        self
    }

    /// Horizontal padding
    pub fn px(mut self, padding: f32) -> Self {
        self.padding.0 = padding;
        self.padding.1 = padding;
        self
    }

    /// Vertical padding
    pub fn py(mut self, padding: f32) -> Self {
        self.padding.2 = padding;
        self.padding.3 = padding;
        self
    }

    pub fn flex_grow(mut self) -> Self {
        self.flex_grow = 1.0;
        self
    }

    pub fn flex_wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn items_center(mut self) -> Self {
        self.align_items = Some(AlignItems::Center);
        self
    }

    pub fn items_start(mut self) -> Self {
        self.align_items = Some(AlignItems::FlexStart);
        self
    }

    pub fn justify_center(mut self) -> Self {
        self.justify_content = Some(JustifyContent::Center);
        self
    }

    pub fn justify_between(mut self) -> Self {
        self.justify_content = Some(JustifyContent::SpaceBetween);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Stable id for registry lookups (anchors, reveal blocks)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children<E, I>(mut self, children: I) -> Self
    where
        E: ElementBuilder + 'static,
        I: IntoIterator<Item = E>,
    {
        for child in children {
            self.children.push(Box::new(child));
        }
        self
    }

    fn layout_style(&self) -> Style {
        let dimension = |px: Option<f32>, percent: Option<f32>| match (px, percent) {
            (Some(px), _) => Dimension::Length(px),
            (None, Some(fraction)) => Dimension::Percent(fraction),
            (None, None) => Dimension::Auto,
        };

        Style {
            display: Display::Flex,
            flex_direction: match self.axis {
                Axis::Row => FlexDirection::Row,
                Axis::Column => FlexDirection::Column,
            },
            flex_wrap: if self.wrap {
                FlexWrap::Wrap
            } else {
                FlexWrap::NoWrap
            },
            size: Size {
                width: dimension(self.width, self.width_percent),
                height: dimension(self.height, None),
            },
            max_size: Size {
                width: self
                    .max_width
                    .map(Dimension::Length)
                    .unwrap_or(Dimension::Auto),
                height: Dimension::Auto,
            },
            min_size: Size {
                width: Dimension::Auto,
                height: self
                    .min_height
                    .map(Dimension::Length)
                    .unwrap_or(Dimension::Auto),
            },
            gap: Size {
                width: LengthPercentage::Length(self.gap),
                height: LengthPercentage::Length(self.gap),
            },
            padding: Rect {
                left: LengthPercentage::Length(self.padding.0),
                right: LengthPercentage::Length(self.padding.1),
                top: LengthPercentage::Length(self.padding.2),
                bottom: LengthPercentage::Length(self.padding.3),
            },
            flex_grow: self.flex_grow,
            align_items: self.align_items,
            justify_content: self.justify_content,
            ..Default::default()
        }
    }
}

impl ElementBuilder for Div {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId {
        let node = ctx.tree.create_node(self.layout_style());

        if let Some(id) = &self.id {
            ctx.registry.register(id.clone(), node);
        }

        if self.background.is_some() || self.corner_radius > 0.0 {
            ctx.visuals.insert(
                node,
                VisualProps {
                    background: self.background,
                    corner_radius: self.corner_radius,
                    text: None,
                },
            );
        }

        let child_ids: SmallVec<[LayoutNodeId; 8]> = self
            .children
            .iter()
            .map(|child| child.build(ctx))
            .collect();
        for child in child_ids {
            ctx.tree.add_child(node, child);
        }

        node
    }
}
