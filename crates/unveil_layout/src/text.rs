//! Text element

use taffy::prelude::*;
use unveil_core::Color;

use crate::div::{BuildContext, ElementBuilder};
use crate::element::{TextContent, VisualProps};
use crate::measure::TextMeasureContext;
use crate::tree::LayoutNodeId;

/// A text leaf element
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    line_height: f32,
    wrap: bool,
    bold: bool,
    id: Option<String>,
}

/// Create a text element with default body styling
pub fn text(content: impl Into<String>) -> Text {
    Text {
        content: content.into(),
        size: 16.0,
        color: Color::BLACK,
        line_height: 1.4,
        wrap: true,
        bold: false,
        id: None,
    }
}

impl Text {
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Keep the text on a single line regardless of available width
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl ElementBuilder for Text {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId {
        let node = ctx.tree.create_text_node(
            Style::default(),
            TextMeasureContext {
                content: self.content.clone(),
                font_size: self.size,
                line_height: self.line_height,
                wrap: self.wrap,
            },
        );

        if let Some(id) = &self.id {
            ctx.registry.register(id.clone(), node);
        }

        ctx.visuals.insert(
            node,
            VisualProps {
                background: None,
                corner_radius: 0.0,
                text: Some(TextContent {
                    content: self.content.clone(),
                    size: self.size,
                    color: self.color,
                    bold: self.bold,
                }),
            },
        );

        node
    }
}
