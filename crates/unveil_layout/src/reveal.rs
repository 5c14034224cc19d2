//! Reveal wrapper element
//!
//! Attaches reveal metadata to a subtree: initial and target styles, timing,
//! an intersection threshold, and an optional stagger over the children.
//! Building the wrapper emits one [`RevealSpec`] per animated block into the
//! [`BuildContext`]; the page loop registers those specs with the observer
//! and starts their timelines when the blocks scroll into view.
//!
//! The wrapper itself is a transparent flex container and takes no part in
//! visual styling.
//!
//! ```ignore
//! reveal()
//!     .id("hero-title")
//!     .slide_up(800.0)
//!     .child(text("Autonomous agents, shared ledger"))
//! ```

use taffy::prelude::*;
use unveil_animation::{RevealStyle, StaggerConfig};
use unveil_core::Easing;

use crate::div::{BuildContext, ElementBuilder};
use crate::tree::LayoutNodeId;

/// Visible fraction at which a block counts as in view
pub const DEFAULT_THRESHOLD: f32 = 0.15;
/// Default reveal duration
pub const DEFAULT_DURATION_MS: f32 = 800.0;

const SLIDE_UP_DISTANCE: f32 = 20.0;
const SLIDE_SIDE_DISTANCE: f32 = 50.0;
const SCALE_IN_FROM: f32 = 0.9;

/// One reveal block, recorded at build time
#[derive(Clone, Debug)]
pub struct RevealSpec {
    /// Node whose bounds are watched and whose subtree animates
    pub node: LayoutNodeId,
    /// Observer and registry key, unique within one build
    pub block_id: String,
    pub initial: RevealStyle,
    pub target: RevealStyle,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: Easing,
    pub threshold: f32,
    pub trigger_once: bool,
}

/// Wraps children with reveal metadata
///
/// Defaults to the slide-up reveal: opacity 0 to 1, y offset 20 to 0 over
/// 800ms with ease-out, triggering once at a 0.15 visibility threshold.
pub struct Reveal {
    children: Vec<Box<dyn ElementBuilder>>,
    initial: RevealStyle,
    target: RevealStyle,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    threshold: f32,
    trigger_once: bool,
    stagger: Option<StaggerConfig>,
    id: Option<String>,
    row: bool,
}

/// Create a reveal wrapper
pub fn reveal() -> Reveal {
    Reveal {
        children: Vec::new(),
        initial: RevealStyle::hidden().with_y(SLIDE_UP_DISTANCE),
        target: RevealStyle::visible(),
        duration_ms: DEFAULT_DURATION_MS,
        delay_ms: 0.0,
        easing: Easing::EaseOut,
        threshold: DEFAULT_THRESHOLD,
        trigger_once: true,
        stagger: None,
        id: None,
        row: false,
    }
}

impl Reveal {
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children<E, I>(mut self, children: I) -> Self
    where
        E: ElementBuilder + 'static,
        I: IntoIterator<Item = E>,
    {
        self.children
            .extend(children.into_iter().map(|c| Box::new(c) as Box<dyn ElementBuilder>));
        self
    }

    /// Stable observer key; generated as `reveal-N` when not set
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Lay the children out horizontally instead of in a column
    pub fn row(mut self) -> Self {
        self.row = true;
        self
    }

    /// Set both endpoint styles directly
    pub fn styles(mut self, initial: RevealStyle, target: RevealStyle) -> Self {
        self.initial = initial;
        self.target = target;
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Re-run the reveal every time the block re-enters the viewport
    pub fn repeat(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    /// Stagger the children; each child becomes its own block with a delay
    /// of `base + k * interval` on top of the wrapper's delay
    pub fn stagger(mut self, config: StaggerConfig) -> Self {
        self.stagger = Some(config);
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    pub fn fade_in(mut self, duration_ms: f32) -> Self {
        self.initial = RevealStyle::hidden();
        self.target = RevealStyle::visible();
        self.duration(duration_ms)
    }

    pub fn slide_up(mut self, duration_ms: f32) -> Self {
        self.initial = RevealStyle::hidden().with_y(SLIDE_UP_DISTANCE);
        self.target = RevealStyle::visible();
        self.duration(duration_ms)
    }

    pub fn slide_in_left(mut self, duration_ms: f32) -> Self {
        self.initial = RevealStyle::hidden().with_x(-SLIDE_SIDE_DISTANCE);
        self.target = RevealStyle::visible();
        self.duration(duration_ms)
    }

    pub fn slide_in_right(mut self, duration_ms: f32) -> Self {
        self.initial = RevealStyle::hidden().with_x(SLIDE_SIDE_DISTANCE);
        self.target = RevealStyle::visible();
        self.duration(duration_ms)
    }

    pub fn scale_in(mut self, duration_ms: f32) -> Self {
        self.initial = RevealStyle::hidden().with_scale(SCALE_IN_FROM);
        self.target = RevealStyle::visible();
        self.duration(duration_ms)
    }

    fn container_style(&self) -> Style {
        Style {
            display: Display::Flex,
            flex_direction: if self.row {
                FlexDirection::Row
            } else {
                FlexDirection::Column
            },
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Auto,
            },
            ..Default::default()
        }
    }

    fn spec_for(&self, node: LayoutNodeId, block_id: String, delay_ms: f32) -> RevealSpec {
        RevealSpec {
            node,
            block_id,
            initial: self.initial,
            target: self.target,
            duration_ms: self.duration_ms,
            delay_ms,
            easing: self.easing,
            threshold: self.threshold,
            trigger_once: self.trigger_once,
        }
    }
}

impl ElementBuilder for Reveal {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId {
        let node = ctx.tree.create_node(self.container_style());
        let base_id = match &self.id {
            Some(id) => id.clone(),
            None => ctx.next_block_id(),
        };
        ctx.registry.register(base_id.clone(), node);

        let child_nodes: Vec<LayoutNodeId> = self
            .children
            .iter()
            .map(|child| child.build(ctx))
            .collect();
        for &child in &child_nodes {
            ctx.tree.add_child(node, child);
        }

        match &self.stagger {
            Some(config) if !child_nodes.is_empty() => {
                let total = child_nodes.len();
                for (index, &child) in child_nodes.iter().enumerate() {
                    let block_id = format!("{}-{}", base_id, index);
                    let delay = self.delay_ms + config.delay_for_index(index, total);
                    ctx.registry.register(block_id.clone(), child);
                    ctx.reveals.push(self.spec_for(child, block_id, delay));
                }
            }
            _ => {
                ctx.reveals.push(self.spec_for(node, base_id, self.delay_ms));
            }
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;

    #[test]
    fn test_default_reveal_records_slide_up_spec() {
        let (ctx, _root) = BuildContext::build_root(&reveal().child(div().h(100.0)));

        assert_eq!(ctx.reveals.len(), 1);
        let spec = &ctx.reveals[0];
        assert_eq!(spec.block_id, "reveal-0");
        assert_eq!(spec.initial.opacity, 0.0);
        assert_eq!(spec.initial.y, 20.0);
        assert_eq!(spec.target, RevealStyle::visible());
        assert_eq!(spec.duration_ms, 800.0);
        assert_eq!(spec.delay_ms, 0.0);
        assert_eq!(spec.threshold, 0.15);
        assert_eq!(spec.easing, Easing::EaseOut);
        assert!(spec.trigger_once);
    }

    #[test]
    fn test_explicit_id_registers_wrapper() {
        let (ctx, _root) = BuildContext::build_root(
            &reveal().id("hero-title").child(div().h(40.0)),
        );

        let spec = &ctx.reveals[0];
        assert_eq!(spec.block_id, "hero-title");
        assert_eq!(ctx.registry.get("hero-title"), Some(spec.node));
    }

    #[test]
    fn test_generated_ids_are_sequential() {
        let page = div()
            .flex_col()
            .child(reveal().child(div().h(10.0)))
            .child(reveal().child(div().h(10.0)));
        let (ctx, _root) = BuildContext::build_root(&page);

        let ids: Vec<&str> = ctx.reveals.iter().map(|s| s.block_id.as_str()).collect();
        assert_eq!(ids, vec!["reveal-0", "reveal-1"]);
    }

    #[test]
    fn test_stagger_emits_one_spec_per_child() {
        let cards = reveal()
            .id("cards")
            .delay(100.0)
            .stagger(StaggerConfig::new(40.0))
            .children((0..3).map(|_| div().square(80.0)));
        let (ctx, _root) = BuildContext::build_root(&cards);

        assert_eq!(ctx.reveals.len(), 3);
        for (k, spec) in ctx.reveals.iter().enumerate() {
            assert_eq!(spec.block_id, format!("cards-{}", k));
            assert_eq!(spec.delay_ms, 100.0 + 40.0 * k as f32);
            assert_eq!(ctx.registry.get(&spec.block_id), Some(spec.node));
        }
        // The wrapper keeps its own registry entry for anchor navigation
        assert!(ctx.registry.contains("cards"));
    }

    #[test]
    fn test_presets_set_endpoint_styles() {
        let fade = reveal().fade_in(300.0);
        assert_eq!(fade.initial, RevealStyle::hidden());

        let left = reveal().slide_in_left(400.0);
        assert_eq!(left.initial.x, -50.0);
        assert_eq!(left.initial.opacity, 0.0);

        let right = reveal().slide_in_right(400.0);
        assert_eq!(right.initial.x, 50.0);

        let scale = reveal().scale_in(500.0);
        assert_eq!(scale.initial.scale, 0.9);
        assert_eq!(scale.duration_ms, 500.0);
    }

    #[test]
    fn test_repeat_clears_trigger_once() {
        let (ctx, _root) = BuildContext::build_root(&reveal().repeat().child(div()));
        assert!(!ctx.reveals[0].trigger_once);
    }

    #[test]
    fn test_wrapper_is_layout_transparent() {
        let (mut ctx, root) = BuildContext::build_root(
            &div()
                .w(800.0)
                .child(reveal().id("block").child(div().h(120.0))),
        );
        ctx.tree.compute_layout(root, 800.0, 600.0);

        let node = ctx.registry.get("block").unwrap();
        let bounds = ctx.tree.absolute_bounds(node).unwrap();
        assert_eq!(bounds.height, 120.0);
        assert_eq!(bounds.width, 800.0);
    }
}
