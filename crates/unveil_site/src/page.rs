//! Page lifecycle and frame loop
//!
//! [`Page`] owns everything a mounted page needs: the built element tree,
//! the viewport, the intersection observer with its registrations, and the
//! timeline scheduler. One [`Page::advance`] call is one frame: pending
//! navigation is applied, the glide ticks, intersections are checked, newly
//! entered blocks get their timelines started, and every running timeline
//! moves forward.
//!
//! Unmounting drops the observer registrations and the hash subscription,
//! so no callback or observation outlives the page.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{debug, info};
use unveil_animation::TimelineTicket;
use unveil_core::EventHub;
use unveil_layout::prelude::*;

use crate::config::SiteConfig;
use crate::nav::{AnchorNav, HashChange, NavLink};
use crate::sections::{
    capabilities_section, footer, header, hero_section, protocol_section, ComingSoon,
};

/// Header links for the default page
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Capabilities", "capabilities"),
        NavLink::new("Protocol", "protocol"),
        NavLink::new("Roadmap", "coming-soon"),
    ]
}

/// Assemble the full landing page element tree
pub fn page_root(config: &SiteConfig, links: &[NavLink]) -> Div {
    let tokens = config.site.theme.tokens();

    div()
        .flex_col()
        .w_full()
        .bg(tokens.background)
        .child(header(&config.site.name, links, &tokens))
        .child(hero_section(&config.site.name, &config.site.tagline, &tokens))
        .child(capabilities_section(&tokens, config.reveal.stagger_interval_ms))
        .child(protocol_section(&tokens))
        .child(ComingSoon::new(
            config.coming_soon.title.as_str(),
            config.coming_soon.subtitle.as_str(),
            config.coming_soon.theme.unwrap_or(config.site.theme),
        ))
        .child(footer(&config.site.name, &tokens))
}

/// A mounted page driving reveals from a frame clock
pub struct Page {
    ctx: BuildContext,
    root: LayoutNodeId,
    viewport: Viewport,
    observer: IntersectionObserver,
    registrations: Vec<ObserverRegistration>,
    scheduler: TimelineScheduler,
    tickets: FxHashMap<String, TimelineTicket>,
    /// Reveal blocks in declaration order, keyed by block id
    specs: IndexMap<String, RevealSpec>,
    hub: EventHub<HashChange>,
    nav: AnchorNav,
    mounted: bool,
}

impl Page {
    /// Build, lay out, and register the whole page
    pub fn mount(config: &SiteConfig) -> Self {
        let mut nav = AnchorNav::new(default_nav_links());
        let hub = EventHub::new();
        nav.attach(&hub);

        let observer = IntersectionObserver::new();
        let mut page = Self {
            ctx: BuildContext::new(),
            root: LayoutNodeId::default(),
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            observer,
            registrations: Vec::new(),
            scheduler: TimelineScheduler::new(),
            tickets: FxHashMap::default(),
            specs: IndexMap::new(),
            hub,
            nav,
            mounted: true,
        };
        page.build_tree(config);

        info!(
            blocks = page.specs.len(),
            content_height = page.viewport.content_height(),
            "page mounted"
        );
        page
    }

    /// Rebuild the element tree in place, keeping reveal history.
    ///
    /// Blocks that already triggered stay triggered; the observer's tracker
    /// carries across the rebuild, so nothing replays.
    pub fn rebuild(&mut self, config: &SiteConfig) {
        self.registrations.clear();
        self.build_tree(config);
        debug!(blocks = self.specs.len(), "page rebuilt");
    }

    fn build_tree(&mut self, config: &SiteConfig) {
        let links = self.nav.links().to_vec();
        let (ctx, root) = BuildContext::build_root(&page_root(config, &links));
        self.ctx = ctx;
        self.root = root;

        self.ctx.tree.compute_layout(
            self.root,
            self.viewport.width(),
            self.viewport.height(),
        );
        let content_height = self
            .ctx
            .tree
            .absolute_bounds(self.root)
            .map(|bounds| bounds.height)
            .unwrap_or(0.0);
        self.viewport.set_content_height(content_height);

        self.specs.clear();
        for spec in &self.ctx.reveals {
            self.registrations.push(self.observer.observe(
                &spec.block_id,
                spec.threshold,
                spec.trigger_once,
            ));
            self.specs.insert(spec.block_id.clone(), spec.clone());
        }
    }

    /// One frame: navigation, scroll glide, intersection pass, timelines.
    /// Returns the intersection transitions that happened this frame.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<IntersectionEvent> {
        if !self.mounted {
            return Vec::new();
        }

        if let Some(command) = self.nav.take_pending() {
            self.viewport.request(command);
        }
        if let Some(command) = self.viewport.take_pending() {
            self.apply_scroll(command);
        }
        self.viewport.tick(dt_ms);

        let registry = &self.ctx.registry;
        let tree = &self.ctx.tree;
        let events = self.observer.update(self.viewport.rect(), |block_id| {
            registry
                .get(block_id)
                .and_then(|node| tree.absolute_bounds(node))
                .map(|bounds| bounds.rect())
        });

        for event in &events {
            if event.entering {
                self.start_block(&event.block_id);
            } else {
                // Repeating block left the viewport; next entry replays
                self.tickets.remove(&event.block_id);
            }
        }

        self.scheduler.advance(dt_ms);
        events
    }

    fn start_block(&mut self, block_id: &str) {
        let Some(spec) = self.specs.get(block_id) else {
            return;
        };

        let timeline = RevealTimeline::new(spec.initial, spec.target, spec.duration_ms)
            .with_delay(spec.delay_ms)
            .with_easing(spec.easing);
        let ticket = self.scheduler.register(timeline);
        ticket.start();
        debug!(block = block_id, delay_ms = spec.delay_ms, "reveal started");
        self.tickets.insert(block_id.to_string(), ticket);
    }

    fn apply_scroll(&mut self, command: ScrollCommand) {
        match command {
            ScrollCommand::ToOffset { y, behavior } => self.viewport.scroll_to(y, behavior),
            ScrollCommand::ByAmount { dy, behavior } => {
                let target = self.viewport.offset_y() + dy;
                self.viewport.scroll_to(target, behavior);
            }
            ScrollCommand::ToElement {
                element_id,
                behavior,
            } => match self.bounds_of(&element_id) {
                Some(bounds) => self.viewport.scroll_to(bounds.y, behavior),
                None => debug!(element = %element_id, "scroll target not in layout"),
            },
            ScrollCommand::ToTop { behavior } => self.viewport.scroll_to(0.0, behavior),
            ScrollCommand::ToBottom { behavior } => {
                let bottom = self.viewport.max_offset();
                self.viewport.scroll_to(bottom, behavior);
            }
        }
    }

    /// Emit a hash change, as a browser would on anchor click
    pub fn navigate(&self, hash: &str) {
        self.hub.emit(&HashChange::new(hash));
    }

    /// Current style for a block: the live timeline sample while playing,
    /// otherwise the spec's resting endpoint
    pub fn style_of(&self, block_id: &str) -> RevealStyle {
        if let Some(ticket) = self.tickets.get(block_id) {
            if let Some(style) = ticket.sample() {
                return style;
            }
        }

        match self.specs.get(block_id) {
            Some(spec) => {
                if spec.trigger_once && self.observer.has_triggered(block_id) {
                    spec.target
                } else {
                    spec.initial
                }
            }
            None => RevealStyle::visible(),
        }
    }

    pub fn has_revealed(&self, block_id: &str) -> bool {
        self.observer.has_triggered(block_id)
    }

    /// Page-space bounds for any registered element id
    pub fn bounds_of(&self, element_id: &str) -> Option<ElementBounds> {
        self.ctx
            .registry
            .get(element_id)
            .and_then(|node| self.ctx.tree.absolute_bounds(node))
    }

    /// All reveal block ids in declaration order
    pub fn block_ids(&self) -> Vec<&str> {
        self.specs.keys().map(String::as_str).collect()
    }

    /// True once every trigger-once block has revealed
    pub fn all_revealed(&self) -> bool {
        self.specs
            .values()
            .filter(|spec| spec.trigger_once)
            .all(|spec| self.observer.has_triggered(&spec.block_id))
    }

    /// True when nothing is animating or gliding
    pub fn is_idle(&self) -> bool {
        self.scheduler.running_count() == 0 && !self.viewport.is_gliding()
    }

    pub fn observed_count(&self) -> usize {
        self.observer.entry_count()
    }

    pub fn triggered_count(&self) -> usize {
        self.observer.triggered_count()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resize the window and re-run layout at the new width
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.ctx.tree.compute_layout(self.root, width, height);
        let content_height = self
            .ctx
            .tree
            .absolute_bounds(self.root)
            .map(|bounds| bounds.height)
            .unwrap_or(0.0);
        self.viewport.set_content_height(content_height);
    }

    /// Tear down observation and navigation; the page stops reacting
    pub fn unmount(&mut self) {
        self.registrations.clear();
        self.tickets.clear();
        self.nav.detach();
        self.mounted = false;
        info!("page unmounted");
    }
}
