//! Capabilities section

use unveil_layout::prelude::*;

use crate::theme::ThemeTokens;

struct Capability {
    title: &'static str,
    blurb: &'static str,
}

const CAPABILITIES: [Capability; 3] = [
    Capability {
        title: "Streaming settlement",
        blurb: "Payments clear continuously as work is delivered, not in end-of-day batches.",
    },
    Capability {
        title: "Agent identity",
        blurb: "Every agent carries a portable, verifiable identity across services.",
    },
    Capability {
        title: "Metered compute",
        blurb: "Resource usage is priced per call, with spend caps enforced on-ledger.",
    },
];

/// Three capability cards cascading in left to right
pub fn capabilities_section(tokens: &ThemeTokens, stagger_interval_ms: f32) -> Div {
    div()
        .id("capabilities")
        .flex_col()
        .items_center()
        .w_full()
        .gap(48.0)
        .py(120.0)
        .bg(tokens.background)
        .child(
            reveal()
                .id("capabilities-title")
                .slide_up(800.0)
                .child(
                    text("Built for machine commerce")
                        .size(40.0)
                        .bold()
                        .color(tokens.text_primary),
                ),
        )
        .child(
            reveal()
                .id("capability-cards")
                .row()
                .slide_up(600.0)
                .stagger(StaggerConfig::new(stagger_interval_ms))
                .children(CAPABILITIES.iter().map(|cap| capability_card(cap, tokens))),
        )
}

fn capability_card(capability: &Capability, tokens: &ThemeTokens) -> Div {
    div()
        .flex_col()
        .w(340.0)
        .gap(12.0)
        .p(28.0)
        .rounded(14.0)
        .bg(tokens.surface)
        .child(
            text(capability.title)
                .size(20.0)
                .bold()
                .color(tokens.text_primary),
        )
        .child(
            text(capability.blurb)
                .size(15.0)
                .line_height(1.6)
                .color(tokens.text_secondary),
        )
}
