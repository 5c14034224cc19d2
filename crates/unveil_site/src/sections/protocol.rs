//! Protocol walkthrough section

use unveil_layout::prelude::*;

use crate::theme::ThemeTokens;

const STEPS: [(&str, &str); 3] = [
    (
        "Agents negotiate",
        "Counterparties discover each other and agree on price and terms in-band.",
    ),
    (
        "Value streams",
        "Funds flow continuously against delivery, with both sides able to halt.",
    ),
    (
        "State settles",
        "Final balances land on the shared ledger once the stream closes.",
    ),
];

/// Numbered walkthrough, steps sliding in from alternating sides
pub fn protocol_section(tokens: &ThemeTokens) -> Div {
    let steps = STEPS.iter().enumerate().map(|(index, (title, blurb))| {
        let wrapper = reveal().id(format!("protocol-step-{}", index));
        let wrapper = if index % 2 == 0 {
            wrapper.slide_in_left(700.0)
        } else {
            wrapper.slide_in_right(700.0)
        };
        wrapper.child(protocol_step(index + 1, title, blurb, tokens))
    });

    div()
        .id("protocol")
        .flex_col()
        .items_center()
        .w_full()
        .gap(40.0)
        .py(120.0)
        .bg(tokens.background)
        .child(
            reveal()
                .id("protocol-title")
                .slide_up(800.0)
                .child(
                    text("One stream from intent to settlement")
                        .size(40.0)
                        .bold()
                        .color(tokens.text_primary),
                ),
        )
        .children(steps)
}

fn protocol_step(number: usize, title: &str, blurb: &str, tokens: &ThemeTokens) -> Div {
    div()
        .flex_row()
        .items_center()
        .max_w(760.0)
        .gap(24.0)
        .p(24.0)
        .rounded(14.0)
        .bg(tokens.surface)
        .child(
            div()
                .square(48.0)
                .rounded(24.0)
                .items_center()
                .justify_center()
                .bg(tokens.accent_soft)
                .child(text(number.to_string()).size(20.0).bold().color(tokens.accent)),
        )
        .child(
            div()
                .flex_col()
                .gap(8.0)
                .flex_grow()
                .child(text(title).size(19.0).bold().color(tokens.text_primary))
                .child(
                    text(blurb)
                        .size(15.0)
                        .line_height(1.6)
                        .color(tokens.text_secondary),
                ),
        )
}
