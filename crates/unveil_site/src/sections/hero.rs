//! Hero section

use unveil_layout::prelude::*;

use crate::theme::ThemeTokens;

/// Full-height opener: headline, tagline, and a pair of calls to action,
/// revealed top to bottom with small delay offsets
pub fn hero_section(name: &str, tagline: &str, tokens: &ThemeTokens) -> Div {
    let headline = format!("{}: value that moves at machine speed", name);

    div()
        .id("hero")
        .flex_col()
        .items_center()
        .justify_center()
        .w_full()
        .min_h(720.0)
        .gap(24.0)
        .py(120.0)
        .bg(tokens.background)
        .child(
            reveal()
                .id("hero-title")
                .slide_up(800.0)
                .child(
                    text(headline)
                        .size(56.0)
                        .bold()
                        .color(tokens.text_primary),
                ),
        )
        .child(
            reveal()
                .id("hero-tagline")
                .slide_up(800.0)
                .delay(150.0)
                .child(text(tagline).size(22.0).color(tokens.text_secondary)),
        )
        .child(
            reveal()
                .id("hero-actions")
                .fade_in(600.0)
                .delay(300.0)
                .child(
                    div()
                        .flex_row()
                        .gap(16.0)
                        .child(action_button("Read the litepaper", true, tokens))
                        .child(action_button("Join the testnet", false, tokens)),
                ),
        )
}

fn action_button(label: &str, primary: bool, tokens: &ThemeTokens) -> Div {
    let background = if primary {
        tokens.accent
    } else {
        tokens.accent_soft
    };
    let foreground = if primary {
        tokens.background
    } else {
        tokens.accent
    };

    div()
        .flex_row()
        .items_center()
        .justify_center()
        .px(28.0)
        .py(14.0)
        .rounded(10.0)
        .bg(background)
        .child(text(label).size(16.0).bold().color(foreground).no_wrap())
}
