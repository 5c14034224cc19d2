//! Marketing page sections
//!
//! Each section is a plain function (or struct, for the parameterized
//! placeholder) returning an element tree with reveal wrappers already
//! attached. Section ids double as anchor targets for the header nav.

mod capabilities;
mod coming_soon;
mod hero;
mod protocol;

pub use capabilities::capabilities_section;
pub use coming_soon::ComingSoon;
pub use hero::hero_section;
pub use protocol::protocol_section;

use unveil_layout::prelude::*;

use crate::nav::NavLink;
use crate::theme::ThemeTokens;

/// Fixed top bar with the brand mark and anchor links
pub fn header(name: &str, links: &[NavLink], tokens: &ThemeTokens) -> Div {
    let link_row = div().flex_row().gap(32.0).children(
        links
            .iter()
            .map(|link| text(&link.label).size(15.0).color(tokens.text_secondary)),
    );

    div()
        .id("header")
        .flex_row()
        .items_center()
        .justify_between()
        .w_full()
        .px(48.0)
        .py(24.0)
        .bg(tokens.background)
        .child(text(name).size(20.0).bold().color(tokens.text_primary))
        .child(link_row)
}

/// Closing strip under the last section
pub fn footer(name: &str, tokens: &ThemeTokens) -> Div {
    div()
        .id("footer")
        .flex_row()
        .justify_center()
        .w_full()
        .py(40.0)
        .bg(tokens.background)
        .child(
            text(format!("{} - built for the agent economy", name))
                .size(13.0)
                .color(tokens.text_secondary),
        )
}
