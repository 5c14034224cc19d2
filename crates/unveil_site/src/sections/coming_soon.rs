//! Coming-soon placeholder section
//!
//! The one parameterized component on the page: callers hand it a title,
//! subtitle, and a color theme, and it renders a fixed centered layout. The
//! theme here is the component's own, so a placeholder can sit on a page
//! styled differently from the rest.

use unveil_layout::prelude::*;

use crate::theme::ColorTheme;

/// Placeholder for a section that has no content yet
#[derive(Clone, Debug)]
pub struct ComingSoon {
    pub title: String,
    pub subtitle: String,
    pub theme: ColorTheme,
}

impl Default for ComingSoon {
    fn default() -> Self {
        Self {
            title: "Coming soon".to_string(),
            subtitle: "Mainnet access opens to early partners first.".to_string(),
            theme: ColorTheme::default(),
        }
    }
}

impl ComingSoon {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        theme: ColorTheme,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            theme,
        }
    }

    fn layout(&self) -> Div {
        let tokens = self.theme.tokens();

        div()
            .id("coming-soon")
            .flex_col()
            .items_center()
            .justify_center()
            .w_full()
            .min_h(420.0)
            .py(100.0)
            .bg(tokens.surface)
            .child(
                reveal()
                    .id("coming-soon-body")
                    .scale_in(700.0)
                    .child(
                        div()
                            .flex_col()
                            .items_center()
                            .gap(16.0)
                            .child(
                                div()
                                    .px(14.0)
                                    .py(6.0)
                                    .rounded(999.0)
                                    .bg(tokens.accent_soft)
                                    .child(text("In development").size(13.0).color(tokens.accent)),
                            )
                            .child(
                                text(&self.title)
                                    .size(36.0)
                                    .bold()
                                    .color(tokens.text_primary),
                            )
                            .child(
                                text(&self.subtitle)
                                    .size(17.0)
                                    .color(tokens.text_secondary),
                            ),
                    ),
            )
    }
}

impl ElementBuilder for ComingSoon {
    fn build(&self, ctx: &mut BuildContext) -> LayoutNodeId {
        self.layout().build(ctx)
    }
}
