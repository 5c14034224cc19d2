//! Unveil demo site
//!
//! A headless landing page for a fictional agent-economy network, built to
//! exercise the reveal pipeline end to end: sections declare reveal blocks,
//! the page loop scrolls a virtual viewport through them, and the observer,
//! tracker, and timeline scheduler do the rest.

pub mod config;
pub mod nav;
pub mod page;
pub mod sections;
pub mod theme;

pub use config::{ConfigError, SiteConfig};
pub use nav::{AnchorNav, HashChange, NavLink};
pub use page::{default_nav_links, page_root, Page};
pub use sections::ComingSoon;
pub use theme::{ColorTheme, ThemeTokens};
