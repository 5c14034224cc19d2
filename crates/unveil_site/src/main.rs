//! Unveil site runner
//!
//! Drives the landing page without a window: `walk` scrolls a virtual
//! viewport through the whole page at a fixed timestep and logs every reveal
//! as it fires; `outline` prints the laid-out section geometry.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use unveil_site::{Page, SiteConfig};

#[derive(Parser)]
#[command(name = "unveil-site")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless runner for the Unveil landing page", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory containing unveil.toml
    #[arg(short, long, global = true, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scroll through the page and log every reveal
    Walk {
        /// Frame timestep in milliseconds
        #[arg(long, default_value = "16.7")]
        step_ms: f32,

        /// Scroll speed in pixels per frame
        #[arg(long, default_value = "12.0")]
        speed: f32,
    },

    /// Print the laid-out sections and reveal blocks
    Outline,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = SiteConfig::load_from_dir(&cli.config_dir)?;

    match cli.command {
        Commands::Walk { step_ms, speed } => cmd_walk(&config, step_ms, speed),
        Commands::Outline => cmd_outline(&config),
    }
}

fn cmd_walk(config: &SiteConfig, step_ms: f32, speed: f32) -> Result<()> {
    if step_ms <= 0.0 || speed <= 0.0 {
        anyhow::bail!("step_ms and speed must be positive");
    }

    let mut page = Page::mount(config);
    info!(
        site = %config.site.name,
        blocks = page.block_ids().len(),
        "starting scroll walkthrough"
    );

    let mut frames = 0u32;
    loop {
        if !page.viewport().is_at_bottom() {
            page.viewport_mut().scroll_by(speed);
        }

        let events = page.advance(step_ms);
        frames += 1;
        for event in events.iter().filter(|e| e.entering) {
            info!(
                block = %event.block_id,
                offset = page.viewport().offset_y(),
                elapsed_ms = frames as f32 * step_ms,
                "reveal triggered"
            );
        }

        if page.viewport().is_at_bottom() && page.all_revealed() && page.is_idle() {
            break;
        }

        // A page that cannot finish is a bug; bail rather than spin
        if frames > 100_000 {
            anyhow::bail!("walkthrough did not settle after {} frames", frames);
        }
    }

    info!(
        frames,
        revealed = page.triggered_count(),
        "walkthrough complete"
    );
    for block_id in page.block_ids() {
        let style = page.style_of(block_id);
        info!(
            block = %block_id,
            opacity = style.opacity,
            y = style.y,
            "final style"
        );
    }

    page.unmount();
    Ok(())
}

fn cmd_outline(config: &SiteConfig) -> Result<()> {
    let page = Page::mount(config);

    for section in ["header", "hero", "capabilities", "protocol", "coming-soon", "footer"] {
        if let Some(bounds) = page.bounds_of(section) {
            info!(
                section,
                y = bounds.y,
                height = bounds.height,
                "section"
            );
        }
    }

    for block_id in page.block_ids() {
        if let Some(bounds) = page.bounds_of(block_id) {
            info!(block = %block_id, y = bounds.y, "reveal block");
        }
    }

    Ok(())
}
