//! Gear site build binary.
//!
//! Composition root for the static site: reads [`SiteConfig`] from the
//! environment (and `.env`), runs the chart pipeline over the gear catalog,
//! writes the chart page data and checks that the guidebook tree resolves.
//!
//! # Examples
//!
//! ```bash
//! # Default data directory, output to public/chart.json
//! cargo run -p gear-site
//!
//! # Shorthand labels, wider initial window
//! GEAR_SHORTHAND=true GEAR_RANGE_MAX=120 cargo run -p gear-site
//! ```

mod build;
mod config;

use anyhow::Result;
use gear_content::ContentFactory;

use config::SiteConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let site = SiteConfig::from_env();
    tracing::info!("Building gear site");
    tracing::info!("Data directory: {}", site.data_dir.display());
    tracing::info!("Output: {}", site.output.display());

    let page = build::build_chart(&site)?;
    tracing::info!(digest = %page.digest, "Catalog fingerprint");

    let factory = ContentFactory::new(&site.data_dir);
    build::walk_guidebook(&factory);

    tracing::info!("Site build complete");
    Ok(())
}
