//! Reel Page - Main Entry Point
//!
//! ```text
//! reel-page [CATALOG] [--config PATH] [--realtime] [--fps N] [--loops N]
//!           [--viewport-width PX] [--block-autoplay] [--jump SECONDS:INDEX]...
//! ```

mod host;

use anyhow::{Context, Result, bail};
use reel_carousel::{CarouselConfig, SlideCatalog};
use tracing_subscriber::EnvFilter;

use host::{HeadlessPage, PageOptions, PageSummary};

/// Catalog used when none is given
const BUNDLED_CATALOG: &str = include_str!("../../../demos/highlights.json");

#[derive(Debug, Default)]
struct Args {
    catalog: Option<String>,
    config: Option<String>,
    options: PageOptions,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(value(&mut args, &arg)?),
            "--realtime" => parsed.options.realtime = true,
            "--block-autoplay" => parsed.options.block_autoplay = true,
            "--fps" => parsed.options.fps = value(&mut args, &arg)?.parse().context("--fps")?,
            "--loops" => parsed.options.loops = value(&mut args, &arg)?.parse().context("--loops")?,
            "--viewport-width" => {
                parsed.options.viewport_width = value(&mut args, &arg)?.parse().context("--viewport-width")?;
            }
            "--jump" => {
                let entry = value(&mut args, &arg)?;
                let (at, index) = entry
                    .split_once(':')
                    .with_context(|| format!("--jump expects SECONDS:INDEX, got {entry:?}"))?;
                parsed
                    .options
                    .jumps
                    .push((at.parse::<f64>().context("--jump time")?, index.parse::<usize>().context("--jump index")?));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if parsed.catalog.replace(path.to_string()).is_some() {
                    bail!("more than one catalog given");
                }
            }
        }
    }

    if parsed.options.fps == 0 {
        bail!("--fps must be positive");
    }
    Ok(parsed)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("{flag} expects a value"))
}

/// Load the catalog and config named by `args`, then run the page
fn run_page(args: Args) -> Result<PageSummary> {
    let catalog = match &args.catalog {
        Some(path) => SlideCatalog::from_path(path).with_context(|| format!("loading catalog {path}"))?,
        None => SlideCatalog::from_json(BUNDLED_CATALOG).context("loading bundled catalog")?,
    };

    let config = match &args.config {
        Some(path) => CarouselConfig::from_path(path).with_context(|| format!("loading config {path}"))?,
        None => CarouselConfig::default(),
    };

    let realtime = args.options.realtime;
    let page = HeadlessPage::new(catalog, config, args.options);
    Ok(if realtime { page.run_realtime() } else { page.run() })
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting reel page...");

    let args = parse_args(std::env::args().skip(1))?;
    let summary = run_page(args)?;

    if !summary.finished {
        tracing::warn!(
            elapsed = %format!("{:.2}s", summary.elapsed),
            refused = summary.refused,
            "reel did not finish"
        );
    }
    Ok(())
}
