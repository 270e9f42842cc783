use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tintmosaic::aspect::{self, AspectChoice, AspectProposal};
use tintmosaic::raster::io::{load, load_all, save, show};
use tintmosaic::{build_mosaic, MosaicConfig, RankWindow, Size, Strategy, DEFAULT_PARALLEL_THRESHOLD};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Photo-mosaic builder (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output with per-stage timings.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum AspectConfig {
    Ask,
    KeepWidth,
    KeepHeight,
    Stretch,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    image_path: String,
    filler_images_dir_path: String,
    strategy: String,
    image_size: [usize; 2],
    sub_image_size: [usize; 2],
    show: bool,
    output_image_path: Option<String>,
    seed: Option<u64>,
    rank: Option<usize>,
    parallel_threshold: usize,
    aspect: AspectConfig,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = MosaicConfig::default();
        Self {
            image_path: String::new(),
            filler_images_dir_path: String::new(),
            strategy: cfg.strategy.name().to_string(),
            image_size: [cfg.image_size.width, cfg.image_size.height],
            sub_image_size: [cfg.tile_size.width, cfg.tile_size.height],
            show: false,
            output_image_path: None,
            seed: cfg.seed,
            rank: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            aspect: AspectConfig::Ask,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(Strategy, Size, Size), Box<dyn std::error::Error>> {
        if self.image_path.is_empty() || self.filler_images_dir_path.is_empty() {
            return Err("image_path and filler_images_dir_path must be set in the config".into());
        }
        let mut strategy: Strategy = self.strategy.parse()?;
        if let Some(rank) = self.rank {
            if rank == 0 {
                return Err("rank must be at least 1".into());
            }
            strategy = strategy.with_rank_window(RankWindow::Fixed(rank));
        }
        let image_size = Size::new(self.image_size[0], self.image_size[1])?;
        let tile_size = Size::new(self.sub_image_size[0], self.sub_image_size[1])?;
        Ok((strategy, image_size, tile_size))
    }

    fn output_path(&self) -> Option<&str> {
        self.output_image_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }
}

fn prompt_aspect(proposal: &AspectProposal) -> io::Result<AspectChoice> {
    let AspectProposal {
        requested,
        keep_width,
        keep_height,
    } = proposal;
    println!(
        "The target image proportions differ from the requested size {}x{}.",
        requested.width, requested.height
    );
    println!("  1: {}x{} (keep width)", keep_width.width, keep_width.height);
    println!("  2: {}x{} (keep height)", keep_height.width, keep_height.height);
    print!("Choose 1 or 2, anything else keeps the requested size: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(AspectChoice::from_response(&line))
}

fn resolve_image_size(
    mode: AspectConfig,
    source: Size,
    requested: Size,
) -> io::Result<Size> {
    let Some(proposal) = aspect::propose(source, requested) else {
        return Ok(requested);
    };
    let choice = match mode {
        AspectConfig::Ask => prompt_aspect(&proposal)?,
        AspectConfig::KeepWidth => AspectChoice::KeepWidth,
        AspectConfig::KeepHeight => AspectChoice::KeepHeight,
        AspectConfig::Stretch => AspectChoice::Stretch,
    };
    Ok(proposal.resolve(choice))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("tintmosaic=info".parse()?),
            )
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let (strategy, requested_size, tile_size) = config.validate()?;

    let target = load(&config.image_path)?;
    let fillers = load_all(&config.filler_images_dir_path)?;
    tracing::info!(
        target_width = target.width(),
        target_height = target.height(),
        fillers = fillers.len(),
        "inputs loaded"
    );

    let image_size = resolve_image_size(config.aspect, target.size(), requested_size)?;
    let mosaic_cfg = MosaicConfig {
        strategy,
        image_size,
        tile_size,
        parallel_threshold: config.parallel_threshold,
        seed: config.seed,
    };
    let mosaic = build_mosaic(&target, &fillers, &mosaic_cfg)?;

    if let Some(path) = config.output_path() {
        save(&mosaic, path)?;
        tracing::info!(path, "mosaic saved");
    }
    if config.show {
        match show(&mosaic) {
            Ok(path) => tracing::info!(path = %path.display(), "mosaic opened in viewer"),
            Err(err) => tracing::warn!(error = %err, "could not open the mosaic viewer"),
        }
    }

    Ok(())
}
