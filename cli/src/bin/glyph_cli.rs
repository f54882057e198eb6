use clap::{Parser, Subcommand};
use cli::GlyphConfig;
use color_eyre::eyre::Result;
use glyph::{debug, encode_directory, load_grayscale, write_samples, ExportFormat};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feature vector of one image as JSON
    Extract {
        /// Path to the character image
        #[arg(short, long)]
        input: PathBuf,
        /// Path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Side length of the feature grid (overrides the configuration)
        #[arg(short, long)]
        grid_size: Option<u32>,
    },
    /// Encode every image below a directory
    Batch {
        /// Dataset root; images are labelled by their parent directory
        #[arg(short, long)]
        dir: PathBuf,
        /// File to write the encoded samples to
        #[arg(short, long)]
        output: PathBuf,
        /// Output layout (json or jsonl), overrides the configuration
        #[arg(short, long)]
        format: Option<ExportFormat>,
        /// Path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Side length of the feature grid (overrides the configuration)
        #[arg(short, long)]
        grid_size: Option<u32>,
    },
    /// Write an enlarged view of the feature grid
    Preview {
        /// Path to the character image
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the preview image
        #[arg(short, long)]
        output: PathBuf,
        /// Path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Side length of the feature grid (overrides the configuration)
        #[arg(short, long)]
        grid_size: Option<u32>,
    },
    /// Write the padded image with the detected character box drawn on it
    Bounds {
        /// Path to the character image
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the annotated image
        #[arg(short, long)]
        output: PathBuf,
        /// Path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract { input, config, grid_size } => {
            extract(input, config.as_deref(), *grid_size)?;
        }
        Commands::Batch { dir, output, format, config, grid_size } => {
            batch(dir, output, *format, config.as_deref(), *grid_size)?;
        }
        Commands::Preview { input, output, config, grid_size } => {
            preview(input, output, config.as_deref(), *grid_size)?;
        }
        Commands::Bounds { input, output, config } => {
            bounds(input, output, config.as_deref())?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&GlyphConfig::schema())?);
        }
    }

    Ok(())
}

fn extract(input: &Path, config: Option<&Path>, grid_size: Option<u32>) -> Result<()> {
    let config = GlyphConfig::load(config)?.with_grid_size(grid_size);
    let encoder = config.encoder()?;

    let features = encoder.extract_features_from_path(input)?;
    info!("Extracted {} features from {:?}", features.len(), input);
    println!("{}", serde_json::to_string(features.as_slice())?);
    Ok(())
}

fn batch(
    dir: &Path,
    output: &Path,
    format: Option<ExportFormat>,
    config: Option<&Path>,
    grid_size: Option<u32>,
) -> Result<()> {
    let config = GlyphConfig::load(config)?.with_grid_size(grid_size);
    let encoder = config.encoder()?;
    let format = format.unwrap_or(config.export.format);

    info!("Encoding images under {:?} with a {}x{} grid", dir, encoder.grid_size(), encoder.grid_size());
    let report = encode_directory(&encoder, dir)?;

    for skipped in &report.skipped {
        warn!("Skipped {:?}: {}", skipped.path, skipped.reason);
    }

    let writer = BufWriter::new(File::create(output)?);
    write_samples(&report.samples, format, writer)?;

    info!(
        "Wrote {} samples to {:?} as {} ({} skipped)",
        report.samples.len(),
        output,
        format,
        report.skipped.len()
    );
    Ok(())
}

fn preview(input: &Path, output: &Path, config: Option<&Path>, grid_size: Option<u32>) -> Result<()> {
    let config = GlyphConfig::load(config)?.with_grid_size(grid_size);
    let encoder = config.encoder()?;

    let image = load_grayscale(input)?;
    let preview = encoder.render_preview(&image)?;
    preview.save(output)?;
    info!("Saved {}x{} preview to {:?}", preview.width(), preview.height(), output);
    Ok(())
}

fn bounds(input: &Path, output: &Path, config: Option<&Path>) -> Result<()> {
    let encoder = GlyphConfig::load(config)?.encoder()?;

    let image = load_grayscale(input)?;
    let located = encoder.locate(&image)?;
    info!("Character bounds in padded image: {:?}", located.bounds);
    debug::save_debug_image(&debug::render_located(&located), output)?;
    Ok(())
}
