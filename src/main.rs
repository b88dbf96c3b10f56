use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ext_icons::{
    canvas::ImageCanvas,
    manifest::{icons_manifest, to_pretty_json},
    parse_color,
    placeholder::{generate_placeholders, manual_instructions},
    resample::{create_icons, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE},
    IconError, DEFAULT_COLOR,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-icons",
    about = "Generate the 16/48/128 px icon set for a browser extension"
)]
struct Args {
    /// Print debug logs to stderr (filter with RUST_LOG).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw solid placeholder icons with a white border.
    Placeholder {
        /// Output directory.
        #[clap(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Fill color (CSS color format). Defaults to #667eea.
        #[clap(long, value_name = "COLOR")]
        color: Option<String>,

        /// Print the manifest.json "icons" block afterwards.
        #[clap(long)]
        manifest: bool,
    },

    /// Resize a source image (the Pip bird) into the icon set.
    Pip {
        /// Path to the source image.
        #[clap(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Output directory.
        #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Print the manifest.json "icons" block afterwards.
        #[clap(long)]
        manifest: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let canvas = ImageCanvas::new();

    match args.command {
        Command::Placeholder {
            output,
            color,
            manifest,
        } => {
            let color = match color {
                Some(value) => parse_color(&value)?,
                None => DEFAULT_COLOR,
            };

            if let Err(err) = generate_placeholders(&canvas, &output, color) {
                eprintln!("Error creating icons: {err}");
                println!("\nYou can also create simple colored square images manually:");
                for line in manual_instructions(color) {
                    println!("{line}");
                }
                return Err(err).context("Failed to generate placeholder icons");
            }

            if manifest {
                print_manifest(&output)?;
            }
        }
        Command::Pip {
            source,
            output,
            manifest,
        } => {
            if let Err(err) = create_icons(&canvas, &source, &output) {
                if let IconError::MissingSource { path } = &err {
                    eprintln!(
                        "Please save the Pip bird image as '{}' before running this command.",
                        path.display()
                    );
                }
                return Err(err).context("Failed to create icons from source image");
            }

            if manifest {
                print_manifest(&output)?;
            }
        }
    }

    Ok(())
}

fn print_manifest(dir: &Path) -> Result<()> {
    let prefix = dir.to_string_lossy().replace('\\', "/");
    let json = to_pretty_json(&icons_manifest(&prefix)).context("Failed to render manifest")?;
    println!("\n{json}");
    Ok(())
}
