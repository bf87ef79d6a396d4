//! # Ticker CLI
//!
//! Command-line interface for rendering LED strips.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the HTTP API
//! ticker serve --listen 0.0.0.0:8080 --token s3cret
//!
//! # Render text and print the strip as JSON
//! ticker text "Hello" --font-size 8 --fg "#ff0000"
//!
//! # Preview a spacer as a PNG instead
//! ticker space 12 --bg "#003300" --png space.png
//!
//! # Import an 8-pixel-high image
//! ticker image logo.png
//!
//! # Join strips saved as JSON
//! ticker join a.json b.json --png joined.png --scale 16
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ticker::{
    Color, Strip, TickerError,
    font::SpleenGlyphs,
    preview, render,
    server::{self, DEFAULT_MAX_BODY_BYTES, ServerConfig},
};

/// Ticker - LED strip renderer
#[derive(Parser, Debug)]
#[command(name = "ticker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the render API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Require `Authorization: Bearer <TOKEN>` on render routes
        #[arg(long)]
        token: Option<String>,

        /// Largest accepted request body in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },

    /// Render a solid spacer
    Space {
        /// Width in columns
        #[arg(allow_negative_numbers = true)]
        width: i64,

        /// Background color
        #[arg(long, default_value = "#000000")]
        bg: String,

        #[command(flatten)]
        output: Output,
    },

    /// Render text
    Text {
        text: String,

        /// Point size (below 8 selects the small font)
        #[arg(long, default_value_t = 8)]
        font_size: i32,

        /// Foreground color
        #[arg(long, default_value = "#ffffff")]
        fg: String,

        /// Background color
        #[arg(long, default_value = "#000000")]
        bg: String,

        #[command(flatten)]
        output: Output,
    },

    /// Import an 8-pixel-high image
    Image {
        file: PathBuf,

        #[command(flatten)]
        output: Output,
    },

    /// Join strips stored as JSON files, left to right
    Join {
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: Output,
    },
}

/// Where a rendered strip goes.
#[derive(Args, Debug)]
struct Output {
    /// Write a PNG preview instead of printing JSON
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Preview pixels per LED
    #[arg(long, default_value_t = 8)]
    scale: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TickerError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            token,
            max_body_bytes,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                token,
                max_body_bytes,
            };
            let glyphs = Arc::new(SpleenGlyphs::new()?);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config, glyphs))
        }
        Commands::Space { width, bg, output } => {
            let strip = render::spacer(width, Color::parse(&bg)?)?;
            emit(&strip, &output)
        }
        Commands::Text {
            text,
            font_size,
            fg,
            bg,
            output,
        } => {
            let glyphs = SpleenGlyphs::new()?;
            let strip = render::render_text(
                &text,
                font_size,
                Color::parse(&fg)?,
                Color::parse(&bg)?,
                &glyphs,
            )?;
            emit(&strip, &output)
        }
        Commands::Image { file, output } => {
            let bytes = std::fs::read(&file)?;
            let strip = render::import_image(&bytes)?;
            emit(&strip, &output)
        }
        Commands::Join { files, output } => {
            let strips = files
                .iter()
                .map(|path| load_strip(path))
                .collect::<Result<Vec<_>, _>>()?;
            let strip = render::join(&strips)?;
            emit(&strip, &output)
        }
    }
}

/// Read one strip from a JSON file.
fn load_strip(path: &Path) -> Result<Strip, TickerError> {
    let json = std::fs::read_to_string(path)?;
    Strip::from_json(&json).map_err(|e| match e {
        TickerError::InvalidJson(msg) => {
            TickerError::InvalidJson(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Print the strip as JSON, or save a PNG preview.
fn emit(strip: &Strip, output: &Output) -> Result<(), TickerError> {
    match &output.png {
        Some(path) => {
            preview::save_png(strip, path, output.scale)?;
            eprintln!(
                "Saved {}x{} preview to {}",
                strip.columns(),
                strip.rows(),
                path.display()
            );
        }
        None => {
            let json = serde_json::to_string(strip).map_err(|e| TickerError::Io(e.into()))?;
            println!("{}", json);
        }
    }
    Ok(())
}
