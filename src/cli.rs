use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Material theming toolkit - resolve design styles into CSS custom properties
#[derive(Parser)]
#[command(name = "mtb")]
#[command(about = "Resolve Material Design styles into CSS custom properties")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging.
    ///
    /// `RUST_LOG` overrides this when set.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a design style into a `:root` stylesheet
    Css {
        /// Design style to resolve
        #[arg(short, long, default_value = "baseline")]
        style: String,

        /// Path to a token overrides JSON file
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Path to a preset registry JSON file (defaults to the built-in styles)
        #[arg(long)]
        presets: Option<PathBuf>,

        /// Path to a font metadata JSON file (defaults to the built-in table)
        #[arg(long)]
        fonts: Option<PathBuf>,

        /// Write the stylesheet to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the Google Fonts CDN URL for a style's font families
    Fonts {
        /// Design style to inspect
        #[arg(short, long, default_value = "baseline")]
        style: String,

        /// Path to a token overrides JSON file
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Path to a preset registry JSON file (defaults to the built-in styles)
        #[arg(long)]
        presets: Option<PathBuf>,
    },
    /// List registered design styles
    Styles {
        /// Path to a preset registry JSON file (defaults to the built-in styles)
        #[arg(long)]
        presets: Option<PathBuf>,
    },
    /// Validate a token overrides JSON file
    Validate {
        /// Path to the overrides file to validate
        overrides: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
