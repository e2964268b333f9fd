//! Material theming CLI - main entry point
//!
//! Thin shell around the library: loads the externally supplied
//! configuration tables (preset registry, font library, overrides),
//! invokes the resolver, and emits stylesheet text or font URLs.

use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use material_theme::cli::{Cli, Commands};
use material_theme::color;
use material_theme::fonts::{self, FontLibrary};
use material_theme::presets::{PresetRegistry, StyleOverrides};
use material_theme::resolver;

/// Initialize the tracing subscriber with appropriate settings
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so piped stylesheet output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Css {
            style,
            overrides,
            presets,
            fonts,
            output,
        } => {
            let registry = load_registry(presets.as_deref())?;
            let overrides = load_overrides(overrides.as_deref())?;
            let library = load_fonts(fonts.as_deref())?;

            let resolved = resolver::resolve(&registry, &library, &style, &overrides)?;
            let css = resolved.to_css();

            match output {
                Some(path) => {
                    std::fs::write(&path, css)
                        .with_context(|| format!("failed to write stylesheet to {:?}", path))?;
                    info!("stylesheet written to {:?}", path);
                }
                None => println!("{}", css),
            }
        }
        Commands::Fonts {
            style,
            overrides,
            presets,
        } => {
            let registry = load_registry(presets.as_deref())?;
            let overrides = load_overrides(overrides.as_deref())?;

            let tokens = registry.require(&style)?.merged(&overrides);
            println!("{}", fonts::google_fonts_url(tokens.font_families()));
        }
        Commands::Styles { presets } => {
            let registry = load_registry(presets.as_deref())?;
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::Validate { overrides } => match StyleOverrides::from_json_file(&overrides) {
            Ok(parsed) => {
                for (token, value) in parsed.color_fields() {
                    if let Some(value) = value {
                        if color::parse_hex(value).is_none() {
                            println!(
                                "⚠ {} is not a 3/6-digit hex value ({}); its derived variables will be skipped",
                                token, value
                            );
                        }
                    }
                }
                println!("✓ Overrides file is valid: {:?}", overrides);
            }
            Err(e) => {
                eprintln!("✗ Failed to parse overrides file: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<PresetRegistry> {
    match path {
        Some(path) => {
            debug!("loading preset registry from {:?}", path);
            PresetRegistry::from_json_file(path)
                .with_context(|| format!("failed to load preset registry from {:?}", path))
        }
        None => Ok(PresetRegistry::default()),
    }
}

fn load_overrides(path: Option<&Path>) -> anyhow::Result<StyleOverrides> {
    match path {
        Some(path) => {
            debug!("loading overrides from {:?}", path);
            StyleOverrides::from_json_file(path)
                .with_context(|| format!("failed to load overrides from {:?}", path))
        }
        None => Ok(StyleOverrides::default()),
    }
}

fn load_fonts(path: Option<&Path>) -> anyhow::Result<FontLibrary> {
    match path {
        Some(path) => {
            debug!("loading font metadata from {:?}", path);
            FontLibrary::from_json_file(path)
                .with_context(|| format!("failed to load font metadata from {:?}", path))
        }
        None => Ok(FontLibrary::default()),
    }
}
