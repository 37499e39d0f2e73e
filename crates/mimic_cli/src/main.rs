//! Mimic CLI
//!
//! Renders and measures the built-in native control styles:
//! - `mimic gallery` draws every part in every state into a PNG
//! - `mimic sizes` prints the default size of every part

mod gallery;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mimic_paint::Size;
use mimic_theme::{ExtraParams, NativeTheme, Part, ScrollbarColors, State, ThemeConfig, ThemeStyle};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render and measure native-looking controls
#[derive(Parser, Debug)]
#[command(name = "mimic")]
#[command(about = "Render and measure native-looking controls")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every part in every state to a PNG contact sheet
    Gallery {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Output file
        #[arg(short, long, default_value = "gallery.png")]
        output: PathBuf,

        /// Cell size as WIDTHxHEIGHT
        #[arg(long, default_value = "120x40", value_parser = parse_cell)]
        cell: Size,
    },

    /// Print the default size of every part
    Sizes {
        #[command(flatten)]
        theme: ThemeArgs,

        /// State to measure in
        #[arg(long, default_value = "normal")]
        state: State,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ThemeArgs {
    /// Style: auto, fluent, adwaita or classic (overrides the config file)
    #[arg(short, long)]
    style: Option<ThemeStyle>,

    /// Theme config file (mimic.toml); the environment is used otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scrollbar colors as INACTIVE,ACTIVE,TRACK
    #[arg(long)]
    scrollbar: Option<ScrollbarColors>,
}

impl ThemeArgs {
    /// Install the requested theme as the process-wide instance
    fn install(&self) -> Result<&'static dyn NativeTheme> {
        let mut config = match &self.config {
            Some(path) => ThemeConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ThemeConfig::from_env(),
        };
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(colors) = self.scrollbar {
            config.scrollbar = Some(colors);
        }

        mimic_theme::init_from_config(&config).context("Failed to initialize theme")?;
        let theme = mimic_theme::instance();
        info!(
            "Using {} style ({} resolved to {})",
            theme.name(),
            config.style,
            config.style.resolve()
        );
        Ok(theme)
    }
}

/// Largest accepted cell edge in pixels
const MAX_CELL: i32 = 1024;

fn parse_cell(value: &str) -> std::result::Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let parse = |dim: &str| {
        dim.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid dimension {dim:?}: {err}"))
    };
    let size = Size::new(parse(width)?, parse(height)?);
    if size.width <= 0 || size.height <= 0 {
        return Err(format!("cell must not be empty, got {value:?}"));
    }
    if size.width > MAX_CELL || size.height > MAX_CELL {
        return Err(format!("cell edges are limited to {MAX_CELL} pixels, got {value:?}"));
    }
    Ok(size)
}

#[derive(Serialize)]
struct SizeRow {
    part: Part,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn measure_all(theme: &dyn NativeTheme, state: State) -> Vec<SizeRow> {
    Part::ALL
        .into_iter()
        .map(|part| match theme.part_size(part, state, &ExtraParams::None) {
            Ok(size) => SizeRow {
                part,
                size: Some(size),
                error: None,
            },
            Err(err) => SizeRow {
                part,
                size: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Gallery {
            theme,
            output,
            cell,
        } => {
            let theme = theme.install()?;
            let pixmap = gallery::render(theme, cell)?;
            gallery::save_png(&pixmap, &output)?;
            info!(
                "Wrote {}x{} gallery to {}",
                pixmap.width(),
                pixmap.height(),
                output.display()
            );
        }
        Command::Sizes { theme, state, json } => {
            let theme = theme.install()?;
            let rows = measure_all(theme, state);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{} ({})", theme.name(), state);
                for row in &rows {
                    match (&row.size, &row.error) {
                        (Some(size), _) => {
                            println!("  {:<28} {:>4} x {:<4}", row.part, size.width, size.height)
                        }
                        (None, Some(err)) => println!("  {:<28} {}", row.part, err),
                        (None, None) => {}
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_sizes_parse() {
        assert_eq!(parse_cell("120x40"), Ok(Size::new(120, 40)));
        assert_eq!(parse_cell("64X 32"), Ok(Size::new(64, 32)));
        assert!(parse_cell("120").is_err());
        assert!(parse_cell("0x40").is_err());
        assert_eq!(parse_cell("1024x1024"), Ok(Size::square(1024)));
        assert!(parse_cell("100000x40").is_err());
        assert!(parse_cell("40x2147483647").is_err());
    }

    #[test]
    fn classic_reports_unthemed_gutter() {
        let theme = ThemeStyle::Classic.theme();
        let rows = measure_all(&theme, State::Normal);
        assert_eq!(rows.len(), Part::COUNT);
        let gutter = &rows[Part::MenuPopupGutter.index()];
        assert!(gutter.size.is_none());
        assert!(gutter.error.is_some());
    }

    #[test]
    fn cli_parses_gallery_flags() {
        let cli = Cli::try_parse_from([
            "mimic",
            "gallery",
            "--style",
            "classic",
            "--cell",
            "80x30",
            "--scrollbar",
            "#C1C1C1,#A8A8A8,#F0F0F0",
        ])
        .unwrap();
        match cli.command {
            Command::Gallery { theme, cell, .. } => {
                assert_eq!(theme.style, Some(ThemeStyle::Classic));
                assert_eq!(cell, Size::new(80, 30));
                assert!(theme.scrollbar.is_some());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
