//! Headless command line front end.
//!
//! Builds a canvas from `--arrow` arguments and writes it as PNG or SVG.

use anyhow::Context;
use clap::Parser;
use moldraw_core::{shared, Point};
use moldraw_designer::{render_canvas_svg, write_png, Canvas};
use moldraw_settings::{Config, OutputFormat};
use std::path::PathBuf;

/// One arrow given on the command line as `x1,y1:x2,y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSpec {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Parser)]
#[command(
    name = "moldraw",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")"),
    about = "Render arrow connectors to PNG or SVG"
)]
pub struct Cli {
    /// Arrow from tail to tip, e.g. `10,50:90,50`. Repeatable.
    #[arg(long = "arrow", value_name = "X1,Y1:X2,Y2", required = true, value_parser = parse_arrow)]
    pub arrows: Vec<ArrowSpec>,

    /// Config file (JSON or TOML); the platform default is used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the scale factor
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output file; `.png` or `.svg` selects the format
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate `{}`", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate `{}`", y.trim()))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got `{}`", s));
    }
    Ok(Point::new(x, y))
}

/// Parses `x1,y1:x2,y2` into an arrow from the first point to the second.
pub fn parse_arrow(s: &str) -> Result<ArrowSpec, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `x1,y1:x2,y2`, got `{}`", s))?;
    Ok(ArrowSpec {
        start: parse_point(start)?,
        end: parse_point(end)?,
    })
}

/// Loads configuration, builds the canvas and writes the output file.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;

    let mut info = config.drawing.to_drawing_info()?;
    if let Some(scale) = cli.scale {
        info.set_scale_factor(scale)?;
    }
    let width = info.width();
    let height = info.height();

    let mut canvas =
        Canvas::new(shared(info)).with_pick_tolerance(config.interaction.pick_tolerance);
    for arrow in &cli.arrows {
        canvas.add_connector_between(arrow.start, arrow.end);
    }

    let format = OutputFormat::from_path(&cli.output).unwrap_or(config.render.output_format);
    tracing::info!(
        connectors = canvas.connector_count(),
        scale_factor = canvas.scale_factor(),
        %format,
        output = %cli.output.display(),
        "Rendering"
    );

    match format {
        OutputFormat::Png => write_png(
            &canvas,
            &cli.output,
            width.ceil() as u32,
            height.ceil() as u32,
            config.render.background,
            config.render.anti_alias,
        )?,
        OutputFormat::Svg => {
            let svg = render_canvas_svg(&canvas, width, height, config.render.background);
            std::fs::write(&cli.output, svg)
                .with_context(|| format!("writing {}", cli.output.display()))?;
        }
    }

    Ok(())
}
