//! Raster renderer backed by tiny-skia.
//!
//! Features:
//! - Anti-aliased rendering (optional)
//! - Scene coordinates map 1:1 to pixels, y pointing down
//! - Conversion to an `image` RGBA buffer for saving

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::surface::RenderSurface;
use crate::Canvas;
use image::{ImageFormat, RgbaImage};
use moldraw_core::{Color, DrawingError, LineSegment, Point};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

fn paint_for(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
}

fn polygon_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

/// A [`RenderSurface`] drawing into a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    anti_alias: bool,
}

impl PixmapSurface {
    /// Creates a surface of `width` x `height` pixels filled with
    /// `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, DrawingError> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| DrawingError::Render {
            reason: format!("cannot allocate a {}x{} pixmap", width, height),
        })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            background.a,
        ));
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            anti_alias: true,
        })
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    /// Shifts the scene by `(dx, dy)` pixels, e.g. to bring negative
    /// coordinates into view.
    pub fn set_offset(&mut self, dx: f64, dy: f64) {
        self.transform = Transform::from_translate(dx as f32, dy as f32);
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Converts the premultiplied pixmap into a straight-alpha RGBA image.
    pub fn into_image(self) -> Result<RgbaImage, DrawingError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut data = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(width, height, data).ok_or_else(|| DrawingError::Render {
            reason: "pixel buffer does not match image size".to_string(),
        })
    }
}

impl RenderSurface for PixmapSurface {
    fn draw_line(&mut self, line: &LineSegment, width: f64, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(line.p1.x as f32, line.p1.y as f32);
        pb.line_to(line.p2.x as f32, line.p2.y as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: width as f32,
                ..Default::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(color, self.anti_alias),
                &stroke,
                self.transform,
                None,
            );
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = polygon_path(points) {
            self.pixmap.fill_path(
                &path,
                &paint_for(color, self.anti_alias),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn draw_polygon_outline(&mut self, points: &[Point], width: f64, color: Color) {
        if let Some(path) = polygon_path(points) {
            let stroke = Stroke {
                width: width as f32,
                ..Default::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(color, self.anti_alias),
                &stroke,
                self.transform,
                None,
            );
        }
    }
}

/// Renders the canvas onto a fresh `width` x `height` image.
pub fn render_canvas(
    canvas: &Canvas,
    width: u32,
    height: u32,
    background: Color,
    anti_alias: bool,
) -> Result<RgbaImage, DrawingError> {
    let mut surface = PixmapSurface::new(width, height, background)?;
    surface.set_anti_alias(anti_alias);
    canvas.render(&mut surface);
    tracing::debug!(
        width,
        height,
        connectors = canvas.connector_count(),
        "Rendered canvas to pixmap"
    );
    surface.into_image()
}

/// Renders the canvas and writes it as a PNG file.
///
/// Failing to create the file is reported as [`moldraw_core::Error::Io`];
/// rendering and encoding failures as [`moldraw_core::Error::Drawing`].
pub fn write_png(
    canvas: &Canvas,
    path: &Path,
    width: u32,
    height: u32,
    background: Color,
    anti_alias: bool,
) -> moldraw_core::Result<()> {
    let image = render_canvas(canvas, width, height, background, anti_alias)?;
    let mut writer = BufWriter::new(File::create(path)?);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| DrawingError::Render {
            reason: format!("failed to encode {}: {}", path.display(), e),
        })?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "Wrote PNG");
    Ok(())
}
