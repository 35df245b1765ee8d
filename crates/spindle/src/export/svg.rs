use std::io::Write;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use spindle_core::{
    compare::{Comparison, Run},
    track::TrackSpace,
};

use crate::{
    config::{Palette, StyleConfig},
    export::{self, Exporter},
};

mod bar_chart;
mod line_chart;

const FONT_FAMILY: &str = "monospace";
const FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Builder for an [`Svg`] exporter writing into `W`.
pub struct SvgBuilder<W> {
    writer: W,
    palette: Option<Palette>,
}

impl<W: Write> SvgBuilder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            palette: None,
        }
    }

    /// Draw with `palette` instead of the default colors.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Create the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the default palette cannot be
    /// resolved.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let palette = match self.palette {
            Some(palette) => palette,
            None => StyleConfig::default()
                .palette()
                .map_err(export::Error::Render)?,
        };
        Ok(Svg {
            writer: self.writer,
            palette,
        })
    }
}

/// SVG chart exporter.
pub struct Svg<W> {
    writer: W,
    palette: Palette,
}

impl<W: Write> Svg<W> {
    /// Consume the exporter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn new_document(&self, width: f32, height: f32) -> Document {
        debug!(width, height; "SVG dimensions");

        let background = svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", &self.palette.background());

        Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(background)
    }

    /// Creates a text element in the palette's text color.
    fn label(&self, text: impl Into<String>, x: f32, y: f32) -> svg_element::Text {
        svg_element::Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("fill", &self.palette.text())
            .set("text-anchor", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", FONT_SIZE)
    }

    fn title(&self, text: impl Into<String>, width: f32) -> svg_element::Text {
        self.label(text, width / 2.0, 30.0)
            .set("font-size", TITLE_FONT_SIZE)
            .set("class", "title")
    }

    fn grid_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", &self.palette.grid())
            .set("stroke-width", 1)
    }

    /// Writes an SVG document to the underlying writer.
    fn write_document(&mut self, doc: Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        info!("SVG document written");
        Ok(())
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_run(&mut self, run: &Run, space: TrackSpace) -> Result<(), export::Error> {
        let doc = self.render_run(run, space)?;
        debug!("SVG line chart rendered");

        self.write_document(doc)
    }

    fn export_comparison(&mut self, comparison: &Comparison) -> Result<(), export::Error> {
        let doc = self.render_comparison(comparison)?;
        debug!("SVG bar chart rendered");

        self.write_document(doc)
    }
}
