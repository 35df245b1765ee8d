//! SVG rendering of head movement for a single run.
//!
//! The x axis spans the track domain and the y axis counts steps downward,
//! so the polyline reads as the head's path over time.

use std::fmt::Write as _;

use svg::{Document, node::element as svg_element};

use spindle_core::{compare::Run, track::TrackSpace};

use super::Svg;
use crate::{export, scale};

const WIDTH: f32 = 800.0;
const MARGIN_LEFT: f32 = 60.0;
const MARGIN_RIGHT: f32 = 40.0;
const MARGIN_TOP: f32 = 80.0;
const MARGIN_BOTTOM: f32 = 30.0;
const ROW_HEIGHT: f32 = 36.0;
const POINT_RADIUS: f32 = 4.0;
const TARGET_TRACK_TICKS: u64 = 10;

impl<W: std::io::Write> Svg<W> {
    /// Renders the visit sequence of `run` as a line chart over `space`.
    pub(super) fn render_run(
        &self,
        run: &Run,
        space: TrackSpace,
    ) -> Result<Document, export::Error> {
        let tracks = run.sequence().tracks();
        let steps = tracks.len().saturating_sub(1);
        let max_track = space.max_track().value();

        let plot_height = ROW_HEIGHT * steps.max(1) as f32;
        let plot_bottom = MARGIN_TOP + plot_height;
        let height = plot_bottom + MARGIN_BOTTOM;

        let x_scale = scale::LinearScale::new(
            (0.0, max_track.max(1) as f32),
            (MARGIN_LEFT, WIDTH - MARGIN_RIGHT),
        )
        .map_err(export::Error::Render)?;
        let y_scale = scale::LinearScale::new((0.0, steps.max(1) as f32), (MARGIN_TOP, plot_bottom))
            .map_err(export::Error::Render)?;

        let mut grid = svg_element::Group::new().set("class", "grid");
        for tick in scale::integer_ticks(u64::from(max_track), TARGET_TRACK_TICKS) {
            let x = x_scale.scale(tick as f32);
            grid = grid
                .add(self.grid_line(x, MARGIN_TOP, x, plot_bottom))
                .add(self.label(tick.to_string(), x, MARGIN_TOP - 10.0));
        }
        for step in 0..=steps {
            let y = y_scale.scale(step as f32);
            grid = grid
                .add(self.grid_line(MARGIN_LEFT, y, WIDTH - MARGIN_RIGHT, y))
                .add(self.label(step.to_string(), MARGIN_LEFT - 20.0, y + 4.0));
        }

        let mut points = String::new();
        let mut markers = svg_element::Group::new().set("class", "visits");
        for (step, track) in tracks.iter().enumerate() {
            let x = x_scale.scale(track.value() as f32);
            let y = y_scale.scale(step as f32);
            if !points.is_empty() {
                points.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = write!(points, "{x},{y}");

            markers = markers.add(
                svg_element::Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", POINT_RADIUS)
                    .set("fill", &self.palette.line()),
            );
        }

        let path = svg_element::Polyline::new()
            .set("points", points)
            .set("fill", "none")
            .set("stroke", &self.palette.line())
            .set("stroke-width", 3);

        let title = format!(
            "{}: total seek {}",
            run.algorithm(),
            run.metric().total()
        );

        Ok(self
            .new_document(WIDTH, height)
            .add(self.title(title, WIDTH))
            .add(grid)
            .add(path)
            .add(markers))
    }
}
