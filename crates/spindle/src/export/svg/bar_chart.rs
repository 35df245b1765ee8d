//! SVG rendering of a comparison as one bar per algorithm.

use svg::{Document, node::element as svg_element};

use spindle_core::compare::Comparison;

use super::Svg;
use crate::{export, scale};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 480.0;
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 80.0;
const MARGIN_BOTTOM: f32 = 50.0;
/// Share of each slot covered by its bar.
const BAR_FILL: f32 = 0.6;
const TARGET_VALUE_TICKS: u64 = 5;

impl<W: std::io::Write> Svg<W> {
    /// Renders the total seek of every algorithm in `comparison`.
    pub(super) fn render_comparison(
        &self,
        comparison: &Comparison,
    ) -> Result<Document, export::Error> {
        let totals = comparison.totals();
        let best = comparison.best();
        let max_total = totals.values().copied().max().unwrap_or(0);

        let baseline = HEIGHT - MARGIN_BOTTOM;
        let y_scale =
            scale::LinearScale::new((0.0, max_total.max(1) as f32), (baseline, MARGIN_TOP))
                .map_err(export::Error::Render)?;

        let mut grid = svg_element::Group::new().set("class", "grid");
        for tick in scale::integer_ticks(max_total, TARGET_VALUE_TICKS) {
            let y = y_scale.scale(tick as f32);
            grid = grid
                .add(self.grid_line(MARGIN_LEFT, y, WIDTH - MARGIN_RIGHT, y))
                .add(self.label(tick.to_string(), MARGIN_LEFT - 25.0, y + 4.0));
        }

        let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / totals.len().max(1) as f32;
        let bar_width = slot * BAR_FILL;

        let mut bars = svg_element::Group::new().set("class", "bars");
        for (index, (algorithm, total)) in totals.iter().enumerate() {
            let x = MARGIN_LEFT + slot * index as f32 + (slot - bar_width) / 2.0;
            let center = x + bar_width / 2.0;
            let top = y_scale.scale(*total as f32);

            let (class, fill) = if *algorithm == best {
                ("bar best", self.palette.best_bar())
            } else {
                ("bar", self.palette.bar())
            };

            bars = bars
                .add(
                    svg_element::Rectangle::new()
                        .set("class", class)
                        .set("x", x)
                        .set("y", top)
                        .set("width", bar_width)
                        .set("height", baseline - top)
                        .set("fill", &fill),
                )
                .add(self.label(total.to_string(), center, top - 6.0))
                .add(self.label(algorithm.to_string(), center, baseline + 20.0));
        }

        let title = format!("Total seek per algorithm (best: {best})");

        Ok(self
            .new_document(WIDTH, HEIGHT)
            .add(self.title(title, WIDTH))
            .add(grid)
            .add(bars))
    }
}
