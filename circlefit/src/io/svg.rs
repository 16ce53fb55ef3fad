use crate::entities::{FitResult, MaxCirclesResult, PlacedCircle, Sheet};
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle, Text, Title};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Spacing of the reference grid, in sheet units. No grid if zero
    #[serde(default = "SvgDrawOptions::default_grid_size")]
    pub grid_size: f64,
    ///Opacity of the circle fill
    #[serde(default = "SvgDrawOptions::default_fill_opacity")]
    pub fill_opacity: f64,
    ///Draw the clearance zone around each circle
    #[serde(default)]
    pub draw_gap: bool,
}

impl SvgDrawOptions {
    fn default_grid_size() -> f64 {
        20.0
    }

    fn default_fill_opacity() -> f64 {
        0.375
    }
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            grid_size: Self::default_grid_size(),
            fill_opacity: Self::default_fill_opacity(),
            draw_gap: false,
        }
    }
}

const FITS_FILL: &str = "#eef7ee";
const NO_FIT_FILL: &str = "#f9eceb";
const NEUTRAL_FILL: &str = "#f5f6f8";
const GRID_STROKE: &str = "#d6d8dc";
const LABEL_FILL: &str = "#3a3d42";

/// Draws the circles of a fit-check, each labelled with its diameter.
/// The sheet is tinted green if everything fits, red otherwise.
pub fn fit_result_to_svg(result: &FitResult, sheet: &Sheet, options: SvgDrawOptions) -> Document {
    let background = match result.fits {
        true => FITS_FILL,
        false => NO_FIT_FILL,
    };
    let labelled = result
        .circles
        .iter()
        .map(|c| (c, format!("{}", c.spec.diameter)));
    sheet_to_svg(sheet, background, labelled, options)
}

/// Draws the circles of a maximization, numbered in order of their type.
pub fn max_result_to_svg(
    result: &MaxCirclesResult,
    sheet: &Sheet,
    options: SvgDrawOptions,
) -> Document {
    let circles = result.placed_circles();
    let labelled = circles
        .iter()
        .enumerate()
        .map(|(i, c)| (c, format!("{}", i + 1)));
    sheet_to_svg(sheet, NEUTRAL_FILL, labelled, options)
}

fn sheet_to_svg<'a>(
    sheet: &Sheet,
    background: &str,
    labelled_circles: impl Iterator<Item = (&'a PlacedCircle, String)>,
    options: SvgDrawOptions,
) -> Document {
    let (w, h) = (sheet.width, sheet.height);
    let margin = 0.05 * f64::max(w, h);
    let stroke_width = f64::min(w, h) * 0.002;
    let font_size = f64::min(w, h) * 0.03;

    let sheet_rect = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", w)
        .set("height", h)
        .set("fill", background)
        .set("stroke", "#8a8f98")
        .set("stroke-width", 2.0 * stroke_width)
        .add(Title::new(format!("sheet: {w} x {h}, gap: {}", sheet.gap)));

    let grid_group = {
        let mut grid_group = Group::new()
            .set("id", "grid")
            .set("stroke", GRID_STROKE)
            .set("stroke-width", 0.5 * stroke_width);
        if options.grid_size > 0.0 {
            let lines_x = grid_lines(w, options.grid_size)
                .map(|x| Line::new().set("x1", x).set("y1", 0.0).set("x2", x).set("y2", h));
            let lines_y = grid_lines(h, options.grid_size)
                .map(|y| Line::new().set("x1", 0.0).set("y1", y).set("x2", w).set("y2", y));
            for line in lines_x.chain(lines_y) {
                grid_group = grid_group.add(line);
            }
        }
        grid_group
    };

    let mut circles_group = Group::new().set("id", "circles");
    let mut gap_group = Group::new()
        .set("id", "gaps")
        .set("fill", "none")
        .set("stroke", GRID_STROKE)
        .set("stroke-dasharray", format!("{} {}", stroke_width, 2.0 * stroke_width));

    for (circle, label) in labelled_circles {
        let r = circle.radius();
        let color = circle.spec.color.as_str();
        let title = Title::new(format!(
            "circle, diameter: {}, center: ({:.3}, {:.3})",
            circle.spec.diameter, circle.x, circle.y
        ));
        circles_group = circles_group
            .add(
                Circle::new()
                    .set("cx", circle.x)
                    .set("cy", circle.y)
                    .set("r", r)
                    .set("fill", color)
                    .set("fill-opacity", options.fill_opacity)
                    .set("stroke", color)
                    .set("stroke-width", 1.5 * stroke_width)
                    .add(title),
            )
            .add(
                Text::new(label)
                    .set("x", circle.x)
                    .set("y", circle.y)
                    .set("font-size", f64::min(font_size, 0.7 * r))
                    .set("font-family", "sans-serif")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("fill", LABEL_FILL),
            );
        if options.draw_gap {
            gap_group = gap_group.add(
                Circle::new()
                    .set("cx", circle.x)
                    .set("cy", circle.y)
                    .set("r", r + sheet.gap / 2.0)
                    .set("stroke-width", 0.5 * stroke_width),
            );
        }
    }

    let caption = Text::new(format!("{w} × {h}"))
        .set("x", w / 2.0)
        .set("y", h + 0.6 * margin)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("fill", LABEL_FILL);

    Document::new()
        .set("viewBox", (-margin, -margin, w + 2.0 * margin, h + 2.0 * margin))
        .add(sheet_rect)
        .add(grid_group)
        .add(gap_group)
        .add(circles_group)
        .add(caption)
}

/// Interior grid line positions along an axis of length `extent`
fn grid_lines(extent: f64, spacing: f64) -> impl Iterator<Item = f64> {
    (1..)
        .map(move |i| i as f64 * spacing)
        .take_while(move |&v| v < extent)
}
