use crate::theme;
use crate::topology::StationTopology;
use crate::transform::MapTransform;
use web_sys::CanvasRenderingContext2d;

const LINE_WIDTH: f64 = 6.0;
const SHADOW_WIDTH: f64 = 8.0;
const SHADOW_OFFSET: f64 = 2.0;
const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.2)";

/// Draw every line as a polyline through its ordered stations, with a
/// drop-shadow pass underneath for depth.
pub fn draw_lines(
    ctx: &CanvasRenderingContext2d,
    topology: &StationTopology,
    transform: &MapTransform,
) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for (letter, sequence) in topology.lines_view() {
        if sequence.len() < 2 {
            continue;
        }
        let points: Vec<(f64, f64)> = sequence
            .iter()
            .map(|station| transform.project(station.x, station.y))
            .collect();

        ctx.set_line_width(SHADOW_WIDTH);
        ctx.set_stroke_style_str(SHADOW_COLOR);
        stroke_polyline(ctx, &points, SHADOW_OFFSET);

        ctx.set_line_width(LINE_WIDTH);
        ctx.set_stroke_style_str(theme::line_color(*letter));
        stroke_polyline(ctx, &points, 0.0);
    }
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], offset: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.0 + offset, first.1 + offset);
    for point in rest {
        ctx.line_to(point.0 + offset, point.1 + offset);
    }
    ctx.stroke();
}
