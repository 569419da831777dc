use crate::models::Station;
use crate::theme;
use crate::transform::MapTransform;
use web_sys::CanvasRenderingContext2d;

const PADDING: f64 = 12.0;
const LINE_HEIGHT: f64 = 16.0;
const OFFSET_X: f64 = 25.0;
const OFFSET_Y: f64 = 15.0;
const TITLE_FONT: &str = "bold 14px sans-serif";
const DETAIL_FONT: &str = "11px sans-serif";
const TOOLTIP_BG: &str = "rgba(30, 41, 59, 0.95)";
const TOOLTIP_BORDER: &str = "rgba(71, 85, 105, 0.8)";

/// Draw the hover tooltip next to a station, flipped back onto the surface
/// when it would leave it. Clicked stations get an extended detail block.
#[allow(clippy::cast_precision_loss)]
pub fn draw_tooltip(
    ctx: &CanvasRenderingContext2d,
    station: &Station,
    transform: &MapTransform,
    surface_width: f64,
    detailed: bool,
) {
    let (station_x, station_y) = transform.project(station.x, station.y);

    let mut rows = vec![
        station.name.trim().to_string(),
        format!("Code: {}", station.code),
        format!("Line: {}", station.line_letter()),
    ];
    if detailed {
        rows.push(format!("Position: ({:.0}, {:.0})", station.x, station.y));
    }

    ctx.set_font(TITLE_FONT);
    let mut max_width: f64 = 0.0;
    for row in &rows {
        if let Ok(metrics) = ctx.measure_text(row) {
            max_width = max_width.max(metrics.width());
        }
    }

    let box_width = max_width + PADDING * 2.0;
    let box_height = rows.len() as f64 * LINE_HEIGHT + PADDING * 2.0;

    let mut x = station_x + OFFSET_X;
    let mut y = station_y - OFFSET_Y - box_height;
    if x + box_width > surface_width {
        x = station_x - box_width - OFFSET_X;
    }
    if y < 0.0 {
        y = station_y + OFFSET_Y;
    }

    ctx.set_fill_style_str(TOOLTIP_BG);
    ctx.fill_rect(x, y, box_width, box_height);
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(if detailed { theme::ACCENT } else { TOOLTIP_BORDER });
    ctx.stroke_rect(x, y, box_width, box_height);

    for (row_index, row) in rows.iter().enumerate() {
        if row_index == 0 {
            ctx.set_font(TITLE_FONT);
            ctx.set_fill_style_str(theme::TEXT_PRIMARY);
        } else {
            ctx.set_font(DETAIL_FONT);
            ctx.set_fill_style_str(theme::TEXT_SECONDARY);
        }
        let _ = ctx.fill_text(
            row,
            x + PADDING,
            y + PADDING + (row_index as f64 + 0.8) * LINE_HEIGHT,
        );
    }
}
