use crate::theme;
use web_sys::CanvasRenderingContext2d;

const GRID_SIZE: f64 = 50.0;
const GRID_LINE_WIDTH: f64 = 0.5;

/// Dark backdrop with a subtle square grid.
pub fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(theme::BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(theme::GRID);
    ctx.set_line_width(GRID_LINE_WIDTH);

    let mut x = 0.0;
    while x < width {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
        x += GRID_SIZE;
    }

    let mut y = 0.0;
    while y < height {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
        y += GRID_SIZE;
    }
}
