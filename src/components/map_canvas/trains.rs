use super::stations::{fill_circle, stroke_circle};
use crate::animator::AnimatedTrain;
use crate::theme;
use crate::transform::MapTransform;
use web_sys::CanvasRenderingContext2d;

const TRAIN_RADIUS: f64 = 8.0;
const GLOW_RADIUS: f64 = 12.0;
const HIGHLIGHT_RADIUS: f64 = 2.5;
const OUTLINE_WIDTH: f64 = 2.0;
const GLOW_COLOR: &str = "rgba(16, 185, 129, 0.2)";
const ARROW_LENGTH: f64 = 12.0;
const ARROW_HEAD_LENGTH: f64 = 4.0;
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;
const LABEL_FONT: &str = "bold 10px monospace";
// Below this screen distance a marker counts as stationary (no arrow).
const MOTION_EPSILON: f64 = 0.1;

/// Draw every animated train marker with its pulse alpha, direction arrow
/// and one-based slot number. The watched train gets a light outline.
pub fn draw_trains(
    ctx: &CanvasRenderingContext2d,
    trains: &[AnimatedTrain],
    transform: &MapTransform,
    watched: usize,
) {
    for (index, train) in trains.iter().enumerate() {
        let (x, y) = transform.project(train.x, train.y);
        let alpha = train.pulse_alpha();

        if train.is_pulsing() {
            ctx.set_fill_style_str(GLOW_COLOR);
            fill_circle(ctx, x, y, GLOW_RADIUS);
        }

        ctx.set_fill_style_str(&theme::train_color(alpha));
        fill_circle(ctx, x, y, TRAIN_RADIUS);

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        fill_circle(ctx, x - 3.0, y - 3.0, HIGHLIGHT_RADIUS);

        ctx.set_line_width(OUTLINE_WIDTH);
        ctx.set_stroke_style_str(if index == watched {
            theme::TEXT_PRIMARY
        } else {
            theme::TRAIN_OUTLINE
        });
        stroke_circle(ctx, x, y, TRAIN_RADIUS);

        draw_direction_arrow(ctx, train, transform, x, y);

        ctx.set_fill_style_str(theme::TEXT_PRIMARY);
        ctx.set_font(LABEL_FONT);
        let _ = ctx.fill_text(&(index + 1).to_string(), x - 3.0, y + 3.5);
    }
}

/// Arrow from the marker toward its target: it follows actual motion rather
/// than the reported direction token, so it disappears once the marker has
/// arrived.
fn draw_direction_arrow(
    ctx: &CanvasRenderingContext2d,
    train: &AnimatedTrain,
    transform: &MapTransform,
    x: f64,
    y: f64,
) {
    let (target_x, target_y) = transform.project(train.target_x, train.target_y);
    let dx = target_x - x;
    let dy = target_y - y;
    if dx.abs() < MOTION_EPSILON && dy.abs() < MOTION_EPSILON {
        return;
    }

    let angle = dy.atan2(dx);
    let tip_x = x + angle.cos() * ARROW_LENGTH;
    let tip_y = y + angle.sin() * ARROW_LENGTH;

    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.set_stroke_style_str(theme::TEXT_PRIMARY);
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(tip_x, tip_y);
    ctx.stroke();

    for head_angle in [angle - ARROW_HEAD_ANGLE, angle + ARROW_HEAD_ANGLE] {
        ctx.begin_path();
        ctx.move_to(tip_x, tip_y);
        ctx.line_to(
            tip_x - head_angle.cos() * ARROW_HEAD_LENGTH,
            tip_y - head_angle.sin() * ARROW_HEAD_LENGTH,
        );
        ctx.stroke();
    }
}
