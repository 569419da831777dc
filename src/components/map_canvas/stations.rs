use crate::theme;
use crate::topology::StationTopology;
use crate::transform::MapTransform;
use std::collections::{HashMap, HashSet};
use web_sys::CanvasRenderingContext2d;

const STATION_RADIUS: f64 = 6.0;
const LARGE_STATION_RADIUS: f64 = 8.0;
const OUTLINE_WIDTH: f64 = 2.0;
const GLOW_RADIUS_BOOST: f64 = 5.0;
const GLOW_COLOR: &str = "rgba(16, 185, 129, 0.35)";

/// Draw all station markers. Terminals (first/last stop of a line) and
/// interchanges (same name appearing on more than one line) get larger,
/// color-coded markers; a hovered or clicked station gets a glow ring.
pub fn draw_stations(
    ctx: &CanvasRenderingContext2d,
    topology: &StationTopology,
    transform: &MapTransform,
    hovered: Option<usize>,
    clicked: Option<usize>,
) {
    let terminals = terminal_codes(topology);
    let interchanges = interchange_names(topology);

    for (index, station) in topology.stations().iter().enumerate() {
        let (x, y) = transform.project(station.x, station.y);

        let is_terminal = terminals.contains(station.code.as_str());
        let is_interchange = interchanges.contains(station.name.as_str());
        let is_active = hovered == Some(index) || clicked == Some(index);

        let radius = if is_terminal || is_interchange {
            LARGE_STATION_RADIUS
        } else {
            STATION_RADIUS
        };

        if is_active {
            ctx.set_fill_style_str(GLOW_COLOR);
            fill_circle(ctx, x, y, radius + GLOW_RADIUS_BOOST);
        }

        let fill = if is_terminal {
            theme::TERMINAL_STATION
        } else if is_interchange {
            theme::INTERCHANGE_STATION
        } else {
            theme::REGULAR_STATION
        };
        ctx.set_fill_style_str(fill);
        fill_circle(ctx, x, y, radius);

        ctx.set_line_width(OUTLINE_WIDTH);
        ctx.set_stroke_style_str(if is_active {
            theme::ACCENT
        } else {
            theme::STATION_OUTLINE
        });
        stroke_circle(ctx, x, y, radius);
    }
}

/// First and last station codes of every line.
fn terminal_codes(topology: &StationTopology) -> HashSet<&str> {
    let mut terminals = HashSet::new();
    for sequence in topology.lines_view().values() {
        if let Some(first) = sequence.first() {
            terminals.insert(first.code.as_str());
        }
        if let Some(last) = sequence.last() {
            terminals.insert(last.code.as_str());
        }
    }
    terminals
}

/// Names that appear on more than one line.
fn interchange_names(topology: &StationTopology) -> HashSet<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for station in topology.stations() {
        *counts.entry(station.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name)
        .collect()
}

pub(super) fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    ctx.fill();
}

pub(super) fn stroke_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    ctx.stroke();
}
