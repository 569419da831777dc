//! Dark display palette shared by the canvas renderer and the info panel.

pub const BACKGROUND: &str = "#0f172a";
pub const GRID: &str = "rgba(30, 41, 59, 0.35)";
pub const TEXT_PRIMARY: &str = "#f1f5f9";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const ACCENT: &str = "#10b981";

pub const RED_LINE: &str = "#ef4444";
pub const GREEN_LINE: &str = "#22c55e";
pub const BLUE_LINE: &str = "#3b82f6";
pub const FALLBACK_LINE: &str = "#9ca3af";

pub const REGULAR_STATION: &str = "#f1f5f9";
pub const INTERCHANGE_STATION: &str = "#ffc107";
pub const TERMINAL_STATION: &str = "#ef4444";
pub const STATION_OUTLINE: &str = "#1e293b";

pub const TRAIN_OUTLINE: &str = "#064e3b";

/// Stroke color for a line letter; letters without an assigned color fall
/// back to gray so an unexpected line still renders.
#[must_use]
pub const fn line_color(letter: char) -> &'static str {
    match letter {
        'R' => RED_LINE,
        'G' => GREEN_LINE,
        'B' => BLUE_LINE,
        _ => FALLBACK_LINE,
    }
}

/// Train marker fill with the pulse alpha applied.
#[must_use]
pub fn train_color(alpha: f64) -> String {
    format!("rgba(16, 185, 129, {alpha:.3})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_line_colors() {
        assert_eq!(line_color('R'), RED_LINE);
        assert_eq!(line_color('G'), GREEN_LINE);
        assert_eq!(line_color('B'), BLUE_LINE);
    }

    #[test]
    fn test_unknown_line_falls_back_to_gray() {
        assert_eq!(line_color('Q'), FALLBACK_LINE);
    }
}
