//! Fixed visual styling shared by the three charts.
//!
//! The original tool configured a global plot theme at process start; here
//! the theme is an explicit [`ChartStyle`] value passed into each renderer.

use plotters::style::RGBColor;

// ── Output artifacts ──────────────────────────────────────────────────────────

/// File name of the monthly sales/profit time-series chart.
pub const MONTHLY_TREND_FILE: &str = "1_sales_profit_over_time.png";
/// File name of the sales-by-sub-category horizontal bar chart.
pub const SUBCATEGORY_FILE: &str = "2_sales_by_subcategory.png";
/// File name of the sales-by-segment vertical bar chart.
pub const SEGMENT_FILE: &str = "3_sales_by_segment.png";

/// Pixel dimensions of the time-series chart.
pub const MONTHLY_TREND_SIZE: (u32, u32) = (1400, 700);
/// Pixel dimensions of the sub-category chart.
pub const SUBCATEGORY_SIZE: (u32, u32) = (1200, 1000);
/// Pixel dimensions of the segment chart.
pub const SEGMENT_SIZE: (u32, u32) = (1000, 600);

// ── ChartStyle ────────────────────────────────────────────────────────────────

/// Colors and fonts applied to every chart.  Not user-configurable.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Drawing-area background.
    pub background: RGBColor,
    /// Grid line color.
    pub grid: RGBColor,
    /// Axis line color.
    pub axis: RGBColor,
    /// Caption and label text color.
    pub text: RGBColor,
    /// Monthly sales line (royal blue).
    pub sales_line: RGBColor,
    /// Monthly profit shaded area (sky blue, drawn translucent).
    pub profit_area: RGBColor,
    /// Opacity of the profit area fill.
    pub profit_area_alpha: f64,
    /// Bar color for groups with non-negative total profit (medium sea green).
    pub bar_positive: RGBColor,
    /// Bar color for groups with negative total profit (tomato).
    pub bar_negative: RGBColor,
    /// Cyclic palette for the segment bars.
    pub palette: Vec<RGBColor>,
    /// Font family for all text.
    pub font: &'static str,
    /// Caption font size in points.
    pub caption_size: u32,
    /// Axis label font size in points.
    pub label_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: RGBColor(255, 255, 255),
            grid: RGBColor(222, 222, 222),
            axis: RGBColor(120, 120, 120),
            text: RGBColor(50, 50, 50),
            sales_line: RGBColor(65, 105, 225),
            profit_area: RGBColor(135, 206, 235),
            profit_area_alpha: 0.4,
            bar_positive: RGBColor(60, 179, 113),
            bar_negative: RGBColor(255, 99, 71),
            // Sampled from the viridis colormap the original palette used.
            palette: vec![
                RGBColor(68, 1, 84),
                RGBColor(49, 104, 142),
                RGBColor(33, 145, 140),
                RGBColor(94, 201, 98),
            ],
            font: "sans-serif",
            caption_size: 32,
            label_size: 18,
        }
    }
}

impl ChartStyle {
    /// Palette color for the `index`-th bar, cycling when bars outnumber
    /// palette entries.
    pub fn palette_color(&self, index: usize) -> RGBColor {
        self.palette[index % self.palette.len()]
    }
}

// ── Color rules ───────────────────────────────────────────────────────────────

/// Bar color conditioned on the sign of a group's total profit: negative
/// profit gets the warning color, non-negative the positive color.
pub fn bar_color_for_profit(style: &ChartStyle, profit: f64) -> RGBColor {
    if profit < 0.0 {
        style.bar_negative
    } else {
        style.bar_positive
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_profit_gets_warning_color() {
        let style = ChartStyle::default();
        assert_eq!(bar_color_for_profit(&style, -50.0), style.bar_negative);
    }

    #[test]
    fn test_non_negative_profit_gets_positive_color() {
        let style = ChartStyle::default();
        assert_eq!(bar_color_for_profit(&style, 20.0), style.bar_positive);
        assert_eq!(bar_color_for_profit(&style, 0.0), style.bar_positive);
    }

    #[test]
    fn test_palette_cycles() {
        let style = ChartStyle::default();
        let n = style.palette.len();
        assert_eq!(style.palette_color(0), style.palette[0]);
        assert_eq!(style.palette_color(n), style.palette[0]);
        assert_eq!(style.palette_color(n + 2), style.palette[2]);
    }
}
